use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;

use reelboard::{ApiClient, Config, SearchRequest, SearchResult};

#[derive(Parser, Debug)]
#[command(name = "reelboard")]
#[command(version, about = "Terminal dashboard and search client for a movie-recommendation service")]
struct Args {
    /// Backend base URL (overrides config and REELBOARD_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive analytics dashboard
    Dashboard,

    /// Run one search prompt and print the matches
    Search {
        /// Natural-language movie prompt
        prompt: String,

        /// Number of matches to return (backend caps at 20)
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Ask the backend for an LLM summary of the matches
        #[arg(long)]
        summarize: bool,
    },

    /// Fetch analytics and write a standalone HTML report
    Report {
        /// Output file (default: reelboard_report_<timestamp>.html)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = Config::load();
    if let Some(base_url) = args.base_url {
        config.backend.base_url = base_url;
        // A CLI flag outranks the environment too.
        std::env::remove_var("REELBOARD_BASE_URL");
    }

    match args.command {
        Command::Dashboard => {
            if let Err(e) = reelboard::tui::run(&config) {
                eprintln!("{} {}", "error:".red().bold(), e);
                return ExitCode::FAILURE;
            }
        }
        Command::Search {
            prompt,
            top_k,
            summarize,
        } => {
            return run_search(&config, &prompt, top_k, summarize);
        }
        Command::Report { output } => {
            return run_report(&config, output);
        }
    }

    ExitCode::SUCCESS
}

fn connect(config: &Config) -> Result<ApiClient, reelboard::ApiError> {
    ApiClient::new(config.base_url(), config.timeout())
}

fn run_search(config: &Config, prompt: &str, top_k: Option<usize>, summarize: bool) -> ExitCode {
    let client = match connect(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let request = SearchRequest::new(
        prompt,
        top_k.unwrap_or(config.search.top_k),
        summarize || config.search.summarize,
    );

    match client.search(&request) {
        Ok(response) => {
            print_hits(&response.results);
            if let Some(summary) = response.summary {
                println!("\n{}", "Summary:".bold());
                println!("{}", summary);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn print_hits(hits: &[SearchResult]) {
    if hits.is_empty() {
        println!("No matches found.");
        return;
    }
    for (index, hit) in hits.iter().enumerate() {
        let genre = hit.genre.as_deref().unwrap_or("?");
        let year = hit
            .release_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "?".to_string());
        println!(
            "{}. {} {}  score={:.4}",
            index + 1,
            hit.display_title().bold(),
            format!("(genre: {}, year: {})", genre, year).dimmed(),
            hit.score
        );
    }
}

fn run_report(config: &Config, output: Option<PathBuf>) -> ExitCode {
    let client = match connect(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let summary = match client.fetch_analysis() {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let path = output.unwrap_or_else(|| {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        PathBuf::from(format!("reelboard_report_{}.html", timestamp))
    });

    if let Err(e) = reelboard::report::generate(&path, &summary) {
        eprintln!("{} failed to write report: {}", "error:".red().bold(), e);
        return ExitCode::FAILURE;
    }

    println!("{} {}", "Report saved:".green(), path.display());
    ExitCode::SUCCESS
}
