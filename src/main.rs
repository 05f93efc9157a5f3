//! wikisum CLI - Wikipedia page summaries as local HTML
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments, prompting for input, and handling top-level errors.

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use wikisum::{browser, fetch, output, render, PageSummary, Topic};

#[derive(Parser)]
#[command(name = "wikisum")]
#[command(author, version, about = "Fetch a Wikipedia summary and save it as HTML", long_about = None)]
struct Cli {
    /// Topic to look up; prompted for when omitted
    topic: Option<String>,

    /// Directory the HTML pages are written to
    #[arg(short, long, default_value = output::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Skip opening the summary page in the browser
    #[arg(long)]
    no_open: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let input = match cli.topic {
        Some(topic) => topic,
        None => read_topic()?,
    };

    let topic = match Topic::parse(input) {
        Ok(topic) => topic,
        Err(e) => {
            // Rejected before any network activity
            println!("{e}");
            return Ok(());
        }
    };

    println!("Fetching: {}", fetch::summary_url(&topic));

    let json = match fetch::fetch_summary(&topic).await {
        Ok(json) => json,
        Err(e) => {
            eprintln!("{} {}", "Error fetching data:".red(), e);
            return Ok(());
        }
    };

    let page = PageSummary::from_json(&json)?;

    println!("\n{} {}", "Title:".bold(), page.title);
    println!("{} {}", "Summary:".bold(), page.extract);

    let summary_html = render::summary_page(&page);
    let raw_html = render::raw_json_page(&page.title, &json);

    let pages = output::write_pages(&cli.output_dir, &topic.file_slug(), &summary_html, &raw_html)?;
    println!("\nSummary saved to: {}", pages.summary.display());
    println!("Raw JSON saved to: {}", pages.raw.display());

    if !cli.no_open {
        if let Err(e) = browser::open_file(&pages.summary) {
            eprintln!("{} {}", "Could not open file in browser:".yellow(), e);
        }
    }

    Ok(())
}

/// Ask for a topic: an interactive prompt on a terminal, a plain line read
/// when stdin is piped.
fn read_topic() -> anyhow::Result<String> {
    if atty::is(atty::Stream::Stdin) {
        let input: String = dialoguer::Input::new()
            .with_prompt("Enter a topic")
            .allow_empty(true)
            .interact_text()?;
        Ok(input)
    } else {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
