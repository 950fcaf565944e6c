//! storyweave - Twine story converter

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use storyweave::export::{Exporter, HtmlExporter, JsonExporter};
use storyweave::{Format, Story};

#[derive(Parser)]
#[command(name = "storyweave")]
#[command(version, about = "Twine story converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    storyweave story.html story.json    Back up a Twine export as JSON
    storyweave story.json play.html     Build a playable page from a backup
    storyweave -i story.html            Show story details")]
struct Cli {
    /// Input file (Twine HTML export or JSON backup)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (.html for a playable page, .json for a backup)
    #[arg(value_name = "OUTPUT", required_unless_present = "info")]
    output: Option<String>,

    /// Show story details without converting
    #[arg(short, long)]
    info: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    let result = match (&cli.output, cli.info) {
        (_, true) => show_info(&cli.input),
        (Some(output), false) => convert(&cli.input, output, cli.quiet),
        (None, false) => Err("output required".to_string()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(quiet: bool) {
    let default = if quiet { "storyweave=warn" } else { "storyweave=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn show_info(path: &str) -> Result<(), String> {
    let story = Story::open(path).map_err(|e| e.to_string())?;

    println!("File: {path}");
    println!("Title: {}", story.title);
    match story.start() {
        Some(_) => println!("Start: {}", story.start_passage),
        None => println!("Start: {} (missing)", story.start_passage),
    }
    println!("Passages: {}", story.passage_count());

    let dangling = story.dangling_links();
    if !dangling.is_empty() {
        println!("Dangling links: {}", dangling.len());
        for (from, link) in dangling {
            println!("  {from} -> {}", link.target);
        }
    }

    Ok(())
}

fn convert(input: &str, output: &str, quiet: bool) -> Result<(), String> {
    let story = Story::open(input).map_err(|e| e.to_string())?;

    let format = Format::output_from_path(output)
        .ok_or_else(|| format!("unsupported output format: {output}"))?;

    let mut content = Vec::new();
    let written = match format {
        Format::Html => HtmlExporter::new().export(&story, &mut content),
        Format::Json => JsonExporter::new().export(&story, &mut content),
        Format::Twine => return Err(format!("cannot write Twine exports: {output}")),
    };
    written.map_err(|e| e.to_string())?;

    fs::write(output, &content).map_err(|e| e.to_string())?;

    if !quiet {
        println!(
            "Converted {input} -> {output} ({} passages)",
            story.passage_count()
        );
    }
    Ok(())
}
