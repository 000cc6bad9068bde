//! unhtml CLI - batch HTML text extraction tool

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unhtml::{ConvertOptions, ExtractOptions};

#[derive(Parser)]
#[command(name = "unhtml")]
#[command(version)]
#[command(about = "Extract plain text from HTML directory trees", long_about = None)]
struct Cli {
    /// Input directory of HTML files
    #[arg(value_name = "DIR")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every .html file under a directory to .txt files
    Convert {
        /// Input directory of HTML files
        #[arg(value_name = "DIR", default_value = "htmlPages")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "txt")]
        output: PathBuf,

        /// Track nested style/script elements with a depth counter
        #[arg(long)]
        depth: bool,

        /// Abort the run on the first failing file
        #[arg(long)]
        strict: bool,

        /// Process files one at a time instead of in parallel
        #[arg(long)]
        sequential: bool,
    },

    /// Extract the text of a single HTML file
    Text {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Track nested style/script elements with a depth counter
        #[arg(long)]
        depth: bool,
    },

    /// Show extraction statistics for an HTML file
    Info {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            depth,
            strict,
            sequential,
        }) => cmd_convert(&input, &output, depth, strict, sequential),
        Some(Commands::Text {
            input,
            output,
            depth,
        }) => cmd_text(&input, output.as_deref(), depth),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if an input directory is provided
            if let Some(input) = cli.input {
                let output = cli.output.unwrap_or_else(|| PathBuf::from("txt"));
                cmd_convert(&input, &output, false, false, false)
            } else {
                println!("{}", "Usage: unhtml <DIR> [OUTPUT]".yellow());
                println!("       unhtml --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn extract_options(depth: bool) -> ExtractOptions {
    if depth {
        ExtractOptions::new().depth_tracked()
    } else {
        ExtractOptions::new()
    }
}

fn build_options(output: &Path, depth: bool, strict: bool, sequential: bool) -> ConvertOptions {
    let mut options = ConvertOptions::new()
        .with_extract_options(extract_options(depth))
        .with_output_dir(output);
    if strict {
        options = options.strict();
    }
    if sequential {
        options = options.sequential();
    }
    options
}

fn cmd_convert(
    input: &Path,
    output: &Path,
    depth: bool,
    strict: bool,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = build_options(output, depth, strict, sequential);

    // The batch runs through the library so the rayon fan-out applies; a
    // steady-tick spinner stands in for per-file progress.
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Converting {}...", input.display()));

    let summary = match unhtml::convert_dir(input, &options) {
        Ok(summary) => summary,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };
    pb.finish_with_message("Done!");

    println!(
        "\n{} {} files -> {}",
        "Converted".green().bold(),
        summary.converted_count(),
        output.display()
    );
    if summary.failed_count() > 0 {
        println!(
            "{} {} files (see log)",
            "Skipped".yellow().bold(),
            summary.failed_count()
        );
    }

    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    depth: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let html = std::fs::read_to_string(input)?;
    let chunks = unhtml::extract_with_options(&html, extract_options(depth));

    if let Some(path) = output {
        let mut text = String::new();
        for chunk in &chunks {
            text.push_str(chunk);
            text.push('\n');
        }
        std::fs::write(path, text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        for chunk in &chunks {
            println!("{}", chunk);
        }
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let chunks = unhtml::extract_file(input)?;

    println!("{}", "Extraction Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let words: usize = chunks
        .iter()
        .map(|c| c.split_whitespace().count())
        .sum();
    let chars: usize = chunks.iter().map(|c| c.len()).sum();

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Chunks".bold(), chunks.len());
    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Characters".bold(), chars);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unhtml".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Batch HTML text extraction tool");
}
