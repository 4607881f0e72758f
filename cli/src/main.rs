//! pdfoutline CLI - structural outline extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfoutline::{
    batch, extract_outline, render, BatchOptions, JsonFormat, RunExtractor,
};

#[derive(Parser)]
#[command(name = "pdfoutline")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract title and heading outlines from PDF documents", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output JSON file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outline of a single PDF as JSON
    Outline {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Process a directory of PDFs into JSON sidecar files
    Batch {
        /// Directory containing PDF files
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Output directory (defaults to the input directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Process documents one at a time
        #[arg(long)]
        sequential: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input PDF file
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
        Some(Commands::Outline {
            input,
            output,
            compact,
        }) => cmd_outline(&input, output.as_deref(), compact),
        Some(Commands::Batch {
            input,
            output,
            sequential,
            compact,
        }) => cmd_batch(&input, output.as_deref(), sequential, compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: extract if input is provided
            if let Some(input) = cli.input {
                cmd_outline(&input, cli.output.as_deref(), false)
            } else {
                println!("{}", "Usage: pdfoutline <FILE> [OUTPUT]".yellow());
                println!("       pdfoutline --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let outline = extract_outline(input);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = render::to_json(&outline, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: Option<&Path>,
    sequential: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        input.to_path_buf()
    });

    let mut options = BatchOptions::new(input, &output_dir);
    if sequential {
        options = options.sequential();
    }
    if compact {
        options = options.with_format(JsonFormat::Compact);
    }

    // Directory enumeration failure is fatal for the whole run.
    let files = batch::find_pdf_files(input)?;
    if files.is_empty() {
        println!("{}", "No PDF files found in input directory".yellow());
        std::process::exit(1);
    }

    fs::create_dir_all(&output_dir)?;

    println!(
        "Processing {} PDF file(s) from {}",
        files.len(),
        input.display()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut succeeded = 0usize;
    let mut failed = 0usize;

    for file in &files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        pb.set_message(name.clone());

        match batch::process_file(file, &options) {
            Ok(_) => {
                succeeded += 1;
                pb.println(format!("  {} {}", "ok".green(), name));
            }
            Err(e) => {
                failed += 1;
                pb.println(format!("  {} {}: {}", "failed".red(), name, e));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done");

    println!(
        "\n{} {}/{} files processed successfully",
        "Results:".bold(),
        succeeded,
        files.len()
    );

    if succeeded == 0 {
        std::process::exit(1);
    }
    if failed > 0 {
        println!("{}", "Some files failed to process.".yellow());
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = RunExtractor::open(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), extractor.version());
    println!("{}: {}", "Pages".bold(), extractor.page_count());

    let runs = extractor.extract_runs()?;
    let outline = pdfoutline::outline_from_runs(&runs);

    println!();
    println!("{}", "Outline".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Title".bold(), outline.title);
    println!("{}: {}", "Text runs".bold(), runs.len());
    println!("{}: {}", "Headings".bold(), outline.outline.len());

    for entry in &outline.outline {
        let indent = match entry.level {
            pdfoutline::HeadingLevel::H1 => "",
            pdfoutline::HeadingLevel::H2 => "  ",
            pdfoutline::HeadingLevel::H3 => "    ",
        };
        println!(
            "{}{} {} {}",
            indent,
            entry.level.as_str().bold(),
            entry.text,
            format!("(p.{})", entry.page).dimmed()
        );
    }

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "pdfoutline".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Structural outline extraction tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/pdfoutline".dimmed()
    );
    println!("License: MIT");
}
