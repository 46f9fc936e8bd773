//! unarticle CLI - scientific article structure extraction tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unarticle::{extract_batch, ExtractOptions, JsonFormat, OutputNaming, Unarticle};

#[derive(Parser)]
#[command(name = "unarticle")]
#[command(author = "iyulab")]
#[command(version)]
#[command(
    about = "Extract title, abstract, sections and references from parsed article content lists",
    long_about = None
)]
struct Cli {
    /// Input content list (JSON array or JSON Lines)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Accept documents with a single top-level heading
    #[arg(long)]
    lenient: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract one or more documents and write their JSON records
    Extract {
        /// Input content lists
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (defaults to each input's directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Name records <name>.json instead of extract_<name>.json
        #[arg(long)]
        plain_name: bool,

        /// Accept documents with a single top-level heading
        #[arg(long)]
        lenient: bool,

        /// Tag sections by heading wording
        #[arg(long)]
        classify_sections: bool,

        /// Process documents one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Print the JSON record of a document
    Json {
        /// Input content list
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Accept documents with a single top-level heading
        #[arg(long)]
        lenient: bool,
    },

    /// Show a summary of the extracted structure
    Info {
        /// Input content list
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Accept documents with a single top-level heading
        #[arg(long)]
        lenient: bool,

        /// Print the extraction report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract {
            inputs,
            output,
            plain_name,
            lenient,
            classify_sections,
            sequential,
        }) => {
            let mut options = ExtractOptions::new()
                .with_section_classification(classify_sections)
                .with_parallel(!sequential);
            if let Some(dir) = output {
                options = options.with_output_dir(dir);
            }
            if plain_name {
                options = options.with_naming(OutputNaming::Plain);
            }
            if lenient {
                options = options.lenient();
            }
            cmd_extract(&inputs, &options)
        }
        Some(Commands::Json {
            input,
            output,
            compact,
            lenient,
        }) => cmd_json(&input, output.as_deref(), compact, lenient),
        Some(Commands::Info {
            input,
            lenient,
            json,
        }) => cmd_info(&input, lenient, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: extract if input is provided
            if let Some(input) = cli.input {
                cmd_default(&input, cli.output.as_deref(), cli.lenient)
            } else {
                println!("{}", "Usage: unarticle <FILE> [OUTPUT]".yellow());
                println!("       unarticle --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn builder(lenient: bool) -> Unarticle {
    if lenient {
        Unarticle::new().lenient()
    } else {
        Unarticle::new()
    }
}

fn cmd_default(
    input: &Path,
    output: Option<&Path>,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut unarticle = builder(lenient);
    if let Some(dir) = output {
        unarticle = unarticle.with_output_dir(dir);
    }

    let result = unarticle.extract_file(input)?;
    let path = result.write()?;

    for warning in &result.report().warnings {
        println!("{} {}", "warning:".yellow(), warning);
    }
    println!("{} {}", "Saved to".green(), path.display());

    Ok(())
}

fn cmd_extract(inputs: &[PathBuf], options: &ExtractOptions) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Extracting {} document(s)...", inputs.len()));

    let outcomes = extract_batch(inputs, options);
    pb.finish_and_clear();

    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok((extraction, path)) => {
                let warnings = extraction.report.warnings.len();
                if warnings > 0 {
                    println!(
                        "{} {} {}",
                        "Extracted".green(),
                        path.display(),
                        format!("({} warnings)", warnings).yellow()
                    );
                } else {
                    println!("{} {}", "Extracted".green(), path.display());
                }
            }
            Err(e) => {
                failed += 1;
                eprintln!("{} {}: {}", "Failed".red(), outcome.input.display(), e);
            }
        }
    }

    println!(
        "\n{} {} of {} documents extracted",
        "Done!".green().bold(),
        outcomes.len() - failed,
        outcomes.len()
    );

    if failed > 0 {
        return Err(format!("{} document(s) failed", failed).into());
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = builder(lenient).extract_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = result.to_json(format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path, lenient: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = builder(lenient).extract_file(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(result.report())?);
        return Ok(());
    }

    println!("{}", "Article Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    print!("{}", result.summary());

    println!();
    println!("{}", "Extraction Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let stats = &result.report().stats;
    println!("{}: {}", "Blocks".bold(), stats.block_count);
    println!(
        "{}: {}",
        "Top-level headings".bold(),
        stats.top_level_heading_count
    );
    println!(
        "{}: {}",
        "Demoted headings".bold(),
        stats.demoted_heading_count
    );
    println!(
        "{}: {:.0}%",
        "References with year".bold(),
        stats.year_coverage() * 100.0
    );
    if stats.skipped_table_count > 0 {
        println!(
            "{}: {}",
            "Skipped tables".bold(),
            stats.skipped_table_count.to_string().yellow()
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unarticle".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Scientific article structure extraction tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/unarticle".dimmed()
    );
    println!("License: MIT");
}
