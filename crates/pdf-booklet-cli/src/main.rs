use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use pdf_booklet::{BookletOptions, FileOutcome};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "pdfbook",
    about = "Transform PDF files into printable booklets",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    booklet: BookletArgs,

    /// Input PDF files, each turned into <name>-book.pdf
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Show the external commands being run
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Make booklets of every file in a directory tree not yet named *-book*
    Batch {
        /// Directory to sweep
        #[arg(default_value = ".")]
        dir: PathBuf,

        #[command(flatten)]
        booklet: BookletArgs,
    },

    /// Convert Word documents in a directory tree to PDF
    Convert {
        /// Directory to sweep
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Path to the LibreOffice soffice binary
        #[arg(long, value_name = "PATH")]
        soffice: Option<PathBuf>,
    },
}

#[derive(Args)]
struct BookletArgs {
    /// Output paper as a latex keyword (e.g. a4paper, letterpaper, legalpaper)
    #[arg(short, long, value_name = "STR", help_heading = "General")]
    paper: Option<String>,

    /// Format the booklet for short-edge double-sided printing
    #[arg(short, long, help_heading = "General")]
    short_edge: bool,

    /// Do not crop pages to their content area
    #[arg(short = 'n', long, help_heading = "General")]
    no_crop: bool,

    /// Outer margin in the booklet [default: 40]
    #[arg(short, long, value_name = "INT", help_heading = "Margins")]
    outer_margin: Option<i64>,

    /// Inner margin between the pages in the booklet [default: 150]
    #[arg(short, long, value_name = "INT", help_heading = "Margins")]
    inner_margin: Option<i64>,

    /// Top margin [default: 30]
    #[arg(short, long, value_name = "INT", help_heading = "Margins")]
    top_margin: Option<i64>,

    /// Bottom margin; accepted but not used when cropping [default: 30]
    #[arg(short, long, value_name = "INT", help_heading = "Margins")]
    bottom_margin: Option<i64>,

    /// Pages per signature, a multiple of 4; 0 makes a single booklet [default: 0]
    #[arg(long, value_name = "INT", help_heading = "Advanced")]
    signature: Option<u32>,

    /// Resolution used by ghostscript in bp [default: 72]
    #[arg(long, value_name = "INT", help_heading = "Advanced")]
    resolution: Option<u32>,

    /// Read options from a JSON file; flags given on the command line win
    #[arg(long, value_name = "FILE", help_heading = "Config")]
    config: Option<PathBuf>,

    /// Write the resolved options to a JSON file
    #[arg(long, value_name = "FILE", help_heading = "Config")]
    save_config: Option<PathBuf>,
}

impl BookletArgs {
    /// Layer the flags over `defaults` or the config file
    async fn resolve(&self, defaults: BookletOptions) -> Result<BookletOptions> {
        let mut options = match &self.config {
            Some(path) => BookletOptions::load(path)
                .await
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => defaults,
        };

        if let Some(paper) = &self.paper {
            options.paper = Some(paper.clone());
        }
        if self.short_edge {
            options.short_edge = true;
        }
        if self.no_crop {
            options.crop = false;
        }
        if let Some(outer) = self.outer_margin {
            options.margins.outer = outer;
        }
        if let Some(inner) = self.inner_margin {
            options.margins.inner = inner;
        }
        if let Some(top) = self.top_margin {
            options.margins.top = top;
        }
        if let Some(bottom) = self.bottom_margin {
            options.margins.bottom = bottom;
        }
        if let Some(signature) = self.signature {
            options.signature = signature;
        }
        if let Some(resolution) = self.resolution {
            options.resolution = resolution;
        }

        options.validate()?;

        if let Some(path) = &self.save_config {
            options
                .save(path)
                .await
                .with_context(|| format!("Failed to save {}", path.display()))?;
            println!("Saved options → {}", path.display());
        }

        Ok(options)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

async fn print_statistics(input: &Path, options: &BookletOptions) {
    match pdf_booklet::statistics_for(input, options).await {
        Ok(stats) => {
            println!("Booklet Statistics:");
            println!("  Source pages: {}", stats.source_pages);
            println!("  Output sheets: {}", stats.output_sheets);
            println!("  Output pages: {}", stats.output_pages);
            println!("  Blank pages added: {}", stats.blank_pages_added);
            println!("  Signatures: {}", stats.signatures);
        }
        Err(e) => log::debug!("No statistics for {}: {}", input.display(), e),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None if cli.files.is_empty() => {
            let mut command = Cli::command();
            println!("{}", command.render_version());
            command.print_help()?;
            println!();
            std::process::exit(2);
        }

        None => {
            let options = cli.booklet.resolve(BookletOptions::default()).await?;
            let booklet = pdf_booklet::Booklet::new(options)?;

            let mut completed = Vec::new();
            let result = booklet
                .run_with(&cli.files, |outcome| match outcome {
                    FileOutcome::Completed { input, output } => {
                        println!("Booklet → {}", output.display());
                        completed.push(input.clone());
                    }
                    FileOutcome::Skipped { input } => {
                        println!("SKIP: {} not found.", input.display());
                    }
                })
                .await;

            for input in &completed {
                print_statistics(input, booklet.options()).await;
            }
            let summary = result?;
            if summary.failed > 0 {
                println!("{} file(s) failed", summary.failed);
            }
        }

        Some(Commands::Batch { dir, booklet }) => {
            let options = booklet.resolve(BookletOptions::batch_defaults()).await?;
            let booklet = pdf_booklet::Booklet::new(options)?;
            let summary = pdf_booklet::run_batch(&booklet, &dir).await?;

            println!("Batch complete in {}", dir.display());
            println!("  Booklets written: {}", summary.processed());
            println!("  Skipped: {}", summary.skipped);
            println!("  Failed: {}", summary.failed);
        }

        Some(Commands::Convert { dir, soffice }) => {
            let converter = match soffice {
                Some(path) => pdf_booklet::Converter::with_runner(
                    path,
                    pdf_booklet::tool::ProcessRunner,
                ),
                None => pdf_booklet::Converter::new(),
            };
            println!("Starting to process directory: {}", dir.display());
            let summary = converter.convert_directory(&dir).await?;

            println!("Conversion complete.");
            println!("  Total Word files found: {}", summary.total);
            println!("  Successfully converted files: {}", summary.converted);
        }
    }

    Ok(())
}
