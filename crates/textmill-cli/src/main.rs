use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use textmill_core::BatchError;
use textmill_pdf_mupdf::MupdfBackend;

mod output;

use output::ColorMode;

/// textmill - Convert PDF books to plain text
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert every .pdf file in a directory to .txt files
    Batch {
        /// Directory containing the PDF files to convert
        #[arg(long = "books_dir")]
        books_dir: Option<PathBuf>,

        /// Directory to write the .txt files into
        #[arg(long = "output_dir")]
        output_dir: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Extract text from a single PDF and print it to stdout
    Extract {
        /// Path to the PDF file
        file_path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Batch {
            books_dir,
            output_dir,
            no_color,
        } => batch(books_dir, output_dir, no_color),
        Command::Extract { file_path } => extract(&file_path),
    }
}

fn batch(
    books_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    no_color: bool,
) -> anyhow::Result<()> {
    let color = ColorMode(!no_color);

    // Resolve configuration: CLI flags > env vars > interactive prompt
    let books_dir = resolve_dir(books_dir, "BOOKS_DIR", "Books directory", "books")?;
    let output_dir = resolve_dir(output_dir, "OUTPUT_DIR", "Output directory", "output")?;

    let backend = MupdfBackend::new();
    let mut stdout = std::io::stdout();
    match textmill_core::process_directory(&backend, &books_dir, &output_dir, &mut stdout) {
        Ok(_count) => Ok(()),
        Err(BatchError::MissingDirectory(path)) => {
            output::print_missing_directory(&mut std::io::stderr(), &path, color)?;
            std::process::exit(1);
        }
        // Extraction and IO failures abort the remaining batch; files
        // already written stay in place.
        Err(e) => Err(e.into()),
    }
}

fn extract(file_path: &std::path::Path) -> anyhow::Result<()> {
    let backend = MupdfBackend::new();
    let text = textmill_core::extract_text(&backend, file_path)?;
    print!("{text}");
    Ok(())
}

/// Resolve a directory path from a CLI flag, an environment variable,
/// or an interactive prompt, in that order. The prompt shows the
/// built-in default and an empty response accepts it. Paths obtained
/// here still undergo the existence check in the batch processor.
fn resolve_dir(
    flag: Option<PathBuf>,
    env_var: &str,
    prompt: &str,
    default: &str,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Ok(value) = std::env::var(env_var) {
        if !value.is_empty() {
            return Ok(PathBuf::from(value));
        }
    }

    print!("{prompt} [{default}]: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let answer = line.trim();
    if answer.is_empty() {
        Ok(PathBuf::from(default))
    } else {
        Ok(PathBuf::from(answer))
    }
}
