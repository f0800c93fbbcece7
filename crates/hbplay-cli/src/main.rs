//! hbplay CLI: terminal Handlebars playground

use clap::{Parser, Subcommand};
use hbplay_engine::{SAMPLE_CONTEXT, SAMPLE_TEMPLATE};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Live-preview playground for Handlebars templates
#[derive(Parser)]
#[command(name = "hbplay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Append tracing output to this file (the TUI stays silent otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the playground TUI (default when no command specified)
    Tui {
        /// Seed the Template tab from a file
        #[arg(long)]
        template: Option<PathBuf>,

        /// Seed the Context tab from a JSON file
        #[arg(long)]
        context: Option<PathBuf>,
    },

    /// Render a template once and print the output
    Render {
        /// Template file
        #[arg(long)]
        template: PathBuf,

        /// JSON context file (null context when omitted)
        #[arg(long)]
        context: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref());

    match cli.command {
        None => cmd_tui(None, None),
        Some(Commands::Tui { template, context }) => cmd_tui(template, context),
        Some(Commands::Render { template, context }) => {
            cmd_render(&template, context.as_deref());
        }
    }
}

fn init_tracing(path: Option<&Path>) {
    let Some(path) = path else { return };

    match std::fs::OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hbplay_engine=debug"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        Err(e) => {
            eprintln!("Failed to open log file: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_tui(template: Option<PathBuf>, context: Option<PathBuf>) {
    let template = load_document(template.as_deref(), SAMPLE_TEMPLATE);
    let context = load_document(context.as_deref(), SAMPLE_CONTEXT);

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(e) = rt.block_on(hbplay_tui::run_tui(template, context)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_render(template_path: &Path, context_path: Option<&Path>) {
    let template = match std::fs::read_to_string(template_path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", template_path.display());
            std::process::exit(1);
        }
    };

    let context = match context_path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to read {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => String::new(),
    };

    match hbplay_engine::render_preview(&template, &context) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Read a seed document, falling back to the built-in sample when no path
/// was given. A path that was given but cannot be read is a hard error.
fn load_document(path: Option<&Path>, fallback: &str) -> String {
    match path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Failed to read {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => fallback.to_string(),
    }
}
