//! CLI entry point for doclist

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::Level;

use doclist::DoclistError;

#[derive(Parser, Debug)]
#[command(name = "doclist")]
#[command(about = "Converts a directory listing to WordPress-ready HTML format")]
#[command(override_usage = "doclist <directory>")]
#[command(version)]
struct Args {
    /// Directory to convert; output goes to tmp.html in its parent
    #[arg(allow_hyphen_values = true)]
    directory: PathBuf,

    /// Print diagnostic logging to stderr
    #[arg(long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            let _ = e.print();
            process::exit(1);
        }
    });

    init_logging(args.verbose);

    let result = std::env::current_dir()
        .map_err(DoclistError::CurrentDir)
        .and_then(|cwd| doclist::run(&args.directory, &cwd, &mut std::io::stdout().lock()));

    if let Err(e) = result {
        eprintln!("doclist: {}", e);
        process::exit(1);
    }
}
