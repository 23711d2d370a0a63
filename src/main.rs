//! CLI entry point for treeloc

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use treeloc::{
    EntryFilter, ExtensionFilter, FileCollector, NoProgress, OsDirSource, OutputConfig,
    ProgressBar, Scanner, StreamingFormatter, StreamingWalker, TreeWalker, clear_screen,
    print_json, resolve_absolute_path,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treeloc")]
#[command(about = "Count non-comment source lines and show them as a directory tree")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// File extension to count (leading dot optional, case-insensitive)
    #[arg(short = 'e', long = "ext", default_value = "go")]
    ext: String,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Number of parallel workers for line counting
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "1")]
    jobs: usize,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Do not show the progress bar while counting
    #[arg(long = "no-progress")]
    no_progress: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("treeloc=warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging();

    let root = resolve_absolute_path(&args.path).unwrap_or_else(|e| {
        eprintln!("treeloc: {}", e);
        process::exit(1);
    });

    let filter = EntryFilter::new(ExtensionFilter::new(&args.ext))
        .ignore_many(&args.ignore)
        .unwrap_or_else(|e| {
            eprintln!("treeloc: {}", e);
            process::exit(1);
        });

    let source = OsDirSource;
    let mut index = FileCollector::new(&source, &filter).collect(&root);

    if index.is_empty() {
        println!(
            "No {} files found under: {}",
            filter.extension().suffix(),
            root.display()
        );
        return;
    }

    let show_progress = !args.no_progress && !args.json && std::io::stdout().is_terminal();
    let scanner = Scanner::new(&source).with_jobs(args.jobs);
    let scanned = if show_progress {
        scanner.scan(
            &mut index,
            &mut ProgressBar::stdout(filter.extension().suffix()),
        )
    } else {
        scanner.scan(&mut index, &mut NoProgress)
    };
    if let Err(e) = scanned {
        eprintln!("treeloc: {}", e);
        process::exit(1);
    }

    let result = if args.json {
        // JSON output requires full tree in memory (for serialization)
        match TreeWalker::new(&source, &index, &filter).walk(&root) {
            Some(tree) => print_json(&tree),
            None => {
                println!("null");
                Ok(())
            }
        }
    } else {
        if show_progress {
            if let Err(e) = clear_screen() {
                tracing::debug!(error = %e, "failed to clear the screen");
            }
        }

        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
        };
        let mut formatter = StreamingFormatter::new(output_config);
        StreamingWalker::new(&source, &index, &filter)
            .walk_streaming(&root, &mut formatter)
            .map(|_| ())
    };

    if let Err(e) = result {
        eprintln!("treeloc: error writing output: {}", e);
        process::exit(1);
    }
}
