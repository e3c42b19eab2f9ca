use clap::{Parser, Subcommand};
use scenegit::commands::*;
use scenegit::core::{git_available, print_error, Result};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scenegit")]
#[command(about = "Cached git session for content-creation working trees")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Document file the repository is located from (defaults to the
    /// current directory)
    #[arg(long, global = true)]
    document: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show working-tree file status
    Status,
    /// Show recent commit history
    Log {
        /// Number of commits to show (bypasses the cached view)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// List local branches, current branch first
    Branches,
    /// Stage files, initializing the repository on first use
    Stage {
        /// Files to stage
        paths: Vec<PathBuf>,
        /// Stage everything
        #[arg(short, long)]
        all: bool,
    },
    /// Unstage everything
    Reset,
    /// Save the document, stage it and commit
    Commit {
        /// Commit message
        #[arg(short, long)]
        message: String,
        /// Pop the last stash into this commit first
        #[arg(long)]
        restore_stash: bool,
    },
    /// Switch to a branch or commit (working tree must be clean)
    Checkout {
        /// Branch name or commit hash
        reference: Option<String>,
        /// Switch to the main branch instead
        #[arg(long)]
        main: bool,
    },
    /// Stash or restore uncommitted changes
    Stash {
        /// Pop the last stash instead of saving one
        #[arg(long)]
        pop: bool,
        /// Stash message
        #[arg(short, long, default_value = "")]
        message: String,
        /// Run on a worker thread
        #[arg(long)]
        background: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if !git_available() {
        print_error("git is not installed or not on PATH");
        std::process::exit(1);
    }

    let document = cli.document.clone();
    let result: Result<()> = match cli.command {
        Commands::Status => execute_status(document),
        Commands::Log { limit } => execute_log(document, limit),
        Commands::Branches => execute_branches(document),
        Commands::Stage { paths, all } => execute_stage(document, paths, all),
        Commands::Reset => execute_reset(document),
        Commands::Commit {
            message,
            restore_stash,
        } => execute_commit(document, message, restore_stash),
        Commands::Checkout { reference, main } => execute_checkout(document, reference, main),
        Commands::Stash {
            pop,
            message,
            background,
        } => execute_stash(document, pop, message, background),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
