use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use lit::areas::repository::Repository;
use lit::artifacts::objects::commit::Author;
use std::path::{Path, PathBuf};

/// Environment variable pinning the commit timestamp
const AUTHOR_DATE_ENV: &str = "GIT_AUTHOR_DATE";

#[derive(Parser)]
#[command(
    name = "lit",
    version = "0.1.0",
    about = "A minimal content-addressed version control tool",
    long_about = "This is a minimal version control tool, written in Rust. \
    It stages files, reports status, shows new files and records commits \
    over a single linear history.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        global = true,
        help = "Run as if lit was started in this directory"
    )]
    directory: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "config",
        about = "Set the author identity",
        long_about = "This command stores the username and email recorded in every following commit."
    )]
    Config {
        #[arg(index = 1, help = "The author name")]
        username: String,
        #[arg(index = 2, help = "The author email")]
        email: String,
    },
    #[command(
        name = "add",
        about = "Add files to the index",
        long_about = "This command stages files in the index. \
        Directories are added recursively."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The files or directories to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command lists staged modifications and deletions, then untracked files."
    )]
    Status,
    #[command(
        name = "diff",
        about = "Show files that are not staged yet",
        long_about = "This command prints a new-file diff block for every workspace file missing from the index."
    )]
    Diff,
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command creates a new commit in the repository with the specified commit message."
    )]
    Commit {
        #[arg(
            short,
            long,
            conflicts_with = "text",
            required_unless_present = "text",
            help = "The commit message"
        )]
        message: Option<String>,
        #[arg(index = 1, help = "The commit message, when -m is not given")]
        text: Option<String>,
    },
    #[command(
        name = "logs",
        visible_alias = "log",
        about = "Show every recorded commit",
        long_about = "This command prints every commit found in the object store, in storage order."
    )]
    Logs,
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash an object and optionally write it to the object database",
        long_about = "This command hashes an object file and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("LIT_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let pwd = std::env::current_dir().context("unable to read the current directory")?;
    let base = match cli.directory {
        Some(directory) => pwd.join(directory),
        None => pwd,
    };

    match cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => base.join(path),
                None => base,
            };
            std::fs::create_dir_all(&path)
                .with_context(|| format!("unable to create {}", path.display()))?;

            let repository = Repository::new(&path)?;
            println!("{}", repository.init()?);
        }
        Commands::Config { username, email } => {
            let repository = Repository::new(&base)?;
            let config = repository.set_config(&username, &email)?;

            println!(
                "Config set successfully: {} {}",
                config.username(),
                config.email()
            );
        }
        Commands::Add { paths } => {
            let repository = Repository::new(&base)?;
            let paths = resolve_paths(&base, &paths);

            for file in repository.add(&paths)? {
                println!("Added to index: {}", file.display());
            }
        }
        Commands::Status => {
            let repository = Repository::new(&base)?;
            print!("{}", repository.status()?);
        }
        Commands::Diff => {
            let repository = Repository::new(&base)?;
            print!("{}", repository.diff()?);
        }
        Commands::Commit { message, text } => {
            let repository = Repository::new(&base)?;
            let message = message.or(text).unwrap_or_default();
            let timestamp = std::env::var(AUTHOR_DATE_ENV)
                .ok()
                .map(|date| Author::parse_date(&date))
                .transpose()?;

            let commit_id = repository.commit(&message, timestamp)?;
            println!("Committed to master: {commit_id}");
        }
        Commands::Logs => {
            let repository = Repository::new(&base)?;
            print!("{}", repository.logs()?);
        }
        Commands::CatFile { sha } => {
            let repository = Repository::new(&base)?;
            print!("{}", repository.cat_file(&sha)?);
        }
        Commands::HashObject { write, file } => {
            let repository = Repository::new(&base)?;
            let file = base.join(file);

            println!("{}", repository.hash_object(&file, write)?);
        }
    }

    Ok(())
}

fn resolve_paths(base: &Path, paths: &[PathBuf]) -> Vec<PathBuf> {
    paths.iter().map(|path| base.join(path)).collect()
}
