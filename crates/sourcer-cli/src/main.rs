use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "sourcer")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Add links as sources to a NotebookLM notebook",
    long_about = "Sourcer drives a Chrome session that reuses a persisted browser profile, so a \
                  one-time manual Google login is enough to add webpage and YouTube links as \
                  sources to a notebook from then on."
)]
#[command(group = ArgGroup::new("action").required(true).multiple(true).args(["login", "links", "links_file"]))]
struct Cli {
    /// URL of the NotebookLM notebook
    #[arg(long, value_name = "URL", required_unless_present = "login")]
    notebook: Option<String>,

    /// Open a browser to log in to Google and persist the session
    #[arg(long)]
    login: bool,

    /// Browser profile directory reused across runs
    #[arg(long, value_name = "PATH", default_value = "~/.browser_automation")]
    profile_path: String,

    /// Links to add as sources
    #[arg(
        short = 'l',
        long,
        value_name = "LINK",
        num_args = 1..,
        requires = "notebook",
        conflicts_with = "links_file"
    )]
    links: Vec<String>,

    /// File containing links to add, one per line
    #[arg(short = 'f', long, value_name = "PATH", requires = "notebook")]
    links_file: Option<PathBuf>,

    /// Path to the Chrome binary
    #[arg(long, value_name = "PATH")]
    chrome_path: Option<PathBuf>,

    /// Run the add-links browser without a window
    #[arg(long)]
    headless: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.login {
        commands::login::execute(&cli.profile_path, cli.chrome_path.clone())?;
    }

    if !cli.links.is_empty() || cli.links_file.is_some() {
        let notebook = cli
            .notebook
            .as_deref()
            .context("a notebook URL is required to add links")?;

        commands::add::execute(
            notebook,
            &cli.links,
            cli.links_file.as_deref(),
            &cli.profile_path,
            cli.chrome_path,
            cli.headless,
        )?;
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("sourcer=debug,sourcer_core=debug,sourcer_browser=debug")
    } else {
        EnvFilter::new("sourcer=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
