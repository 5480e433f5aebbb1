use anyhow::{Result, bail};
use console::style;
use sourcer_browser::{CdpSession, ChromeFinder, ChromeLauncher, ProfileDir, SourcePanel};
use sourcer_core::links::read_links_file;
use sourcer_core::notebook::NotebookUrl;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How long to wait for the Chrome process after asking it to close.
const REAP_TIMEOUT: Duration = Duration::from_secs(10);

pub fn execute(
    notebook: &str,
    links: &[String],
    links_file: Option<&Path>,
    profile_path: &str,
    chrome_path: Option<PathBuf>,
    headless: bool,
) -> Result<()> {
    // Resolve the inputs before any browser work so bad invocations fail fast
    let links = match links_file {
        Some(path) => read_links_file(path)?,
        None => links.to_vec(),
    };
    if links.is_empty() {
        bail!("No links to add");
    }

    let notebook = NotebookUrl::parse(notebook)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(run(&notebook, &links, profile_path, chrome_path, headless));

    // Bounded shutdown so lingering blocking tasks cannot hang the process
    runtime.shutdown_timeout(Duration::from_millis(100));

    result
}

async fn run(
    notebook: &NotebookUrl,
    links: &[String],
    profile_path: &str,
    chrome_path: Option<PathBuf>,
    headless: bool,
) -> Result<()> {
    println!("🔍 Locating Chrome...");
    let chrome_binary = ChromeFinder::new(chrome_path).find()?;
    println!("✅ Found Chrome at: {}", chrome_binary.display());

    let profile = ProfileDir::resolve(profile_path)?;
    println!("📁 Using profile: {}", profile.path().display());

    let launcher = ChromeLauncher::new(
        chrome_binary,
        profile.path().to_path_buf(),
        Some(notebook.as_str().to_string()),
    )
    .with_headless(headless);

    println!("🚀 Launching Chrome...");
    let mut chrome = launcher.launch()?;
    println!("📍 Opening notebook: {}", notebook);

    let outcome = add_all(launcher.debugging_port(), links).await;

    if outcome.is_err() {
        // The CDP connection may already be gone; make sure the process is too
        let _ = chrome.kill();
    }

    let reap = tokio::task::spawn_blocking(move || chrome.wait());
    if tokio::time::timeout(REAP_TIMEOUT, reap).await.is_err() {
        tracing::warn!("Timed out waiting for Chrome to exit");
    }

    outcome
}

async fn add_all(debugging_port: u16, links: &[String]) -> Result<()> {
    let driver = CdpSession::new(debugging_port).attach().await?;
    let panel = SourcePanel::new(&driver);

    println!("📚 Adding {} source(s)...", links.len());
    for (idx, link) in links.iter().enumerate() {
        tracing::info!("Adding source {}/{}: {}", idx + 1, links.len(), link);
        panel.add_source(link).await?;
        println!("  {} {}", style("Added").green().bold(), link);
    }

    driver.close().await?;
    println!("✅ Done");
    Ok(())
}
