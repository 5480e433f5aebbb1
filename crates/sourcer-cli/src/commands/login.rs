use anyhow::Result;
use sourcer_browser::{ChromeFinder, ChromeLauncher, ProfileDir};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Where the manual login starts.
const LOGIN_URL: &str = "https://accounts.google.com";

/// How long the user gets to complete the login before the browser is closed.
const LOGIN_DEADLINE: Duration = Duration::from_secs(600);

/// Poll interval while waiting for the browser to be closed.
const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub fn execute(profile_path: &str, chrome_path: Option<PathBuf>) -> Result<()> {
    println!("🔍 Locating Chrome...");
    let chrome_binary = ChromeFinder::new(chrome_path).find()?;
    println!("✅ Found Chrome at: {}", chrome_binary.display());

    let profile = ProfileDir::resolve(profile_path)?;
    println!("📁 Using profile: {}", profile.path().display());

    let launcher = ChromeLauncher::new(
        chrome_binary,
        profile.path().to_path_buf(),
        Some(LOGIN_URL.to_string()),
    );

    println!("🚀 Launching Chrome...");
    let mut chrome = launcher.launch()?;
    println!();
    println!("Please log in manually, then close the browser window when done.");

    let started = Instant::now();
    loop {
        match chrome.try_wait() {
            Ok(Some(status)) => {
                println!("✅ Browser closed (exit code: {})", status.code().unwrap_or(-1));
                break;
            }
            Ok(None) => {
                if started.elapsed() >= LOGIN_DEADLINE {
                    println!("⏰ Login window expired, closing the browser...");
                    let _ = chrome.kill();
                    let _ = chrome.wait();
                    break;
                }
                std::thread::sleep(EXIT_POLL_INTERVAL);
            }
            Err(e) => {
                // Failures while waiting are reported, not retried
                println!("Finished with: {}", e);
                break;
            }
        }
    }

    println!("✅ Session saved to: {}", profile.path().display());
    Ok(())
}
