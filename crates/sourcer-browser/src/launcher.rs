use crate::{Error, Result};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

/// Manages the Chrome process lifecycle.
///
/// Chrome is launched directly rather than through a driver so the user's
/// profile directory is used exactly as a normal browser session would use it.
pub struct ChromeLauncher {
    chrome_path: PathBuf,
    profile_path: PathBuf,
    initial_url: Option<String>,
    headless: bool,
    debugging_port: u16,
}

impl ChromeLauncher {
    /// Create a new ChromeLauncher.
    pub fn new(chrome_path: PathBuf, profile_path: PathBuf, initial_url: Option<String>) -> Self {
        Self {
            chrome_path,
            profile_path,
            initial_url,
            headless: false,
            debugging_port: 9222,
        }
    }

    /// Run the browser without a window. Only sensible for the add flow;
    /// login needs a human in front of the page.
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Launch the Chrome process.
    pub fn launch(&self) -> Result<Child> {
        let args = self.build_args();
        tracing::debug!("Launching {} {:?}", self.chrome_path.display(), args);

        Command::new(&self.chrome_path)
            .args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Browser(format!("Failed to launch Chrome: {}", e)))
    }

    /// Build Chrome command-line arguments.
    fn build_args(&self) -> Vec<String> {
        let mut args = vec![
            format!("--remote-debugging-port={}", self.debugging_port),
            "--no-first-run".to_string(),
            "--no-default-browser-check".to_string(),
            format!("--user-data-dir={}", self.profile_path.display()),
        ];

        if self.headless {
            args.push("--headless=new".to_string());
        }

        match &self.initial_url {
            Some(url) => args.push(url.clone()),
            None => args.push("about:blank".to_string()),
        }

        args
    }

    /// Get the DevTools debugging port.
    pub fn debugging_port(&self) -> u16 {
        self.debugging_port
    }
}
