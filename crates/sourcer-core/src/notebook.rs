use crate::{Error, Result};
use std::fmt;
use url::Url;

/// Host the notebook application is served from.
const NOTEBOOK_HOST: &str = "notebooklm.google.com";

/// A validated notebook URL.
///
/// Scheme-less input is assumed to be https. A URL pointing at an unexpected
/// host is accepted with a warning, since the app occasionally moves between
/// subdomains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookUrl(String);

impl NotebookUrl {
    /// Parse and normalize a raw notebook URL.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed)
        };

        let parsed = Url::parse(&candidate).map_err(|e| Error::InvalidNotebookUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        match parsed.host_str() {
            None => {
                return Err(Error::InvalidNotebookUrl {
                    url: raw.to_string(),
                    reason: "missing host".to_string(),
                });
            }
            Some(host) if host != NOTEBOOK_HOST => {
                tracing::warn!("Notebook URL host is '{}', expected '{}'", host, NOTEBOOK_HOST);
            }
            Some(_) => {}
        }

        Ok(Self(candidate))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotebookUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
