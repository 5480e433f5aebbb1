use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Which source option a link maps to in the notebook UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Website,
    YouTube,
}

impl SourceKind {
    /// Classify a link. YouTube links get the dedicated source type,
    /// everything else is added as a plain webpage.
    pub fn classify(link: &str) -> Self {
        if link.contains("youtube.com") {
            SourceKind::YouTube
        } else {
            SourceKind::Website
        }
    }

    /// Visible label of the source-type option in the add-source menu.
    pub fn option_label(&self) -> &'static str {
        match self {
            SourceKind::Website => "Website",
            SourceKind::YouTube => "YouTube",
        }
    }

    /// Label of the URL field in the source dialog.
    pub fn url_prompt(&self) -> &'static str {
        match self {
            SourceKind::Website => "Paste URL",
            SourceKind::YouTube => "Paste YouTube URL",
        }
    }
}

/// Read links from a file, one per line.
///
/// Lines are trimmed of surrounding whitespace and blank lines are skipped.
/// A file that yields no links at all is an error.
pub fn read_links_file(path: &Path) -> Result<Vec<String>> {
    tracing::debug!("Reading links from: {}", path.display());

    let content = fs::read_to_string(path)?;
    let links: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if links.is_empty() {
        return Err(Error::EmptyLinkList(path.display().to_string()));
    }

    tracing::info!("Read {} links from {}", links.len(), path.display());
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_classify_youtube_link() {
        let kind = SourceKind::classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(kind, SourceKind::YouTube);
        assert_eq!(kind.option_label(), "YouTube");
        assert_eq!(kind.url_prompt(), "Paste YouTube URL");
    }

    #[test]
    fn test_classify_plain_webpage() {
        let kind = SourceKind::classify("https://example.com/article");
        assert_eq!(kind, SourceKind::Website);
        assert_eq!(kind.option_label(), "Website");
        assert_eq!(kind.url_prompt(), "Paste URL");
    }

    #[test]
    fn test_classify_short_youtube_link_is_webpage() {
        // youtu.be redirects are not matched by the host check
        let kind = SourceKind::classify("https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(kind, SourceKind::Website);
    }

    #[test]
    fn test_read_links_strips_whitespace_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  https://example.com/a  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "\thttps://example.com/b").unwrap();
        writeln!(file, "   ").unwrap();

        let links = read_links_file(file.path()).unwrap();
        assert_eq!(links, vec!["https://example.com/a", "https://example.com/b"]);
    }

    #[test]
    fn test_read_links_rejects_empty_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\n   \n").unwrap();

        let result = read_links_file(file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No links found"));
    }

    #[test]
    fn test_read_links_missing_file() {
        let result = read_links_file(Path::new("/nonexistent/links.txt"));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read links file")
        );
    }
}
