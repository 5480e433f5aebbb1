//! Drives the NotebookLM UI to attach sources to a notebook.
//!
//! The interaction is a fixed sequence of lookups against the app's visible
//! labels and Material dialog structure. When the app's DOM changes, this is
//! the file that breaks.

use crate::cdp_session::PageDriver;
use crate::Result;
use sourcer_core::links::SourceKind;
use std::time::Duration;

/// Wait budget for top-level controls to appear.
const CONTROL_TIMEOUT: Duration = Duration::from_secs(30);
/// Wait budget for the source dialog to open or close.
const DIALOG_TIMEOUT: Duration = Duration::from_secs(15);
/// Wait budget for the URL input inside the dialog.
const INPUT_TIMEOUT: Duration = Duration::from_secs(20);
/// Wait budget for the Insert button.
const INSERT_TIMEOUT: Duration = Duration::from_secs(20);
/// Pause after inserting so the app can start ingesting the source.
const SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Lookups for the notebook's source UI. Text lookups follow the visible
/// labels, structural ones the Material dialog classes.
mod selectors {
    /// The "Add" control in the sources panel.
    pub const ADD_BUTTON: &str = "//*[normalize-space(text())='Add']";

    /// The wrapper Material renders around the source dialog.
    pub const DIALOG: &str = ".mat-mdc-dialog-inner-container";

    /// The dialog's confirm button.
    pub const INSERT_BUTTON: &str =
        "//*[contains(@class, 'mat-mdc-dialog-inner-container')]//button[contains(., 'Insert')]";

    /// A source-type option in the add-source menu, by visible label.
    pub fn source_option(label: &str) -> String {
        format!("//*[normalize-space(text())='{}']", label)
    }

    /// The URL input inside the dialog, located through its `mat-label`.
    pub fn url_input(prompt: &str) -> String {
        format!(
            "//*[contains(@class, 'mat-mdc-dialog-inner-container')]\
             //mat-label[normalize-space(text())='{}']\
             /ancestor::mat-form-field//input",
            prompt
        )
    }
}

/// Adds sources to the notebook the attached page is displaying.
pub struct SourcePanel<'a> {
    driver: &'a PageDriver,
}

impl<'a> SourcePanel<'a> {
    pub fn new(driver: &'a PageDriver) -> Self {
        Self { driver }
    }

    /// Run the full add-source flow for one link: open the add menu, pick the
    /// source type, fill the URL field, confirm, and wait for the dialog to
    /// close.
    pub async fn add_source(&self, link: &str) -> Result<()> {
        let kind = SourceKind::classify(link);
        tracing::debug!("Adding {} source: {}", kind.option_label(), link);

        let add = self
            .driver
            .wait_for_xpath(selectors::ADD_BUTTON, CONTROL_TIMEOUT)
            .await?;
        add.click().await?;

        let option = self
            .driver
            .wait_for_xpath(&selectors::source_option(kind.option_label()), CONTROL_TIMEOUT)
            .await?;
        option.click().await?;

        self.driver
            .wait_for_css(selectors::DIALOG, DIALOG_TIMEOUT)
            .await?;

        let input = self
            .driver
            .wait_for_xpath(&selectors::url_input(kind.url_prompt()), INPUT_TIMEOUT)
            .await?;
        input.click().await?.type_str(link).await?;

        let insert = self
            .driver
            .wait_for_xpath(selectors::INSERT_BUTTON, INSERT_TIMEOUT)
            .await?;
        insert.click().await?;

        // The dialog closing is the signal that the app accepted the source
        self.driver
            .wait_until_gone(selectors::DIALOG, DIALOG_TIMEOUT)
            .await?;
        tokio::time::sleep(SETTLE_DELAY).await;

        tracing::info!("Source added: {}", link);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_option_embeds_label() {
        let xpath = selectors::source_option("YouTube");
        assert!(xpath.contains("'YouTube'"));
        assert!(xpath.contains("normalize-space"));
    }

    #[test]
    fn test_url_input_walks_up_to_form_field() {
        let xpath = selectors::url_input("Paste URL");
        assert!(xpath.contains("'Paste URL'"));
        assert!(xpath.contains("mat-label"));
        assert!(xpath.contains("ancestor::mat-form-field"));
        assert!(xpath.ends_with("//input"));
    }

    #[test]
    fn test_url_input_scoped_to_dialog() {
        for prompt in ["Paste URL", "Paste YouTube URL"] {
            assert!(selectors::url_input(prompt).contains("mat-mdc-dialog-inner-container"));
        }
    }

    #[test]
    fn test_insert_button_scoped_to_dialog() {
        assert!(selectors::INSERT_BUTTON.contains("mat-mdc-dialog-inner-container"));
        assert!(selectors::INSERT_BUTTON.contains("'Insert'"));
    }
}
