//! Runtime configuration of the workflow.
//!
//! Every field has a default matching the servlet deployment, so an empty JSON
//! object (or no configuration at all) yields a working setup. The frontend
//! reads overrides from an inline JSON element at startup.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// GET endpoint issuing a one-time upload URL as plain text.
    pub upload_url_endpoint: String,
    /// GET endpoint listing previously uploaded photos.
    pub history_endpoint: String,
    /// GET endpoint serving an uploaded image by `blob-key`.
    pub image_endpoint: String,
    /// Status text shown while an upload is pending.
    pub loading_message: String,
    /// Text rendered instead of the history list when it is empty.
    pub empty_history_message: String,
    /// Whether "View" links open in a new tab.
    pub open_links_in_new_tab: bool,
    /// Maximum log level forwarded to the console (`error` .. `trace`).
    pub log_level: String,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            upload_url_endpoint: "/blobstore-upload-url".to_string(),
            history_endpoint: "/my-image-servlet".to_string(),
            image_endpoint: "/get-image-url".to_string(),
            loading_message: "Searching for products, please wait...".to_string(),
            empty_history_message: "No history".to_string(),
            open_links_in_new_tab: true,
            log_level: "info".to_string(),
        }
    }
}

impl WorkflowConfig {
    /// Parses a JSON override; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// `log_level` as a `log` filter, falling back to `Info` when unparsable.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
