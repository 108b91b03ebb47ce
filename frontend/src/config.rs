//! Page configuration.
//!
//! The host page may embed overrides as
//! `<script type="application/json" id="snapshop-config">{...}</script>`.
//! Missing element means defaults; an unparsable one means defaults plus an
//! error string for the caller to log once the logger is up.

use snapshop_common::config::WorkflowConfig;

const CONFIG_ELEMENT_ID: &str = "snapshop-config";

pub fn load() -> (WorkflowConfig, Option<String>) {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => match WorkflowConfig::from_json(&raw) {
            Ok(config) => (config, None),
            Err(err) => (WorkflowConfig::default(), Some(err.to_string())),
        },
        _ => (WorkflowConfig::default(), None),
    }
}
