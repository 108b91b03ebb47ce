//! History view: lists previously uploaded photos with their upload time.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use log::{debug, warn};

use crate::backend::Backend;
use crate::config::WorkflowConfig;
use crate::error::{WorkflowError, WorkflowResult};
use crate::model::history::HistoryImageRecord;

/// Thumbnail edge length in pixels.
pub const THUMBNAIL_SIZE: u32 = 100;

/// One list item of the history view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Local date and time, e.g. `1/1/2020\u{a0}12:00:00 AM`.
    pub captured_at: String,
    /// Full-size image URL, used as thumbnail `src`, link `href` and `alt`.
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryView {
    /// No uploads yet: a single text node instead of a list.
    Empty(String),
    Entries(Vec<HistoryEntry>),
}

impl HistoryView {
    pub fn image_count(&self) -> usize {
        match self {
            HistoryView::Empty(_) => 0,
            HistoryView::Entries(entries) => entries.len(),
        }
    }
}

/// Formats an epoch-millisecond timestamp as an en-US date and time in `tz`.
///
/// Returns `None` for timestamps outside chrono's representable range.
pub fn format_timestamp<Tz>(millis: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = DateTime::from_timestamp_millis(millis)?.with_timezone(tz);
    Some(format!(
        "{}\u{a0}{}",
        local.format("%-m/%-d/%Y"),
        local.format("%-I:%M:%S %p")
    ))
}

/// Builds the history view, keeping record order.
pub fn render_history<Tz>(
    records: &[HistoryImageRecord],
    config: &WorkflowConfig,
    tz: &Tz,
) -> HistoryView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if records.is_empty() {
        return HistoryView::Empty(config.empty_history_message.clone());
    }

    let entries = records
        .iter()
        .map(|record| HistoryEntry {
            captured_at: format_timestamp(record.timestamp, tz).unwrap_or_else(|| {
                warn!("timestamp {} of {} is out of range", record.timestamp, record.blob_key);
                record.timestamp.to_string()
            }),
            image_url: record.image_url(&config.image_endpoint),
        })
        .collect();
    HistoryView::Entries(entries)
}

/// Loads the history list from the server.
pub async fn fetch_history<B: Backend>(
    backend: &B,
    endpoint: &str,
) -> WorkflowResult<Vec<HistoryImageRecord>> {
    let reply = backend
        .get_json(endpoint)
        .await
        .map_err(|err| WorkflowError::TransportFailed { reason: err.reason })?;

    if !reply.is_success() {
        return Err(WorkflowError::RequestFailed {
            endpoint: endpoint.to_string(),
            status: reply.status,
        });
    }

    let records: Vec<HistoryImageRecord> = serde_json::from_str(&reply.body)
        .map_err(|err| WorkflowError::MalformedResponse(err.to_string()))?;
    debug!("loaded {} history records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn formats_midnight_new_year_in_utc() {
        assert_eq!(
            format_timestamp(1_577_836_800_000, &Utc).as_deref(),
            Some("1/1/2020\u{a0}12:00:00 AM")
        );
    }

    #[test]
    fn formats_in_the_given_offset() {
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(
            format_timestamp(1_577_836_800_000, &new_york).as_deref(),
            Some("12/31/2019\u{a0}7:00:00 PM")
        );
    }

    #[test]
    fn empty_history_renders_the_placeholder_only() {
        let view = render_history(&[], &WorkflowConfig::default(), &Utc);
        assert_eq!(view, HistoryView::Empty("No history".to_string()));
        assert_eq!(view.image_count(), 0);
    }

    #[test]
    fn record_renders_image_url_and_time() {
        let records = [HistoryImageRecord {
            blob_key: "abc123".to_string(),
            timestamp: 1_577_836_800_000,
        }];
        let view = render_history(&records, &WorkflowConfig::default(), &Utc);
        assert_eq!(
            view,
            HistoryView::Entries(vec![HistoryEntry {
                captured_at: "1/1/2020\u{a0}12:00:00 AM".to_string(),
                image_url: "/get-image-url?blob-key=abc123".to_string(),
            }])
        );
    }
}
