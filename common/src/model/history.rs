use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Metadata of a previously uploaded photo, as listed by the history endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryImageRecord {
    /// Opaque Blobstore key identifying the stored image.
    pub blob_key: String,
    /// Upload time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl HistoryImageRecord {
    /// URL serving the full-size image, e.g. `/get-image-url?blob-key=abc123`.
    ///
    /// The key is form-encoded so keys with reserved characters stay a single
    /// query parameter.
    pub fn image_url(&self, image_endpoint: &str) -> String {
        let key: String = form_urlencoded::byte_serialize(self.blob_key.as_bytes()).collect();
        format!("{}?blob-key={}", image_endpoint, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_fields() {
        let record: HistoryImageRecord =
            serde_json::from_str(r#"{"blobKey":"abc123","timestamp":1577836800000}"#).unwrap();
        assert_eq!(record.blob_key, "abc123");
        assert_eq!(record.timestamp, 1_577_836_800_000);
    }

    #[test]
    fn image_url_encodes_reserved_characters() {
        let record = HistoryImageRecord {
            blob_key: "a&b=c".to_string(),
            timestamp: 0,
        };
        assert_eq!(record.image_url("/get-image-url"), "/get-image-url?blob-key=a%26b%3Dc");
    }
}
