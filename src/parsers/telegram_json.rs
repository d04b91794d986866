//! Telegram JSON export extractor.

use serde::{Deserialize, Deserializer};

use crate::error::{Result, RosterError};
use crate::parser::{ExportFormat, Extractor};
use crate::participant::{RawCandidate, is_admissible};

/// Extractor for Telegram JSON exports.
///
/// Telegram exports chats as JSON with the following structure:
/// ```json
/// {
///   "name": "Chat Name",
///   "messages": [
///     {
///       "id": 12345,
///       "type": "message",
///       "date": "2024-01-15T10:30:00",
///       "from": "Sender Name",
///       "from_id": "user123456",
///       "text": "Hello"
///     }
///   ]
/// }
/// ```
///
/// Only `from` and `from_id` matter here. A record yields a candidate when
/// both are non-empty and `from` is not the deleted-account sentinel.
pub struct TelegramJsonExtractor;

impl TelegramJsonExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TelegramJsonExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Telegram export wrapper.
///
/// A missing or `null` `messages` key decodes as an empty export; `null`
/// records decode as records without an author.
#[derive(Debug, Deserialize)]
pub struct TelegramExport {
    #[serde(default, deserialize_with = "null_records")]
    pub messages: Vec<TelegramRecord>,
}

fn null_records<'de, D>(deserializer: D) -> std::result::Result<Vec<TelegramRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let records: Option<Vec<Option<TelegramRecord>>> = Option::deserialize(deserializer)?;
    Ok(records
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Raw Telegram message record. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct TelegramRecord {
    /// Record type ("message", "service")
    #[serde(rename = "type")]
    pub msg_type: Option<String>,
    /// Send time, ISO 8601 without offset
    pub date: Option<String>,
    /// Author display name
    pub from: Option<String>,
    /// Stable author identifier, e.g. "user123456" or "channel987"
    pub from_id: Option<String>,
}

impl TelegramRecord {
    /// Converts the record into a candidate, or `None` if it has no usable author.
    pub fn to_candidate(&self) -> Option<RawCandidate> {
        let name = self.from.as_deref().filter(|name| is_admissible(name))?;
        let id = self.from_id.as_deref().filter(|id| !id.is_empty())?;
        Some(RawCandidate::identified(name, id))
    }
}

impl Extractor for TelegramJsonExtractor {
    fn name(&self) -> &'static str {
        "Telegram JSON"
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn extract(&self, bytes: &[u8]) -> Result<Vec<RawCandidate>> {
        let export: TelegramExport =
            serde_json::from_slice(bytes).map_err(|e| RosterError::json_decode(e, None))?;

        let candidates: Vec<RawCandidate> = export
            .messages
            .iter()
            .filter_map(TelegramRecord::to_candidate)
            .collect();

        tracing::debug!(
            records = export.messages.len(),
            candidates = candidates.len(),
            "extracted JSON authors"
        );
        Ok(candidates)
    }
}
