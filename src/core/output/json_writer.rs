//! JSON spreadsheet writer.

use std::fs::File;
use std::io::Write;

use serde::Serialize;

use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::participant::Participant;

/// One spreadsheet row. Mirrors the CSV columns.
#[derive(Serialize)]
struct JsonRow<'a> {
    number: usize,
    export_date: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    bio: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<&'a str>,
}

/// Writes a roster to a JSON file as an array of rows.
///
/// # Format
/// ```json
/// [
///   {"number": 1, "export_date": "2024-06-15 12:30:00", "first_name": "John", "last_name": "Doe", "bio": ""}
/// ]
/// ```
pub fn write_json(participants: &[Participant], output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(participants, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a roster to a pretty-printed JSON string.
pub fn to_json(participants: &[Participant], config: &OutputConfig) -> Result<String> {
    let export_date = config.export_date_string();
    let rows: Vec<JsonRow<'_>> = participants
        .iter()
        .enumerate()
        .map(|(i, p)| JsonRow {
            number: i + 1,
            export_date: &export_date,
            first_name: p.first_name(),
            last_name: p.last_name(),
            bio: p.bio(),
            key: config.include_keys.then_some(p.identity_key()),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}
