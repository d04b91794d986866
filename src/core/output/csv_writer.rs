//! CSV spreadsheet writer.

use std::fs::File;
use std::io::Write;

use super::{HEADER, KEY_HEADER};
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::participant::Participant;

/// Writes a roster as a spreadsheet to a CSV file.
///
/// # Format
/// - Delimiter: `OutputConfig::delimiter` (default `;`)
/// - Columns: `#`, `Export date`, `First name`, `Last name`, `Bio`,
///   plus `Key` when `include_keys` is set
/// - Encoding: UTF-8
pub fn write_csv(participants: &[Participant], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(file, participants, config)
}

/// Converts a roster to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(participants: &[Participant], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(&mut buffer, participants, config)?;
    Ok(String::from_utf8(buffer).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?)
}

fn write_rows<W: Write>(writer: W, participants: &[Participant], config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(writer);

    let mut header = HEADER.to_vec();
    if config.include_keys {
        header.push(KEY_HEADER);
    }
    writer.write_record(&header)?;

    let export_date = config.export_date_string();
    for (i, p) in participants.iter().enumerate() {
        let number = (i + 1).to_string();
        let mut record = vec![
            number.as_str(),
            export_date.as_str(),
            p.first_name(),
            p.last_name(),
            p.bio(),
        ];
        if config.include_keys {
            record.push(p.identity_key());
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
