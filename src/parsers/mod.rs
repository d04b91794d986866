//! Extractors for Telegram chat exports.
//!
//! Each extractor implements the [`Extractor`](crate::parser::Extractor)
//! trait and turns one export buffer into a list of author candidates.
//!
//! # Available Extractors
//!
//! - [`TelegramJsonExtractor`] - JSON exports (`result.json`), keyed by `from_id`
//! - [`TelegramHtmlExtractor`] - HTML exports (`messages*.html`), keyed by display name
//!
//! # Example
//!
//! ```rust
//! use chatroster::parser::Extractor;
//! use chatroster::parsers::TelegramHtmlExtractor;
//!
//! let html = r#"<div class="message default"><div class="from_name">Alice</div></div>"#;
//! let candidates = TelegramHtmlExtractor::new().extract(html.as_bytes())?;
//! assert_eq!(candidates[0].display_name, "Alice");
//! # Ok::<(), chatroster::RosterError>(())
//! ```

mod telegram_html;
mod telegram_json;

pub use telegram_html::TelegramHtmlExtractor;
pub use telegram_json::{TelegramExport, TelegramJsonExtractor, TelegramRecord};
