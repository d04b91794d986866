//! Telegram HTML export extractor.

use scraper::{ElementRef, Html};

use crate::error::{Result, RosterError};
use crate::parser::{ExportFormat, Extractor};
use crate::participant::{RawCandidate, is_admissible};

const MESSAGE_CLASS: &str = "message";
const AUTHOR_CLASS: &str = "from_name";

/// Extractor for Telegram HTML exports.
///
/// Telegram Desktop renders each message as a block like:
/// ```html
/// <div class="message default clearfix" id="message42">
///   <div class="body">
///     <div class="pull_right date details" title="15.01.2024 10:30:00">10:30</div>
///     <div class="from_name">
///       Alice Smith
///     </div>
///     <div class="text">Hello</div>
///   </div>
/// </div>
/// ```
///
/// Every `div` whose class contains `message` is a message block; its
/// author is the first text node directly under the first `div` in the
/// block whose class contains `from_name`. "Joined" messages (consecutive
/// posts by the same author) have no `from_name` and yield nothing.
///
/// HTML exports carry no author id, so candidates are keyed by name.
pub struct TelegramHtmlExtractor;

impl TelegramHtmlExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TelegramHtmlExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for TelegramHtmlExtractor {
    fn name(&self) -> &'static str {
        "Telegram HTML"
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Html
    }

    fn extract(&self, bytes: &[u8]) -> Result<Vec<RawCandidate>> {
        let text = std::str::from_utf8(bytes).map_err(|e| RosterError::html_decode(e, None))?;
        let document = Html::parse_document(text);

        let mut blocks = 0usize;
        let candidates: Vec<RawCandidate> = document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| is_div_with_class(*el, MESSAGE_CLASS))
            .inspect(|_| blocks += 1)
            .filter_map(author_name)
            .filter(|name| is_admissible(name))
            .map(RawCandidate::anonymous)
            .collect();

        tracing::debug!(blocks, candidates = candidates.len(), "extracted HTML authors");
        Ok(candidates)
    }
}

fn is_div_with_class(element: ElementRef<'_>, needle: &str) -> bool {
    let el = element.value();
    el.name() == "div" && el.attr("class").is_some_and(|class| class.contains(needle))
}

/// Author of a message block: first direct text child of its first
/// `from_name` element, trimmed. The block itself is searched too.
fn author_name(block: ElementRef<'_>) -> Option<String> {
    let author = block
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| is_div_with_class(*el, AUTHOR_CLASS))?;

    author
        .children()
        .find_map(|node| node.value().as_text().map(|text| text.trim().to_string()))
}
