//! Label formatting for element descriptions and connection labels.
//!
//! Every piece of text attached to an element goes through
//! [`to_text_block`]: comma-separated lists are broken into one line per
//! item and laid out left-aligned with the fixed label font.

use log::trace;

use nwdiag_core::draw::{FontConfiguration, HorizontalAlignment, TextBlock};

/// Separator of list items that are drawn on their own line.
const LIST_SEPARATOR: &str = ", ";

/// Line break escape understood by [`TextBlock::from_display`].
const LINE_BREAK: &str = "\\n";

/// Font of element and connection labels: undecorated black serif, size 11.
pub fn label_font() -> &'static FontConfiguration {
    FontConfiguration::default_borrowed()
}

/// Formats a label into a text block.
///
/// - `None` gives `None`: there is nothing to draw.
/// - An empty string gives an empty block of size zero, which is still a
///   block (a labeled connection with no text).
/// - Anything else has every `", "` turned into a line break and is laid out
///   left-aligned with [`label_font`].
///
/// ```
/// # use nwdiag::label::to_text_block;
/// let block = to_text_block(Some("eth0, 192.168.0.1")).unwrap();
/// assert_eq!(block.lines(), ["eth0", "192.168.0.1"]);
///
/// assert!(to_text_block(None).is_none());
/// assert!(to_text_block(Some("")).unwrap().is_empty());
/// ```
pub fn to_text_block(text: Option<&str>) -> Option<TextBlock> {
    let text = text?;
    if text.is_empty() {
        return Some(TextBlock::empty(0.0, 0.0));
    }

    let display = text.replace(LIST_SEPARATOR, LINE_BREAK);
    trace!(text = text, display = display.as_str(); "Formatting label");
    Some(TextBlock::from_display(
        &display,
        label_font(),
        HorizontalAlignment::Left,
    ))
}
