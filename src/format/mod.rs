//! Text formatting for chat bubbles.
//!
//! Turns lightweight markup (`**bold**`, `*italic*`, `` `code` ``) and
//! pipe-delimited tables into the HTML fragments shown in the transcript.

mod escape;
mod markup;
mod table;

pub use escape::escape_html;
pub use markup::{TABLE_MARKER, format_message};
pub use table::convert_to_html_table;
