use regex::Regex;
use std::sync::LazyLock;

/// Class attribute that marks a backend-rendered patient table.
pub const TABLE_MARKER: &str = "patient-table";

const RENDERED_TABLE: &str = r#"<table class="patient-table">"#;

// Lazy quantifiers: each match ends at the first closing marker. Markers
// never span a line terminator (`\n`, `\r`, U+2028 or U+2029).
#[allow(clippy::unwrap_used)]
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^\n\r\u{2028}\u{2029}]*?)\*\*").unwrap());
#[allow(clippy::unwrap_used)]
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^\n\r\u{2028}\u{2029}]*?)\*").unwrap());
#[allow(clippy::unwrap_used)]
static CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^\n\r\u{2028}\u{2029}]*?)`").unwrap());

/// Formats message text into bubble HTML.
///
/// Content that already carries a rendered patient table is returned as-is.
/// Otherwise `**bold**`, `*italic*` and `` `code` `` are substituted in that
/// order, and newlines become `<br>` unless the result already contains
/// `<table>`, `<div>` or `<br>` markup.
///
/// Markers are matched lazily and never across a newline, so unbalanced
/// markers can produce partial output (`**a*` becomes `<em></em>a*`).
pub fn format_message(content: &str) -> String {
    if content.contains(RENDERED_TABLE) {
        return content.to_string();
    }

    let formatted = BOLD.replace_all(content, "<strong>${1}</strong>");
    let formatted = ITALIC.replace_all(&formatted, "<em>${1}</em>");
    let formatted = CODE.replace_all(&formatted, "<code>${1}</code>");

    if formatted.contains("<table>") || formatted.contains("<div>") || formatted.contains("<br>")
    {
        formatted.into_owned()
    } else {
        formatted.replace('\n', "<br>")
    }
}
