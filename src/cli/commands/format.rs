use anyhow::Result;

use crate::format::{convert_to_html_table, format_message};
use crate::input::InputReader;

/// Runs the formatter over a file or stdin and prints the HTML.
///
/// With `table`, newlines are treated as row breaks and markdown pipe tables
/// become patient tables.
pub fn run_format(file: Option<&str>, table: bool) -> Result<()> {
    let text = InputReader::read(file)?;
    println!("{}", render(&text, table));
    Ok(())
}

fn render(text: &str, table: bool) -> String {
    if table {
        let lines = text.trim_end().replace("\r\n", "\n").replace('\n', "<br>");
        convert_to_html_table(&lines)
    } else {
        format_message(text.trim_end())
    }
}
