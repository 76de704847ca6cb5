use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::unwrap_used)]
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)[^>]*>").unwrap());

/// Converts bubble HTML into text for the terminal.
///
/// Whitespace in the markup collapses the way a browser collapses it, so
/// source newlines between tags never show up as blank lines. `<br>` is a
/// hard line break; block elements start a new line only when one is not
/// already open. Table cells are joined with ` | `, one row per line.
/// Entities (named, decimal and hex) are decoded; a decoded `&nbsp;`
/// collapses like any other space.
pub fn plain_text(html: &str) -> String {
    let mut out = PlainWriter::default();
    let mut last = 0;

    for caps in TAG.captures_iter(html) {
        let (Some(tag), Some(name)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        out.text(&html[last..tag.start()]);
        last = tag.end();

        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        out.tag(&name.as_str().to_ascii_lowercase(), closing);
    }
    out.text(&html[last..]);

    out.finish()
}

#[derive(Default)]
struct PlainWriter {
    buf: String,
    cells_in_row: usize,
}

impl PlainWriter {
    fn text(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        let decoded = html_escape::decode_html_entities(raw);
        if decoded.starts_with(char::is_whitespace) {
            self.space();
        }
        for (i, word) in decoded.split_whitespace().enumerate() {
            if i > 0 {
                self.space();
            }
            self.buf.push_str(word);
        }
        if decoded.ends_with(char::is_whitespace) {
            self.space();
        }
    }

    fn tag(&mut self, name: &str, closing: bool) {
        match name {
            "br" => {
                self.trim_spaces();
                self.buf.push('\n');
            }
            "tr" => {
                self.cells_in_row = 0;
                self.line_break();
            }
            "td" | "th" if !closing => {
                if self.cells_in_row > 0 {
                    self.trim_spaces();
                    self.buf.push_str(" | ");
                }
                self.cells_in_row += 1;
            }
            "div" | "p" | "table" | "thead" | "tbody" | "ul" | "ol" | "li" | "h1" | "h2"
            | "h3" | "h4" | "h5" | "h6" => self.line_break(),
            _ => {}
        }
    }

    /// Pushes one space unless the line is empty or already ends in one.
    fn space(&mut self) {
        if !self.buf.is_empty() && !self.buf.ends_with([' ', '\n']) {
            self.buf.push(' ');
        }
    }

    fn trim_spaces(&mut self) {
        let len = self.buf.trim_end_matches(' ').len();
        self.buf.truncate(len);
    }

    /// Starts a new line unless the output is empty or already on one.
    fn line_break(&mut self) {
        self.trim_spaces();
        if !self.buf.is_empty() && !self.buf.ends_with('\n') {
            self.buf.push('\n');
        }
    }

    fn finish(self) -> String {
        let mut lines: Vec<&str> = Vec::new();
        for line in self.buf.lines().map(str::trim) {
            // at most one blank line in a row
            let repeated_blank = line.is_empty() && lines.last().is_some_and(|prev| prev.is_empty());
            if !repeated_blank {
                lines.push(line);
            }
        }
        lines.join("\n").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_inline_markup() {
        assert_eq!(
            plain_text("<strong>Search</strong>: try <code>x</code><br>next"),
            "Search: try x\nnext"
        );
    }

    #[test]
    fn test_plain_text_table_rows() {
        let html = r#"<table class="patient-table"><thead><tr><th>Name</th><th>Age</th></tr></thead><tbody><tr><td>Jo</td><td>42</td></tr></tbody></table>"#;
        assert_eq!(plain_text(html), "Name | Age\nJo | 42");
    }

    #[test]
    fn test_plain_text_backend_table_layout() {
        let html = concat!(
            "<div class=\"summary-info\">Found 2 patients in the live database</div>\n\n",
            "<table class=\"patient-table\">\n<thead>\n<tr>\n",
            "<th>Name</th><th>NHI</th>\n",
            "</tr>\n</thead>\n<tbody>\n",
            "<tr>\n<td>Jo O&#x27;Neil</td>\n<td>ABC&#160;123</td>\n</tr>\n",
            "<tr>\n<td>Ann</td>\n<td>X</td>\n</tr>\n",
            "</tbody>\n</table>\n",
            "<div class=\"summary-info\">Total: 2 patients displayed</div>",
        );
        assert_eq!(
            plain_text(html),
            "Found 2 patients in the live database\n\
             Name | NHI\n\
             Jo O'Neil | ABC 123\n\
             Ann | X\n\
             Total: 2 patients displayed"
        );
    }

    #[test]
    fn test_plain_text_decodes_entities() {
        assert_eq!(plain_text("a &amp;lt; b &lt;c&gt;"), "a &lt; b <c>");
        assert_eq!(plain_text("O&#39;Neil &#x26; co"), "O'Neil & co");
    }

    #[test]
    fn test_plain_text_collapses_blank_lines() {
        assert_eq!(plain_text("a<br><br><br><br>b"), "a\n\nb");
    }

    #[test]
    fn test_plain_text_collapses_source_whitespace() {
        assert_eq!(plain_text("<p>one\n  two</p>\n<p>three</p>"), "one two\nthree");
    }
}
