use std::fmt::Write;

/// Converts `<br>`-separated markdown pipe tables into patient-table HTML.
///
/// The first piped line of a run becomes the header row and every later
/// piped line a body row. Separator lines (`---`) inside a table are dropped.
/// Any other line closes the open table and is emitted followed by `<br>`.
/// A table still open at the end of input is closed.
pub fn convert_to_html_table(content: &str) -> String {
    let mut html = String::new();
    let mut in_table = false;

    for line in content.split("<br>").map(str::trim) {
        if line.contains('|') && !line.contains("---") {
            let cells = split_cells(line);
            if in_table {
                if !cells.is_empty() {
                    html.push_str("<tr>");
                    for cell in cells {
                        let _ = write!(html, "<td>{cell}</td>");
                    }
                    html.push_str("</tr>");
                }
            } else {
                html.push_str(r#"<table class="patient-table"><thead><tr>"#);
                for header in cells {
                    let _ = write!(html, "<th>{header}</th>");
                }
                html.push_str("</tr></thead><tbody>");
                in_table = true;
            }
        } else if line.contains("---") && in_table {
            // separator row
        } else {
            if in_table {
                html.push_str("</tbody></table>");
                in_table = false;
            }
            if !line.is_empty() {
                html.push_str(line);
                html.push_str("<br>");
            }
        }
    }

    if in_table {
        html.push_str("</tbody></table>");
    }

    html
}

fn split_cells(line: &str) -> Vec<&str> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}
