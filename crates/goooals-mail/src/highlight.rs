use goooals_core::text::digit_runs;

/// HTML-escape `text` and wrap every digit run in `<strong>`.
pub fn highlight_numbers(text: &str) -> String {
    let mut html = String::with_capacity(text.len() + 16);
    let mut cursor = 0;
    for run in digit_runs(text) {
        html.push_str(&tera::escape_html(&text[cursor..run.start]));
        html.push_str("<strong>");
        html.push_str(&text[run.clone()]);
        html.push_str("</strong>");
        cursor = run.end;
    }
    html.push_str(&tera::escape_html(&text[cursor..]));
    html
}
