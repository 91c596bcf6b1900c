/// Split captured radio output into trimmed, non-empty lines.
pub fn status_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Render the plain-text response body for a status query.
///
/// Each surviving line is followed by a newline terminator; blank lines in the
/// executable's output never reach the body.
pub fn render_status(raw: &str) -> String {
    let mut body = String::new();
    for line in status_lines(raw) {
        body.push_str(&line);
        body.push('\n');
    }
    body
}
