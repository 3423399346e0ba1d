//! Caret diagnostics for rejected polynomial strings.

use polybase_poly::ParseError;

/// Characters of context shown on each side of the offending one.
const CONTEXT: usize = 7;

/// Renders `error` against `input` as a message line with a window of the
/// input and a caret line pointing at the offending character.
///
/// ```text
/// Unknown character: 4(x^2)
/// --------------------^
/// ```
pub fn render(input: &str, error: &ParseError) -> String {
    let chars: Vec<char> = input.chars().collect();
    let pos = error.position.min(chars.len());
    let before = pos.min(CONTEXT);
    let end = (pos + 1 + CONTEXT).min(chars.len());
    let window: String = chars[pos - before..end].iter().collect();

    let prefix = format!("{}: ", error.kind.message());
    let dashes = "-".repeat(prefix.chars().count() + before);
    format!("{prefix}{window}\n{dashes}^")
}

#[cfg(test)]
mod tests {
    use super::*;
    use polybase_poly::{parse, ParseErrorKind};

    fn render_for(input: &str) -> String {
        render(input, &parse(input).unwrap_err())
    }

    #[test]
    fn test_caret_under_offending_character() {
        let out = render_for("4(x^2)");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Unknown character: 4(x^2)");
        assert_eq!(lines[1].len(), "Unknown character: 4".len() + 1);
        assert!(lines[1].ends_with('^'));
        assert_eq!(lines[0].chars().nth(lines[1].len() - 1), Some('('));
    }

    #[test]
    fn test_window_is_clipped() {
        let input = "x^2 + x^3 + x^4 + 2y + x^5 + x^6";
        let out = render_for(input);
        let lines: Vec<&str> = out.lines().collect();
        let prefix = "Multiple variables aren't allowed: ";
        assert_eq!(lines[0], format!("{prefix}x^4 + 2y + x^5 "));
        assert_eq!(lines[1], format!("{}^", "-".repeat(prefix.len() + 7)));
    }

    #[test]
    fn test_caret_past_end() {
        let error = ParseError::new(ParseErrorKind::ExpectedDegree, 3);
        let out = render("4x^", &error);
        assert_eq!(out, "Expected degree: 4x^\n--------------------^");
    }
}
