//! Turning captured kubectl output into selectable names
//!
//! `jsonpath='...'` is passed without a shell, so kubectl echoes the single
//! quotes around the rendered list. The parser strips one matching pair of
//! surrounding quotes rather than a fixed number of characters.

use super::models::Discovery;

/// How a list-producing command separates its names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Space separated (context list)
    Whitespace,
    /// One name per line (pod list)
    Newline,
}

/// Parse a single-value response such as the `use-context` confirmation
pub fn parse_scalar(raw: &str) -> String {
    unquote(raw.trim()).trim().to_string()
}

/// Parse a list response into names, preserving order and dropping blanks
pub fn parse_list(raw: &str, delimiter: Delimiter) -> Discovery {
    let body = unquote(raw.trim());
    let names: Vec<String> = match delimiter {
        Delimiter::Whitespace => body.split_whitespace().map(str::to_string).collect(),
        Delimiter::Newline => body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
    };
    Discovery::from_names(names)
}

/// Strip one matching pair of surrounding single or double quotes
fn unquote(s: &str) -> &str {
    for quote in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(d: Discovery) -> Vec<String> {
        match d {
            Discovery::Found(v) => v,
            Discovery::NoneAvailable => panic!("Expected names"),
        }
    }

    #[test]
    fn test_parse_quoted_context_list() {
        let result = parse_list("'ctx-a ctx-b'", Delimiter::Whitespace);
        assert_eq!(names(result), vec!["ctx-a", "ctx-b"]);
    }

    #[test]
    fn test_parse_context_list_with_trailing_newline() {
        let result = parse_list("'dev prod'\n", Delimiter::Whitespace);
        assert_eq!(names(result), vec!["dev", "prod"]);
    }

    #[test]
    fn test_parse_unquoted_context_list() {
        let result = parse_list("dev  staging prod", Delimiter::Whitespace);
        assert_eq!(names(result), vec!["dev", "staging", "prod"]);
    }

    #[test]
    fn test_parse_pod_list_preserves_order_and_count() {
        let raw = "web-2\nweb-1\ndb-0\n";
        let result = names(parse_list(raw, Delimiter::Newline));
        assert_eq!(result.len(), 3);
        assert_eq!(result, vec!["web-2", "web-1", "db-0"]);
    }

    #[test]
    fn test_parse_pod_list_crlf() {
        let result = parse_list("web-1\r\nweb-2\r\n", Delimiter::Newline);
        assert_eq!(names(result), vec!["web-1", "web-2"]);
    }

    #[test]
    fn test_parse_empty_list() {
        assert_eq!(parse_list("", Delimiter::Newline), Discovery::NoneAvailable);
        assert_eq!(
            parse_list("''", Delimiter::Whitespace),
            Discovery::NoneAvailable
        );
        assert_eq!(
            parse_list("  \n\n", Delimiter::Newline),
            Discovery::NoneAvailable
        );
    }

    #[test]
    fn test_parse_scalar() {
        assert_eq!(
            parse_scalar("Switched to context \"dev\".\n"),
            "Switched to context \"dev\"."
        );
        assert_eq!(parse_scalar("'single'"), "single");
    }

    #[test]
    fn test_unquote_requires_matching_pair() {
        assert_eq!(unquote("'abc"), "'abc");
        assert_eq!(unquote("'abc\""), "'abc\"");
        assert_eq!(unquote("'"), "'");
    }

    #[test]
    fn test_parse_scalar_strips_one_quote_each_side() {
        assert_eq!(parse_scalar("'dev'"), "dev");
        assert_eq!(parse_scalar("''dev''"), "'dev'");
    }
}
