//! Single-pass token scanner for template strings
//!
//! Hand-rolled rather than regex-driven: marker detection and path-boundary
//! rules are exact, and scanning is linear in the input length with no
//! backtracking.

/// One piece of a scanned template
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// Verbatim text between tokens
    Literal(&'a str),
    /// A `$` path reference, without the marker
    PathRef(&'a str),
    /// A `{{name}}` variable reference, trimmed
    VariableRef(&'a str),
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_path_byte(b: u8) -> bool {
    is_ident_byte(b) || b == b'.'
}

/// Split a template into literal and reference segments.
///
/// A path token is the longest identifier/dot run after `$`, minus any
/// trailing dots (which stay literal, so `"$user.name."` keeps its final
/// period). A `$` not followed by an identifier character, an unterminated
/// `{{`, and a `{{...}}` whose body is not a bare identifier are all
/// literal text. Token markers are ASCII, so every slice boundary here is
/// a character boundary.
pub(crate) fn scan(input: &str) -> Vec<Segment<'_>> {
    let bytes = input.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'$' if i + 1 < bytes.len() && is_ident_start(bytes[i + 1]) => {
                let mut end = i + 1;
                while end < bytes.len() && is_path_byte(bytes[end]) {
                    end += 1;
                }
                while end > i + 1 && bytes[end - 1] == b'.' {
                    end -= 1;
                }
                if literal_start < i {
                    segments.push(Segment::Literal(&input[literal_start..i]));
                }
                segments.push(Segment::PathRef(&input[i + 1..end]));
                i = end;
                literal_start = i;
            }
            b'{' if bytes[i..].starts_with(b"{{") => {
                let body_start = i + 2;
                let close = input[body_start..].find("}}").map(|rel| body_start + rel);
                match close {
                    Some(close) => {
                        let name = input[body_start..close].trim();
                        if !name.is_empty() && name.bytes().all(is_ident_byte) {
                            if literal_start < i {
                                segments.push(Segment::Literal(&input[literal_start..i]));
                            }
                            segments.push(Segment::VariableRef(name));
                            i = close + 2;
                            literal_start = i;
                        } else {
                            i += 1;
                        }
                    }
                    None => i += 1,
                }
            }
            _ => i += 1,
        }
    }

    if literal_start < bytes.len() {
        segments.push(Segment::Literal(&input[literal_start..]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::Segment::{Literal, PathRef, VariableRef};
    use super::*;

    #[test]
    fn test_plain_string_is_one_literal() {
        assert_eq!(scan("no tokens here"), vec![Literal("no tokens here")]);
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_path_token() {
        assert_eq!(
            scan("Hello $user.profile.display_name!"),
            vec![
                Literal("Hello "),
                PathRef("user.profile.display_name"),
                Literal("!")
            ]
        );
    }

    #[test]
    fn test_path_token_at_ends() {
        assert_eq!(scan("$user.role"), vec![PathRef("user.role")]);
        assert_eq!(
            scan("$user.role suffix"),
            vec![PathRef("user.role"), Literal(" suffix")]
        );
    }

    #[test]
    fn test_trailing_dot_stays_literal() {
        assert_eq!(
            scan("Welcome back, $user.name."),
            vec![Literal("Welcome back, "), PathRef("user.name"), Literal(".")]
        );
        assert_eq!(
            scan("$user.name..."),
            vec![PathRef("user.name"), Literal("...")]
        );
    }

    #[test]
    fn test_bare_dollar_is_literal() {
        assert_eq!(scan("cost: 5$"), vec![Literal("cost: 5$")]);
        assert_eq!(scan("$ 100"), vec![Literal("$ 100")]);
        assert_eq!(scan("$$"), vec![Literal("$$")]);
    }

    #[test]
    fn test_variable_token() {
        assert_eq!(
            scan("{{api_base_url}}/health"),
            vec![VariableRef("api_base_url"), Literal("/health")]
        );
        assert_eq!(scan("{{ padded }}"), vec![VariableRef("padded")]);
    }

    #[test]
    fn test_unterminated_braces_are_literal() {
        assert_eq!(scan("{{oops"), vec![Literal("{{oops")]);
        assert_eq!(scan("a {{ b } c"), vec![Literal("a {{ b } c")]);
    }

    #[test]
    fn test_non_identifier_body_is_literal() {
        assert_eq!(scan("{{a b}}"), vec![Literal("{{a b}}")]);
        assert_eq!(scan("{{}}"), vec![Literal("{{}}")]);
        // Dotting is the path grammar's job, not the variable grammar's
        assert_eq!(scan("{{user.role}}"), vec![Literal("{{user.role}}")]);
    }

    #[test]
    fn test_mixed_grammars() {
        assert_eq!(
            scan("{{api_base_url}}/users/$user.user_id"),
            vec![
                VariableRef("api_base_url"),
                Literal("/users/"),
                PathRef("user.user_id")
            ]
        );
    }

    #[test]
    fn test_repeated_tokens() {
        assert_eq!(
            scan("$user.role/$user.role and {{x}}{{x}}"),
            vec![
                PathRef("user.role"),
                Literal("/"),
                PathRef("user.role"),
                Literal(" and "),
                VariableRef("x"),
                VariableRef("x")
            ]
        );
    }

    #[test]
    fn test_multibyte_text_around_tokens() {
        assert_eq!(
            scan("héllo $user.role — {{x}} ✓"),
            vec![
                Literal("héllo "),
                PathRef("user.role"),
                Literal(" — "),
                VariableRef("x"),
                Literal(" ✓")
            ]
        );
    }
}
