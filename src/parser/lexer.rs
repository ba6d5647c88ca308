//! Tolerant tokenizer for free-form signatures.
//!
//! At every position the scanner tries, in order:
//!
//! 1. `[name]` - a bracketed parameter (letters and underscores only)
//! 2. a run of letters and underscores - a literal
//! 3. one character from [`PUNCTUATION`]
//! 4. a run of whitespace
//!
//! A character that starts none of these is dropped without producing a
//! token. Dropping is not an error; [`dropped`] reports what was skipped
//! so callers can warn about it.

use serde::Serialize;

use super::span::Span;

/// Characters emitted as single punctuation tokens.
pub const PUNCTUATION: &[char] = &[
    '{', '}', '^', ':', '/', '=', '(', ')', '*', '-', '|', '<', '>', '~', '?', '!', '#', '&', '$',
];

/// Token classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// `[NAME]`, text excludes the brackets
    Param,
    Literal,
    Punctuation,
    Space,
}

/// A token borrowed from the signature it was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Captured text. For `Param` this is the name between the brackets.
    pub text: &'a str,
    /// Span of the full match, brackets included.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// The source text consumed by this token.
    pub fn raw<'s>(&self, source: &'s str) -> &'s str {
        self.span.slice(source)
    }
}

/// A character skipped by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DroppedChar {
    pub ch: char,
    pub offset: usize,
}

enum Step<'a> {
    Token(Token<'a>),
    Dropped(DroppedChar),
}

/// Lazy token stream over a signature.
///
/// A clone continues from the same position. Call [`tokenize`] again to
/// start over.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

/// Start tokenizing `source`.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer { source, pos: 0 }
}

/// Characters in `source` that no token alternative accepts.
pub fn dropped(source: &str) -> Vec<DroppedChar> {
    let mut lexer = tokenize(source);
    let mut out = Vec::new();
    while let Some(step) = lexer.step() {
        if let Step::Dropped(d) = step {
            out.push(d);
        }
    }
    out
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Unicode whitespace plus the ASCII separators `\x1c`..=`\x1f`, which
/// `char::is_whitespace` leaves out.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Byte length of the leading run of chars matching `pred`.
fn run_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !pred(c))
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

impl<'a> Lexer<'a> {
    fn step(&mut self) -> Option<Step<'a>> {
        let rest = &self.source[self.pos..];
        let first = rest.chars().next()?;
        let start = self.pos;

        let (kind, text_start, text_len, consumed) = if let Some(name_len) = param_len(rest) {
            (TokenKind::Param, 1, name_len, name_len + 2)
        } else if is_word(first) {
            let len = run_len(rest, is_word);
            (TokenKind::Literal, 0, len, len)
        } else if PUNCTUATION.contains(&first) {
            (TokenKind::Punctuation, 0, 1, 1)
        } else if is_space(first) {
            let len = run_len(rest, is_space);
            (TokenKind::Space, 0, len, len)
        } else {
            self.pos += first.len_utf8();
            return Some(Step::Dropped(DroppedChar {
                ch: first,
                offset: start,
            }));
        };

        self.pos += consumed;
        Some(Step::Token(Token {
            kind,
            text: &rest[text_start..text_start + text_len],
            span: Span::new(start, start + consumed),
        }))
    }
}

/// Length of the name in a leading `[name]`, if `s` starts with one.
fn param_len(s: &str) -> Option<usize> {
    let inner = s.strip_prefix('[')?;
    let len = run_len(inner, is_word);
    if len > 0 && inner[len..].starts_with(']') {
        Some(len)
    } else {
        None
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            match self.step()? {
                Step::Token(token) => return Some(token),
                Step::Dropped(_) => continue,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn kinds(source: &str) -> Vec<(TokenKind, &str)> {
        tokenize(source).map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_param_literal_punctuation() {
        assert_eq!(
            kinds("{^[attach]}"),
            vec![
                (TokenKind::Punctuation, "{"),
                (TokenKind::Punctuation, "^"),
                (TokenKind::Param, "attach"),
                (TokenKind::Punctuation, "}"),
            ]
        );
    }

    #[test]
    fn test_whitespace_run_is_one_token() {
        assert_eq!(
            kinds("a \t b"),
            vec![
                (TokenKind::Literal, "a"),
                (TokenKind::Space, " \t "),
                (TokenKind::Literal, "b"),
            ]
        );
    }

    #[test]
    fn test_ascii_separators_are_whitespace() {
        assert_eq!(
            kinds("a\u{1c}\u{1f} b"),
            vec![
                (TokenKind::Literal, "a"),
                (TokenKind::Space, "\u{1c}\u{1f} "),
                (TokenKind::Literal, "b"),
            ]
        );
        assert!(dropped("\u{1d}\u{1e}").is_empty());
    }

    #[test]
    fn test_unknown_character_dropped() {
        assert_eq!(
            kinds("foo@bar"),
            vec![(TokenKind::Literal, "foo"), (TokenKind::Literal, "bar")]
        );
        assert_eq!(dropped("foo@bar"), vec![DroppedChar { ch: '@', offset: 3 }]);
    }

    #[test]
    fn test_digits_and_dots_dropped() {
        assert!(kinds("1.5").is_empty());
        assert_eq!(dropped("1.5").len(), 3);
    }

    #[test]
    fn test_unclosed_bracket_falls_back() {
        assert_eq!(
            kinds("[abc"),
            vec![(TokenKind::Literal, "abc")]
        );
        assert_eq!(dropped("[abc"), vec![DroppedChar { ch: '[', offset: 0 }]);
    }

    #[test]
    fn test_empty_brackets_dropped() {
        assert!(kinds("[]").is_empty());
    }

    #[test]
    fn test_bracket_with_digit_is_not_param() {
        assert_eq!(
            kinds("[a1]"),
            vec![(TokenKind::Literal, "a")]
        );
    }

    #[test]
    fn test_hyphen_is_literal_punctuation() {
        // '*' and '|' are listed separately, not as a range
        assert_eq!(
            kinds("*-|"),
            vec![
                (TokenKind::Punctuation, "*"),
                (TokenKind::Punctuation, "-"),
                (TokenKind::Punctuation, "|"),
            ]
        );
        assert!(kinds("+,.").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_dropped() {
        assert!(kinds("é").is_empty());
        assert_eq!(dropped("aé"), vec![DroppedChar { ch: 'é', offset: 1 }]);
    }

    #[test]
    fn test_raw_text_reconstructs_source() {
        let source = "{MODE:[mode]} =  (x|y) <a> ~?!#&$ *_*";
        let rebuilt: String = tokenize(source).map(|t| t.raw(source)).collect();
        assert_eq!(rebuilt, source);
        assert!(dropped(source).is_empty());
    }

    #[test]
    fn test_lexer_is_restartable() {
        let source = "{#[keys]}";
        let first: Vec<_> = tokenize(source).collect();
        let second: Vec<_> = tokenize(source).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_spans_do_not_overlap() {
        let source = "a[b]c{d} e";
        let tokens: Vec<_> = tokenize(source).collect();
        for pair in tokens.windows(2) {
            assert!(pair[0].span.end <= pair[1].span.start);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").count(), 0);
        assert!(dropped("").is_empty());
    }

    /// Strings built only from pieces every token alternative accepts.
    fn recognized() -> impl Strategy<Value = String> {
        let piece = prop_oneof![
            "[A-Za-z_]{1,6}",
            "\\[[A-Za-z_]{1,6}\\]",
            "[{}^:/=()*|<>~?!#&$-]",
            "[ \t\n\u{1c}\u{a0}]{1,3}",
        ];
        prop::collection::vec(piece, 0..12).prop_map(|pieces| pieces.concat())
    }

    proptest! {
        #[test]
        fn test_recognized_input_round_trips(source in recognized()) {
            let rebuilt: String = tokenize(&source).map(|t| t.raw(&source)).collect();
            prop_assert_eq!(rebuilt, source.clone());
            prop_assert!(dropped(&source).is_empty());
        }

        #[test]
        fn test_every_char_is_consumed_exactly_once(source in any::<String>()) {
            let token_bytes: usize = tokenize(&source).map(|t| t.span.len()).sum();
            let dropped_bytes: usize = dropped(&source).iter().map(|d| d.ch.len_utf8()).sum();
            prop_assert_eq!(token_bytes + dropped_bytes, source.len());

            let tokens: Vec<_> = tokenize(&source).collect();
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].span.end <= pair[1].span.start);
            }
        }

        #[test]
        fn test_tokenizing_twice_is_identical(source in any::<String>()) {
            let first: Vec<_> = tokenize(&source).collect();
            let second: Vec<_> = tokenize(&source).collect();
            prop_assert_eq!(first, second);
        }
    }
}
