use serde::{Deserialize, Serialize};

/// One raw token from a command line.
///
/// `text` keeps quote characters in place; `quoted` is true only when the
/// token consisted entirely of double-quoted spans (so `id="x"` is not
/// quoted, but `"a b"` is).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub quoted: bool,
}

/// A positional command parameter, quotes stripped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub value: String,
    /// Whether the source token was a quoted string. Distinguishes a string
    /// literal from a bare identifier after quote stripping.
    pub quoted: bool,
}

/// Parsed trailing tokens of a command: positional parameters plus
/// `key=value` attributes. Attribute keys are unique (last write wins) and
/// keep insertion order so output stays deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Args {
    pub params: Vec<Param>,
    pub attrs: Vec<(String, String)>,
}

impl Args {
    pub fn parse(tokens: &[Token]) -> Self {
        let mut args = Args::default();
        for tok in tokens {
            match first_unquoted_eq(&tok.text) {
                Some(i) => {
                    let key = tok.text[..i].to_string();
                    let value = strip_quotes(&tok.text[i + 1..]);
                    match args.attrs.iter_mut().find(|(k, _)| *k == key) {
                        Some(slot) => slot.1 = value,
                        None => args.attrs.push((key, value)),
                    }
                }
                None => args.params.push(Param {
                    value: strip_quotes(&tok.text),
                    quoted: tok.quoted,
                }),
            }
        }
        args
    }

    /// Positional parameter by index, empty string when absent.
    pub fn param(&self, index: usize) -> &str {
        self.params.get(index).map(|p| p.value.as_str()).unwrap_or("")
    }

    /// Attribute value by key; empty values count as absent, matching the
    /// original compiler's falsy-or defaulting.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }
}

// ── Scanner ───────────────────────────────────────────────────────────────

struct Scanner<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Scanner<'s> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }
}

/// Split a command line into whitespace-separated tokens, keeping
/// double-quoted spans intact. A token is any run of non-space characters
/// where `"..."` spans may themselves contain spaces.
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut scanner = Scanner { src: line, pos: 0 };
    let mut tokens = Vec::new();

    loop {
        while matches!(scanner.peek(), Some(c) if c.is_whitespace()) {
            scanner.advance();
        }
        if scanner.peek().is_none() {
            break;
        }

        let mut text = String::new();
        let mut bare = false;
        while let Some(c) = scanner.peek() {
            if c == '"' {
                text.push('"');
                scanner.advance();
                while let Some(c) = scanner.advance() {
                    text.push(c);
                    if c == '"' {
                        break;
                    }
                }
            } else if !c.is_whitespace() {
                bare = true;
                text.push(c);
                scanner.advance();
            } else {
                break;
            }
        }
        let quoted = !bare;
        tokens.push(Token { text, quoted });
    }
    tokens
}

/// Strip one leading and one trailing quote character (`"` or `'`).
pub fn strip_quotes(s: &str) -> String {
    let s = s.strip_prefix(['"', '\'']).unwrap_or(s);
    let s = s.strip_suffix(['"', '\'']).unwrap_or(s);
    s.to_string()
}

/// Byte index of the first `=` outside any double-quoted span, if any.
/// Quoted `=` must never split a token into a key/value pair.
fn first_unquoted_eq(text: &str) -> Option<usize> {
    let mut in_quotes = false;
    for (i, c) in text.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '=' if !in_quotes => return Some(i),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        let toks = tokenize("Text hello world");
        assert_eq!(toks.len(), 3);
        assert_eq!(toks[0].text, "Text");
        assert!(!toks[0].quoted);
    }

    #[test]
    fn keeps_quoted_spans_intact() {
        let toks = tokenize(r#"Text "hello world" next"#);
        assert_eq!(toks.len(), 3);
        assert_eq!(toks[1].text, r#""hello world""#);
        assert!(toks[1].quoted);
        assert_eq!(toks[2].text, "next");
    }

    #[test]
    fn mixed_bare_and_quoted_is_one_token() {
        let toks = tokenize(r#"id="my card""#);
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].text, r#"id="my card""#);
        assert!(!toks[0].quoted);
    }

    #[test]
    fn parse_args_splits_key_value() {
        let args = Args::parse(&tokenize(r#"first size=3 id="score""#));
        assert_eq!(args.param(0), "first");
        assert_eq!(args.attr("size"), Some("3"));
        assert_eq!(args.attr("id"), Some("score"));
    }

    #[test]
    fn quoted_equals_stays_positional() {
        let args = Args::parse(&tokenize(r#"score = "window.score += 5""#));
        assert_eq!(args.param(0), "score");
        assert_eq!(args.param(1), "window.score += 5");
        assert!(args.params[1].quoted);
    }

    #[test]
    fn bare_equals_token_becomes_empty_attr() {
        // `Var x = 1` style lines leave a lone `=` token; it must not become
        // a positional parameter.
        let args = Args::parse(&tokenize("x = 1"));
        assert_eq!(args.param(0), "x");
        assert_eq!(args.param(1), "1");
        assert_eq!(args.attrs, vec![(String::new(), String::new())]);
    }

    #[test]
    fn duplicate_attr_keys_last_write_wins() {
        let args = Args::parse(&tokenize("type=a type=b"));
        assert_eq!(args.attr("type"), Some("b"));
        assert_eq!(args.attrs.len(), 1);
    }

    #[test]
    fn empty_attr_value_counts_as_absent() {
        let args = Args::parse(&tokenize("size="));
        assert_eq!(args.attr("size"), None);
    }

    #[test]
    fn strip_quotes_is_single_layer() {
        assert_eq!(strip_quotes(r#""hi""#), "hi");
        assert_eq!(strip_quotes("'hi'"), "hi");
        assert_eq!(strip_quotes("hi"), "hi");
        assert_eq!(strip_quotes(r#""hi"#), "hi");
    }
}
