use std::sync::OnceLock;

use regex::Regex;

use crate::token::{self, Args};

/// Classification of one trimmed source line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// Blank line or `#` comment. Produces nothing.
    Skip,
    /// `Identifier.property = value` — merged into the pending style map.
    /// The identifier is deliberately ignored: the style applies to whatever
    /// command comes next.
    Property { property: String, value: String },
    /// A lone `}`.
    BlockClose,
    /// A command invocation, with the trailing `{` already stripped.
    Command {
        name: String,
        args: Args,
        opens_block: bool,
    },
}

fn property_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\w+)\.([\w-]+)\s*=\s*(.*)$").expect("property pattern compiles")
    })
}

/// Classify one raw source line.
///
/// The property-assignment test runs before command tokenization; a command
/// line that happens to contain `.` and `=` in its arguments only escapes
/// misrouting because the pattern anchors `identifier.property` at the start
/// of the line. This ordering matches the original compiler.
pub fn classify(raw: &str) -> Line {
    let line = raw.trim();

    if line.is_empty() || line.starts_with('#') {
        return Line::Skip;
    }

    if line.contains('.') && line.contains('=') {
        if let Some(caps) = property_re().captures(line) {
            return Line::Property {
                property: caps[2].to_string(),
                value: token::strip_quotes(&caps[3]),
            };
        }
        // No match: fall through to command tokenization.
    }

    if line == "}" {
        return Line::BlockClose;
    }

    let (opens_block, rest) = match line.strip_suffix('{') {
        Some(r) => (true, r.trim()),
        None => (false, line),
    };

    let tokens = token::tokenize(rest);
    let Some(first) = tokens.first() else {
        // A bare `{` line has no command name.
        return Line::Skip;
    };

    Line::Command {
        name: token::strip_quotes(&first.text),
        args: Args::parse(&tokens[1..]),
        opens_block,
    }
}
