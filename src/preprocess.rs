/// A logical source line.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine {
    pub text: String,
}

/// Split raw source into logical lines.
///
/// Currently line splitting only; normalization passes such as multi-line
/// statement joining belong here when they arrive.
pub fn preprocess(source: &str) -> Vec<SourceLine> {
    source
        .lines()
        .map(|l| SourceLine {
            text: l.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_newlines() {
        let lines = preprocess("a\nb\n\nc");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].text, "a");
        assert_eq!(lines[2].text, "");
    }

    #[test]
    fn tolerates_crlf() {
        let lines = preprocess("a\r\nb");
        assert_eq!(lines[0].text, "a");
        assert_eq!(lines[1].text, "b");
    }
}
