use serde::{Deserialize, Serialize};

use crate::error::MoeResult;

/// Visual configuration for the generated document shell.
///
/// The default reproduces the compiler's fixed dark theme. Any subset of
/// fields may be overridden from a YAML file; missing fields keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    /// Page background color.
    pub background: String,
    /// Card surface color.
    pub surface: String,
    /// Card border color.
    pub border: String,
    /// Base text color.
    pub text: String,
    /// Secondary text color (paragraphs).
    pub muted: String,
    /// Accent color (headings, buttons).
    pub accent: String,
    /// Accent hover color.
    pub accent_hover: String,
    /// Google Fonts family loaded by the shell.
    pub font_family: String,
    /// `lang` attribute of the `<html>` element.
    pub lang: String,
    /// `dir` attribute of the `<html>` element.
    pub dir: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: "#0f172a".to_string(),
            surface: "#1e293b".to_string(),
            border: "#334155".to_string(),
            text: "#f8fafc".to_string(),
            muted: "#94a3b8".to_string(),
            accent: "#38bdf8".to_string(),
            accent_hover: "#7dd3fc".to_string(),
            font_family: "Outfit".to_string(),
            lang: "ar".to_string(),
            dir: "rtl".to_string(),
        }
    }
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a theme from YAML. Unspecified fields fall back to the default
    /// dark theme.
    pub fn from_yaml(yaml: &str) -> MoeResult<Theme> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Font family in Google Fonts URL form (`My Font` → `My+Font`).
    pub(crate) fn font_query(&self) -> String {
        self.font_family.replace(' ', "+")
    }
}
