//! # Moe Markup Compiler
//!
//! A single-pass compiler from the Moe UI markup language — a small
//! line-oriented, brace-delimited DSL — to one self-contained HTML document
//! with embedded CSS and JavaScript.
//!
//! ## Features
//! - Line classifier with quote-aware argument tokenization
//! - Two-tier command dispatch: element tag table, then logic directives
//! - Deferred event bindings: `OnClick { ... }` attaches listeners to the
//!   previously emitted element
//! - Graceful degradation — malformed input compiles to placeholders,
//!   never errors
//! - Themeable document shell, YAML-configurable
//!
//! ## Example
//! ```ignore
//! use moeml::compile;
//!
//! let html = compile(r#"
//! Card {
//!     Title "Dashboard" size=2
//!     Text "hello"
//! }
//! "#);
//! assert!(html.contains("moe-card"));
//! ```

pub mod boilerplate;
pub mod commands;
pub mod compiler;
pub mod error;
pub mod line;
pub mod preprocess;
pub mod state;
pub mod theme;
pub mod token;

// --- Core types ---
pub use compiler::Compiler;
pub use error::{MoeError, MoeResult};
pub use line::Line;
pub use state::EventBinding;
pub use theme::Theme;
pub use token::{Args, Param, Token};

/// Compile Moe source with the default dark theme.
pub fn compile(source: &str) -> String {
    Compiler::new().compile(source)
}

/// Compile Moe source with a custom theme.
pub fn compile_with_theme(source: &str, theme: Theme) -> String {
    Compiler::with_theme(theme).compile(source)
}
