use crate::boilerplate;
use crate::commands;
use crate::line::{classify, Line};
use crate::preprocess::preprocess;
use crate::state::Registers;
use crate::theme::Theme;

/// The Moe compiler.
///
/// Holds only immutable configuration; every `compile` call builds fresh
/// session state, so sequential reuse is safe and ids restart at 1 per run.
/// The call itself is synchronous and does no I/O.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    theme: Theme,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Compiler { theme }
    }

    /// Compile Moe source into one self-contained HTML document.
    ///
    /// Never fails: unrecognized commands become comment placeholders,
    /// stray `}` lines are ignored, and unclosed blocks are drained at end
    /// of input.
    pub fn compile(&self, source: &str) -> String {
        let mut regs = Registers::new();
        let mut stack: Vec<String> = Vec::new();
        let mut body = String::new();
        let mut scripts: Vec<String> = Vec::new();

        for line in preprocess(source) {
            match classify(&line.text) {
                Line::Skip => {}

                Line::Property { property, value } => {
                    regs.set_style(&property, &value);
                }

                Line::BlockClose => {
                    // Stray close with nothing open is ignored.
                    if let Some(tag) = stack.pop() {
                        body.push_str(&format!("</{}>\n", tag));
                    }
                }

                Line::Command {
                    name,
                    args,
                    opens_block,
                } => {
                    let emit = commands::dispatch(&name, &args, opens_block, &mut regs);
                    if let Some(html) = emit.html {
                        body.push_str(&html);
                        body.push('\n');
                    }
                    if let Some(js) = emit.script {
                        scripts.push(js);
                    }
                    if opens_block {
                        if let Some(tag) = emit.tag {
                            stack.push(tag);
                        }
                    }
                }
            }
        }

        // Close whatever is still open, innermost first.
        while let Some(tag) = stack.pop() {
            body.push_str(&format!("</{}>\n", tag));
        }

        boilerplate::wrap(&body, &scripts, &self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclosed_blocks_drain_innermost_first() {
        let html = Compiler::new().compile("Section {\nRow {");
        let section = html.find("</section>").unwrap();
        let div = html.find("</div>").unwrap();
        assert!(div < section);
    }

    #[test]
    fn stray_close_is_ignored() {
        let html = Compiler::new().compile("}\nText \"ok\"");
        assert!(html.contains(">ok</p>"));
    }

    #[test]
    fn onclick_block_pushes_no_tag() {
        // OnClick yields no tag, so its closing `}` must not emit markup.
        let html = Compiler::new().compile("Text \"a\"\nOnClick {\nAlert \"hi\"\n}");
        assert!(!html.contains("</p>\n</"));
        assert!(html.contains("addEventListener"));
    }
}
