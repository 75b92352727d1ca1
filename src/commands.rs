use std::sync::OnceLock;

use regex::Regex;

use crate::state::Registers;
use crate::token::Args;

/// What one dispatched command contributes to the output.
#[derive(Debug, Default)]
pub struct Emit {
    /// Markup appended to the body.
    pub html: Option<String>,
    /// Script statement appended to the script accumulator.
    pub script: Option<String>,
    /// Tag to push when the line opened a block.
    pub tag: Option<String>,
}

impl Emit {
    fn html(html: String) -> Self {
        Emit {
            html: Some(html),
            ..Emit::default()
        }
    }

    fn script(js: String) -> Self {
        Emit {
            script: Some(js),
            ..Emit::default()
        }
    }
}

/// Concrete markup tag for an element command, if the name is in the table.
pub fn element_tag(name: &str) -> Option<&'static str> {
    Some(match name {
        "Section" => "section",
        "Container" | "Row" | "Column" | "Div" => "div",
        "Header" => "header",
        "Footer" => "footer",
        "Nav" => "nav",
        "Main" => "main",
        "Aside" => "aside",
        "Article" => "article",
        "Text" | "Paragraph" => "p",
        "Span" => "span",
        "Link" => "a",
        "Title" => "h1",
        "Input" | "Checkbox" | "Radio" => "input",
        "Textarea" => "textarea",
        "Select" => "select",
        "Option" => "option",
        "Image" => "img",
        "Video" => "video",
        "Audio" => "audio",
        "Canvas" => "canvas",
        "Ul" => "ul",
        "Ol" => "ol",
        "Li" => "li",
        "Menu" => "menu",
        "Table" => "table",
        "Tr" => "tr",
        "Td" => "td",
        "Th" => "th",
        _ => return None,
    })
}

/// The closed set of logic and layout commands outside the element table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogicCommand {
    Page,
    Bg,
    Var,
    OnClick,
    Set,
    Alert,
    Space,
    Card,
}

impl LogicCommand {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "Page" => LogicCommand::Page,
            "Bg" => LogicCommand::Bg,
            "Var" => LogicCommand::Var,
            "OnClick" => LogicCommand::OnClick,
            "Set" => LogicCommand::Set,
            "Alert" => LogicCommand::Alert,
            "Space" => LogicCommand::Space,
            "Card" => LogicCommand::Card,
            _ => return None,
        })
    }
}

/// Dispatch one command line.
///
/// Element-table lookup runs before logic-command lookup; anything matching
/// neither tier becomes a harmless comment placeholder. A fresh id is
/// generated and the pending style map is taken here, for every command —
/// so non-element commands consume an id and discard any pending styles,
/// exactly as the original compiler does.
pub fn dispatch(name: &str, args: &Args, opens_block: bool, regs: &mut Registers) -> Emit {
    let element_id = regs.generate_id();
    let style = regs.take_styles();

    if let Some(tag) = element_tag(name) {
        return emit_element(name, tag, args, opens_block, element_id, &style, regs);
    }

    let Some(cmd) = LogicCommand::from_name(name) else {
        return Emit::html(format!("<!-- Moe: {} -->", name));
    };

    match cmd {
        // Document-level marker, emits nothing.
        LogicCommand::Page => Emit::default(),

        LogicCommand::Bg => Emit::html(format!(
            "<style>body {{ background-color: {}; }}</style>",
            args.param(0)
        )),

        LogicCommand::Var => {
            let var_name = args.param(0);
            let value = match args.param(1) {
                "" => "0",
                v => v,
            };
            Emit::script(format!("window.{} = {};", var_name, value))
        }

        LogicCommand::OnClick => {
            regs.bind_event("click");
            Emit::html("<!-- Event: OnClick -->".to_string())
        }

        LogicCommand::Set => Emit::script(wrap_in_event(regs, set_statement(args))),

        LogicCommand::Alert => {
            let js = format!("alert(\"{}\");", args.param(0));
            Emit::script(wrap_in_event(regs, js))
        }

        LogicCommand::Space => {
            let height = match args.param(0) {
                "" => "20",
                h => h,
            };
            Emit::html(format!(
                "<div style=\"height: {}px; width: 100%;\"></div>",
                height
            ))
        }

        LogicCommand::Card => {
            let id = args.attr("id").unwrap_or(&element_id).to_string();
            regs.note_element(&id);
            Emit {
                html: Some(format!(
                    "<div id=\"{}\" class=\"moe-card\" style=\"{}\">",
                    id, style
                )),
                script: None,
                tag: Some("div".to_string()),
            }
        }
    }
}

// ── Element emission ──────────────────────────────────────────────────────

/// Attribute keys consumed by per-command overrides; never copied through.
const RESERVED_ATTRS: [&str; 3] = ["size", "src", "type"];

/// Tags that never get an inline closing tag.
const VOID_TAGS: [&str; 4] = ["img", "input", "br", "hr"];

fn emit_element(
    name: &str,
    tag: &'static str,
    args: &Args,
    opens_block: bool,
    element_id: String,
    style: &str,
    regs: &mut Registers,
) -> Emit {
    let mut tag = tag.to_string();
    let mut inner = args.param(0).to_string();
    let mut attrs = String::new();

    match name {
        "Title" => {
            let level = args.attr("size").unwrap_or("1");
            tag = format!("h{}", level);
        }
        "Link" => {
            attrs.push_str(&format!(" href=\"{}\"", args.param(0)));
            inner = args.param(1).to_string();
        }
        "Image" => {
            let src = args.attr("src").unwrap_or_else(|| args.param(0));
            attrs.push_str(&format!(" src=\"{}\"", src));
            inner.clear();
        }
        "Input" => {
            attrs.push_str(&format!(
                " type=\"{}\" placeholder=\"{}\"",
                args.attr("type").unwrap_or("text"),
                args.param(0)
            ));
            inner.clear();
        }
        "Checkbox" | "Radio" => {
            attrs.push_str(&format!(" type=\"{}\"", name.to_lowercase()));
        }
        _ => {}
    }

    for (key, value) in &args.attrs {
        if !RESERVED_ATTRS.contains(&key.as_str()) {
            attrs.push_str(&format!(" {}=\"{}\"", key, value));
        }
    }

    let mut html = format!(
        "<{} id=\"{}\" style=\"{}\"{} class=\"moe-element moe-{}\">{}",
        tag,
        element_id,
        style,
        attrs,
        name.to_lowercase(),
        inner
    );
    if !opens_block && !VOID_TAGS.contains(&tag.as_str()) {
        html.push_str(&format!("</{}>", tag));
    }

    regs.note_element(&element_id);

    Emit {
        html: Some(html),
        script: None,
        tag: Some(tag),
    }
}

// ── Script statement builders ─────────────────────────────────────────────

fn ident_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z_]\w*").expect("identifier pattern compiles"))
}

/// Build the Set directive's statement: update a global variable and mirror
/// its string form into the element whose id equals the target name.
fn set_statement(args: &Args) -> String {
    let target = args.param(0);
    let value = args.params.get(1);
    let raw = value.map(|p| p.value.as_str()).unwrap_or("");

    if raw.contains("++") || raw.contains("--") || raw.contains("+=") {
        // Compound mutation: prefix every bare identifier with the global
        // namespace, run it, then re-read the base variable for display.
        // The base name truncates the target at its first dot.
        let rewritten = ident_re().replace_all(raw, "window.$0");
        let base = target.split('.').next().unwrap_or(target);
        format!(
            "{}; const el = document.getElementById(\"{}\"); if(el) el.innerText = window.{};",
            rewritten, target, base
        )
    } else {
        // Quoted literal displays verbatim; a bare identifier is read back
        // from the global namespace.
        let script_value = if value.map(|p| p.quoted).unwrap_or(false) {
            format!("\"{}\"", raw)
        } else {
            format!("window.{}", raw)
        };
        format!(
            "const el = document.getElementById(\"{}\"); if(el) el.innerText = {};",
            target, script_value
        )
    }
}

/// Wrap a statement in an event-listener registration when a pending event
/// binding is set, clearing the binding.
fn wrap_in_event(regs: &mut Registers, js: String) -> String {
    match regs.take_event() {
        Some(evt) => format!(
            "document.getElementById(\"{}\").addEventListener(\"{}\", () => {{ {} }});",
            evt.target_id, evt.event_type, js
        ),
        None => js,
    }
}
