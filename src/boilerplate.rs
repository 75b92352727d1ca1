use crate::theme::Theme;

/// Wrap the accumulated body and script statements in the fixed document
/// shell. Pure function of its inputs.
///
/// All script statements run inside one shared try/catch: a runtime failure
/// is logged to the console and stops statements sequenced after it, but
/// never aborts page load.
pub fn wrap(body: &str, scripts: &[String], theme: &Theme) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}" dir="{dir}">
<head>
<meta charset="UTF-8">
<style>
@import url('https://fonts.googleapis.com/css2?family={font_query}:wght@400;600&display=swap');
body {{
    margin: 0; padding: 40px; font-family: '{font}', sans-serif;
    background: {background}; color: {text};
    display: flex; flex-direction: column; align-items: center; min-height: 100vh;
    overflow-x: hidden;
}}
.moe-row {{ display: flex; gap: 20px; width: 100%; max-width: 1000px; margin-bottom: 20px; flex-wrap: wrap; }}
.moe-col {{ flex: 1; min-width: 250px; display: flex; flex-direction: column; gap: 15px; }}
.moe-card {{
    background: {surface}; border: 1px solid {border};
    padding: 30px; border-radius: 20px;
    box-shadow: 0 10px 25px rgba(0,0,0,0.2);
    width: 100%; transition: 0.3s;
}}
.moe-card:hover {{ transform: translateY(-5px); border-color: #007acc; }}
h1 {{ font-size: 3rem; color: {accent}; margin: 0 0 10px 0; }}
p {{ color: {muted}; line-height: 1.6; }}
button {{
    background: {accent}; color: {background};
    border: none; padding: 12px 25px; border-radius: 12px;
    font-weight: 600; cursor: pointer; transition: 0.2s;
    width: fit-content; margin-top: 10px;
}}
button:hover {{ background: {accent_hover}; transform: scale(1.05); }}
button:active {{ transform: scale(0.95); }}
.moe-element {{ transition: 0.3s; }}
* {{ box-sizing: border-box; }}
</style>
</head>
<body>
{body}
<script>
(function() {{
    try {{ {script} }} catch(e) {{ console.error('Moe Script Error:', e); }}
}})();
</script>
</body>
</html>
"#,
        lang = theme.lang,
        dir = theme.dir,
        font_query = theme.font_query(),
        font = theme.font_family,
        background = theme.background,
        text = theme.text,
        surface = theme.surface,
        border = theme.border,
        accent = theme.accent,
        accent_hover = theme.accent_hover,
        muted = theme.muted,
        body = body,
        script = scripts.join("\n"),
    )
}
