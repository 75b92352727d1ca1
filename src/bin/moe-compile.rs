use moeml::{Compiler, MoeError, Theme};
use std::env;
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut theme_path: Option<String> = None;
    let mut files: Vec<String> = Vec::new();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--theme" {
            match iter.next() {
                Some(p) => theme_path = Some(p),
                None => {
                    eprintln!("--theme requires a file argument");
                    process::exit(1);
                }
            }
        } else {
            files.push(arg);
        }
    }

    if files.is_empty() {
        eprintln!("Usage: moe-compile [--theme theme.yaml] <file.moe>...");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  moe-compile page.moe");
        eprintln!("  moe-compile --theme dark.yaml *.moe");
        process::exit(1);
    }

    let theme = match theme_path {
        Some(path) => match load_theme(&path) {
            Ok(theme) => theme,
            Err(e) => {
                eprintln!("✗ {}: {}", path, e);
                process::exit(1);
            }
        },
        None => Theme::default(),
    };

    let compiler = Compiler::with_theme(theme);
    let mut exit_code = 0;

    for file in files {
        match compile_file(&compiler, &file) {
            Ok(out) => {
                println!("✓ {} -> {}", file, out);
            }
            Err(e) => {
                eprintln!("✗ {}: {}", file, e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn load_theme(path: &str) -> Result<Theme, MoeError> {
    let yaml = fs::read_to_string(path).map_err(|e| MoeError::ReadInput {
        path: path.to_string(),
        source: e,
    })?;
    Theme::from_yaml(&yaml)
}

fn compile_file(compiler: &Compiler, path: &str) -> Result<String, MoeError> {
    let source = fs::read_to_string(path).map_err(|e| MoeError::ReadInput {
        path: path.to_string(),
        source: e,
    })?;

    let html = compiler.compile(&source);

    let out = Path::new(path).with_extension("html");
    fs::write(&out, html).map_err(|e| MoeError::WriteOutput {
        path: out.display().to_string(),
        source: e,
    })?;

    Ok(out.display().to_string())
}
