use anyhow::Context as _;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

use reckon::{calculate, parse, tokenize_line};

const PROMPT: &str = ">>> ";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        run_repl()
    } else {
        run_script(&args[1])
    }
}

fn run_script(filename: &str) -> anyhow::Result<()> {
    let source =
        std::fs::read_to_string(filename).with_context(|| format!("failed to read {filename}"))?;
    for (lineno, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match calculate(line) {
            Ok(value) => println!("{}: {}", lineno + 1, value),
            Err(err) => println!("{}: {}", lineno + 1, err),
        }
    }
    Ok(())
}

fn run_repl() -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new().context("failed to start the line editor")?;
    #[cfg(feature = "with-file-history")]
    if rl.load_history("history.txt").is_err() {
        println!("No previous history.");
    }
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                println!("{}", respond(&line));
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    #[cfg(feature = "with-file-history")]
    rl.save_history("history.txt")?;
    Ok(())
}

/// Renders the reply to one line of REPL input.
fn respond(line: &str) -> String {
    if let Some(rest) = line.trim_start().strip_prefix(":tokens") {
        return match tokenize_line(rest.trim_start()) {
            Ok(tokens) => tokens
                .iter()
                .map(|token| token.to_string())
                .collect::<Vec<_>>()
                .join(" "),
            Err(err) => err.to_string(),
        };
    }
    if let Some(rest) = line.trim_start().strip_prefix(":ast") {
        return match tokenize_line(rest.trim_start())
            .map_err(reckon::Error::from)
            .and_then(|tokens| Ok(parse(&tokens)?))
        {
            Ok(tree) => tree.to_string(),
            Err(err) => err.to_string(),
        };
    }
    match calculate(line) {
        Ok(value) => value.to_string(),
        Err(err) => err.to_string(),
    }
}
