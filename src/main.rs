//! replymark CLI - render an assistant reply to chat markup

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use replymark::Options;

/// Render a markdown-subset reply to HTML on stdout.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Reply file to read, or `-` for stdin
    input: Option<PathBuf>,

    /// Pass HTML in the reply through unescaped
    #[arg(long)]
    raw_html: bool,

    /// Leave `[^label]` references as text
    #[arg(long)]
    no_footnotes: bool,

    /// Language label for fences without a tag
    #[arg(long, value_name = "LANG", default_value = "text")]
    language: String,

    /// Prefix of code block element ids
    #[arg(long, value_name = "PREFIX", default_value = "code-")]
    code_id_prefix: String,

    /// Caption of the copy button on code blocks
    #[arg(long, value_name = "TEXT", default_value = "Copy")]
    copy_label: String,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            escape_html: !self.raw_html,
            footnote_refs: !self.no_footnotes,
            default_language: self.language.clone(),
            code_id_prefix: self.code_id_prefix.clone(),
            copy_label: self.copy_label.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),
}

fn read_input(input: Option<&PathBuf>) -> Result<String, CliError> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let input = read_input(cli.input.as_ref())?;
    log::debug!("read {} bytes", input.len());

    let html = replymark::to_html_with_options(&input, &cli.options());

    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    // RUST_LOG overrides the warn default
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("replymark: {err}");
            ExitCode::FAILURE
        }
    }
}
