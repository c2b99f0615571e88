use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gner::config::{CleaningPolicy, Config, OutputConfig, OutputFormat, TokenizerConfig};
use gner::{input, Formatter, Tokenizer, Volume};

#[derive(Parser, Debug)]
#[command(name = "gner", version)]
#[command(about = "Tokenizes documents for named entity recognition")]
struct Cli {
    /// Input file (.txt, .pdf, .epub); standard input when omitted or "-"
    file: Option<PathBuf>,

    /// What to print
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tokens)]
    format: OutputFormat,

    /// Indent JSON output
    #[arg(short, long)]
    pretty: bool,

    /// How cleaned token text is derived
    #[arg(long, value_enum, default_value_t = CleaningPolicy::Strict)]
    policy: CleaningPolicy,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            tokenizer: TokenizerConfig {
                policy: self.policy,
            },
            output: OutputConfig {
                format: self.format,
                pretty: self.pretty,
            },
        }
    }
}

fn read_volume(file: Option<&Path>) -> Result<Volume> {
    match file {
        Some(path) if path != Path::new("-") => {
            input::load(path).with_context(|| format!("failed to load {}", path.display()))
        }
        _ => {
            let content = io::read_to_string(io::stdin()).context("failed to read stdin")?;
            Ok(input::volume_from_text("stdin", &content))
        }
    }
}

fn write_tokens(
    out: &mut impl Write,
    volume: &Volume,
    tokenizer: &Tokenizer,
    pretty: bool,
) -> Result<()> {
    for page in volume.pages() {
        let tokens = page.text().tokenize(tokenizer);
        info!(page = page.id(), tokens = tokens.len(), "tokenized page");
        for token in &tokens {
            out.write_all(&token.to_json(pretty)?)?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    let volume = read_volume(cli.file.as_deref())?;
    let tokenizer = Tokenizer::from_config(&config.tokenizer);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.output.format {
        OutputFormat::Tokens => write_tokens(&mut out, &volume, &tokenizer, config.output.pretty)?,
        OutputFormat::Volume => {
            out.write_all(&volume.to_json(config.output.pretty)?)?;
            out.write_all(b"\n")?;
        }
    }

    out.flush()?;
    Ok(())
}
