//! PaintTalk — run a program file and print the resulting scene.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use painttalk::config::{Config, OutputFormat};
use painttalk::dsl;
use painttalk::output::{render_scene, render_tokens, save_output};

/// Turn PaintTalk sentences into a scene description
#[derive(Debug, Parser)]
#[command(name = "painttalk", version)]
struct Args {
    /// Program file to run, or `-` for stdin
    file: PathBuf,

    /// Output format for the scene (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Stop after this stage and print its result
    #[arg(long, value_enum, default_value_t = Emit::Scene)]
    emit: Emit,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log filter (overrides the config file)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    Tokens,
    Tree,
    Scene,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::load();

    let filter = args.log_level.as_deref().unwrap_or(&config.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match run(&args, &config, std::io::stdin().lock(), std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &Config, stdin: impl Read, mut stdout: impl Write) -> Result<()> {
    let source = read_source(&args.file, stdin)?;
    info!(file = %args.file.display(), bytes = source.len(), "running program");

    let format = args.format.unwrap_or(config.format);
    let text = render(&source, args.emit, format)?;

    match &args.output {
        Some(path) => save_output(path, &text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => stdout
            .write_all(text.as_bytes())
            .context("failed to write stdout")?,
    }
    Ok(())
}

/// Run the pipeline up to `emit` and render that stage's result.
fn render(source: &str, emit: Emit, format: OutputFormat) -> Result<String> {
    let tokens = dsl::tokenize(source)?;
    let text = match emit {
        Emit::Tokens => render_tokens(&tokens),
        Emit::Tree => dsl::parse(tokens)?.to_string(),
        Emit::Scene => {
            let tree = dsl::parse(tokens)?;
            let scene = dsl::interpret(&tree)?;
            debug!(?format, shapes = scene.shapes.len(), "rendering scene");
            render_scene(&scene, format)?
        }
    };
    Ok(text)
}

fn read_source(path: &Path, mut stdin: impl Read) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        stdin
            .read_to_string(&mut source)
            .context("failed to read stdin")?;
        return Ok(source);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
