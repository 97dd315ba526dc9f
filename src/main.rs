use clap::Parser;
use quill::app::App;
use quill::engine::config::TaggerKind;
use quill::engine::{Config, Pipeline};
use quill::input;
use quill::repl;
use quill::ui::OutputFormat;
use std::path::PathBuf;

/// Grammar correction, POS analysis and rephrasing for English text.
#[derive(Parser)]
#[command(name = "quill", version, about)]
struct Cli {
    /// Text to analyse. Starts an interactive session when no input is given.
    text: Option<String>,

    /// Analyse the contents of a text file.
    #[arg(long, conflicts_with_all = ["text", "clipboard"])]
    file: Option<String>,

    /// Analyse the clipboard contents.
    #[arg(long, conflicts_with = "text")]
    clipboard: bool,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed seed for reproducible rephrasings.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rephrasings to generate.
    #[arg(long)]
    count: Option<usize>,

    /// Skip the LanguageTool server.
    #[arg(long)]
    offline: bool,

    /// Tag model. `lexicon` needs no model files.
    #[arg(long, value_enum)]
    tagger: Option<TaggerKind>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if cli.seed.is_some() {
        config.rephrase.seed = cli.seed;
    }
    if let Some(count) = cli.count {
        config.rephrase.count = count;
    }
    if let Some(tagger) = cli.tagger {
        config.resources.tagger = tagger;
    }
    if cli.offline {
        config.grammar.enabled = false;
    }

    let mut app = App::new(Pipeline::from_config(&config)?, cli.format);

    let text = if let Some(path) = &cli.file {
        Some(input::load_file(path)?.text)
    } else if cli.clipboard {
        Some(input::clipboard::load()?.text)
    } else {
        cli.text
    };

    match text {
        Some(text) => println!("{}", app.analyze(&text)?),
        None => repl::run(&mut app)?,
    }

    Ok(())
}
