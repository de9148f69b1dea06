use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use multicomplete_core::{KeyStroke, TextField};

mod config;
mod session;
mod surface;

use config::Config;
use session::Session;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Replay keystrokes against a marker autocomplete",
    long_about = None
)]
struct Args {
    /// TOML file with options and a [datasets] table
    #[arg(short, long)]
    config: PathBuf,

    /// Initial text of the field
    #[arg(short, long, default_value = "")]
    text: String,

    /// Initial cursor offset in characters (defaults to the end of the text)
    #[arg(long)]
    cursor: Option<usize>,

    /// Comma-separated strokes, e.g. "type:@al, down, enter"
    #[arg(short, long, default_value = "")]
    keys: String,

    /// Force substring matching
    #[arg(long, conflicts_with = "prefix")]
    fuzzy: bool,

    /// Force prefix matching
    #[arg(long)]
    prefix: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let Config { mut options, datasets } = Config::load(&args.config)?;
    if args.fuzzy {
        options.fuzzy_filter = true;
    } else if args.prefix {
        options.fuzzy_filter = false;
    }

    let strokes = KeyStroke::parse_script(&args.keys).context("invalid --keys script")?;
    info!(
        "loaded {} marker(s) from {}, replaying {} stroke(s)",
        datasets.len(),
        args.config.display(),
        strokes.len()
    );

    let mut session = Session::new(options, datasets, &args.text, args.cursor)?;
    session.refresh();
    session.replay(&strokes);

    let widget = session.widget();
    println!("value:  {:?}", widget.field().value());
    println!("cursor: {}", widget.field().cursor());
    println!("state:  {:?}", widget.state().phase());
    println!("{}", widget.surface());

    Ok(())
}
