use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chatview_core::{
    config::Config,
    menu::{self, ActionContext, ActionItem, ResolvedMenu},
    message::MessageFacade,
    replay::{self, ReplayScript},
};


#[derive(Parser, Debug)]
#[clap(version, about = "Replays message-row gestures and resolves message action menus.")]
struct Cli {
    /// The JSON config file to load thresholds and feature switches from.
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Enable verbose logging output.
    #[clap(short, long, action)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replays a scripted pointer stream and prints each resulting step as a JSON line.
    Replay {
        #[clap(value_parser)]
        script: PathBuf,
    },
    /// Resolves the action menu of a message and prints it as JSON.
    Menu {
        /// The JSON message to resolve the menu of.
        #[clap(value_parser)]
        message: PathBuf,

        /// A JSON action context: chat permissions, sender status and resolver switches.
        #[clap(long, value_parser)]
        context: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct MenuOutput {
    #[serde(flatten)]
    menu: ResolvedMenu,
    /// The actions folded behind "More", if any.
    more: Vec<ActionItem>,
}


fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Command::Replay { script } => {
            let json = read_to_string(&script)?;
            let script = ReplayScript::from_json(&json)
                .with_context(|| format!("Failed to load replay script {script:?}"))?;
            info!("Replaying {} pointer events", script.events.len());
            for step in replay::run_replay(script, config) {
                println!("{}", serde_json::to_string(&step)?);
            }
        }
        Command::Menu { message, context } => {
            let message: MessageFacade = serde_json::from_str(&read_to_string(&message)?)
                .with_context(|| format!("Failed to parse message {message:?}"))?;
            let context = match context {
                Some(path) => serde_json::from_str(&read_to_string(&path)?)
                    .with_context(|| format!("Failed to parse action context {path:?}"))?,
                None => ActionContext::new(Default::default(), config.resolver.clone()),
            };
            let resolved = menu::resolve(&message, &context);
            let more = if resolved.ids().contains(&menu::ActionId::More) {
                menu::resolve_more(&message, &context)
            } else {
                Vec::new()
            };
            let output = MenuOutput { menu: resolved, more };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {path:?}"))
}
