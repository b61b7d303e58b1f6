//! Binary entrypoint for the Doorway CLI.
//!
//! Commands:
//! - `play [--name <name>] [--script <file>] [--json-summary]` - play the game
//! - `init` - write a starter `doorway.toml`
//!
//! See the library crate docs for module-level details: `doorway::`.
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::PathBuf;

use doorway::adventure::{
    ConsoleSink, Game, GameOptions, GameSummary, RoomTable, ScriptedInput, StdinInput,
};
use doorway::config::Config;

#[derive(Parser)]
#[command(name = "doorway")]
#[command(about = "A small text adventure: find the key, open the window, get out")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "doorway.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game
    Play {
        /// Player name; skips the name prompt
        #[arg(short, long)]
        name: Option<String>,

        /// Read commands from a file, one per line, instead of the keyboard
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Print a JSON summary of the run when the player gets out
        #[arg(long)]
        json_summary: bool,
    },
    /// Write a default configuration file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            name,
            script,
            json_summary,
        } => {
            let (config, load_error) = match Config::load(&cli.config).await {
                Ok(cfg) => (cfg, None),
                Err(e) => (Config::default(), Some(e)),
            };
            init_logging(&config, cli.verbose);
            match load_error {
                Some(e) if Config::is_missing(&e) => {
                    info!("No config file at {}, using defaults", cli.config)
                }
                Some(e) => warn!("{:#} (continuing with defaults)", e),
                None => {}
            }
            info!("Starting Doorway v{}", env!("CARGO_PKG_VERSION"));

            let mut options = GameOptions::from(&config.game);
            if name.is_some() {
                options.player_name = name;
            }
            let show_severity = config.game.show_severity;

            let summary = tokio::task::spawn_blocking(move || -> Result<GameSummary> {
                let game = Game::with_options(RoomTable::standard(), options);
                let mut out = ConsoleSink::stdout(show_severity);
                let summary = match script {
                    Some(path) => {
                        info!("Reading commands from {}", path.display());
                        let mut input = ScriptedInput::from_file(&path)?.with_echo(true);
                        game.run(&mut input, &mut out)?
                    }
                    None => {
                        let mut input = StdinInput::new();
                        game.run(&mut input, &mut out)?
                    }
                };
                Ok(summary)
            })
            .await??;

            if json_summary {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }
        Commands::Init => {
            let config = Config::default();
            init_logging(&config, cli.verbose);
            if tokio::fs::try_exists(&cli.config).await? {
                bail!("Refusing to overwrite existing config file {}", cli.config);
            }
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
    }

    Ok(())
}

fn init_logging(config: &Config, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let file = config.logging.file.as_ref().and_then(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("Cannot open log file {}: {}", path, e))
            .ok()
    });

    if let Some(f) = file {
        let mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Interactive runs also see diagnostics on the console
        let is_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
