#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_duel::{init_logging, play, AiPlayer, Fleet, GameConfig, GameStatus, Side};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

/// Boards a bot may throw away before the simulation gives up.
#[cfg(feature = "std")]
const MAX_BOARD_RESETS: usize = 100;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct ConfigArgs {
    #[arg(long, help = "Load board size and fleet from a JSON file")]
    config: Option<PathBuf>,
    #[arg(long, help = "Side length of the square board")]
    board_size: Option<usize>,
    #[arg(long, help = "Fleet as SIZExCOUNT pairs (e.g., --fleet 3x1,2x2,1x4)")]
    fleet: Option<Fleet>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a bot against a bot and report the result.
    Sim {
        #[command(flatten)]
        settings: ConfigArgs,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the match summary as JSON")]
        json: bool,
    },
    /// Print the effective configuration as JSON.
    Config {
        #[command(flatten)]
        settings: ConfigArgs,
    },
}

#[cfg(feature = "std")]
fn load_config(args: ConfigArgs) -> anyhow::Result<GameConfig> {
    let mut config = match args.config {
        Some(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    if let Some(size) = args.board_size {
        config.board_size = size;
    }
    if let Some(fleet) = args.fleet {
        config.fleet = fleet;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sim {
            settings,
            seed,
            json,
        } => {
            let config = load_config(settings)?;
            if let Some(s) = seed {
                log::info!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };

            let mut first = AiPlayer::new().with_reset_limit(MAX_BOARD_RESETS);
            let mut second = AiPlayer::new().with_reset_limit(MAX_BOARD_RESETS);
            let summary = play(config, &mut first, &mut second, &mut rng, |game, turn| {
                log::info!(
                    "{:?} fires at {} -> {:?} ({} ship cells left)",
                    turn.shooter,
                    turn.shot.target,
                    turn.shot.outcome,
                    game.board(turn.shooter.opponent()).remaining_ship_cells()
                );
                if let GameStatus::Won(side) = turn.status {
                    log::info!("{:?} sank the whole fleet", side);
                }
            })?;

            if json {
                println!("{}", serde_json::to_string(&summary)?);
            } else {
                let winner = match summary.winner {
                    Side::First => "first bot",
                    Side::Second => "second bot",
                };
                println!(
                    "{} won: {} shots ({} hits) against {} shots ({} hits)",
                    winner,
                    summary.first.fired,
                    summary.first.hits,
                    summary.second.fired,
                    summary.second.hits
                );
            }
        }
        Commands::Config { settings } => {
            let config = load_config(settings)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
