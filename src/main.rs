// Potion Sokoban: push weighted crates onto goals before your moves run out.
// Controls: W/A/S/D or arrow keys move, U undo, R reset, 1-3 buy potions, Q quits.
// Maze: 'W' wall, 'F' floor, 'G' goal, 'X' filled goal, 'P' player, '0'-'9' crate,
// 'S'/'M'/'*' strength, move and fancy potions, '$' coin.
// The first line holds the starting strength and moves.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use potion_sokoban::config::RulesConfig;
use potion_sokoban::console_interface::{
    ConsoleInput, cleanup_terminal, handle_input, load_level, parse_level, render_game, setup_terminal,
};
use potion_sokoban::core::{GameModel, PotionKind, UserAction};
use potion_sokoban::models::GameRenderState;
use potion_sokoban::text_interface;

const BUILTIN_LEVEL: &str = "\
3 20
WWWWWWWW
WPFFSFFW
WF2FF$FW
WFFW3WFW
WFGFGFFW
WMFFFFFW
WWWWWWWW
";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Interactive,
    Text,
}

#[derive(Debug, Parser)]
#[command(version, about = "Sokoban with weighted crates, potions and a shop")]
struct Args {
    /// Maze file; a small built-in maze is used when omitted
    level: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Mode::Interactive)]
    mode: Mode,

    /// JSON rules file (potion effects, coin value, shop prices, legend)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = setup_logging(&args.log_dir)?;

    let rules = match &args.config {
        Some(path) => RulesConfig::load(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => RulesConfig::default(),
    };
    let legend = rules.legend.clone();

    let level = match &args.level {
        Some(path) => load_level(path, &legend, rules.coin_value)
            .with_context(|| format!("loading maze {}", path.display()))?,
        None => parse_level(BUILTIN_LEVEL, &legend, rules.coin_value)
            .context("parsing built-in maze")?,
    };
    tracing::info!(
        height = level.grid.height(),
        width = level.grid.width(),
        "maze loaded"
    );

    let mut model = GameModel::new(level, rules);

    match args.mode {
        Mode::Text => {
            let stdin = io::stdin();
            let result =
                text_interface::play(&mut model, &legend, &mut stdin.lock(), &mut io::stdout())?;
            tracing::info!(?result, "text game finished");
        }
        Mode::Interactive => {
            let mut terminal = setup_terminal().map_err(|e| anyhow!("{e}"))?;
            let outcome = run_interactive(&mut model, &mut terminal);
            cleanup_terminal().map_err(|e| anyhow!("{e}"))?;
            outcome?;
        }
    }

    Ok(())
}

fn setup_logging(log_dir: &Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, "potion-sokoban.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // file only: the terminal belongs to the game
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}/potion-sokoban.log", log_dir.display());
    Ok(guard)
}

fn run_interactive(
    model: &mut GameModel,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let legend = model.rules().legend.clone();
    let catalog: Vec<PotionKind> = model.get_shop_items().keys().copied().collect();

    render_game(terminal, &legend, &GameRenderState::from_model(model))
        .map_err(|e| anyhow!("{e}"))?;

    loop {
        let input = handle_input(&catalog).map_err(|e| anyhow!("{e}"))?;
        let user_action = match input {
            ConsoleInput::Quit => break,
            ConsoleInput::UserAction(user_action) => user_action,
            ConsoleInput::Timeout | ConsoleInput::Unknown => continue,
        };

        let mut error = None;
        let mut last_outcome = None;
        match user_action {
            UserAction::Move(direction) => match model.attempt_move_direction(direction) {
                Some(outcome) => last_outcome = Some(outcome),
                None => error = Some("Invalid move".to_string()),
            },
            UserAction::Undo => model.undo(),
            UserAction::Reset => model.reset(),
            UserAction::Purchase(kind) => {
                if let Err(reason) = model.purchase_potion(kind) {
                    error = Some(format!("Cannot buy {}: {:?}", kind.name(), reason));
                }
            }
        }

        let to_render = GameRenderState {
            error,
            last_outcome,
            ..GameRenderState::from_model(model)
        };
        render_game(terminal, &legend, &to_render).map_err(|e| anyhow!("{e}"))?;

        if to_render.won || to_render.lost {
            // Keep showing the end screen until the player decides
            loop {
                match handle_input(&catalog).map_err(|e| anyhow!("{e}"))? {
                    ConsoleInput::Timeout => {}
                    ConsoleInput::UserAction(UserAction::Reset) => {
                        model.reset();
                        render_game(terminal, &legend, &GameRenderState::from_model(model))
                            .map_err(|e| anyhow!("{e}"))?;
                        break;
                    }
                    _ => return Ok(()),
                }
            }
        }
    }

    Ok(())
}
