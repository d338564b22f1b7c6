//! Line-oriented game loop, for pipes and plain terminals.
//!
//! Commands, one per line: a direction (`w`/`a`/`s`/`d` or `up`/`down`/`left`/`right`),
//! `u` to undo, `r` to reset, `b <item>` to buy from the shop and `q` to quit.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::console_interface::{render_game_to_string, render_stats_to_string};
use crate::core::{GameModel, Legend};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Lost,
    Quit,
}

pub fn display<W: Write>(model: &GameModel, legend: &Legend, output: &mut W) -> io::Result<()> {
    write!(output, "{}", render_game_to_string(legend, model.state()))?;
    writeln!(output, "{}", render_stats_to_string(model.state()))
}

pub fn play<R: BufRead, W: Write>(
    model: &mut GameModel,
    legend: &Legend,
    input: &mut R,
    output: &mut W,
) -> io::Result<GameResult> {
    let mut line = String::new();
    while model.get_player_moves_remaining() > 0 {
        display(model, legend, output)?;

        if model.has_won() {
            writeln!(output, "You won!")?;
            return Ok(GameResult::Won);
        }

        write!(output, "Enter move: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(GameResult::Quit);
        }
        let command = line.trim();

        match command {
            "q" => return Ok(GameResult::Quit),
            "u" => model.undo(),
            "r" => model.reset(),
            _ => {
                if let Some(item) = command.strip_prefix("b ") {
                    if !model.attempt_purchase(item) {
                        writeln!(output, "Cannot buy {}", item.trim())?;
                    }
                } else if !model.attempt_move(command) {
                    writeln!(output, "Invalid move")?;
                }
            }
        }
    }

    if model.has_won() {
        display(model, legend, output)?;
        writeln!(output, "You won!")?;
        info!("game won");
        return Ok(GameResult::Won);
    }

    writeln!(output, "You lost!")?;
    info!("game lost");
    Ok(GameResult::Lost)
}
