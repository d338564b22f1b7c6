use crate::core::{
    Direction, Entity, EntityMap, GameState, Grid, Legend, Level, PotionKind, Symbol, Tile,
    UserAction, Vec2,
};
use crate::error::LoadError;
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::path::Path;

/// Parses a maze description: a `<strength> <moves>` line followed by one line per grid row.
/// `coin_value` is what each coin symbol will be worth when picked up.
pub fn parse_level(s: &str, legend: &Legend, coin_value: u32) -> Result<Level, LoadError> {
    let mut lines = s
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty());

    let stats_line = lines.next().ok_or(LoadError::Empty)?;
    let (strength, moves) = parse_stats(stats_line)?;

    let mut rows: Vec<Vec<Tile>> = Vec::new();
    let mut entities = EntityMap::new();
    let mut player: Option<Vec2> = None;

    for (i, line) in lines.enumerate() {
        let mut row = Vec::new();
        for (j, ch) in line.chars().enumerate() {
            let pos = Vec2 {
                i: i as i32,
                j: j as i32,
            };
            let symbol = legend.decode(ch).ok_or(LoadError::UnknownSymbol {
                symbol: ch,
                row: i,
                col: j,
            })?;
            let (tile, entity) = match symbol {
                Symbol::Floor => (Tile::Floor, None),
                Symbol::Wall => (Tile::Wall, None),
                Symbol::Goal => (Tile::Goal { filled: false }, None),
                Symbol::FilledGoal => (Tile::Goal { filled: true }, None),
                Symbol::Player => {
                    if player.is_some() {
                        return Err(LoadError::MultiplePlayers { row: i, col: j });
                    }
                    player = Some(pos);
                    (Tile::Floor, None)
                }
                Symbol::Crate(strength_requirement) => {
                    (Tile::Floor, Some(Entity::Crate { strength_requirement }))
                }
                Symbol::Potion(kind) => (Tile::Floor, Some(Entity::Potion(kind))),
                Symbol::Coin => (Tile::Floor, Some(Entity::Coin { value: coin_value })),
            };
            if let Some(entity) = entity {
                let inserted = entities.insert(pos, entity);
                debug_assert!(inserted.is_ok(), "two entities decoded at {:?}", pos);
            }
            row.push(tile);
        }
        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(LoadError::NonRectangular {
                    row: i,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(LoadError::NoRows);
    }
    let player_start = player.ok_or(LoadError::MissingPlayer)?;
    let grid = Grid::from_rows(rows).ok_or(LoadError::NoRows)?;

    Ok(Level {
        grid,
        entities,
        player_start,
        strength,
        moves,
    })
}

fn parse_stats(line: &str) -> Result<(i32, u32), LoadError> {
    let invalid = || LoadError::InvalidStats {
        line: line.to_string(),
    };
    let mut parts = line.split_whitespace();
    let strength = parts.next().and_then(|s| s.parse::<i32>().ok()).ok_or_else(invalid)?;
    let moves = parts.next().and_then(|s| s.parse::<u32>().ok()).ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok((strength, moves))
}

pub fn load_level(path: &Path, legend: &Legend, coin_value: u32) -> Result<Level, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_level(&contents, legend, coin_value)
}

/// Draws the grid as text, player over entities over tiles.
pub fn render_game_to_string(legend: &Legend, game: &GameState) -> String {
    let mut result = String::new();
    for (i, row) in game.grid.rows().enumerate() {
        for (j, tile) in row.iter().enumerate() {
            let pos = Vec2 {
                i: i as i32,
                j: j as i32,
            };
            let ch = if pos == game.player.position {
                legend.player
            } else if let Some(entity) = game.entities.get(&pos) {
                legend.entity_char(entity)
            } else {
                legend.tile_char(tile)
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub fn render_stats_to_string(game: &GameState) -> String {
    format!(
        "Moves remaining: {} | Strength: {} | Money: ${}",
        game.player.moves_remaining, game.player.strength, game.player.money
    )
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    legend: &Legend,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let rows = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(3)])
            .split(f.area());
        let top = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(28)])
            .split(rows[0]);

        let game_text = render_game_to_string(legend, &state.game);
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title("Sokoban"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, top[0]);

        let shop_text = state
            .shop
            .iter()
            .enumerate()
            .map(|(index, (kind, price))| format!("[{}] {}: ${}", index + 1, kind.name(), price))
            .collect::<Vec<_>>()
            .join("\n");
        let shop_paragraph = Paragraph::new(shop_text)
            .block(Block::default().borders(Borders::ALL).title("Shop"))
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(shop_paragraph, top[1]);

        let stats_paragraph = Paragraph::new(render_stats_to_string(&state.game))
            .block(Block::default().borders(Borders::ALL).title("Player Stats"))
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(stats_paragraph, rows[1]);

        let instructions = if state.won {
            "You won! R to play again, any other key to quit."
        } else if state.lost {
            "You lost! R to play again, any other key to quit."
        } else {
            "WASD/arrows move, U undo, R reset, 1-3 buy, Q quit"
        };

        let instructions = if let Some(err) = &state.error {
            format!("{} | {}", instructions, err)
        } else {
            instructions.to_string()
        };

        let instructions = if let Some(outcome) = &state.last_outcome {
            format!("{} | Last: {:?}", instructions, outcome)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, rows[2]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

/// Maps a key press to an action. Digit keys pick the n-th shop item in `catalog` order.
pub fn handle_input(catalog: &[PotionKind]) -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Up))
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Down))
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Left))
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Right))
                }
                KeyCode::Char('u') | KeyCode::Char('U') => ConsoleInput::UserAction(UserAction::Undo),
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::UserAction(UserAction::Reset),
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    match catalog.get(index) {
                        Some(&kind) => ConsoleInput::UserAction(UserAction::Purchase(kind)),
                        None => ConsoleInput::Unknown,
                    }
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
