pub use dissimilar::diff as __diff;
use crate::config::RulesConfig;
use crate::console_interface::{parse_level, render_game_to_string};
use crate::core::{Direction, GameModel, GameState, Legend, MoveOutcome, Vec2};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub struct GameTestState {
    pub model: GameModel,
    pub legend: Legend,
}

impl GameTestState {
    pub fn new(level: &str) -> Self {
        Self::with_rules(level, RulesConfig::default())
    }

    pub fn with_rules(level: &str, rules: RulesConfig) -> Self {
        let legend = rules.legend.clone();
        let level = parse_level(level, &legend, rules.coin_value)
            .unwrap_or_else(|err| panic!("test level failed to parse: {err}"));
        Self {
            model: GameModel::new(level, rules),
            legend,
        }
    }

    pub fn state(&self) -> &GameState {
        self.model.state()
    }

    pub fn position(&self) -> Vec2 {
        self.model.get_player_position()
    }

    pub fn game_to_string(&self) -> String {
        render_game_to_string(&self.legend, self.model.state()).trim_matches('\n').into()
    }

    pub fn assert_move(&mut self, direction: Direction) -> MoveOutcome {
        let before = self.game_to_string();
        match self.model.attempt_move_direction(direction) {
            Some(outcome) => outcome,
            None => panic!("Expected {:?} to succeed, in map\n{}", direction, before),
        }
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    /// Asserts the move is refused and that nothing at all changed.
    pub fn assert_rejected(&mut self, direction: Direction) {
        let before = self.model.state().clone();
        let history = self.model.history_len();
        let outcome = self.model.attempt_move_direction(direction);
        assert_eq!(outcome, None, "Expected {:?} to be rejected, in map\n{}", direction, self.game_to_string());
        assert_eq!(&before, self.model.state(), "rejected move changed the game");
        assert_eq!(history, self.model.history_len(), "rejected move recorded a snapshot");
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}
