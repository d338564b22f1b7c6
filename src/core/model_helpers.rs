use std::str::FromStr;

use crate::core::models::{
    Direction, Effect, Entity, EntityKind, GameState, Player, PotionKind, Tile, TileKind, Vec2,
};

impl Tile {
    pub fn is_blocking(&self) -> bool {
        matches!(self, Tile::Wall)
    }

    pub fn kind(&self) -> TileKind {
        match self {
            Tile::Floor => TileKind::Floor,
            Tile::Wall => TileKind::Wall,
            Tile::Goal { .. } => TileKind::Goal,
        }
    }

    pub fn is_goal(&self) -> bool {
        matches!(self, Tile::Goal { .. })
    }

    /// Always false for anything but a goal.
    pub fn is_filled(&self) -> bool {
        matches!(self, Tile::Goal { filled: true })
    }

    pub fn fill(&mut self) {
        if let Tile::Goal { filled } = self {
            *filled = true;
        }
    }

    pub fn unfill(&mut self) {
        if let Tile::Goal { filled } = self {
            *filled = false;
        }
    }
}

impl Effect {
    pub const NONE: Effect = Effect { strength: None, moves: None };

    pub const fn new(strength: i32, moves: i32) -> Effect {
        Effect {
            strength: Some(strength),
            moves: Some(moves),
        }
    }

    pub const fn strength(amount: i32) -> Effect {
        Effect { strength: Some(amount), moves: None }
    }

    pub const fn moves(amount: i32) -> Effect {
        Effect { strength: None, moves: Some(amount) }
    }
}

impl PotionKind {
    /// Built-in effect, used unless the rules configuration overrides it.
    pub const fn effect(&self) -> Effect {
        match self {
            PotionKind::Strength => Effect::strength(2),
            PotionKind::Move => Effect::moves(5),
            PotionKind::Fancy => Effect::new(3, 3),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PotionKind::Strength => "Strength Potion",
            PotionKind::Move => "Move Potion",
            PotionKind::Fancy => "Fancy Potion",
        }
    }

    /// Accepts the shop code (`S`, `M`, `F`) or the lowercase name.
    pub fn from_item_id(item_id: &str) -> Option<PotionKind> {
        match item_id.trim().to_ascii_lowercase().as_str() {
            "s" | "strength" => Some(PotionKind::Strength),
            "m" | "move" => Some(PotionKind::Move),
            "f" | "fancy" => Some(PotionKind::Fancy),
            _ => None,
        }
    }
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Crate { .. } => EntityKind::Crate,
            Entity::Potion(kind) => EntityKind::Potion(*kind),
            Entity::Coin { .. } => EntityKind::Coin,
        }
    }

    /// Crates get pushed; potions and coins get picked up instead.
    pub fn is_movable(&self) -> bool {
        matches!(self, Entity::Crate { .. })
    }

    pub fn strength_requirement(&self) -> Option<i32> {
        match self {
            Entity::Crate { strength_requirement } => Some(*strength_requirement),
            _ => None,
        }
    }
}

impl Player {
    pub fn new(position: Vec2, strength: i32, moves_remaining: u32) -> Player {
        Player {
            position,
            strength,
            moves_remaining,
            money: 0,
        }
    }

    pub fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    pub fn is_movable(&self) -> bool {
        self.moves_remaining > 0
    }

    pub fn strength(&self) -> i32 {
        self.strength
    }

    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn add_strength(&mut self, delta: i32) {
        self.strength = self.strength.saturating_add(delta);
    }

    /// Never drops below zero.
    pub fn add_moves(&mut self, delta: i32) {
        self.moves_remaining = self.moves_remaining.saturating_add_signed(delta);
    }

    /// Never drops below zero.
    pub fn add_money(&mut self, delta: i32) {
        self.money = self.money.saturating_add_signed(delta);
    }

    pub fn apply_effect(&mut self, effect: &Effect) {
        if let Some(strength) = effect.strength {
            self.add_strength(strength);
        }
        if let Some(moves) = effect.moves {
            self.add_moves(moves);
        }
    }
}

impl Direction {
    pub fn delta(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}

impl FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" => Ok(Direction::Up),
            "down" | "s" => Ok(Direction::Down),
            "left" | "a" => Ok(Direction::Left),
            "right" | "d" => Ok(Direction::Right),
            _ => Err(()),
        }
    }
}

impl GameState {
    /// True when no goal is left unfilled. A grid without goals counts as won.
    pub fn is_won(&self) -> bool {
        self.grid.goals().all(|goal| goal.is_filled())
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn count_filled_goals(&self) -> usize {
        self.grid.goals().filter(|goal| goal.is_filled()).count()
    }
}
