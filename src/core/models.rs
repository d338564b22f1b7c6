use serde::{Deserialize, Serialize};
use std::ops::Add;

use crate::core::entity_map::EntityMap;
use crate::core::grid::Grid;

/// Grid position or direction delta. `i` is the row (growing downward), `j` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

impl Vec2 {
    pub const fn new(i: i32, j: i32) -> Vec2 {
        Vec2 { i, j }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl From<(i32, i32)> for Vec2 {
    fn from((i, j): (i32, i32)) -> Self {
        Vec2 { i, j }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    Undo,
    Reset,
    Purchase(PotionKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    Floor,
    Wall,
    Goal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Floor,
    Wall,
    Goal { filled: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PotionKind {
    Strength,
    Move,
    Fancy,
}

/// Change applied to the player when a potion is consumed. Absent fields leave the stat alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moves: Option<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Crate,
    Potion(PotionKind),
    Coin,
    Player,
}

/// Anything standing on top of the tile layer, except the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Entity {
    Crate { strength_requirement: i32 },
    Potion(PotionKind),
    Coin { value: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    pub position: Vec2,
    pub strength: i32,
    pub moves_remaining: u32,
    pub money: u32,
}

/// Every piece of mutable game state. A clone of this is a complete, independent snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub grid: Grid,
    pub entities: EntityMap,
    pub player: Player,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Step,
    Push { from: Vec2, to: Vec2, filled_goal: bool },
    Pickup(PotionKind),
    Coin(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveRejection {
    NoMovesLeft,
    OutOfBounds,
    Blocked,
    CrateOutOfBounds,
    CrateBlocked,
    CrateDestinationOccupied,
    TooWeak { required: i32, strength: i32 },
}

pub enum GameUpdate {
    NextState(GameState, MoveOutcome),
    Rejected(MoveRejection),
}
