mod bounds;
mod entity_map;
mod game_model;
mod grid;
mod legend;
mod model_helpers;
mod models;
mod shop;
mod update;

pub use bounds::BoundsOriginRoot;
pub use entity_map::EntityMap;
pub use game_model::{GameModel, Level};
pub use grid::Grid;
pub use legend::{Legend, Symbol};
pub use models::{
    Direction, Effect, Entity, EntityKind, GameState, GameUpdate, MoveOutcome, MoveRejection,
    Player, PotionKind, Tile, TileKind, UserAction, Vec2,
};
pub use shop::{PurchaseRejection, Shop};
pub use update::step;
