use std::collections::BTreeMap;

use tracing::{debug, info, trace};

use crate::config::RulesConfig;
use crate::core::entity_map::EntityMap;
use crate::core::grid::Grid;
use crate::core::models::{Direction, GameState, GameUpdate, MoveOutcome, Player, PotionKind, Vec2};
use crate::core::shop::{PurchaseRejection, Shop};
use crate::core::update::step;

/// Everything the loader extracts from a maze description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub grid: Grid,
    pub entities: EntityMap,
    pub player_start: Vec2,
    pub strength: i32,
    pub moves: u32,
}

/// Owns the live game, its undo history and the load-time state used by [`GameModel::reset`].
#[derive(Clone, Debug)]
pub struct GameModel {
    state: GameState,
    initial: GameState,
    history: Vec<GameState>,
    rules: RulesConfig,
    shop: Shop,
}

impl GameModel {
    pub fn new(level: Level, rules: RulesConfig) -> Self {
        let mut player = Player::new(level.player_start, level.strength, level.moves);
        player.money = rules.starting_money;
        let state = GameState {
            grid: level.grid,
            entities: level.entities,
            player,
        };
        let shop = Shop::new(rules.shop.clone());
        GameModel {
            initial: state.clone(),
            state,
            history: Vec::new(),
            rules,
            shop,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn get_maze(&self) -> &Grid {
        &self.state.grid
    }

    pub fn get_entities(&self) -> &EntityMap {
        &self.state.entities
    }

    pub fn get_player_position(&self) -> Vec2 {
        self.state.player.position
    }

    pub fn get_player_strength(&self) -> i32 {
        self.state.player.strength()
    }

    pub fn get_player_moves_remaining(&self) -> u32 {
        self.state.player.moves_remaining()
    }

    pub fn get_player_money(&self) -> u32 {
        self.state.player.money()
    }

    /// (height, width)
    pub fn get_dimensions(&self) -> (i32, i32) {
        (self.state.height(), self.state.width())
    }

    pub fn get_shop_items(&self) -> &BTreeMap<PotionKind, u32> {
        self.shop.items()
    }

    pub fn has_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn has_lost(&self) -> bool {
        !self.has_won() && self.state.player.moves_remaining() == 0
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Moves the player in the direction named by `direction` (`up`, `down`, `left`,
    /// `right` or `w`/`s`/`a`/`d`). Unknown names and illegal moves return `false`
    /// and leave the game untouched.
    pub fn attempt_move(&mut self, direction: &str) -> bool {
        match direction.parse::<Direction>() {
            Ok(direction) => self.attempt_move_direction(direction).is_some(),
            Err(()) => {
                debug!(direction, "unknown direction");
                false
            }
        }
    }

    pub fn attempt_move_direction(&mut self, direction: Direction) -> Option<MoveOutcome> {
        match step(&self.rules, &self.state, direction) {
            GameUpdate::NextState(next, outcome) => {
                self.push_snapshot();
                self.state = next;
                debug!(?direction, ?outcome, position = ?self.state.player.position, "move applied");
                if self.has_won() {
                    info!(moves_remaining = self.get_player_moves_remaining(), "all goals filled");
                }
                Some(outcome)
            }
            GameUpdate::Rejected(reason) => {
                debug!(?direction, ?reason, "move rejected");
                None
            }
        }
    }

    /// Buys the potion named by `item_id` and applies it straight to the player.
    pub fn attempt_purchase(&mut self, item_id: &str) -> bool {
        self.purchase(item_id).is_ok()
    }

    pub fn purchase(&mut self, item_id: &str) -> Result<PotionKind, PurchaseRejection> {
        let (kind, price) = self
            .shop
            .quote(item_id, self.state.player.money())
            .inspect_err(|reason| debug!(item_id, ?reason, "purchase rejected"))?;
        self.complete_purchase(kind, price);
        Ok(kind)
    }

    /// Returns the price paid.
    pub fn purchase_potion(&mut self, kind: PotionKind) -> Result<u32, PurchaseRejection> {
        let price = self
            .shop
            .quote_potion(kind, self.state.player.money())
            .inspect_err(|reason| debug!(?kind, ?reason, "purchase rejected"))?;
        self.complete_purchase(kind, price);
        Ok(price)
    }

    fn complete_purchase(&mut self, kind: PotionKind, price: u32) {
        self.push_snapshot();
        let effect = *self.rules.effect_of(kind);
        let player = &mut self.state.player;
        player.money -= price;
        player.apply_effect(&effect);
        info!(?kind, price, money = player.money, "potion purchased");
    }

    /// Steps back to the state before the last successful move or purchase.
    pub fn undo(&mut self) {
        match self.history.pop() {
            Some(previous) => {
                self.state = previous;
                trace!(history = self.history.len(), "snapshot restored");
            }
            None => debug!("nothing to undo"),
        }
    }

    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        self.history.clear();
        info!("game reset");
    }

    fn push_snapshot(&mut self) {
        self.history.push(self.state.clone());
        trace!(history = self.history.len(), "snapshot pushed");
    }
}
