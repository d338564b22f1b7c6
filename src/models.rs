use crate::core::{GameModel, GameState, MoveOutcome, PotionKind};

pub struct GameRenderState {
    pub game: GameState,
    pub won: bool,
    pub lost: bool,
    pub error: Option<String>,
    pub last_outcome: Option<MoveOutcome>,
    pub shop: Vec<(PotionKind, u32)>,
}

impl GameRenderState {
    pub fn from_model(model: &GameModel) -> Self {
        GameRenderState {
            game: model.state().clone(),
            won: model.has_won(),
            lost: model.has_lost(),
            error: None,
            last_outcome: None,
            shop: model
                .get_shop_items()
                .iter()
                .map(|(&kind, &price)| (kind, price))
                .collect(),
        }
    }
}
