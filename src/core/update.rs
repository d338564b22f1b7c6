use crate::config::RulesConfig;
use crate::core::models::{Direction, Entity, GameState, GameUpdate, MoveOutcome, MoveRejection};

/// Resolves one player move against `game` without touching it.
/// On success the returned state is the complete post-move state.
pub fn step(rules: &RulesConfig, game: &GameState, direction: Direction) -> GameUpdate {
    if !game.player.is_movable() {
        return GameUpdate::Rejected(MoveRejection::NoMovesLeft);
    }

    let dir = direction.delta();
    let target = game.player.position + dir;
    let Some(dest) = game.grid.get(&target) else {
        return GameUpdate::Rejected(MoveRejection::OutOfBounds);
    };
    if dest.is_blocking() {
        return GameUpdate::Rejected(MoveRejection::Blocked);
    }

    let mut next = game.clone();

    let outcome = match game.entities.get(&target) {
        None => MoveOutcome::Step,
        Some(&Entity::Crate { strength_requirement }) => {
            let beyond = target + dir;
            let Some(beyond_tile) = game.grid.get(&beyond) else {
                return GameUpdate::Rejected(MoveRejection::CrateOutOfBounds);
            };
            if beyond_tile.is_blocking() {
                return GameUpdate::Rejected(MoveRejection::CrateBlocked);
            }
            if game.entities.contains(&beyond) {
                return GameUpdate::Rejected(MoveRejection::CrateDestinationOccupied);
            }
            if game.player.strength < strength_requirement {
                return GameUpdate::Rejected(MoveRejection::TooWeak {
                    required: strength_requirement,
                    strength: game.player.strength,
                });
            }

            let pushed = next.entities.remove(&target);
            let filled_goal = beyond_tile.is_goal();
            if filled_goal {
                // the crate is used up by the goal
                next.grid[&beyond].fill();
            } else if let Some(crate_entity) = pushed {
                if next.entities.insert(beyond, crate_entity).is_err() {
                    return GameUpdate::Rejected(MoveRejection::CrateDestinationOccupied);
                }
            }
            MoveOutcome::Push {
                from: target,
                to: beyond,
                filled_goal,
            }
        }
        Some(&Entity::Potion(kind)) => {
            next.entities.remove(&target);
            next.player.apply_effect(rules.effect_of(kind));
            MoveOutcome::Pickup(kind)
        }
        Some(&Entity::Coin { value }) => {
            next.entities.remove(&target);
            next.player.money = next.player.money.saturating_add(value);
            MoveOutcome::Coin(value)
        }
    };

    next.player.position = target;
    next.player.add_moves(-1);

    GameUpdate::NextState(next, outcome)
}
