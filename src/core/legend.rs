use serde::{Deserialize, Serialize};

use crate::core::models::{Entity, PotionKind, Tile};

/// Meaning of a single maze character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Floor,
    Wall,
    Goal,
    FilledGoal,
    Player,
    Crate(i32),
    Potion(PotionKind),
    Coin,
}

/// Character set shared by the maze loader and the renderers.
/// Crates are always written as their strength digit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legend {
    pub floor: char,
    pub wall: char,
    pub goal: char,
    pub filled_goal: char,
    pub player: char,
    pub strength_potion: char,
    pub move_potion: char,
    pub fancy_potion: char,
    pub coin: char,
}

impl Default for Legend {
    fn default() -> Self {
        Legend {
            floor: 'F',
            wall: 'W',
            goal: 'G',
            filled_goal: 'X',
            player: 'P',
            strength_potion: 'S',
            move_potion: 'M',
            fancy_potion: '*',
            coin: '$',
        }
    }
}

impl Legend {
    fn chars(&self) -> [char; 9] {
        [
            self.floor,
            self.wall,
            self.goal,
            self.filled_goal,
            self.player,
            self.strength_potion,
            self.move_potion,
            self.fancy_potion,
            self.coin,
        ]
    }

    /// First character that would shadow another symbol: a digit (digits are crates)
    /// or one assigned twice.
    pub fn find_clash(&self) -> Option<char> {
        let chars = self.chars();
        chars
            .iter()
            .enumerate()
            .find(|(index, ch)| ch.is_ascii_digit() || chars[..*index].contains(*ch))
            .map(|(_, ch)| *ch)
    }

    pub fn decode(&self, ch: char) -> Option<Symbol> {
        if let Some(digit) = ch.to_digit(10) {
            return Some(Symbol::Crate(digit as i32));
        }
        let symbol = match ch {
            c if c == self.floor => Symbol::Floor,
            c if c == self.wall => Symbol::Wall,
            c if c == self.goal => Symbol::Goal,
            c if c == self.filled_goal => Symbol::FilledGoal,
            c if c == self.player => Symbol::Player,
            c if c == self.strength_potion => Symbol::Potion(PotionKind::Strength),
            c if c == self.move_potion => Symbol::Potion(PotionKind::Move),
            c if c == self.fancy_potion => Symbol::Potion(PotionKind::Fancy),
            c if c == self.coin => Symbol::Coin,
            _ => return None,
        };
        Some(symbol)
    }

    pub fn tile_char(&self, tile: &Tile) -> char {
        match tile {
            Tile::Floor => self.floor,
            Tile::Wall => self.wall,
            Tile::Goal { filled: false } => self.goal,
            Tile::Goal { filled: true } => self.filled_goal,
        }
    }

    pub fn potion_char(&self, kind: PotionKind) -> char {
        match kind {
            PotionKind::Strength => self.strength_potion,
            PotionKind::Move => self.move_potion,
            PotionKind::Fancy => self.fancy_potion,
        }
    }

    /// Crate strengths above 9 have no digit and are drawn as `+`.
    pub fn entity_char(&self, entity: &Entity) -> char {
        match entity {
            Entity::Crate { strength_requirement } => u32::try_from(*strength_requirement)
                .ok()
                .and_then(|strength| char::from_digit(strength, 10))
                .unwrap_or('+'),
            Entity::Potion(kind) => self.potion_char(*kind),
            Entity::Coin { .. } => self.coin,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_recognises_every_default_symbol() {
        let legend = Legend::default();
        for ch in ['F', 'W', 'G', 'X', 'P', 'S', 'M', '*', '$', '0', '7'] {
            assert!(legend.decode(ch).is_some(), "{:?} should decode", ch);
        }
        assert_eq!(legend.decode('7'), Some(Symbol::Crate(7)));
        assert_eq!(legend.decode('F'), Some(Symbol::Floor));
        assert_eq!(legend.decode('*'), Some(Symbol::Potion(PotionKind::Fancy)));
        assert_eq!(legend.decode(' '), None);
        assert_eq!(legend.decode('?'), None);
    }

    #[test]
    fn default_legend_has_no_clash() {
        assert_eq!(Legend::default().find_clash(), None);
    }

    #[test]
    fn clash_finds_duplicates_and_digits() {
        let duplicate = Legend {
            coin: 'W',
            ..Legend::default()
        };
        assert_eq!(duplicate.find_clash(), Some('W'));

        let digit = Legend {
            goal: '3',
            ..Legend::default()
        };
        assert_eq!(digit.find_clash(), Some('3'));
    }

    #[test]
    fn custom_floor_symbol_is_honoured() {
        let legend = Legend {
            floor: '.',
            ..Legend::default()
        };
        assert_eq!(legend.decode('.'), Some(Symbol::Floor));
        assert_eq!(legend.decode('F'), None);
        assert_eq!(legend.tile_char(&Tile::Floor), '.');
    }
}
