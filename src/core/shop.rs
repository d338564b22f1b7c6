use std::collections::BTreeMap;

use crate::core::models::PotionKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PurchaseRejection {
    UnknownItem,
    NotForSale(PotionKind),
    InsufficientFunds { price: u32, money: u32 },
}

/// Fixed price list for potions bought with money.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shop {
    prices: BTreeMap<PotionKind, u32>,
}

impl Shop {
    pub fn new(prices: BTreeMap<PotionKind, u32>) -> Self {
        Shop { prices }
    }

    pub fn price(&self, kind: PotionKind) -> Option<u32> {
        self.prices.get(&kind).copied()
    }

    pub fn items(&self) -> &BTreeMap<PotionKind, u32> {
        &self.prices
    }

    /// Works out what `item_id` would cost a player holding `money`.
    pub fn quote(&self, item_id: &str, money: u32) -> Result<(PotionKind, u32), PurchaseRejection> {
        let kind = PotionKind::from_item_id(item_id).ok_or(PurchaseRejection::UnknownItem)?;
        self.quote_potion(kind, money).map(|price| (kind, price))
    }

    pub fn quote_potion(&self, kind: PotionKind, money: u32) -> Result<u32, PurchaseRejection> {
        let price = self.price(kind).ok_or(PurchaseRejection::NotForSale(kind))?;
        if money < price {
            return Err(PurchaseRejection::InsufficientFunds { price, money });
        }
        Ok(price)
    }
}
