#![allow(missing_docs)]

//! Item catalog and the shop that prices it.

use thiserror::Error;
use tracing::debug;

use crate::rng::OutcomeSource;

/// The modifiers a player can buy before a spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Name one face; if the wheel lands on it, the spin cannot lose.
    LoadedDice,
    /// A losing spin gets a coin flip to be undone.
    FortunesFavor,
    /// A winning spin pays out twice.
    EchoBet,
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub kind: ItemKind,
    pub name: &'static str,
    pub effect: &'static str,
    pub description: &'static str,
    /// Share of the current balance the item costs before jitter.
    pub price_fraction: f64,
    pub activation: &'static str,
}

/// Fixed list of items offered by the shop.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            items: vec![
                Item {
                    kind: ItemKind::LoadedDice,
                    name: "Loaded Dice",
                    effect: "Avoid a number of your choice.",
                    description: "Tampered and twisted. Luck has a favorite tonight.",
                    price_fraction: 0.10,
                    activation: "The dice hum softly. Reality tips in your favor.",
                },
                Item {
                    kind: ItemKind::FortunesFavor,
                    name: "Fortune's Favor",
                    effect: "50% chance to re-spin if you lose.",
                    description: "She's watching you. Just this once.",
                    price_fraction: 0.15,
                    activation: "A second chance stirs behind the curtain.",
                },
                Item {
                    kind: ItemKind::EchoBet,
                    name: "Echo Bet",
                    effect: "If you win, win again for free.",
                    description: "A whisper in time. A second chance disguised as déjà vu.",
                    price_fraction: 0.40,
                    activation: "The win echoes, once more, just like before.",
                },
            ],
        }
    }
}

impl Catalog {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, kind: ItemKind) -> Option<&Item> {
        self.items.iter().find(|item| item.kind == kind)
    }

    /// Case-insensitive lookup by display name.
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        let needle = name.trim().to_lowercase();
        self.items
            .iter()
            .find(|item| item.name.to_lowercase() == needle)
    }
}

/// Price of `item` at the given balance: `max(1, floor(fraction * balance) + jitter)`.
pub fn price_for(item: &Item, balance: i64, jitter: i64, source: &mut dyn OutcomeSource) -> i64 {
    let base = (item.price_fraction * balance.max(0) as f64).floor() as i64;
    let noise = source.draw(-jitter, jitter);
    base.saturating_add(noise).max(1)
}

/// A priced catalog entry for the current shop visit.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote<'a> {
    pub item: &'a Item,
    pub price: i64,
}

/// Result of a shop visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purchase {
    /// The player pressed Enter without naming an item.
    Declined,
    /// The item was affordable; `price` must be deducted from the balance.
    Bought { kind: ItemKind, price: i64 },
}

/// Reasons a named purchase does not happen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("'{0}' isn't for sale")]
    UnknownItem(String),
    #[error("price ${price} exceeds balance ${balance}")]
    Unaffordable { price: i64, balance: i64 },
}

/// One visit to the shop: every item priced once against the entry balance.
#[derive(Debug, Clone)]
pub struct Shop<'a> {
    catalog: &'a Catalog,
    quotes: Vec<Quote<'a>>,
    balance: i64,
}

impl<'a> Shop<'a> {
    /// Price the whole catalog for a player holding `balance`.
    pub fn open(
        catalog: &'a Catalog,
        balance: i64,
        jitter: i64,
        source: &mut dyn OutcomeSource,
    ) -> Self {
        let quotes = catalog
            .items()
            .iter()
            .map(|item| Quote {
                item,
                price: price_for(item, balance, jitter, source),
            })
            .collect();
        Self {
            catalog,
            quotes,
            balance,
        }
    }

    pub fn quotes(&self) -> &[Quote<'a>] {
        &self.quotes
    }

    /// Resolve the player's choice against this visit's prices.
    pub fn purchase(&self, choice: &str) -> Result<Purchase, ShopError> {
        let choice = choice.trim();
        if choice.is_empty() {
            return Ok(Purchase::Declined);
        }

        let quote = self
            .catalog
            .find_by_name(choice)
            .and_then(|item| self.quotes.iter().find(|quote| quote.item.kind == item.kind))
            .ok_or_else(|| ShopError::UnknownItem(choice.to_string()))?;

        if quote.price > self.balance {
            return Err(ShopError::Unaffordable {
                price: quote.price,
                balance: self.balance,
            });
        }

        debug!(item = quote.item.name, price = quote.price, "item purchased");
        Ok(Purchase::Bought {
            kind: quote.item.kind,
            price: quote.price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RandomSource, ScriptedSource};

    #[test]
    fn catalog_has_three_items() {
        let catalog = Catalog::default();
        assert_eq!(catalog.items().len(), 3);
        assert_eq!(
            catalog.get(ItemKind::EchoBet).map(|item| item.price_fraction),
            Some(0.40)
        );
        assert_eq!(
            catalog.find_by_name("  fortune's FAVOR ").map(|item| item.kind),
            Some(ItemKind::FortunesFavor)
        );
        assert!(catalog.find_by_name("lucky rabbit").is_none());
    }

    #[test]
    fn price_applies_fraction_and_jitter() {
        let catalog = Catalog::default();
        let dice = catalog.get(ItemKind::LoadedDice).expect("dice");
        let mut source = ScriptedSource::new([7, -10]);
        assert_eq!(price_for(dice, 500, 10, &mut source), 57);
        assert_eq!(price_for(dice, 500, 10, &mut source), 40);
    }

    #[test]
    fn price_is_never_below_one() {
        let catalog = Catalog::default();
        let mut source = RandomSource::seeded(3);
        for balance in [0, 1, 5, 20, 99, 100, 1000, 5000] {
            for item in catalog.items() {
                for _ in 0..50 {
                    assert!(price_for(item, balance, 10, &mut source) >= 1);
                }
            }
        }
    }

    #[test]
    fn declined_visit_buys_nothing() {
        let catalog = Catalog::default();
        let mut source = ScriptedSource::new([0, 0, 0]);
        let shop = Shop::open(&catalog, 100, 10, &mut source);
        assert_eq!(shop.purchase(""), Ok(Purchase::Declined));
        assert_eq!(shop.purchase("   "), Ok(Purchase::Declined));
    }

    #[test]
    fn purchase_is_case_insensitive() {
        let catalog = Catalog::default();
        let mut source = ScriptedSource::new([0, 0, 0]);
        let shop = Shop::open(&catalog, 100, 10, &mut source);
        let prices: Vec<_> = shop.quotes().iter().map(|quote| quote.price).collect();
        assert_eq!(prices, vec![10, 15, 40]);
        assert_eq!(
            shop.purchase("ECHO bet"),
            Ok(Purchase::Bought {
                kind: ItemKind::EchoBet,
                price: 40
            })
        );
        assert_eq!(
            shop.purchase("  loaded DICE \n"),
            Ok(Purchase::Bought {
                kind: ItemKind::LoadedDice,
                price: 10
            })
        );
    }

    #[test]
    fn price_saturates_on_huge_balances() {
        let catalog = Catalog::default();
        let echo = catalog.get(ItemKind::EchoBet).expect("echo");
        let mut source = ScriptedSource::new([10]);
        assert_eq!(price_for(echo, i64::MAX, 10, &mut source), i64::MAX);
    }

    #[test]
    fn unknown_and_unaffordable_items_are_rejected() {
        let catalog = Catalog::default();
        let mut source = ScriptedSource::new([10, 10, 10]);
        let shop = Shop::open(&catalog, 5, 10, &mut source);
        assert_eq!(
            shop.purchase("Rabbit Foot"),
            Err(ShopError::UnknownItem("Rabbit Foot".to_string()))
        );
        assert_eq!(
            shop.purchase("loaded dice"),
            Err(ShopError::Unaffordable {
                price: 10,
                balance: 5
            })
        );
    }
}
