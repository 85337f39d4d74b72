#![warn(clippy::all, missing_docs)]

//! Core rules for JackRoulette.
//!
//! This crate hosts the configuration, outcome sources, item shop,
//! round resolution and game state used by the terminal frontend.

pub mod config;
pub mod game;
pub mod intensity;
pub mod items;
pub mod palette;
pub mod rng;
pub mod round;

pub use config::{AppConfig, BetPolicy, EconomyConfig, PacingConfig, RulesConfig};
pub use game::{BetError, BetInput, CheatCode, Game, GameState};
pub use intensity::Intensity;
pub use items::{Catalog, Item, ItemKind, Purchase, Shop, ShopError};
pub use palette::{Palette, Rgb};
pub use rng::{OutcomeSource, RandomSource, ScriptedSource};
pub use round::{RoundOutcome, RoundResolver};
