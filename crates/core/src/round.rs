//! Resolution of a single spin.

use tracing::debug;

use crate::{config::EconomyConfig, items::ItemKind, rng::OutcomeSource};

/// Face of the wheel that loses the bet.
pub const LOSING_FACE: i64 = 1;

/// What happened on one spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Face the wheel landed on.
    pub roll: i64,
    /// Whether the bet was lost after item effects.
    pub lost: bool,
    /// Item whose effect fired this round, if any.
    pub activated: Option<ItemKind>,
    /// Balance delta to apply.
    pub earnings: i64,
}

/// Applies the wheel odds, item effects and payout multipliers.
#[derive(Debug, Clone)]
pub struct RoundResolver {
    wheel_max: i64,
    loss_multiplier: f64,
    win_multiplier: f64,
    echo_factor: i64,
}

impl RoundResolver {
    /// Resolver using the multipliers of `economy`.
    pub fn new(economy: &EconomyConfig) -> Self {
        Self {
            wheel_max: economy.wheel_max,
            loss_multiplier: economy.loss_multiplier,
            win_multiplier: economy.win_multiplier,
            echo_factor: economy.echo_factor,
        }
    }

    /// Highest face of the wheel.
    pub fn wheel_max(&self) -> i64 {
        self.wheel_max
    }

    /// Spin the wheel for `bet`.
    ///
    /// `avoid` is the face named for Loaded Dice and is ignored for other items.
    pub fn resolve(
        &self,
        bet: i64,
        active: Option<ItemKind>,
        avoid: Option<i64>,
        source: &mut dyn OutcomeSource,
    ) -> RoundOutcome {
        let roll = source.draw(1, self.wheel_max);
        let mut lost = roll == LOSING_FACE;
        let mut activated = None;

        match active {
            Some(ItemKind::LoadedDice) if lost && avoid == Some(roll) => {
                lost = false;
                activated = Some(ItemKind::LoadedDice);
            }
            Some(ItemKind::FortunesFavor) if lost => {
                if source.draw(1, 2) == 1 {
                    lost = false;
                    activated = Some(ItemKind::FortunesFavor);
                }
            }
            _ => {}
        }

        let earnings = if lost {
            -scale(bet, self.loss_multiplier)
        } else {
            let mut won = scale(bet, self.win_multiplier);
            if active == Some(ItemKind::EchoBet) {
                won = won.saturating_mul(self.echo_factor);
                activated = Some(ItemKind::EchoBet);
            }
            won
        };

        debug!(bet, roll, lost, ?active, ?activated, earnings, "round resolved");
        RoundOutcome {
            roll,
            lost,
            activated,
            earnings,
        }
    }
}

// Float-to-int `as` saturates at the i64 bounds.
fn scale(bet: i64, multiplier: f64) -> i64 {
    (bet as f64 * multiplier).floor() as i64
}
