//! Balance bookkeeping and terminal-state detection for one game.

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{BetPolicy, EconomyConfig, RulesConfig};

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Rounds are still being played.
    Playing,
    /// Balance reached the target.
    Won,
    /// Balance fell to zero or below.
    Lost,
}

impl GameState {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

/// Debug tokens accepted at the bet prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheatCode {
    /// `EzWin`: jump to the win target.
    EzWin,
    /// `LoseGame`: bust immediately.
    LoseGame,
    /// `Boost`: add the configured bonus.
    Boost,
}

impl CheatCode {
    /// Match a raw token exactly; cheat tokens are case-sensitive.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "EzWin" => Some(Self::EzWin),
            "LoseGame" => Some(Self::LoseGame),
            "Boost" => Some(Self::Boost),
            _ => None,
        }
    }
}

/// A parsed answer to the bet prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetInput {
    /// A validated amount with `0 <= amount <= balance`.
    Wager(i64),
    /// A debug token that edits the balance directly.
    Cheat(CheatCode),
}

/// Why a bet was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BetError {
    /// The token is not an integer.
    #[error("'{0}' is not a number")]
    NotANumber(String),
    /// The amount is negative or exceeds the balance.
    #[error("bet {bet} must be from 0 to your total money ({balance})")]
    OutOfRange {
        /// Amount the player typed.
        bet: i64,
        /// Balance at the time of the bet.
        balance: i64,
    },
}

/// State of one game from the initial stake to a terminal state.
#[derive(Debug, Clone)]
pub struct Game {
    balance: i64,
    rounds: u32,
    win_target: i64,
    boost_amount: i64,
    busted_balance: i64,
}

impl Game {
    /// Fresh game at the configured initial stake.
    pub fn new(economy: &EconomyConfig) -> Self {
        info!(stake = economy.initial_stake, target = economy.win_target, "new game");
        Self {
            balance: economy.initial_stake,
            rounds: 0,
            win_target: economy.win_target,
            boost_amount: economy.boost_amount,
            busted_balance: economy.busted_balance,
        }
    }

    /// Current balance.
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Rounds settled so far, cheats included.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Terminal check against the current balance.
    pub fn state(&self) -> GameState {
        if self.balance >= self.win_target {
            GameState::Won
        } else if self.balance <= 0 {
            GameState::Lost
        } else {
            GameState::Playing
        }
    }

    /// Interpret a bet prompt token against the current balance.
    pub fn parse_bet(&self, raw: &str, rules: &RulesConfig) -> Result<BetInput, BetError> {
        let token = raw.trim();
        if rules.cheats_enabled {
            if let Some(code) = CheatCode::parse(token) {
                return Ok(BetInput::Cheat(code));
            }
        }

        let bet = token
            .parse::<i64>()
            .map_err(|_| BetError::NotANumber(token.to_string()))?;

        if (0..=self.balance).contains(&bet) {
            return Ok(BetInput::Wager(bet));
        }
        match rules.bet_policy {
            BetPolicy::Clamp => Ok(BetInput::Wager(bet.clamp(0, self.balance.max(0)))),
            BetPolicy::Reprompt | BetPolicy::Restart => Err(BetError::OutOfRange {
                bet,
                balance: self.balance,
            }),
        }
    }

    /// Apply a cheat token; it bypasses the wheel entirely.
    pub fn apply_cheat(&mut self, code: CheatCode) {
        self.balance = match code {
            CheatCode::EzWin => self.win_target,
            CheatCode::LoseGame => self.busted_balance,
            CheatCode::Boost => self.balance.saturating_add(self.boost_amount),
        };
        self.rounds += 1;
        info!(?code, balance = self.balance, "cheat applied");
    }

    /// Deduct a shop purchase.
    pub fn spend(&mut self, price: i64) {
        self.balance = self.balance.saturating_sub(price);
        debug!(price, balance = self.balance, "purchase deducted");
    }

    /// Apply the earnings of a resolved round.
    pub fn settle(&mut self, earnings: i64) -> GameState {
        self.balance = self.balance.saturating_add(earnings);
        self.rounds += 1;
        let state = self.state();
        debug!(earnings, balance = self.balance, round = self.rounds, ?state, "round settled");
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(&EconomyConfig::default())
    }

    #[test]
    fn new_game_starts_at_the_stake() {
        let game = game();
        assert_eq!(game.balance(), 100);
        assert_eq!(game.rounds(), 0);
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn terminal_states_follow_the_balance() {
        let mut game = game();
        assert_eq!(game.settle(-100), GameState::Lost);
        assert!(game.state().is_terminal());

        let mut game = Game::new(&EconomyConfig::default());
        assert_eq!(game.settle(900), GameState::Won);
        assert_eq!(game.rounds(), 1);
    }

    #[test]
    fn replay_resets_the_balance() {
        let economy = EconomyConfig::default();
        let mut first = Game::new(&economy);
        first.settle(-250);
        assert_eq!(first.state(), GameState::Lost);
        let second = Game::new(&economy);
        assert_eq!(second.balance(), economy.initial_stake);
        assert_eq!(second.rounds(), 0);
    }

    #[test]
    fn valid_bets_parse() {
        let game = game();
        let rules = RulesConfig::default();
        assert_eq!(game.parse_bet("50", &rules), Ok(BetInput::Wager(50)));
        assert_eq!(game.parse_bet(" 0 ", &rules), Ok(BetInput::Wager(0)));
        assert_eq!(game.parse_bet("100", &rules), Ok(BetInput::Wager(100)));
    }

    #[test]
    fn malformed_and_out_of_range_bets_fail() {
        let game = game();
        let rules = RulesConfig::default();
        assert_eq!(
            game.parse_bet("lots", &rules),
            Err(BetError::NotANumber("lots".to_string()))
        );
        assert_eq!(
            game.parse_bet("101", &rules),
            Err(BetError::OutOfRange {
                bet: 101,
                balance: 100
            })
        );
        assert!(game.parse_bet("-5", &rules).is_err());
    }

    #[test]
    fn clamp_policy_bounds_numeric_bets() {
        let game = game();
        let rules = RulesConfig {
            bet_policy: BetPolicy::Clamp,
            ..RulesConfig::default()
        };
        assert_eq!(game.parse_bet("500", &rules), Ok(BetInput::Wager(100)));
        assert_eq!(game.parse_bet("-5", &rules), Ok(BetInput::Wager(0)));
        assert!(game.parse_bet("abc", &rules).is_err());
    }

    #[test]
    fn cheats_bypass_the_wheel() {
        let rules = RulesConfig::default();
        let mut game = game();
        assert_eq!(
            game.parse_bet("EzWin", &rules),
            Ok(BetInput::Cheat(CheatCode::EzWin))
        );
        game.apply_cheat(CheatCode::EzWin);
        assert_eq!(game.balance(), 1000);
        assert_eq!(game.state(), GameState::Won);

        let mut game = Game::new(&EconomyConfig::default());
        game.apply_cheat(CheatCode::Boost);
        assert_eq!(game.balance(), 400);
        game.apply_cheat(CheatCode::LoseGame);
        assert_eq!(game.balance(), -1);
        assert_eq!(game.state(), GameState::Lost);
    }

    #[test]
    fn cheats_are_case_sensitive_and_can_be_disabled() {
        let game = game();
        let rules = RulesConfig::default();
        assert!(game.parse_bet("ezwin", &rules).is_err());

        let locked = RulesConfig {
            cheats_enabled: false,
            ..RulesConfig::default()
        };
        assert_eq!(
            game.parse_bet("EzWin", &locked),
            Err(BetError::NotANumber("EzWin".to_string()))
        );
    }

    #[test]
    fn extreme_amounts_saturate() {
        let economy = EconomyConfig {
            win_target: i64::MAX,
            boost_amount: i64::MAX,
            ..EconomyConfig::default()
        };
        let mut game = Game::new(&economy);
        game.apply_cheat(CheatCode::Boost);
        assert_eq!(game.balance(), i64::MAX);
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.settle(i64::MAX), GameState::Won);
        assert_eq!(game.balance(), i64::MAX);
    }

    #[test]
    fn spending_reduces_the_balance() {
        let mut game = game();
        game.spend(15);
        assert_eq!(game.balance(), 85);
        assert_eq!(game.rounds(), 0);
    }
}
