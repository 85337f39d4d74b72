//! Layered game configuration.
//!
//! Values come from built-in defaults, an optional TOML file under the user's
//! config directory and `JACKROULETTE_*` environment overrides, in that order.

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Directory under `~/.config` that may hold `config.toml`.
pub const CONFIG_DIR: &str = "jackroulette";
/// File name of the optional configuration file.
pub const CONFIG_FILE: &str = "config.toml";
/// Prefix for environment overrides, e.g. `JACKROULETTE_ECONOMY__WIN_TARGET`.
pub const ENV_PREFIX: &str = "JACKROULETTE";
/// Upper bound for payout multipliers and the echo factor.
pub const MAX_MULTIPLIER: i64 = 100;

/// Top-level configuration for a play session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Money rules: stakes, targets, multipliers.
    pub economy: EconomyConfig,
    /// Input handling rules.
    pub rules: RulesConfig,
    /// Delays used by the console presentation.
    pub pacing: PacingConfig,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

/// Constants of the betting economy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// Balance at the start of every game.
    pub initial_stake: i64,
    /// Balance that wins the game.
    pub win_target: i64,
    /// Highest face of the wheel; face 1 loses.
    pub wheel_max: i64,
    /// Fraction of the bet lost on a losing spin.
    pub loss_multiplier: f64,
    /// Fraction of the bet won on a winning spin.
    pub win_multiplier: f64,
    /// Winnings factor applied while Echo Bet is held.
    pub echo_factor: i64,
    /// Magnitude of the uniform jitter added to shop prices.
    pub price_jitter: i64,
    /// Amount added by the `Boost` token.
    pub boost_amount: i64,
    /// Balance forced by the `LoseGame` token.
    pub busted_balance: i64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            initial_stake: 100,
            win_target: 1000,
            wheel_max: 4,
            loss_multiplier: 2.0,
            win_multiplier: 1.0,
            echo_factor: 2,
            price_jitter: 10,
            boost_amount: 300,
            busted_balance: -1,
        }
    }
}

/// How an out-of-range or malformed bet is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetPolicy {
    /// Warn and ask for the bet again, keeping the purchased item.
    #[default]
    Reprompt,
    /// Warn and start the round over; a purchased item is forfeited.
    Restart,
    /// Clamp numeric bets into `[0, balance]` without a warning.
    Clamp,
}

/// Input handling rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Reaction to invalid bets.
    pub bet_policy: BetPolicy,
    /// Whether `EzWin`, `LoseGame` and `Boost` are honoured at the bet prompt.
    pub cheats_enabled: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            bet_policy: BetPolicy::default(),
            cheats_enabled: true,
        }
    }
}

/// Presentation delays, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Per-character delay of the typewriter effect.
    pub typewriter_ms: u64,
    /// Pause between tutorial lines.
    pub line_ms: u64,
    /// Short dramatic pause.
    pub beat_ms: u64,
    /// How long warnings stay on screen before a redraw.
    pub warning_ms: u64,
    /// Delay between dots of the travel animation.
    pub travel_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            typewriter_ms: 100,
            line_ms: 1000,
            beat_ms: 2000,
            warning_ms: 2000,
            travel_ms: 500,
        }
    }
}

impl PacingConfig {
    /// Pacing with every delay disabled.
    pub fn instant() -> Self {
        Self {
            typewriter_ms: 0,
            line_ms: 0,
            beat_ms: 0,
            warning_ms: 0,
            travel_ms: 0,
        }
    }
}

impl AppConfig {
    /// Load configuration using `path` as the optional file layer.
    pub fn load_from(path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path.as_deref() {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .context("failed to read configuration sources")?
            .try_deserialize()
            .context("failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the game unplayable.
    pub fn validate(&self) -> Result<()> {
        let economy = &self.economy;
        ensure!(
            economy.initial_stake > 0,
            "initial_stake must be positive (got {})",
            economy.initial_stake
        );
        ensure!(
            economy.win_target > economy.initial_stake,
            "win_target {} must exceed initial_stake {}",
            economy.win_target,
            economy.initial_stake
        );
        ensure!(
            economy.wheel_max >= 2,
            "wheel_max must be at least 2 (got {})",
            economy.wheel_max
        );
        for (name, value) in [
            ("loss_multiplier", economy.loss_multiplier),
            ("win_multiplier", economy.win_multiplier),
        ] {
            ensure!(
                (0.0..=MAX_MULTIPLIER as f64).contains(&value),
                "{name} must be between 0 and {MAX_MULTIPLIER} (got {value})"
            );
        }
        ensure!(
            (1..=MAX_MULTIPLIER).contains(&economy.echo_factor),
            "echo_factor must be between 1 and {MAX_MULTIPLIER} (got {})",
            economy.echo_factor
        );
        ensure!(
            (0..=economy.win_target).contains(&economy.price_jitter),
            "price_jitter must be between 0 and win_target (got {})",
            economy.price_jitter
        );
        ensure!(
            (0..=economy.win_target).contains(&economy.boost_amount),
            "boost_amount must be between 0 and win_target (got {})",
            economy.boost_amount
        );
        ensure!(
            economy.busted_balance <= 0,
            "busted_balance must end the game (got {})",
            economy.busted_balance
        );
        Ok(())
    }
}

/// Location of the optional configuration file, if a config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Whether a configuration file is present at `path`.
pub fn config_file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}
