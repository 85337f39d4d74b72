use std::io::{BufRead, Write};

use anyhow::Result;
use jackroulette_core::{
    AppConfig, BetInput, BetPolicy, Catalog, Game, GameState, Intensity, ItemKind, OutcomeSource,
    Palette, Purchase, RoundResolver, Shop, ShopError,
};
use tracing::{debug, info, warn};

use crate::{
    console::{Console, InputClosed},
    script::{self, Script},
    theme::Theme,
};

pub struct RouletteApp<R, W, S> {
    console: Console<R, W>,
    config: AppConfig,
    catalog: Catalog,
    resolver: RoundResolver,
    script: Script,
    theme: Theme,
    source: S,
    games_played: u32,
}

impl<R: BufRead, W: Write, S: OutcomeSource> RouletteApp<R, W, S> {
    pub fn new(console: Console<R, W>, config: AppConfig, source: S) -> Self {
        let resolver = RoundResolver::new(&config.economy);
        Self {
            console,
            resolver,
            config,
            catalog: Catalog::default(),
            script: Script::default(),
            theme: Theme::from_palette(&Palette::default()),
            source,
            games_played: 0,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        match self.session() {
            Err(err) if err.is::<InputClosed>() => {
                info!(games = self.games_played, "input closed; leaving the table");
                Ok(())
            }
            other => other,
        }
    }

    fn session(&mut self) -> Result<()> {
        self.tutorial()?;
        loop {
            let outcome = self.play_game()?;
            self.games_played += 1;
            info!(?outcome, games = self.games_played, "game finished");
            if !self.ask_replay()? {
                break;
            }
        }
        self.farewell()
    }

    fn tutorial(&mut self) -> Result<()> {
        let pacing = self.console.pacing().clone();
        self.console
            .say(&format!("{}\n", script::INTRO), self.theme.balance)?;
        self.console
            .say("Would you like a tutorial? (y/n):", self.theme.prompt)?;
        if is_yes(&self.console.read_token()?) {
            for line in &self.script.tutorial {
                self.console
                    .say(&format!("{line}\n"), self.theme.tutorial)?;
                self.console.pause(pacing.line_ms);
            }
        } else {
            self.console
                .say("Let's get this party started!\n", self.theme.success)?;
        }
        self.console.pause(pacing.beat_ms);

        self.console
            .say("Traveling to the casino", self.theme.travel)?;
        for dot in [".", ".", ".\n"] {
            self.console.pause(pacing.travel_ms);
            self.console.say(dot, self.theme.travel)?;
        }
        self.console.pause(pacing.line_ms);
        Ok(())
    }

    fn play_game(&mut self) -> Result<GameState> {
        let mut game = Game::new(&self.config.economy);
        self.redraw()?;
        loop {
            match game.state() {
                state if state.is_terminal() => {
                    self.announce(state, &game)?;
                    return Ok(state);
                }
                _ => self.play_round(&mut game)?,
            }
        }
    }

    fn play_round(&mut self, game: &mut Game) -> Result<()> {
        let intensity = Intensity::for_balance(game.balance(), game.rounds() == 0);
        let dialogue = self.script.dialogue(intensity);
        self.show_table(dialogue, game.balance())?;

        self.console.say(
            "\nDo you want to visit the shop before placing your bet? (y/n) ",
            self.theme.prompt,
        )?;
        let active = if is_yes(&self.console.read_token()?) {
            self.visit_shop(game)?
        } else {
            self.console.say(
                "You ignore the strange merchant lingering in the corner...\n",
                self.theme.narration,
            )?;
            self.console.pause(self.config.pacing.beat_ms);
            None
        };

        loop {
            self.redraw()?;
            if let Some(item) = active.and_then(|kind| self.catalog.get(kind)) {
                self.console
                    .say(&format!("You purchased {}\n", item.name), self.theme.balance)?;
            }
            self.show_table(dialogue, game.balance())?;
            self.console.say("\nPlace your bet: ", self.theme.prompt)?;
            let raw = self.console.read_token()?;

            match game.parse_bet(&raw, &self.config.rules) {
                Ok(BetInput::Cheat(code)) => {
                    game.apply_cheat(code);
                    return self.redraw();
                }
                Ok(BetInput::Wager(bet)) => return self.spin(game, bet, active),
                Err(err) => {
                    warn!(%err, input = %raw, "bet rejected");
                    self.console
                        .say("Warning: Invalid input detected!", self.theme.danger)?;
                    self.console.pause(self.config.pacing.warning_ms);
                    if self.config.rules.bet_policy == BetPolicy::Restart {
                        return self.redraw();
                    }
                }
            }
        }
    }

    fn visit_shop(&mut self, game: &mut Game) -> Result<Option<ItemKind>> {
        let Self {
            console,
            catalog,
            source,
            theme,
            config,
            ..
        } = self;
        let shop = Shop::open(catalog, game.balance(), config.economy.price_jitter, source);

        console.say(
            "\n🛒 Welcome to the Shop! Choose one item to aid your next bet.\n",
            theme.banner,
        )?;
        for quote in shop.quotes() {
            let item = quote.item;
            console.say(
                &format!(
                    "\n- {}\n  Effect: {}\n  {}\n  💸 Price: ${}\n",
                    item.name, item.effect, item.description, quote.price
                ),
                theme.tutorial,
            )?;
        }
        console.say(
            "\nEnter the name of the item you want to buy (or press Enter to skip): ",
            theme.prompt,
        )?;
        let choice = console.read_line()?;

        let active = match shop.purchase(&choice) {
            Ok(Purchase::Declined) => {
                console.say("You walk away empty-handed... for now.\n", theme.narration)?;
                None
            }
            Ok(Purchase::Bought { kind, price }) => {
                game.spend(price);
                console.say(
                    &format!("You purchased '{}' for ${price}.\n", choice.trim()),
                    theme.balance,
                )?;
                Some(kind)
            }
            Err(ShopError::Unaffordable { price, balance }) => {
                debug!(price, balance, "purchase refused");
                console.say("You can't afford that. Maybe next round.\n", theme.danger)?;
                None
            }
            Err(err @ ShopError::UnknownItem(_)) => {
                debug!(%err, "purchase refused");
                console.say("That item isn't for sale right now.\n", theme.danger)?;
                None
            }
        };
        console.pause(config.pacing.beat_ms);
        Ok(active)
    }

    fn spin(&mut self, game: &mut Game, bet: i64, active: Option<ItemKind>) -> Result<()> {
        let avoid = match active {
            Some(ItemKind::LoadedDice) => Some(self.ask_avoid_number()?),
            _ => None,
        };
        let outcome = self
            .resolver
            .resolve(bet, active, avoid, &mut self.source);

        if let Some(item) = outcome.activated.and_then(|kind| self.catalog.get(kind)) {
            self.console
                .say(&format!("🜲 {}\n", item.activation), self.theme.item)?;
            if item.kind == ItemKind::LoadedDice {
                self.console.say(
                    &format!("The die shatters on {}.\n", outcome.roll),
                    self.theme.item,
                )?;
            }
        }

        if outcome.lost {
            self.console.say(
                &format!("The wheel betrays you. You lose ${}\n", -outcome.earnings),
                self.theme.danger,
            )?;
        } else {
            self.console.say(
                &format!("The wheel lands in your favor. You win ${}\n", outcome.earnings),
                self.theme.success,
            )?;
        }
        game.settle(outcome.earnings);

        self.prompt_continue()?;
        self.redraw()
    }

    fn ask_avoid_number(&mut self) -> Result<i64> {
        let wheel_max = self.resolver.wheel_max();
        loop {
            self.console.say(
                &format!("\nThe loaded dice rattle in your palm. Name a number from 1 to {wheel_max} to avoid: "),
                self.theme.prompt,
            )?;
            let token = self.console.read_token()?;
            match token.parse::<i64>() {
                Ok(face) if (1..=wheel_max).contains(&face) => return Ok(face),
                _ => {
                    warn!(input = %token, "avoid number rejected");
                    self.console
                        .say("That number isn't on the wheel.", self.theme.danger)?;
                }
            }
        }
    }

    fn prompt_continue(&mut self) -> Result<()> {
        self.console.typewrite(script::CONTINUE, self.theme.prompt)?;
        self.console.read_line()?;
        Ok(())
    }

    fn announce(&mut self, state: GameState, game: &Game) -> Result<()> {
        match state {
            GameState::Won => self.console.say(
                &format!(
                    "You walked in with ${} and walk out with ${}. The house bows to you.\n",
                    self.config.economy.initial_stake,
                    game.balance()
                ),
                self.theme.success,
            ),
            GameState::Lost => self.console.say(
                "You're broke. The wheel keeps spinning without you.\n",
                self.theme.danger,
            ),
            GameState::Playing => Ok(()),
        }
    }

    fn ask_replay(&mut self) -> Result<bool> {
        self.console.say("Play again? (y/n): ", self.theme.prompt)?;
        Ok(is_yes(&self.console.read_token()?))
    }

    fn farewell(&mut self) -> Result<()> {
        self.console.say(
            "\nFarewell friend, may the odds be forever in your favour\n",
            self.theme.narration,
        )?;
        self.console.pause(self.config.pacing.beat_ms);
        self.console.say(
            "And remember, 99% of gamblers quit before they win big...\n",
            self.theme.narration,
        )
    }

    fn show_table(&mut self, dialogue: &str, balance: i64) -> Result<()> {
        self.console.say(dialogue, self.theme.narration)?;
        self.console
            .say(&format!("\nYour current money: {balance}"), self.theme.balance)
    }

    fn redraw(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.say(script::HEADER, self.theme.banner)
    }

    #[cfg(test)]
    fn into_console(self) -> Console<R, W> {
        self.console
    }
}

fn is_yes(token: &str) -> bool {
    token.eq_ignore_ascii_case("y") || token.eq_ignore_ascii_case("yes")
}
