use jackroulette_core::Intensity;

pub const HEADER: &str = "\n--------JackRoulette--------\n";
pub const CONTINUE: &str = "Enter any input to continue:";
pub const INTRO: &str = "You've entered a world where chance is king and risk is the price of power.\nStart with a modest sum, claw your way to $1000, and bend fortune to your will...\nIf it doesn't break you first...";

#[derive(Debug, Clone)]
pub struct Script {
    pub tutorial: Vec<&'static str>,
    dialogue: [&'static str; 5],
}

impl Default for Script {
    fn default() -> Self {
        Self {
            tutorial: vec![
                "You start with a fixed amount of money.",
                "Your goal is to reach $1000.",
                "Each round, place a bet of your choosing.",
                "There's a 1 in 4 chance to lose your bet.",
                "You can buy buffs to reduce your odds of losing or manipulate the outcome.",
                "Winning adds cash. Losing subtracts a lot more.",
                "Spend wisely, bet strategically.",
            ],
            dialogue: [
                "The dealer eyes you up and down, ready to spin the wheel.",
                "A hush falls over the table as you place your bet.",
                "You feel your luck's about to shift. You just don't know which way.",
                "Every click of the wheel hits like a heartbeat in your skull.",
                "You're one bet away from something. You just don't know what.",
            ],
        }
    }
}

impl Script {
    pub fn dialogue(&self, intensity: Intensity) -> &'static str {
        self.dialogue[intensity.index()]
    }
}
