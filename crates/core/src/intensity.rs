//! Narrative tension bands derived from the balance.

/// Flavor tier for the round banner. Has no effect on odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Intensity {
    /// First round of a game.
    Opening,
    /// Balance at or below 300.
    Low,
    /// Balance above 300.
    Rising,
    /// Balance above 500.
    High,
    /// Balance above 800.
    Fever,
}

impl Intensity {
    /// Tier for `balance`; the first round of a game always opens calmly.
    pub fn for_balance(balance: i64, first_round: bool) -> Self {
        if first_round {
            return Self::Opening;
        }
        match balance {
            b if b > 800 => Self::Fever,
            b if b > 500 => Self::High,
            b if b > 300 => Self::Rising,
            _ => Self::Low,
        }
    }

    /// Zero-based position, usable as an index into per-tier tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(Intensity::for_balance(100, false), Intensity::Low);
        assert_eq!(Intensity::for_balance(300, false), Intensity::Low);
        assert_eq!(Intensity::for_balance(301, false), Intensity::Rising);
        assert_eq!(Intensity::for_balance(501, false), Intensity::High);
        assert_eq!(Intensity::for_balance(800, false), Intensity::High);
        assert_eq!(Intensity::for_balance(801, false), Intensity::Fever);
    }

    #[test]
    fn first_round_opens() {
        assert_eq!(Intensity::for_balance(900, true), Intensity::Opening);
        assert_eq!(Intensity::Opening.index(), 0);
        assert_eq!(Intensity::Fever.index(), 4);
    }
}
