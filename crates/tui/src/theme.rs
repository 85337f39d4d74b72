use jackroulette_core::{Palette, Rgb};

#[derive(Debug, Clone)]
pub struct Theme {
    pub banner: Rgb,
    pub narration: Rgb,
    pub balance: Rgb,
    pub prompt: Rgb,
    pub success: Rgb,
    pub danger: Rgb,
    pub item: Rgb,
    pub tutorial: Rgb,
    pub travel: Rgb,
}

impl Theme {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            banner: palette.color("white"),
            narration: palette.color("gray"),
            balance: palette.color("cyan"),
            prompt: palette.color("yellow"),
            success: palette.color("green"),
            danger: palette.color("red"),
            item: palette.color("blue"),
            tutorial: palette.color("white"),
            travel: palette.color("purple"),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&Palette::default())
    }
}
