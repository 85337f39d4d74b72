//! Named colors used by the console frontend.

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Construct a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fallback for names missing from the table.
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Fixed table mapping color names to RGB values.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<(&'static str, Rgb)>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: vec![
                ("red", Rgb::new(255, 0, 0)),
                ("green", Rgb::new(0, 255, 0)),
                ("yellow", Rgb::new(255, 255, 0)),
                ("blue", Rgb::new(0, 128, 255)),
                ("cyan", Rgb::new(0, 255, 255)),
                ("magenta", Rgb::new(255, 0, 255)),
                ("white", WHITE),
                ("gray", Rgb::new(128, 128, 128)),
                ("black", Rgb::new(0, 0, 0)),
                ("orange", Rgb::new(255, 165, 0)),
                ("purple", Rgb::new(255, 10, 255)),
                ("pink", Rgb::new(255, 105, 180)),
            ],
        }
    }
}

impl Palette {
    /// Look up `name`, defaulting to white for unknown names.
    pub fn color(&self, name: &str) -> Rgb {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, rgb)| *rgb)
            .unwrap_or(WHITE)
    }
}
