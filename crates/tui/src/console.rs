use std::{
    io::{BufRead, Write},
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use jackroulette_core::{PacingConfig, Rgb};
use thiserror::Error;

/// Raised when the input stream reaches end of file.
#[derive(Debug, Error)]
#[error("input stream closed")]
pub struct InputClosed;

pub struct Console<R, W> {
    input: R,
    output: W,
    pacing: PacingConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, pacing: PacingConfig) -> Self {
        Self {
            input,
            output,
            pacing,
        }
    }

    pub fn pacing(&self) -> &PacingConfig {
        &self.pacing
    }

    pub fn say(&mut self, text: &str, color: Rgb) -> Result<()> {
        queue!(
            self.output,
            SetForegroundColor(to_color(color)),
            Print(text),
            ResetColor
        )
        .context("failed to write to terminal")?;
        self.output.flush().context("failed to flush terminal")
    }

    pub fn typewrite(&mut self, text: &str, color: Rgb) -> Result<()> {
        if self.pacing.typewriter_ms == 0 {
            return self.say(text, color);
        }
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            self.say(ch.encode_utf8(&mut buf), color)?;
            self.pause(self.pacing.typewriter_ms);
        }
        Ok(())
    }

    pub fn pause(&self, millis: u64) {
        if millis > 0 {
            thread::sleep(Duration::from_millis(millis));
        }
    }

    pub fn clear(&mut self) -> Result<()> {
        queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))
            .context("failed to clear terminal")?;
        self.output.flush().context("failed to flush terminal")
    }

    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Err(InputClosed.into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn read_token(&mut self) -> Result<String> {
        let line = self.read_line()?;
        Ok(line.split_whitespace().next().unwrap_or_default().to_string())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
