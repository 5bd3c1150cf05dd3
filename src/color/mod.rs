//! Fill and stroke colors for chart datasets.
//!
//! Colors are carried as structured [`Rgba`] values and only rendered to CSS
//! strings at the edge. Preset strings supplied by the caller are reused
//! verbatim so a chart keeps its colors across rebuilds.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;

use crate::error::KortexError;

/// Alpha applied to generated fill colors.
pub const BACKGROUND_ALPHA: f64 = 0.6;

/// Alpha applied to radar fill areas.
pub const AREA_ALPHA: f64 = 0.2;

/// Generated channels stay below this bound so colors never wash out to white.
pub const CHANNEL_LIMIT: u8 = 200;

static RGBA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$",
    )
    .expect("valid rgba pattern")
});

static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{6})$").expect("valid hex pattern"));

/// An RGB color with an alpha channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Deterministic color for the `index`-th series of a radar chart.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn indexed(index: usize) -> Self {
        let limit = CHANNEL_LIMIT as usize;
        Self::new(
            ((index * 50) % limit) as u8,
            ((index * 80 + 40) % limit) as u8,
            ((index * 120 + 80) % limit) as u8,
            BACKGROUND_ALPHA,
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = KortexError;

    /// Parses `rgba(r, g, b, a)`, `rgb(r, g, b)` and `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = || KortexError::InvalidColor(s.to_string());

        if let Some(caps) = RGBA_PATTERN.captures(input) {
            let channel = |i: usize| caps[i].parse::<u8>().map_err(|_| invalid());
            let alpha = match caps.get(4) {
                Some(m) => m.as_str().parse::<f64>().map_err(|_| invalid())?,
                None => 1.0,
            };
            if !(0.0..=1.0).contains(&alpha) {
                return Err(invalid());
            }
            return Ok(Self::new(channel(1)?, channel(2)?, channel(3)?, alpha));
        }

        if let Some(caps) = HEX_PATTERN.captures(input) {
            let hex = &caps[1];
            let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| invalid());
            return Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, 1.0));
        }

        Err(invalid())
    }
}

/// Background and border colors for one dataset, one entry per point or series.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    pub background: Vec<String>,
    pub border: Vec<String>,
}

/// Rewrites a color string with a new alpha. Strings that do not parse as a
/// color are returned unchanged.
#[must_use]
pub fn restyle(color: &str, alpha: f64) -> String {
    color.parse::<Rgba>().map_or_else(
        |_| color.to_string(),
        |rgba| rgba.with_alpha(alpha).to_string(),
    )
}

/// Produces palettes, reusing caller presets when there are enough of them.
#[derive(Debug, Clone)]
pub struct ColorGenerator {
    rng: StdRng,
}

impl Default for ColorGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl ColorGenerator {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A generator that yields the same colors for the same seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn random_color(&mut self) -> Rgba {
        Rgba::new(
            self.rng.gen_range(0..CHANNEL_LIMIT),
            self.rng.gen_range(0..CHANNEL_LIMIT),
            self.rng.gen_range(0..CHANNEL_LIMIT),
            BACKGROUND_ALPHA,
        )
    }

    /// Builds `count` background/border pairs.
    ///
    /// Background presets are used when at least `count` are supplied;
    /// otherwise fresh random colors are drawn. Border presets follow the same
    /// rule; without them each border is its background at full opacity.
    pub fn generate(
        &mut self,
        count: usize,
        background_presets: &[String],
        border_presets: &[String],
    ) -> Palette {
        let background: Vec<String> = if background_presets.len() >= count {
            background_presets[..count].to_vec()
        } else {
            (0..count).map(|_| self.random_color().to_string()).collect()
        };

        let border = if border_presets.len() >= count {
            border_presets[..count].to_vec()
        } else {
            background.iter().map(|color| restyle(color, 1.0)).collect()
        };

        Palette { background, border }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
