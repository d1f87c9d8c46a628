//! Colors and the pad palette.
//!
//! Colors travel in the `"R, G, B"` textual form so that an opacity can be
//! appended when a CSS `rgba(...)` string is composed at draw time.

use crate::constants::{DEFAULT_COLOR, DEFAULT_PALETTE};
use crate::error::FxError;
use fnv::FnvHashMap;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pair this color with an alpha channel.
    #[inline]
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba { rgb: self, alpha }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [r, g, b] = parts[..] else {
            return Err(FxError::InvalidColor(s.to_string()));
        };
        let channel = |c: &str| {
            c.parse::<u8>()
                .map_err(|_| FxError::ChannelOutOfRange(c.to_string()))
        };
        Ok(Self::new(channel(r)?, channel(g)?, channel(b)?))
    }
}

/// A color with an alpha channel in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    /// CSS color string, e.g. `rgba(231, 76, 60, 0.5)`.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {})", self.rgb, self.alpha)
    }
}

/// Mapping from pad identity to color.
#[derive(Clone, Debug)]
pub struct Palette {
    entries: FnvHashMap<String, Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_entries(
            DEFAULT_PALETTE
                .iter()
                .map(|(name, rgb)| (name.to_string(), *rgb)),
        )
    }
}

impl Palette {
    pub fn empty() -> Self {
        Self {
            entries: FnvHashMap::default(),
        }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, Rgb)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Parse a JSON object of `"identity": "R, G, B"` pairs.
    pub fn from_json(json: &str) -> Result<Self, FxError> {
        let raw: BTreeMap<String, String> =
            serde_json::from_str(json).map_err(|e| FxError::Palette(e.to_string()))?;
        let mut entries = FnvHashMap::default();
        for (identity, color) in raw {
            entries.insert(identity, color.parse::<Rgb>()?);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, identity: &str) -> Option<Rgb> {
        self.entries.get(identity).copied()
    }

    /// Color for `identity`, or white when the identity is unknown.
    pub fn resolve(&self, identity: &str) -> Rgb {
        match self.get(identity) {
            Some(rgb) => rgb,
            None => {
                log::warn!("no palette entry for pad {:?}; using default", identity);
                DEFAULT_COLOR
            }
        }
    }

    /// First of `classes` that names a palette entry.
    pub fn find_identity<'a>(&self, classes: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
        classes
            .into_iter()
            .find(|c| self.entries.contains_key(*c))
    }
}
