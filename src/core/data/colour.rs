use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// An 8-bit-per-channel RGB colour.
///
/// Deserializes from either a sequence (`[r, g, b]`) or a map
/// (`{"r": .., "g": .., "b": ..}`); channel values outside `0..=255` are
/// rejected by the deserializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub const fn grey(value: u8) -> Self {
        Self::new(value, value, value)
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColourError {
    input: String,
}

impl fmt::Display for ParseColourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not an RGB triple of the form (r, g, b) with channels in 0..=255",
            self.input
        )
    }
}

impl Error for ParseColourError {}

/// Parses the textual `"(r, g, b)"` form. Parentheses are optional.
impl FromStr for Colour {
    type Err = ParseColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseColourError {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let channels = inner
            .split(',')
            .map(|channel| channel.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|_| error())?;

        match channels.as_slice() {
            &[r, g, b] => Ok(Self::new(r, g, b)),
            _ => Err(error()),
        }
    }
}
