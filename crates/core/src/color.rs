//! 8-bit RGB colors and the editable color model behind the picker.
//!
//! [`Rgb`] is a plain value with hex and `rgb(...)` encodings.
//! [`ColorModel`] is the picker state: a current color plus the saved
//! [`Palette`]. It has two validation policies:
//!
//! - channel sets are strict and reject values outside [0, 255];
//! - hex edits are lenient and ignore malformed text without error, since
//!   they arrive keystroke by keystroke from a live text field.

use crate::error::ToolkitError;
use crate::palette::Palette;
use crate::prng::Xorshift64;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One of the three color components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Parses `red`/`green`/`blue` or the single letters `r`/`g`/`b`
    /// (case insensitive).
    pub fn from_name(name: &str) -> Option<Channel> {
        match name.to_ascii_lowercase().as_str() {
            "red" | "r" => Some(Channel::Red),
            "green" | "g" => Some(Channel::Green),
            "blue" | "b" => Some(Channel::Blue),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 8-bit sRGB color.
///
/// Serializes as a hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Mid gray, the picker's starting color.
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `"#rrggbb"`: exactly seven characters, a leading `#`, then six
    /// hex digits in either case.
    ///
    /// Returns `None` for anything else. Use [`Rgb::from_hex_strict`] when
    /// a malformed string should be an error.
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Rgb {
            red: channel(0)?,
            green: channel(2)?,
            blue: channel(4)?,
        })
    }

    /// Like [`Rgb::from_hex`], but reports malformed input as
    /// `ToolkitError::InvalidValue`.
    pub fn from_hex_strict(hex: &str) -> Result<Rgb, ToolkitError> {
        Rgb::from_hex(hex).ok_or_else(|| ToolkitError::InvalidValue(hex.to_string()))
    }

    /// Lowercase, zero-padded `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// `"rgb(r, g, b)"` with decimal components.
    pub fn to_rgb_string(self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }

    pub fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    fn with_channel(mut self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
        self
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::GRAY
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex_strict(&s).map_err(serde::de::Error::custom)
    }
}

/// Picker state: the current color and the saved palette.
#[derive(Debug, Clone, Default)]
pub struct ColorModel {
    current: Rgb,
    palette: Palette,
}

impl ColorModel {
    /// Creates a model showing `initial` with an empty palette.
    pub fn new(initial: Rgb) -> Self {
        Self {
            current: initial,
            palette: Palette::new(),
        }
    }

    pub fn rgb(&self) -> Rgb {
        self.current
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Sets one channel.
    ///
    /// Returns `ToolkitError::OutOfRange` and leaves the color unchanged if
    /// `value` is outside [0, 255].
    pub fn set_channel(&mut self, channel: Channel, value: i64) -> Result<(), ToolkitError> {
        let value = u8::try_from(value).map_err(|_| ToolkitError::OutOfRange {
            channel: channel.name().to_string(),
            value,
        })?;
        self.current = self.current.with_channel(channel, value);
        Ok(())
    }

    /// Replaces all three channels from a `"#rrggbb"` string.
    ///
    /// Malformed input is ignored: the color stays as it was and no error is
    /// raised. Returns whether the edit was applied.
    pub fn set_from_hex(&mut self, hex: &str) -> bool {
        match Rgb::from_hex(hex) {
            Some(rgb) => {
                self.current = rgb;
                true
            }
            None => {
                tracing::debug!(input = hex, "ignoring malformed hex edit");
                false
            }
        }
    }

    pub fn to_hex(&self) -> String {
        self.current.to_hex()
    }

    pub fn to_rgb_string(&self) -> String {
        self.current.to_rgb_string()
    }

    /// Draws each channel independently and uniformly from [0, 255].
    pub fn randomize(&mut self, rng: &mut Xorshift64) {
        self.current = Rgb::new(rng.next_u8(), rng.next_u8(), rng.next_u8());
    }

    /// Appends the current hex color to the palette and returns it.
    pub fn save_to_palette(&mut self) -> String {
        let hex = self.to_hex();
        self.palette.push(hex.clone());
        hex
    }

    /// Restores a saved color. Same policy as [`ColorModel::set_from_hex`].
    pub fn load_from_palette(&mut self, hex: &str) -> bool {
        self.set_from_hex(hex)
    }
}
