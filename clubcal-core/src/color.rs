//! Stable colors per discipline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Colors handed out to disciplines when the config doesn't set a palette.
pub const DEFAULT_PALETTE: [HexColor; 10] = [
    HexColor::new(0x3b, 0x82, 0xf6),
    HexColor::new(0x10, 0xb9, 0x81),
    HexColor::new(0xf5, 0x9e, 0x0b),
    HexColor::new(0xef, 0x44, 0x44),
    HexColor::new(0x8b, 0x5c, 0xf6),
    HexColor::new(0xec, 0x48, 0x99),
    HexColor::new(0x14, 0xb8, 0xa6),
    HexColor::new(0xf9, 0x73, 0x16),
    HexColor::new(0x63, 0x66, 0xf1),
    HexColor::new(0x84, 0xcc, 0x16),
];

/// Pick the palette entry for `name`.
///
/// Same name, same entry, every run. Empty names get the first entry; an
/// empty palette has nothing to give.
pub fn color_for<'p, T>(name: &str, palette: &'p [T]) -> Option<&'p T> {
    if palette.is_empty() {
        return None;
    }
    if name.is_empty() {
        return palette.first();
    }
    palette.get(palette_index(name, palette.len()))
}

fn palette_index(name: &str, len: usize) -> usize {
    (name_hash(name) as usize) % len
}

/// Polynomial rolling hash, base 31.
fn name_hash(name: &str) -> u32 {
    name.chars()
        .fold(0u32, |hash, c| hash.wrapping_mul(31).wrapping_add(c as u32))
}

/// An sRGB color written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        HexColor { r, g, b }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid color '{}'. Expected #rrggbb", s));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        Ok(HexColor::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
