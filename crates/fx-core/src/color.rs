use crate::error::{FxError, Result};

/// 8-bit sRGB colour.
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

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(FxError::InvalidColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| FxError::InvalidColor(hex.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn rgba(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

pub const INDIGO: Rgb = Rgb::new(0x63, 0x66, 0xf1);
pub const PINK: Rgb = Rgb::new(0xec, 0x48, 0x99);
pub const CYAN: Rgb = Rgb::new(0x06, 0xb6, 0xd4);
pub const PURPLE: Rgb = Rgb::new(0x8b, 0x5c, 0xf6);
pub const AMBER: Rgb = Rgb::new(0xf5, 0x9e, 0x0b);
pub const EMERALD: Rgb = Rgb::new(0x10, 0xb9, 0x81);
pub const RED: Rgb = Rgb::new(0xef, 0x44, 0x44);
pub const BLUE: Rgb = Rgb::new(0x3b, 0x82, 0xf6);
pub const ORANGE: Rgb = Rgb::new(0xf9, 0x73, 0x16);
pub const TEAL: Rgb = Rgb::new(0x14, 0xb8, 0xa6);

pub const CONFETTI_PALETTE: [Rgb; 10] = [
    INDIGO, PINK, CYAN, PURPLE, AMBER, EMERALD, RED, BLUE, ORANGE, TEAL,
];

/// One stop of a canvas gradient. Alpha 0 renders as transparent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgb,
    pub alpha: f32,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Rgb, alpha: f32) -> Self {
        Self {
            offset,
            color,
            alpha,
        }
    }

    pub const fn transparent(offset: f32) -> Self {
        Self::new(offset, Rgb::new(0, 0, 0), 0.0)
    }

    pub fn css(&self) -> String {
        self.color.rgba(self.alpha)
    }
}
