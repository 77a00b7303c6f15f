//! RGB colors and the deck palette.

use std::fmt;

/// An RGB color.
///
/// # Examples
///
/// ```rust
/// use deckwright::common::RGBColor;
///
/// let purple = RGBColor::new(99, 102, 241);
/// assert_eq!(purple.to_hex(), "6366F1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex string without the `#` prefix, as `a:srgbClr/@val` expects.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Colors used by the deck templates.
///
/// The first six are the named palette; the rest are single-use tints that
/// belong to one template each.
pub mod palette {
    use super::RGBColor;

    pub const DARK_BG: RGBColor = RGBColor::new(15, 15, 26);
    /// Accent color: card borders, table headers, step badges, link text.
    pub const PURPLE: RGBColor = RGBColor::new(99, 102, 241);
    pub const LIGHT_PURPLE: RGBColor = RGBColor::new(165, 180, 252);
    pub const WHITE: RGBColor = RGBColor::new(255, 255, 255);
    pub const GRAY: RGBColor = RGBColor::new(148, 163, 184);
    pub const GREEN: RGBColor = RGBColor::new(52, 211, 153);

    /// Dimmed "0N" ordinal on section dividers.
    pub const SECTION_NUMBER: RGBColor = RGBColor::new(60, 60, 100);
    pub const CARD_FILL: RGBColor = RGBColor::new(30, 30, 50);
    pub const TABLE_ROW_FILL: RGBColor = RGBColor::new(25, 25, 40);
    pub const WARNING_FILL: RGBColor = RGBColor::new(50, 20, 20);
    pub const WARNING_BORDER: RGBColor = RGBColor::new(239, 68, 68);
    pub const WARNING_HEADING: RGBColor = RGBColor::new(252, 165, 165);
}
