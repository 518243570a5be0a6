use core::fmt;

use crate::constants::{GGA_FIX_FIELD_INDEX, NMEA_FIELD_SEPARATOR};

use super::until_nul;

/// GGA fix-quality indicator, reduced to the levels this driver acts on
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FixQuality {
    #[default]
    NoFix,
    StandardFix,
    DifferentialFix,
}

impl FixQuality {
    pub const fn has_fix(self) -> bool {
        !matches!(self, FixQuality::NoFix)
    }
}

impl From<u8> for FixQuality {
    fn from(c: u8) -> Self {
        match c {
            b'1' => FixQuality::StandardFix,
            b'2' => FixQuality::DifferentialFix,
            _ => FixQuality::NoFix,
        }
    }
}

impl fmt::Display for FixQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixQuality::NoFix => f.write_str("no fix"),
            FixQuality::StandardFix => f.write_str("GPS fix"),
            FixQuality::DifferentialFix => f.write_str("differential GPS fix"),
        }
    }
}

/// Reads the fix-quality field of a GGA sentence.
///
/// The field follows the sixth comma; only its first byte is looked at.
/// Fewer than six commas, or an empty field, reads as [`FixQuality::NoFix`].
/// Nothing after a NUL is looked at.
pub fn parse_fix(sentence: &[u8]) -> FixQuality {
    until_nul(sentence)
        .split(|b| *b == NMEA_FIELD_SEPARATOR)
        .nth(GGA_FIX_FIELD_INDEX)
        .and_then(|field| field.first())
        .map_or(FixQuality::NoFix, |c| FixQuality::from(*c))
}
