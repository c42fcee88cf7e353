//! Canonical tier vocabulary exposed to callers for display purposes.
//!
//! Any other finite value is accepted as a vote but has no canonical label.

/// Tier value displayed as "Low".
pub const LOW: f64 = 0.25;

/// Tier value displayed as "Mid".
pub const MID: f64 = 0.5;

/// Tier value displayed as "High".
pub const HIGH: f64 = 0.75;

/// Tier value displayed as "1mm+".
pub const ONE_MM_PLUS: f64 = 1.0;

/// Returns the display label for a canonical tier value, if it has one.
pub fn tier_label(value: f64) -> Option<&'static str> {
    if value == LOW {
        Some("Low")
    } else if value == MID {
        Some("Mid")
    } else if value == HIGH {
        Some("High")
    } else if value == ONE_MM_PLUS {
        Some("1mm+")
    } else {
        None
    }
}
