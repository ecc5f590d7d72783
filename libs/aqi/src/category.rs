//! AQI categories as published by the EPA.

use core::fmt;

/// Category enum provides the EPA health concern levels for an AQI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Category {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl Category {
    /// Text shown next to the AQI readout.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Moderate => "Moderate",
            Category::UnhealthySensitive => "Unhealthy (Sensitive)",
            Category::Unhealthy => "Unhealthy",
            Category::VeryUnhealthy => "Very Unhealthy",
            Category::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Provides a Category enum variant value based on the
/// specified AQI value. Upper bounds are inclusive.
///
/// # Examples
///
/// ```
/// use aqi::{classify, Category};
///
/// assert_eq!(classify(50), Category::Good);
/// assert_eq!(classify(301), Category::Hazardous);
/// ```
pub fn classify(index: u16) -> Category {
    match index {
        0..=50 => Category::Good,
        51..=100 => Category::Moderate,
        101..=150 => Category::UnhealthySensitive,
        151..=200 => Category::Unhealthy,
        201..=300 => Category::VeryUnhealthy,
        _ => Category::Hazardous,
    }
}
