//! Mappings from an AQI value to the parameters the display draws with.
//!
//! Every function here takes the index alone, so a display can always be
//! reproduced from the index without the raw pollutant values.

use core::fmt;

use crate::category::{classify, Category};

/// Highest AQI the leaf color distinguishes; worse air keeps the last hue.
const COLOR_INDEX_CEILING: u16 = 300;
/// Hue at AQI 0 (green).
const HUE_CLEAN: f32 = 120.0;
/// Hue travelled between AQI 0 and the color ceiling.
const HUE_SWEEP: f32 = 200.0;
const LEAF_SATURATION: u8 = 70;
const LEAF_LIGHTNESS: u8 = 45;

/// AQI that fills the gauge completely.
const GAUGE_CEILING: f32 = 500.0;

/// Bubbles for perfectly clean air.
const MAX_BUBBLES: u16 = 8;
/// AQI points that cost one bubble.
const BUBBLE_STEP: u16 = 60;

/// Simulated oxygen release of a healthy tree, in g/hr.
const OXYGEN_BASE: u32 = 40;
/// Floor of the oxygen estimate, a fifth of the base rate.
const OXYGEN_FLOOR: u32 = OXYGEN_BASE / 5;
/// AQI at which the oxygen factor would reach zero before flooring.
const OXYGEN_FALLOFF: u32 = 400;

/// Leaf color as a hue/saturation/lightness triple.
///
/// Formats as a CSS color with the hue to one decimal, e.g. `hsl(120.0 70% 45%)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LeafColor {
    /// Degrees in `[0, 360)`.
    pub hue: f32,
    /// Percent.
    pub saturation: u8,
    /// Percent.
    pub lightness: u8,
}

impl fmt::Display for LeafColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.1} {}% {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Map an AQI to the leaf color, running green, yellow, red and then
/// purple as the index climbs to 300.
///
/// Hues below 0 wrap around to 360 rather than clamping at red, so the
/// ramp ends on purple (hue 280) instead of holding red from AQI 180 up.
///
/// # Examples
///
/// ```
/// use aqi::index_to_color;
///
/// assert_eq!(index_to_color(0).hue, 120.0);
/// assert_eq!(index_to_color(300).hue, 280.0);
/// ```
pub fn index_to_color(index: u16) -> LeafColor {
    let clamped = index.min(COLOR_INDEX_CEILING) as f32;
    let hue = HUE_CLEAN - clamped * HUE_SWEEP / COLOR_INDEX_CEILING as f32;
    // Past red the hue wraps around into purple
    let hue = if hue < 0.0 { hue + 360.0 } else { hue };

    LeafColor {
        hue,
        saturation: LEAF_SATURATION,
        lightness: LEAF_LIGHTNESS,
    }
}

/// Fraction of the gauge to fill, in `[0, 1]`.
pub fn index_to_gauge_fraction(index: u16) -> f32 {
    (index as f32 / GAUGE_CEILING).min(1.0)
}

/// Number of oxygen bubbles to animate, in `[1, 8]`.
///
/// Cleaner air gives more bubbles, but the tree never stops breathing.
pub fn index_to_animation_intensity(index: u16) -> u8 {
    MAX_BUBBLES.saturating_sub(index / BUBBLE_STEP).max(1) as u8
}

/// Simulated oxygen release in g/hr. Illustrative only, not a physical model.
///
/// Computed in whole numbers so halves always round up.
pub fn index_to_flavor_estimate(index: u16) -> f32 {
    let remaining = OXYGEN_FALLOFF.saturating_sub(index as u32);
    let estimate = (OXYGEN_BASE * remaining + OXYGEN_FALLOFF / 2) / OXYGEN_FALLOFF;
    estimate.max(OXYGEN_FLOOR) as f32
}

/// Everything the display derives from an AQI value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayParameters {
    pub category: Category,
    pub color: LeafColor,
    pub gauge_fraction: f32,
    pub animation_intensity: u8,
    pub flavor_estimate: f32,
}

impl DisplayParameters {
    pub fn from_index(index: u16) -> Self {
        Self {
            category: classify(index),
            color: index_to_color(index),
            gauge_fraction: index_to_gauge_fraction(index),
            animation_intensity: index_to_animation_intensity(index),
            flavor_estimate: index_to_flavor_estimate(index),
        }
    }

    /// Gauge fill in percent.
    pub fn gauge_percent(&self) -> f32 {
        self.gauge_fraction * 100.0
    }

    /// Unfilled part of a gauge drawn from the left, in percent.
    pub fn gauge_inset_percent(&self) -> f32 {
        100.0 - self.gauge_percent()
    }
}

/// The oxygen estimate line shown under the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImpactLine {
    pub estimate: f32,
    pub manual: bool,
}

impl fmt::Display for ImpactLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Estimated O₂ release: {} g/hr (simulated", self.estimate)?;
        if self.manual {
            f.write_str(", manual")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_index_to_color() {
        assert_eq!(index_to_color(0).to_string(), "hsl(120.0 70% 45%)");
        assert_eq!(index_to_color(150).to_string(), "hsl(20.0 70% 45%)");
        assert_eq!(index_to_color(68).to_string(), "hsl(74.7 70% 45%)");
        assert_eq!(index_to_color(180).hue, 0.0);
        assert_eq!(index_to_color(300).to_string(), "hsl(280.0 70% 45%)");
        // Saturates at the purple end
        assert_eq!(index_to_color(450), index_to_color(300));

        let hue = index_to_color(68).hue;
        assert!((hue - 74.666_67).abs() < 1e-3, "hue {}", hue);
    }

    #[test]
    fn test_hue_stays_in_range() {
        for index in 0..=1000 {
            let hue = index_to_color(index).hue;
            assert!((0.0..360.0).contains(&hue), "index {} gave hue {}", index, hue);
        }
    }

    #[test]
    fn test_index_to_gauge_fraction() {
        assert_eq!(index_to_gauge_fraction(0), 0.0);
        assert!((index_to_gauge_fraction(68) - 0.136).abs() < 1e-6);
        assert_eq!(index_to_gauge_fraction(250), 0.5);
        assert_eq!(index_to_gauge_fraction(500), 1.0);
        assert_eq!(index_to_gauge_fraction(1000), 1.0);

        let mut previous = 0.0;
        for index in 0..=1000 {
            let fraction = index_to_gauge_fraction(index);
            assert!((0.0..=1.0).contains(&fraction));
            assert!(fraction >= previous);
            previous = fraction;
        }
    }

    #[test]
    fn test_index_to_animation_intensity() {
        assert_eq!(index_to_animation_intensity(0), 8);
        assert_eq!(index_to_animation_intensity(59), 8);
        assert_eq!(index_to_animation_intensity(60), 7);
        assert_eq!(index_to_animation_intensity(68), 7);
        assert_eq!(index_to_animation_intensity(419), 2);
        assert_eq!(index_to_animation_intensity(420), 1);
        assert_eq!(index_to_animation_intensity(u16::MAX), 1);

        let mut previous = 8;
        for index in 0..=2000 {
            let bubbles = index_to_animation_intensity(index);
            assert!((1..=8).contains(&bubbles));
            assert!(bubbles <= previous);
            previous = bubbles;
        }
    }

    #[test]
    fn test_index_to_flavor_estimate() {
        assert_eq!(index_to_flavor_estimate(0), 40.0);
        assert_eq!(index_to_flavor_estimate(80), 32.0);
        assert_eq!(index_to_flavor_estimate(200), 20.0);
        // Floored at 0.2 of the base rate
        assert_eq!(index_to_flavor_estimate(320), 8.0);
        assert_eq!(index_to_flavor_estimate(500), 8.0);
        assert_eq!(index_to_flavor_estimate(u16::MAX), 8.0);
    }

    #[test]
    fn test_flavor_estimate_rounds_halves_up() {
        // (400 - index) / 10 lands exactly on .5 for these
        assert_eq!(index_to_flavor_estimate(245), 16.0);
        assert_eq!(index_to_flavor_estimate(265), 14.0);
        assert_eq!(index_to_flavor_estimate(295), 11.0);
        assert_eq!(index_to_flavor_estimate(315), 9.0);
        assert_eq!(index_to_flavor_estimate(5), 40.0);
        assert_eq!(index_to_flavor_estimate(325), 8.0);
    }

    #[test]
    fn test_display_parameters() {
        let params = DisplayParameters::from_index(68);
        assert_eq!(params.category, Category::Moderate);
        assert_eq!(params.animation_intensity, 7);
        assert_eq!(params.flavor_estimate, 33.0);
        assert!((params.gauge_percent() - 13.6).abs() < 1e-4);
        assert!((params.gauge_inset_percent() - 86.4).abs() < 1e-4);
    }

    #[test]
    fn test_impact_line() {
        let live = ImpactLine {
            estimate: 33.0,
            manual: false,
        };
        assert_eq!(
            live.to_string(),
            "Estimated O₂ release: 33 g/hr (simulated)"
        );

        let manual = ImpactLine {
            estimate: 32.0,
            manual: true,
        };
        assert_eq!(
            manual.to_string(),
            "Estimated O₂ release: 32 g/hr (simulated, manual)"
        );
    }
}
