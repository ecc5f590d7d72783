//! AQI library
//!
//! This library provides the computation core behind the air quality tree
//! display: PM2.5 concentration to AQI conversion using the EPA breakpoint
//! table, AQI category classification, and the mappings from an AQI value to
//! everything the display draws (leaf color, gauge fill, bubble count and the
//! playful oxygen estimate). It supports both std and no_std environments,
//! but is best used on systems with hardware floating point support.
//!
//! Data only flows one way:
//!
//! ```text
//! concentration or chosen index -> index -> { category, color, gauge, bubbles, O2 estimate }
//! ```
//!
//! # Examples
//!
//! ```
//! use aqi::{process, Category, Concentrations, Input};
//!
//! let readout = process(Input::Live(Concentrations::primary_only(20.0)));
//! assert_eq!(readout.reading.index, 68);
//! assert_eq!(readout.params.category, Category::Moderate);
//! assert_eq!(readout.params.animation_intensity, 7);
//! ```

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod breakpoints;
pub mod category;
pub mod estimate;
pub mod pipeline;
pub mod source;
pub mod visual;

pub use breakpoints::{concentration_to_index, Breakpoint, PM25_BREAKPOINTS};
pub use category::{classify, Category};
pub use estimate::index_to_concentration_guess;
pub use pipeline::{
    process, refresh, Concentrations, Input, Mode, Reading, Readout, Render, Secondary,
};
pub use source::{latest_sample, ConcentrationSource, HourlySeries};
pub use visual::{
    index_to_animation_intensity, index_to_color, index_to_flavor_estimate,
    index_to_gauge_fraction, DisplayParameters, ImpactLine, LeafColor,
};
