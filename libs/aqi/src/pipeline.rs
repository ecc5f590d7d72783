//! Turns either fetched concentrations or a hand-picked AQI into a complete
//! readout for the display.

use crate::breakpoints::concentration_to_index;
use crate::estimate::index_to_concentration_guess;
use crate::source::ConcentrationSource;
use crate::visual::{DisplayParameters, ImpactLine};

/// Best-effort pollutant concentrations from a lookup, in µg/m³.
///
/// `None` marks a value the source did not report. Only PM2.5 feeds the
/// index; the others are carried along for display.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Concentrations {
    pub pm2_5: Option<f32>,
    pub pm10: Option<f32>,
    pub o3: Option<f32>,
    pub no2: Option<f32>,
    pub so2: Option<f32>,
}

impl Concentrations {
    pub fn primary_only(pm2_5: f32) -> Self {
        Self {
            pm2_5: Some(pm2_5),
            ..Self::default()
        }
    }
}

/// Display-only pollutants of a reading, in whole µg/m³.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Secondary {
    pub pm10: f32,
    pub o3: f32,
    pub no2: f32,
    pub so2: f32,
}

impl Secondary {
    /// Pollutant names paired with their values, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> {
        [
            ("pm10", self.pm10),
            ("o3", self.o3),
            ("no2", self.no2),
            ("so2", self.so2),
        ]
        .into_iter()
    }
}

/// Whole-unit value of a reported concentration.
///
/// A missing value reads as 0 so the display always has something to show;
/// it does not mean the air is clean. Negative and NaN values also read as 0.
fn whole_units(value: Option<f32>) -> f32 {
    value.map(libm::roundf).unwrap_or(0.0).max(0.0)
}

/// A single AQI reading, alive for one display refresh.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    pub index: u16,
    pub primary: f32,
    pub secondary: Secondary,
}

impl Reading {
    /// Index the rounded PM2.5 value. Rounding happens before indexing.
    pub fn live(concentrations: &Concentrations) -> Self {
        let primary = whole_units(concentrations.pm2_5);
        Self {
            index: concentration_to_index(primary),
            primary,
            secondary: Secondary {
                pm10: whole_units(concentrations.pm10),
                o3: whole_units(concentrations.o3),
                no2: whole_units(concentrations.no2),
                so2: whole_units(concentrations.so2),
            },
        }
    }

    /// Use a hand-picked index, with a guessed PM2.5 and unknown secondaries.
    pub fn manual(index: u16) -> Self {
        Self {
            index,
            primary: index_to_concentration_guess(index),
            secondary: Secondary::default(),
        }
    }
}

/// What a refresh starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    Live(Concentrations),
    Manual(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Live,
    Manual,
}

/// A reading together with everything derived from its index.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readout {
    pub mode: Mode,
    pub reading: Reading,
    pub params: DisplayParameters,
}

impl Readout {
    fn new(mode: Mode, reading: Reading) -> Self {
        Self {
            mode,
            params: DisplayParameters::from_index(reading.index),
            reading,
        }
    }

    /// Demonstration readout shown before the first lookup.
    pub fn startup() -> Self {
        Self::new(
            Mode::Manual,
            Reading {
                index: 80,
                primary: 20.0,
                secondary: Secondary {
                    pm10: 40.0,
                    o3: 60.0,
                    no2: 25.0,
                    so2: 8.0,
                },
            },
        )
    }

    pub fn impact(&self) -> ImpactLine {
        ImpactLine {
            estimate: self.params.flavor_estimate,
            manual: self.mode == Mode::Manual,
        }
    }
}

/// Draws a readout. Implemented by whatever owns the screen, LEDs or page.
pub trait Render {
    fn render(&mut self, readout: &Readout);
}

/// Compute the readout for either input.
///
/// # Examples
///
/// ```
/// use aqi::{process, Category, Input};
///
/// let readout = process(Input::Manual(80));
/// assert_eq!(readout.reading.primary, 32.0);
/// assert_eq!(readout.params.category, Category::Moderate);
/// ```
pub fn process(input: Input) -> Readout {
    match input {
        Input::Live(concentrations) => Readout::new(Mode::Live, Reading::live(&concentrations)),
        Input::Manual(index) => Readout::new(Mode::Manual, Reading::manual(index)),
    }
}

/// Look up live concentrations and draw the resulting readout.
///
/// A failed lookup is returned as-is and nothing is drawn, leaving the caller
/// to report it.
pub fn refresh<S, R>(source: &mut S, renderer: &mut R) -> Result<Readout, S::Error>
where
    S: ConcentrationSource,
    R: Render,
{
    let concentrations = source.concentrations()?;
    let readout = process(Input::Live(concentrations));
    renderer.render(&readout);
    Ok(readout)
}
