//! The seam between the pipeline and whatever looks concentrations up.

use crate::pipeline::Concentrations;

/// Something that can report current pollutant concentrations: a sensor on
/// a bus, a cached forecast, a test fixture.
pub trait ConcentrationSource {
    type Error;

    fn concentrations(&mut self) -> Result<Concentrations, Self::Error>;
}

/// Take the most recent sample of an hourly series.
///
/// # Arguments
///
/// * `series` - Hourly values, `None` where the provider has no data
/// * `time_len` - Length of the time axis the series belongs to
///
/// # Returns
///
/// The value at the last hour of the time axis (the first hour when the axis
/// is empty), rounded to whole units. A missing series, a missing sample or a
/// time axis longer than the series all read as 0.
///
/// # Examples
///
/// ```
/// use aqi::latest_sample;
///
/// let pm25 = [Some(11.2), Some(14.6)];
/// assert_eq!(latest_sample(Some(&pm25[..]), 2), 15.0);
/// assert_eq!(latest_sample(None, 2), 0.0);
/// ```
pub fn latest_sample(series: Option<&[Option<f32>]>, time_len: usize) -> f32 {
    let hour = time_len.saturating_sub(1);
    series
        .and_then(|values| values.get(hour).copied().flatten())
        .map(libm::roundf)
        .unwrap_or(0.0)
}

/// Hourly pollutant series sharing one time axis, as an air quality
/// forecast service returns them.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HourlySeries<'a> {
    pub time_len: usize,
    pub pm2_5: Option<&'a [Option<f32>]>,
    pub pm10: Option<&'a [Option<f32>]>,
    pub ozone: Option<&'a [Option<f32>]>,
    pub nitrogen_dioxide: Option<&'a [Option<f32>]>,
    pub sulphur_dioxide: Option<&'a [Option<f32>]>,
}

impl HourlySeries<'_> {
    /// Concentrations at the latest hour, every pollutant reported.
    pub fn latest(&self) -> Concentrations {
        let at = |series: Option<&[Option<f32>]>| Some(latest_sample(series, self.time_len));
        Concentrations {
            pm2_5: at(self.pm2_5),
            pm10: at(self.pm10),
            o3: at(self.ozone),
            no2: at(self.nitrogen_dioxide),
            so2: at(self.sulphur_dioxide),
        }
    }
}
