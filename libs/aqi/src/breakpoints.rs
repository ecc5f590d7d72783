//! PM2.5 breakpoint table and the concentration to AQI conversion.

/// One linear segment of the AQI scale: concentrations in
/// `[concentration_low, concentration_high]` map onto
/// `[index_low, index_high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Breakpoint {
    pub concentration_low: f32,
    pub concentration_high: f32,
    pub index_low: f32,
    pub index_high: f32,
}

impl Breakpoint {
    const fn new(
        concentration_low: f32,
        concentration_high: f32,
        index_low: f32,
        index_high: f32,
    ) -> Self {
        Self {
            concentration_low,
            concentration_high,
            index_low,
            index_high,
        }
    }

    /// Linear interpolation formula from the EPA documentation
    /// AQI = ((AQIhigh - AQIlow) / (PMhigh - PMlow)) * (PMactual - PMlow) + AQIlow
    fn interpolate(&self, pm25: f32) -> f32 {
        (self.index_high - self.index_low) / (self.concentration_high - self.concentration_low)
            * (pm25 - self.concentration_low)
            + self.index_low
    }
}

/// AQI breakpoints for PM2.5 in µg/m³, ordered by concentration.
///
/// Neighbouring entries are separated by 0.1 µg/m³ (the reporting precision),
/// so no concentration belongs to two entries. The last entry's upper bound is
/// the practical ceiling of the scale.
pub static PM25_BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 12.0, 0.0, 50.0),      // Good
    Breakpoint::new(12.1, 35.4, 51.0, 100.0),   // Moderate
    Breakpoint::new(35.5, 55.4, 101.0, 150.0),  // Unhealthy for Sensitive Groups
    Breakpoint::new(55.5, 150.4, 151.0, 200.0), // Unhealthy
    Breakpoint::new(150.5, 250.4, 201.0, 300.0), // Very Unhealthy
    Breakpoint::new(250.5, 350.4, 301.0, 400.0), // Hazardous
    Breakpoint::new(350.5, 500.4, 401.0, 500.0), // Hazardous
];

/// Calculate the AQI for the provided PM2.5 concentration.
///
/// # Arguments
///
/// * `pm25` - The PM2.5 concentration in µg/m³
///
/// # Returns
///
/// The AQI, rounded half away from zero. The first breakpoint whose upper
/// bound is not below `pm25` is used; a value inside the 0.1 gap below that
/// breakpoint is lifted to its lower bound. Negative or NaN input counts as 0.
/// Above the table ceiling the last breakpoint is extrapolated, so the result
/// can exceed 500.
///
/// # Examples
///
/// ```
/// use aqi::concentration_to_index;
///
/// assert_eq!(concentration_to_index(12.0), 50);
/// assert_eq!(concentration_to_index(12.1), 51);
/// assert_eq!(concentration_to_index(20.0), 68);
/// ```
pub fn concentration_to_index(pm25: f32) -> u16 {
    // f32::max drops NaN in favour of the other operand
    let pm25 = pm25.max(0.0);

    let breakpoint = PM25_BREAKPOINTS
        .iter()
        .find(|b| pm25 <= b.concentration_high)
        .unwrap_or(&PM25_BREAKPOINTS[PM25_BREAKPOINTS.len() - 1]);

    let pm25 = pm25.max(breakpoint.concentration_low);
    libm::roundf(breakpoint.interpolate(pm25)) as u16
}
