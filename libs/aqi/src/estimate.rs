//! Concentration guess for a hand-picked AQI.

/// Full-scale AQI for the guess.
const INDEX_SPAN: f32 = 500.0;
/// Concentration reported at full scale, in µg/m³.
const CONCENTRATION_SPAN: f32 = 200.0;

/// Produce a plausible PM2.5 value for an AQI chosen by hand.
///
/// This is a straight line through the origin, not the inverse of
/// [`concentration_to_index`](crate::concentration_to_index). It only fills
/// the concentration readout in manual mode and must never be converted back
/// into an index.
///
/// # Examples
///
/// ```
/// use aqi::index_to_concentration_guess;
///
/// assert_eq!(index_to_concentration_guess(80), 32.0);
/// ```
pub fn index_to_concentration_guess(index: u16) -> f32 {
    libm::roundf(index as f32 / INDEX_SPAN * CONCENTRATION_SPAN)
}
