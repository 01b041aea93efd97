//! Coordinate formatting for Google Maps script.

use std::fmt;

/// A latitude/longitude pair rendered with a fixed number of fractional digits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
    pub precision: usize,
}

impl LatLng {
    #[must_use]
    pub fn new(lat: f64, lng: f64, precision: usize) -> Self {
        Self {
            lat,
            lng,
            precision,
        }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.precision;
        write!(
            f,
            "new google.maps.LatLng({:.precision$}, {:.precision$})",
            self.lat, self.lng
        )
    }
}

/// Format a location as a `google.maps.LatLng` constructor call.
///
/// Both coordinates are rounded to `precision` digits after the decimal point.
///
/// # Examples
///
/// ```
/// use gmplot_drawables::format_lat_lng;
///
/// assert_eq!(
///     format_lat_lng(37.428, -122.146, 2),
///     "new google.maps.LatLng(37.43, -122.15)"
/// );
/// ```
#[must_use]
pub fn format_lat_lng(lat: f64, lng: f64, precision: usize) -> String {
    LatLng::new(lat, lng, precision).to_string()
}
