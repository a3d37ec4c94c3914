// crates/parkdb-core/src/color.rs

//! # Year color scale
//!
//! Maps a park's establishment year onto a fixed two-color gradient
//! (light tan → dark brown). The UI layer feeds the resulting hex string
//! straight into polygon fill styles.

/// Neutral fill used when a park has no usable year or the dataset has no
/// year bounds at all.
pub const FALLBACK_COLOR: &str = "#d6c5a5";
/// Light gradient endpoint, reached at the minimum year in the dataset.
pub const SCALE_START: &str = "#faedcf";
/// Dark gradient endpoint, reached at the maximum year.
pub const SCALE_END: &str = "#5a2f12";
/// Easing exponent biasing mid-range years toward the darker end.
pub const SCALE_EASING: f64 = 0.8;

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parse a `#rrggbb` hex string (leading `#` optional).
///
/// Returns `None` on any malformed input; callers degrade to
/// [`FALLBACK_COLOR`] instead of failing.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let clean = hex.strip_prefix('#').unwrap_or(hex);
    if clean.len() != 6 {
        return None;
    }
    let num = u32::from_str_radix(clean, 16).ok()?;
    Some(Rgb {
        r: ((num >> 16) & 255) as u8,
        g: ((num >> 8) & 255) as u8,
        b: (num & 255) as u8,
    })
}

/// Encode an RGB triple as `#rrggbb` (lowercase).
pub fn rgb_to_hex(c: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Linear interpolation between two scalars.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Round a fractional channel value to the nearest integer, clamped to 0..=255.
fn clamp_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Blend two hex colors channel-wise at position `t`.
///
/// `t = 0.0` returns `start` exactly, `t = 1.0` returns `end` exactly.
/// Returns `None` if either endpoint fails to parse.
pub fn interpolate_hex(start: &str, end: &str, t: f64) -> Option<String> {
    let s = hex_to_rgb(start)?;
    let e = hex_to_rgb(end)?;
    Some(rgb_to_hex(Rgb {
        r: clamp_channel(lerp(s.r as f64, e.r as f64, t)),
        g: clamp_channel(lerp(s.g as f64, e.g as f64, t)),
        b: clamp_channel(lerp(s.b as f64, e.b as f64, t)),
    }))
}

/// Year-to-color mapping over the dataset's establishment-year bounds.
///
/// Built once from all known status years (metadata and GeoJSON combined)
/// and then queried per park.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearColorScale {
    bounds: Option<(i32, i32)>,
}

impl YearColorScale {
    pub fn new(min: i32, max: i32) -> Self {
        Self {
            bounds: Some((min, max)),
        }
    }

    /// Derive min/max bounds from every year the dataset knows about.
    /// An empty iterator yields a scale with no bounds (everything falls
    /// back to the neutral color).
    pub fn from_years<I: IntoIterator<Item = i32>>(years: I) -> Self {
        let mut bounds: Option<(i32, i32)> = None;
        for y in years {
            bounds = match bounds {
                None => Some((y, y)),
                Some((min, max)) => Some((min.min(y), max.max(y))),
            };
        }
        Self { bounds }
    }

    pub fn bounds(&self) -> Option<(i32, i32)> {
        self.bounds
    }

    /// Fill color for a park's establishment year.
    ///
    /// - no year or no bounds → [`FALLBACK_COLOR`]
    /// - a single distinct year in the dataset → the darkest endpoint
    /// - otherwise clamp-normalize, ease with `t^0.8` and blend the gradient
    pub fn color_for_year(&self, year: Option<i32>) -> String {
        let (Some(year), Some((min, max))) = (year, self.bounds) else {
            return FALLBACK_COLOR.to_string();
        };
        if min == max {
            return SCALE_END.to_string();
        }
        let t = ((year - min) as f64 / (max - min) as f64).clamp(0.0, 1.0);
        let eased = t.powf(SCALE_EASING);
        interpolate_hex(SCALE_START, SCALE_END, eased)
            .unwrap_or_else(|| FALLBACK_COLOR.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        for c in [
            Rgb { r: 0, g: 0, b: 0 },
            Rgb { r: 255, g: 255, b: 255 },
            Rgb { r: 90, g: 47, b: 18 },
            Rgb { r: 250, g: 237, b: 207 },
        ] {
            assert_eq!(hex_to_rgb(&rgb_to_hex(c)), Some(c));
        }
    }

    #[test]
    fn invalid_hex_is_none() {
        assert_eq!(hex_to_rgb(""), None);
        assert_eq!(hex_to_rgb("#12345"), None);
        assert_eq!(hex_to_rgb("#zzzzzz"), None);
    }

    #[test]
    fn interpolation_endpoints_are_exact() {
        assert_eq!(
            interpolate_hex("#faedcf", "#5a2f12", 0.0).as_deref(),
            Some("#faedcf")
        );
        assert_eq!(
            interpolate_hex("#faedcf", "#5a2f12", 1.0).as_deref(),
            Some("#5a2f12")
        );
    }

    #[test]
    fn scale_falls_back_without_year_or_bounds() {
        let scale = YearColorScale::from_years(std::iter::empty());
        assert_eq!(scale.color_for_year(Some(1951)), FALLBACK_COLOR);

        let scale = YearColorScale::new(1900, 2000);
        assert_eq!(scale.color_for_year(None), FALLBACK_COLOR);
    }

    #[test]
    fn degenerate_bounds_return_darkest() {
        let scale = YearColorScale::new(1951, 1951);
        assert_eq!(scale.color_for_year(Some(1951)), SCALE_END);
        assert_eq!(scale.color_for_year(Some(2024)), SCALE_END);
    }

    #[test]
    fn out_of_range_years_clamp_to_endpoints() {
        let scale = YearColorScale::new(1950, 2000);
        assert_eq!(scale.color_for_year(Some(1800)), SCALE_START);
        assert_eq!(scale.color_for_year(Some(2100)), SCALE_END);
    }

    #[test]
    fn from_years_tracks_min_and_max() {
        let scale = YearColorScale::from_years([1973, 1951, 2008]);
        assert_eq!(scale.bounds(), Some((1951, 2008)));
    }

    #[test]
    fn easing_biases_toward_dark_end() {
        let scale = YearColorScale::new(1900, 2000);
        let mid = scale.color_for_year(Some(1950)).replace('#', "");
        let r = u8::from_str_radix(&mid[0..2], 16).unwrap();
        // t^0.8 > t for t in (0, 1), so the midpoint sits past the linear
        // halfway blend (red channel 250 -> 90, linear midpoint 170).
        assert!(r < 170);
    }
}
