//! Longitude-based UTC offset fallback
//!
//! When the index holds no record for a coordinate's geohash cell, the
//! lookup falls back to a whole-hour UTC offset derived purely from
//! longitude: the globe is split into nominal 15° bands centered on the
//! prime meridian, with a ±7.5° "UTC" dead zone around it.

/// Whole-hour UTC offset for a longitude.
///
/// `|lon| ≤ 7.5` maps to 0. Beyond the dead zone the remaining magnitude is
/// divided into 15° bands, rounding any partial band outward (ceiling
/// division), signed by the hemisphere. `lon = 180` therefore yields `+12`
/// and `lon = -180` yields `-12`.
pub fn offset_hours(lon: f64) -> i32 {
    let dir = if lon < 0.0 { -1 } else { 1 };
    let mut magnitude = lon.abs();
    if magnitude <= 7.5 {
        return 0;
    }

    magnitude -= 7.5;
    let mut offset = (magnitude / 15.0).floor() as i32;
    if magnitude % 15.0 > 0.0 {
        offset += 1;
    }

    dir * offset
}

/// Canonical fixed-offset identifier for a whole-hour offset.
///
/// Zero is `"UTC"`. Nonzero offsets use the POSIX `Etc/GMT` zones, whose
/// sign convention is inverted relative to the geographic east/west sign:
/// three hours east of Greenwich is `Etc/GMT-3`. The inversion is
/// intentional, not a bug.
pub fn offset_identifier(offset_hours: i32) -> String {
    if offset_hours == 0 {
        return "UTC".to_string();
    }

    let sign = if offset_hours >= 0 { '-' } else { '+' };
    format!("Etc/GMT{}{}", sign, offset_hours.abs())
}
