//! Geohash encoding
//!
//! Converts geographic coordinates (latitude/longitude) into fixed-length
//! base32 geohash strings. A geohash partitions the globe by interleaved
//! binary bisection: longitude and latitude ranges are halved alternately,
//! one bit per step, and every five bits become one character from a
//! 32-symbol alphabet.
//!
//! Lexicographic order over geohashes corresponds to a Z-order space
//! partition. Spatially adjacent cells are *not* guaranteed to be
//! lexicographically adjacent; consumers must only rely on equal-prefix
//! grouping, never on neighbor ordering.


/// Geohash base32 alphabet.
///
/// Excludes the visually ambiguous characters `a`, `i`, `l`, `o`.
const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Bits packed into each output character.
const BITS_PER_CHAR: u8 = 5;

/// Encodes geographic coordinates as a geohash string.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees
/// * `lon` - Longitude in degrees
/// * `precision` - Number of output characters
///
/// # Returns
///
/// A string of exactly `precision` base32 characters. Encoding is a pure
/// function: the same inputs always produce the same hash.
///
/// Coordinates are not validated. Values outside ±90/±180 degrees are not
/// rejected; every bisection resolves toward the nearer edge, so
/// out-of-range inputs encode to the corresponding edge cell.
pub fn encode(lat: f64, lon: f64, precision: usize) -> String {
    let mut lat_range = (-90.0_f64, 90.0_f64);
    let mut lon_range = (-180.0_f64, 180.0_f64);

    let mut hash = String::with_capacity(precision);
    let mut symbol = 0_usize;
    let mut bits = 0_u8;
    let mut refine_lon = true;

    while hash.len() < precision {
        symbol <<= 1;
        let (value, range) = if refine_lon {
            (lon, &mut lon_range)
        } else {
            (lat, &mut lat_range)
        };

        let mid = (range.0 + range.1) / 2.0;
        if value >= mid {
            symbol |= 1;
            range.0 = mid;
        } else {
            range.1 = mid;
        }
        refine_lon = !refine_lon;

        bits += 1;
        if bits == BITS_PER_CHAR {
            hash.push(BASE32[symbol] as char);
            symbol = 0;
            bits = 0;
        }
    }

    hash
}
