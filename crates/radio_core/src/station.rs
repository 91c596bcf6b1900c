/// Maximum length of a station identifier after sanitization.
pub const MAX_STATION_LEN: usize = 7;

/// Reduce a raw caller-supplied station value to the allowed identifier set.
///
/// Every character outside `[a-z0-9]` is removed (case-sensitive, so uppercase
/// letters are dropped rather than folded), then the result is truncated to
/// [`MAX_STATION_LEN`] characters. An empty result means no station was
/// requested.
pub fn sanitize_station(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .take(MAX_STATION_LEN)
        .collect()
}
