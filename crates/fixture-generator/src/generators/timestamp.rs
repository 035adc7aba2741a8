//! Timestamp value generators.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use chrono_tz::America::Toronto;
use rand::Rng;

/// Window that install dates are backdated within.
pub const INSTALL_WINDOW_DAYS: i64 = 2 * 365;

/// Render a timestamp the way the catalog API stores listing dates.
pub fn format_catalog_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Toronto)
        .to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Generate a timestamp uniformly backdated from `now` by up to two years.
pub fn generate_backdated<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    let window_secs = Duration::days(INSTALL_WINDOW_DAYS).num_seconds();
    let offset = rng.gen_range(0..=window_secs);
    now - Duration::seconds(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_backdated_within_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        for _ in 0..100 {
            let at = generate_backdated(&mut rng, now);
            assert!(at <= now);
            assert!(now - at <= Duration::days(INSTALL_WINDOW_DAYS));
        }
    }

    #[test]
    fn test_format_catalog_timestamp_uses_toronto_offset() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 17, 0, 0).unwrap();
        assert_eq!(format_catalog_timestamp(at), "2024-01-15T12:00:00-05:00");
    }
}
