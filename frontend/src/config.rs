use chrono::{DateTime, Duration, Utc};
use log::{warn, Level};
use thiserror::Error;

/// Fraction of an element that has to be on screen before it counts as seen.
pub const VISIBILITY_THRESHOLD: f64 = 0.15;
pub const COUNT_UP_DURATION_MS: u64 = 2000;
pub const FRAME_INTERVAL_MS: u32 = 16;
pub const COUNTDOWN_TICK_MS: u32 = 1000;
pub const CAROUSEL_INTERVAL_MS: u32 = 4000;
pub const SUBMIT_DELAY_MS: u32 = 1000;
pub const SCROLLED_OFFSET_PX: f64 = 20.0;
pub const OFFER_DAYS: i64 = 30;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose engine logs while developing with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OFFER_DEADLINE must be an RFC 3339 timestamp, got {value:?}")]
    InvalidDeadline {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub fn parse_deadline(raw: &str) -> Result<DateTime<Utc>, ConfigError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|deadline| deadline.with_timezone(&Utc))
        .map_err(|source| ConfigError::InvalidDeadline {
            value: raw.to_string(),
            source,
        })
}

/// Resolves the special-offer deadline. Without a configured value the offer
/// ends `OFFER_DAYS` after `now`, which moves forward on every page load.
pub fn deadline_from(raw: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
    let rolling = now + Duration::days(OFFER_DAYS);
    match raw {
        Some(raw) => match parse_deadline(raw) {
            Ok(deadline) => deadline,
            Err(err) => {
                warn!("{}, falling back to {} days from now", err, OFFER_DAYS);
                rolling
            }
        },
        None => rolling,
    }
}

pub fn offer_deadline(now: DateTime<Utc>) -> DateTime<Utc> {
    deadline_from(option_env!("OFFER_DEADLINE"), now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn rolling_deadline_is_thirty_days_out() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(deadline_from(None, now), now + Duration::days(30));
    }

    #[test]
    fn fixed_deadline_wins_over_rolling_one() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let fixed = deadline_from(Some("2026-04-15T09:30:00+02:00"), now);
        assert_eq!(fixed, Utc.with_ymd_and_hms(2026, 4, 15, 7, 30, 0).unwrap());
    }

    #[test]
    fn malformed_deadline_is_reported_and_ignored() {
        let err = parse_deadline("next tuesday").unwrap_err();
        assert!(err.to_string().contains("next tuesday"));

        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(deadline_from(Some("next tuesday"), now), now + Duration::days(30));
    }
}
