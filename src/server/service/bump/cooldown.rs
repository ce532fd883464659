//! Bump cooldown evaluation.

use chrono::{DateTime, Duration, Utc};

use crate::server::model::bump::CooldownStatus;

/// Decides whether a listing last bumped at `last_bump_at` may be bumped at `now`.
///
/// A listing that was never bumped is always ready. Otherwise it is ready once at
/// least `cooldown` has elapsed since the last bump. While cooling down, the remaining
/// wait is reported together with `now + remaining`, which equals
/// `last_bump_at + cooldown`. A last bump in the future (clock skew between writers)
/// keeps the listing cooling down, with the remaining wait capped at `cooldown` and
/// the next eligible time capped at `now + cooldown`.
///
/// Pure: the caller supplies the clock and nothing is read or written.
pub fn evaluate_cooldown(
    last_bump_at: Option<DateTime<Utc>>,
    cooldown: Duration,
    now: DateTime<Utc>,
) -> CooldownStatus {
    let Some(last_bump_at) = last_bump_at else {
        return CooldownStatus::Ready;
    };

    let elapsed = now.signed_duration_since(last_bump_at);
    if elapsed >= cooldown {
        return CooldownStatus::Ready;
    }

    let remaining = cooldown
        .checked_sub(&elapsed)
        .map_or(cooldown, |remaining| remaining.min(cooldown));

    CooldownStatus::CoolingDown {
        remaining,
        next_eligible_at: eligible_after(now, remaining),
    }
}

/// `at + delay`, saturating at the latest representable time.
pub fn eligible_after(at: DateTime<Utc>, delay: Duration) -> DateTime<Utc> {
    at.checked_add_signed(delay)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::bump::format_remaining;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
    }

    fn two_hours() -> Duration {
        Duration::hours(2)
    }

    #[test]
    fn never_bumped_is_ready() {
        assert_eq!(
            evaluate_cooldown(None, two_hours(), now()),
            CooldownStatus::Ready
        );
    }

    #[test]
    fn bumped_an_hour_ago_waits_an_hour() {
        let last = now() - Duration::hours(1);

        let status = evaluate_cooldown(Some(last), two_hours(), now());

        match status {
            CooldownStatus::CoolingDown {
                remaining,
                next_eligible_at,
            } => {
                assert_eq!(remaining, Duration::hours(1));
                assert_eq!(format_remaining(remaining), "1h 0m");
                assert_eq!(next_eligible_at, last + two_hours());
            }
            CooldownStatus::Ready => panic!("expected cooldown"),
        }
    }

    #[test]
    fn bumped_three_hours_ago_is_ready() {
        let last = now() - Duration::hours(3);

        assert!(evaluate_cooldown(Some(last), two_hours(), now()).is_ready());
    }

    #[test]
    fn ready_exactly_at_cooldown_boundary() {
        let last = now() - two_hours();

        assert!(evaluate_cooldown(Some(last), two_hours(), now()).is_ready());
    }

    #[test]
    fn cooling_down_one_second_before_boundary() {
        let last = now() - two_hours() + Duration::seconds(1);

        let status = evaluate_cooldown(Some(last), two_hours(), now());

        assert_eq!(
            status,
            CooldownStatus::CoolingDown {
                remaining: Duration::seconds(1),
                next_eligible_at: now() + Duration::seconds(1),
            }
        );
    }

    #[test]
    fn remaining_minutes_are_truncated() {
        let last = now() - Duration::minutes(54) - Duration::seconds(30);

        let status = evaluate_cooldown(Some(last), two_hours(), now());

        let CooldownStatus::CoolingDown { remaining, .. } = status else {
            panic!("expected cooldown");
        };
        assert_eq!(format_remaining(remaining), "1h 5m");
    }

    #[test]
    fn future_last_bump_is_capped_at_cooldown() {
        let last = now() + Duration::minutes(30);

        let status = evaluate_cooldown(Some(last), two_hours(), now());

        let CooldownStatus::CoolingDown {
            remaining,
            next_eligible_at,
        } = status
        else {
            panic!("expected cooldown");
        };
        assert_eq!(remaining, two_hours());
        assert_eq!(next_eligible_at, now() + two_hours());
    }

    #[test]
    fn next_eligible_saturates_at_latest_time() {
        let now = DateTime::<Utc>::MAX_UTC - Duration::minutes(30);
        let last = now - Duration::minutes(30);

        let status = evaluate_cooldown(Some(last), two_hours(), now);

        assert_eq!(
            status,
            CooldownStatus::CoolingDown {
                remaining: Duration::minutes(90),
                next_eligible_at: DateTime::<Utc>::MAX_UTC,
            }
        );
    }

    #[test]
    fn eligible_after_adds_delay() {
        assert_eq!(eligible_after(now(), two_hours()), now() + two_hours());
    }

    #[test]
    fn evaluation_is_repeatable() {
        let last = Some(now() - Duration::minutes(30));

        let first = evaluate_cooldown(last, two_hours(), now());
        let second = evaluate_cooldown(last, two_hours(), now());

        assert_eq!(first, second);
    }
}
