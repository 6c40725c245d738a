//! Pattern 5: Date Countdown
//!
//! Calendar-aware difference between two timestamps, in the style of a
//! "N years, M months, ..." countdown. The whole-month distance is taken
//! first (clamping to the last day of a short month), and only the residual
//! is broken into days, hours, minutes and seconds.

use std::fmt;

use chrono::{DateTime, Datelike, FixedOffset, Months, TimeZone};
use itertools::Itertools;
use lazy_static::lazy_static;

lazy_static! {
    /// World Cup 2026 kickoff: June 11, 2026, 10:00 in New York (UTC-4).
    pub static ref KICKOFF: DateTime<FixedOffset> = FixedOffset::west_opt(4 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 6, 11, 10, 0, 0)
        .unwrap();
}

/// Calendar-unit difference. All components share the sign of the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDelta {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CalendarDelta {
    /// The calendar distance from `from` to `to`. Negative components when
    /// `to` lies in the past.
    pub fn between(from: DateTime<FixedOffset>, to: DateTime<FixedOffset>) -> Self {
        let mut months = (i64::from(to.year()) - i64::from(from.year())) * 12
            + (i64::from(to.month()) - i64::from(from.month()));
        let mut anchor = shift_months(from, months);
        // The raw month count can overshoot by one when the days of month
        // disagree; pull the anchor back onto the near side of `to`.
        if to >= from {
            if anchor > to {
                months -= 1;
                anchor = shift_months(from, months);
            }
        } else if anchor < to {
            months += 1;
            anchor = shift_months(from, months);
        }

        let secs = to.signed_duration_since(anchor).num_seconds();
        CalendarDelta {
            years: months / 12,
            months: months % 12,
            days: secs / 86_400,
            hours: secs % 86_400 / 3_600,
            minutes: secs % 3_600 / 60,
            seconds: secs % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.units().iter().all(|(n, _)| *n == 0)
    }

    /// Non-zero units only, largest first, comma-joined: a zero unit is
    /// omitted entirely, never shown as "0 days". An all-zero delta renders
    /// as the empty string.
    pub fn render(&self) -> String {
        self.units()
            .iter()
            .filter(|(n, _)| *n != 0)
            .map(|(n, unit)| format!("{} {}", n, unit))
            .join(", ")
    }

    fn units(&self) -> [(i64, &'static str); 6] {
        [
            (self.years, "years"),
            (self.months, "months"),
            (self.days, "days"),
            (self.hours, "hours"),
            (self.minutes, "minutes"),
            (self.seconds, "seconds"),
        ]
    }
}

impl fmt::Display for CalendarDelta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Remaining calendar time from `now` until kickoff.
pub fn countdown_to_kickoff(now: DateTime<FixedOffset>) -> CalendarDelta {
    CalendarDelta::between(now, *KICKOFF)
}

fn shift_months(dt: DateTime<FixedOffset>, months: i64) -> DateTime<FixedOffset> {
    let shifted = if months >= 0 {
        dt.checked_add_months(Months::new(months.unsigned_abs() as u32))
    } else {
        dt.checked_sub_months(Months::new(months.unsigned_abs() as u32))
    };
    // Reachable only outside chrono's +/-262000-year range.
    shifted.expect("month arithmetic in range")
}
