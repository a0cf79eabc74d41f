use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const YEAR: u64 = 365 * DAY;

/// Left-pads `value` with `fill` up to `width` characters.
pub fn lpad(value: impl Display, width: usize, fill: char) -> String {
    let value = value.to_string();
    let len = value.chars().count();
    if len >= width {
        return value;
    }
    let mut padded: String = std::iter::repeat(fill).take(width - len).collect();
    padded.push_str(&value);
    padded
}

/// A duration broken down into calendar-ish units (365-day years).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeParts {
    pub seconds: u64,
    pub minutes: u64,
    pub hours: u64,
    pub days: u64,
    pub years: u64,
}

pub fn seconds_to_object(total: u64) -> TimeParts {
    TimeParts {
        years: total / YEAR,
        days: total % YEAR / DAY,
        hours: total % DAY / HOUR,
        minutes: total % HOUR / MINUTE,
        seconds: total % MINUTE,
    }
}

impl Display for TimeParts {
    /// `1y 2d 11h 13m 10s`; leading zero units are left out.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = [
            (self.years, 'y'),
            (self.days, 'd'),
            (self.hours, 'h'),
            (self.minutes, 'm'),
        ];
        let mut started = false;
        for (amount, suffix) in units {
            if started || amount > 0 {
                write!(f, "{}{} ", amount, suffix)?;
                started = true;
            }
        }
        write!(f, "{}s", self.seconds)
    }
}
