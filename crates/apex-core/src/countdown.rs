use crate::constants::{
    COUNTDOWN_DAYS_AHEAD, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
};
use chrono::{Days, NaiveDateTime, NaiveTime};

/// Offer deadline: midnight minus one second, three days after `now`.
pub fn countdown_target(now: NaiveDateTime) -> Option<NaiveDateTime> {
    let date = now.date().checked_add_days(Days::new(COUNTDOWN_DAYS_AHEAD))?;
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 59)?;
    Some(date.and_time(end_of_day))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Time left until `target_ms`, clamped at zero once the target has passed.
    pub fn between(target_ms: i64, now_ms: i64) -> Self {
        let diff = target_ms.saturating_sub(now_ms).max(0);
        Self {
            days: diff / MS_PER_DAY,
            hours: (diff % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (diff % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (diff % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Zero-padded text for each slot, in display order.
    pub fn slots(&self) -> [(CountdownUnit, String); 4] {
        [
            (CountdownUnit::Days, pad2(self.days)),
            (CountdownUnit::Hours, pad2(self.hours)),
            (CountdownUnit::Minutes, pad2(self.minutes)),
            (CountdownUnit::Seconds, pad2(self.seconds)),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl CountdownUnit {
    pub const ALL: [CountdownUnit; 4] = [
        CountdownUnit::Days,
        CountdownUnit::Hours,
        CountdownUnit::Minutes,
        CountdownUnit::Seconds,
    ];

    /// Value of the `data-cd` attribute marking this slot.
    pub fn data_key(self) -> &'static str {
        match self {
            CountdownUnit::Days => "days",
            CountdownUnit::Hours => "hrs",
            CountdownUnit::Minutes => "min",
            CountdownUnit::Seconds => "sec",
        }
    }
}

#[inline]
pub fn pad2(v: i64) -> String {
    format!("{:02}", v.max(0))
}
