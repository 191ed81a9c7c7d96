use crate::constants::COUNTER_DURATION_MS;
use once_cell::sync::Lazy;
use regex::Regex;

// Leading decimal number, as a page author would write it in `data-count`.
static LEADING_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("number pattern is valid")
});

/// Quartic ease-out over `progress` in [0, 1].
#[inline]
pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountFormat {
    Integer,
    OneDecimal,
}

impl CountFormat {
    /// Whole targets count in integers, anything else with one decimal.
    pub fn for_target(target: f64) -> Self {
        if target.fract() == 0.0 {
            CountFormat::Integer
        } else {
            CountFormat::OneDecimal
        }
    }
}

pub fn format_count(value: f64, format: CountFormat) -> String {
    match format {
        // half-up, like Math.round
        CountFormat::Integer => format!("{}", (value + 0.5).floor() as i64),
        // ties away from zero, like toFixed
        CountFormat::OneDecimal => format!("{:.1}", (value * 10.0).round() / 10.0),
    }
}

/// Parse a `data-count` attribute from its leading number, so `"500+"` counts
/// to 500. Values without a leading number disable the counter.
pub fn parse_count_target(raw: &str) -> Option<f64> {
    let m = LEADING_NUMBER_RE.find(raw.trim_start())?;
    m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub finished: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    duration_ms: f64,
    start_ms: f64,
    format: CountFormat,
}

impl CounterAnimation {
    pub fn starting_at(target: f64, duration_ms: f64, start_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            start_ms,
            format: CountFormat::for_target(target),
        }
    }

    pub fn with_default_duration(target: f64, start_ms: f64) -> Self {
        Self::starting_at(target, COUNTER_DURATION_MS, start_ms)
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        // frame timestamps may precede the start time slightly
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_ms: f64) -> CounterFrame {
        let progress = self.progress(now_ms);
        let value = if progress >= 1.0 {
            self.target
        } else {
            self.target * ease_out_quart(progress)
        };
        CounterFrame {
            text: format_count(value, self.format),
            finished: progress >= 1.0,
        }
    }
}
