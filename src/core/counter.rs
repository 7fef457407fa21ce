use super::constants::COUNTER_DURATION_MS;

/// Cubic ease-out: fast start, gentle landing. `t` is clamped to [0, 1].
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Interpolates a displayed integer from 0 up to a target over a fixed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterTween {
    pub target: u32,
    pub duration_ms: f64,
}

/// One sample of a running tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u32,
    pub done: bool,
}

impl CounterTween {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            duration_ms: COUNTER_DURATION_MS,
        }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Displayed value `elapsed_ms` after the start. Once progress reaches 1
    /// the value is exactly `target` and `done` is set.
    pub fn sample(&self, elapsed_ms: f64) -> CounterFrame {
        let p = self.progress(elapsed_ms);
        if p >= 1.0 {
            return CounterFrame {
                value: self.target,
                done: true,
            };
        }
        let value = (f64::from(self.target) * ease_out_cubic(p)).round() as u32;
        CounterFrame {
            value: value.min(self.target),
            done: false,
        }
    }
}

/// Read a `data-count` value the way the page markup writes them: optional
/// leading whitespace, then digits; anything after the digits ("+", "%") is
/// ignored. Returns `None` when there are no leading digits.
pub fn parse_count_target(value: &str) -> Option<u32> {
    let digits: String = value
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u32>().ok()
}
