//! Обратный отсчёт до ежедневного времени отсечки заказов

use crate::shared::display::Tone;
use chrono::{Duration, NaiveTime};

/// Remaining time under this many minutes is highlighted.
pub const CUTOFF_WARNING_MINUTES: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutoffCountdown {
    /// Orders placed now are processed today
    Open { remaining: Duration },
    /// Orders placed now roll to the next business day
    Passed,
}

pub fn cutoff_countdown(now: NaiveTime, cutoff: NaiveTime) -> CutoffCountdown {
    if now < cutoff {
        CutoffCountdown::Open {
            remaining: cutoff - now,
        }
    } else {
        CutoffCountdown::Passed
    }
}

impl CutoffCountdown {
    pub fn is_passed(&self) -> bool {
        matches!(self, CutoffCountdown::Passed)
    }

    pub fn tone(&self) -> Tone {
        match self {
            CutoffCountdown::Passed => Tone::Error,
            CutoffCountdown::Open { remaining }
                if remaining.num_minutes() < CUTOFF_WARNING_MINUTES =>
            {
                Tone::Warning
            }
            CutoffCountdown::Open { .. } => Tone::Primary,
        }
    }

    /// "HH:MM:SS" left, or "00:00:00" once passed.
    pub fn remaining_hms(&self) -> String {
        let secs = match self {
            CutoffCountdown::Open { remaining } => remaining.num_seconds().max(0),
            CutoffCountdown::Passed => 0,
        };
        format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_before_cutoff() {
        let countdown = cutoff_countdown(t(10, 0, 0), t(13, 10, 0));
        assert_eq!(
            countdown,
            CutoffCountdown::Open {
                remaining: Duration::minutes(190)
            }
        );
        assert_eq!(countdown.remaining_hms(), "03:10:00");
        assert_eq!(countdown.tone(), Tone::Primary);
    }

    #[test]
    fn test_close_to_cutoff_warns() {
        let countdown = cutoff_countdown(t(12, 45, 30), t(13, 10, 0));
        assert_eq!(countdown.remaining_hms(), "00:24:30");
        assert_eq!(countdown.tone(), Tone::Warning);
    }

    #[test]
    fn test_exactly_thirty_minutes_left_is_not_highlighted() {
        let at_threshold = cutoff_countdown(t(12, 40, 0), t(13, 10, 0));
        assert_eq!(at_threshold.remaining_hms(), "00:30:00");
        assert_eq!(at_threshold.tone(), Tone::Primary);

        let just_under = cutoff_countdown(t(12, 40, 1), t(13, 10, 0));
        assert_eq!(just_under.remaining_hms(), "00:29:59");
        assert_eq!(just_under.tone(), Tone::Warning);
    }

    #[test]
    fn test_at_and_after_cutoff() {
        assert!(cutoff_countdown(t(13, 10, 0), t(13, 10, 0)).is_passed());
        let late = cutoff_countdown(t(18, 0, 0), t(13, 10, 0));
        assert!(late.is_passed());
        assert_eq!(late.remaining_hms(), "00:00:00");
        assert_eq!(late.tone(), Tone::Error);
    }
}
