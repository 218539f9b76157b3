//! Source of the reference year used in `DateTime` literals.

use chrono::Datelike;

pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Always reports the same year. Makes generated output reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// The year in the local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}
