//! The one place the generator asks what time it is.
//!
//! The index footer carries a generation timestamp. Everything else in the
//! render path is pure, so the renderer takes a `&dyn Clock` and tests pass a
//! [`FixedClock`] to get byte-identical output.
//!
//! Times carry their local UTC offset, so format strings using `%z`, `%:z`
//! or `%Z` render like any other field.

use chrono::{DateTime, Local};

pub trait Clock {
    /// Current local wall time.
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system clock in the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
