use crate::error::RosterResult;
use log;
use std::{fmt::Display, sync::Once};

pub type Result<T> = RosterResult<T>;

#[allow(unused)]
static INIT_LOG: Once = Once::new();

#[allow(unused)]
pub fn init_logger() {
    INIT_LOG.call_once(|| {
        env_logger::builder()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .init();
    });
}

/// Prints a failed run's error to standard output and returns, so the process still exits 0.
///
/// Only errors reach this point. Panics keep unwinding through `main` and terminate the
/// process with the default panic hook.
pub fn report_error(err: impl Display) {
    log::debug!("Run aborted: {err}");
    println!("{err}");
}

pub fn format_salary(salary: f64) -> String {
    format!("{salary:.2}")
}
