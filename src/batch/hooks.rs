use anyhow::Result;

use crate::domain::ContentRecord;

/// Caller-supplied per-record mutation. Operates on the working copy in
/// place; returning an error aborts the whole run.
pub trait Transform {
    fn apply(&mut self, record: &mut ContentRecord) -> Result<()>;
}

/// Receives the driver's status lines. Fire-and-forget.
pub trait Reporter {
    fn log(&mut self, message: &str);
}

/// Default reporter: forwards status lines to the log.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn log(&mut self, message: &str) {
        log::info!("{message}");
    }
}

/// Resets accumulated diagnostics at every page boundary. Long sweeps over
/// very large data sets grow per-statement instrumentation buffers without
/// bound unless something drains them between pages.
pub trait Reclaimer {
    fn reset(&mut self);
}

pub struct NoopReclaimer;

impl Reclaimer for NoopReclaimer {
    fn reset(&mut self) {}
}
