pub mod timer;

pub use timer::{format_duration, ProgressTimer};
