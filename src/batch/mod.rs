pub mod cancel;
pub mod driver;
pub mod hooks;

pub use cancel::CancelToken;
pub use driver::{BatchDriver, RunSummary};
pub use hooks::{LogReporter, NoopReclaimer, Reclaimer, Reporter, Transform};
