pub mod setup;
pub mod sweep;

pub use setup::SetupService;
pub use sweep::{SweepOptions, SweepService};
