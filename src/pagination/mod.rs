pub mod config;
pub mod pager;

pub use config::PageSpec;
pub use pager::Pager;
