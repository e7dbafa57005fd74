pub mod normalize;
pub mod replace;

pub use normalize::NormalizeWhitespace;
pub use replace::{TargetField, TextReplace};
