pub mod kind;
pub mod record;

pub use kind::ReleaseType;
pub use record::{Attribute, ReleaseRecord};
