pub mod collection;
pub mod error;
pub mod group;
pub mod intent;
pub mod sample;

pub use collection::{check_invariants, find_group};
pub use error::{ModelError, Result};
pub use group::{Group, Variation};
pub use intent::EditIntent;
pub use sample::sample_groups;
