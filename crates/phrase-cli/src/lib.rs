//! Library components of the phrase editor command-line host.

pub mod logging;
pub mod script;
