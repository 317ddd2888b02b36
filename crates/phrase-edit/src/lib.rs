//! Validation and commit logic for the shared group/variation editor.
//!
//! The commit functions are pure: they take the current collection, the
//! current [`EditIntent`](phrase_model::EditIntent) and the raw form text,
//! and either return the next collection with the intent cleared or an
//! [`EditError`] without touching anything. [`EditorSession`] wraps them in
//! the state a host keeps between user actions.

pub mod commit;
pub mod error;
pub mod form;
pub mod ops;
pub mod session;

pub use commit::{Commit, commit_group, commit_variation, parse_probability};
pub use error::{EditError, Result};
pub use form::EditForm;
pub use ops::{delete_group, delete_variation};
pub use session::EditorSession;
