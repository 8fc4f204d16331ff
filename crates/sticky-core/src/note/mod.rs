//! Note text persistence.

pub mod errors;
pub mod store;

pub use errors::NoteError;
pub use store::NoteStore;
