//! Window geometry persistence.
//!
//! The geometry file holds four whitespace-separated decimal integers,
//! `x y width height`, with no header or trailing structure.

pub mod errors;
pub mod store;
pub mod types;

pub use errors::GeometryError;
pub use store::GeometryStore;
pub use types::WindowGeometry;
