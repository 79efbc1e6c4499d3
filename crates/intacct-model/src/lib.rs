//! Model types for Intacct function payloads.
//!
//! A function sent to the Intacct XML API is a verb (see [`Verb`]), an entity
//! type such as `customer`, and an ordered bag of [`Arguments`] whose values
//! are [`ArgumentValue`]s. These types are plain data; rendering them to XML
//! lives in `intacct-xml` and the per-verb rules live in `intacct-core`.

pub mod arguments;
pub mod error;
pub mod value;
pub mod verb;

pub use arguments::Arguments;
pub use error::ModelError;
pub use value::ArgumentValue;
pub use verb::{Verb, VerbFamily};
