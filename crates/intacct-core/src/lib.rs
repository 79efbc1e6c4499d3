//! Function-to-XML serialization for the Intacct API.
//!
//! A [`Function`] is one verb applied to one entity type with a bag of
//! arguments. Rendering it produces the `<function>` element that a transport
//! layer embeds in its request envelope:
//!
//! ```
//! use intacct_core::{Arguments, Function};
//!
//! let function = Function::new(
//!     "read",
//!     "customer",
//!     Arguments::new().with("keys", vec!["1", "2"]),
//! )
//! .unwrap();
//! let xml = function.to_xml().unwrap();
//! assert!(xml.contains("<read><object>customer</object><keys>1,2</keys></read>"));
//! ```
//!
//! Which arguments appear, and in what order, depends on the verb; see
//! [`policy`] for the tables.

pub mod config;
pub mod control;
pub mod error;
pub mod function;
pub mod policy;

pub use config::SerializerConfig;
pub use control::ControlId;
pub use error::{IntacctError, IntacctResult};
pub use function::Function;
pub use intacct_model::{ArgumentValue, Arguments, Verb, VerbFamily};
pub use intacct_xml::TagCase;
pub use policy::{BodyShape, ReadPolicy, normalize_read_value, select_read_arguments};
