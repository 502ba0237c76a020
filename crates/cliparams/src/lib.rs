//! # cliparams
//!
//! Turn typed configuration records into flat `key -> value` maps that are
//! passed verbatim as CLI invocation parameters.
//!
//! ## Core Concepts
//!
//! - **Value**: a tri-state scalar (unknown, null, known) as tracked by a
//!   declarative host
//! - **Field table**: a static list of export keys and accessors, declared
//!   next to the record with [`cli_params!`]
//! - **ParamSource**: a record behind any number of `Option`, `Box`, `Rc`,
//!   `Arc` or reference layers
//! - **Params**: the resulting map
//!
//! ## Rendering rules
//!
//! | Field type | Omitted when | Rendered as |
//! |---|---|---|
//! | `Value<String>` | unknown or null | the string, even if empty |
//! | `Value<bool>` | unknown or null | `"true"` / `"false"` |
//! | `bool` | never | `"true"` / `"false"` |
//! | `String` | empty | the string |
//! | `Option<String>` | `None` | the string |
//! | `Option<MultiValued>` | `None` | compact JSON |
//!
//! Any other type in a field table is a declaration error reported as
//! [`Error::UnsupportedFieldType`].

mod descriptor;
mod document;
mod error;
mod marshal;
mod types;

pub use descriptor::{CliParams, Field, ParamSource};
pub use document::{from_document, json_kind};
pub use error::{Error, Result};
pub use marshal::{Params, to_params, validate_fields};
pub use types::{FieldKind, FieldRef, MultiValued, ParamField, Value};
