//! # nds_path
//!
//! Path resolution and table reshaping for JSON-like data.
//!
//! ## What is an NDS?
//!
//! A *normalized data structure* is a table stored as nested arrays and
//! objects, in one of four shapes: an array of row objects, an object of
//! column arrays, an array of row arrays, or an array of column arrays. See
//! [`guide`] for a walkthrough.
//!
//! ## Key Features
//!
//! - **Paths**: JSON Pointers, token arrays with regex tokens, and
//!   `{path, parse}` objects that coerce the resolved value
//! - **Mapper**: builds any of the four shapes from an array of records,
//!   one mapping rule per output column
//! - **Inverter**: swaps rows and columns of any of the four shapes
//! - **Templates**: renders one record per data element from static and path fields
//! - **Atomic**: every operation returns its full result or an error, never both
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! nds_path = "0.1"
//! ```
//!
//! ### Resolving a path
//!
//! ```rust
//! use nds_path::{nds, resolve, Value};
//!
//! let data = nds!({"rows": [{"count": "12"}]});
//! let count = resolve(&nds!({"path": "/rows/0/count", "parse": "integer"}), &data).unwrap();
//! assert_eq!(count, Value::from(12));
//! ```
//!
//! ### Mapping and inverting
//!
//! ```rust
//! use nds_path::{invert, map, nds, InverterConfig, MapperConfig, PathSpec};
//!
//! let data = nds!([{"x": 1, "y": 4}, {"x": 2, "y": 5}]);
//! let config = MapperConfig::new(false)
//!     .with_rule(PathSpec::from("/y"), 0usize)
//!     .with_rule(PathSpec::from("/x"), 1usize);
//!
//! let rows = map(&data, &config).unwrap();
//! assert_eq!(rows, nds!([[4, 1], [5, 2]]));
//!
//! let columns = invert(&rows, &InverterConfig::new(false, true)).unwrap();
//! assert_eq!(columns, nds!([[4, 5], [1, 2]]));
//! ```
//!
//! ### Components
//!
//! [`Component`] holds a transform's `config` and `dataIn` inputs and
//! publishes either `dataOut` or an [`ErrorObject`] whenever both are set:
//!
//! ```rust
//! use nds_path::{nds, ArrayElementMapper, Component};
//!
//! let mut mapper = Component::new(ArrayElementMapper);
//! mapper.set_data_in(nds!([{"a": 1}]));
//! let out = mapper.set_config(nds!({
//!     "mapToObjects": true,
//!     "mappings": [{"src": "/b", "target": "b"}]
//! }));
//! assert!(out.data_out.is_none());
//! assert_eq!(
//!     out.error.as_ref().map(|e| e.message.as_str()),
//!     Some("unable to map value with mapping config at 0 for element 0")
//! );
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`debug` for completed transforms,
//! `trace` for path resolution, `warn` for errors a component publishes).
//! Install any subscriber to see them.

pub mod component;
pub mod config;
pub mod error;
pub mod guide;
pub mod inverter;
pub mod macros;
pub mod map;
pub mod mapper;
pub mod parse;
pub mod path;
pub mod shape;
pub mod template;
pub mod value;

pub use component::{
    recompute, ArrayElementMapper, Component, ComponentState, NdsInverter, Output, Transform,
};
pub use config::{InverterConfig, MapperConfig, MappingRule, Target, MAX_TARGET_INDEX};
pub use error::{Error, ErrorObject, Result};
pub use inverter::invert;
pub use map::Map;
pub use mapper::map;
pub use parse::ParseKind;
pub use path::{Path, PathSpec, Token, TokenSpec};
pub use shape::NdsShape;
pub use template::Template;
pub use value::{Number, Value};

/// Compiles the path specification `spec` and resolves it against `data`.
///
/// Use [`Path::create`] once and [`Path::resolve`] repeatedly when the same
/// path is applied to many values.
///
/// # Examples
///
/// ```rust
/// use nds_path::{nds, resolve, Value};
///
/// let data = nds!({"a~b": [10, 20]});
/// assert_eq!(resolve(&nds!("/a~0b/1"), &data).unwrap(), Value::from(20));
/// assert_eq!(resolve(&nds!(["a~b", 0]), &data).unwrap(), Value::from(10));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidPathSpec`] if `spec` is malformed, otherwise the
/// resolution or coercion error of [`Path::resolve`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn resolve(spec: &Value, data: &Value) -> Result<Value> {
    path::create(spec)?.resolve(data)
}
