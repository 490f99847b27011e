//! Record templates: objects whose fields are static values or paths.
//!
//! A template turns each element of a data array into one record. Fields
//! holding a path specification (see [`is_path_tokens`]) are resolved against
//! the element; every other field is copied as is. Field order is kept.
//!
//! ## Examples
//!
//! ```rust
//! use nds_path::{nds, Template};
//!
//! let template = Template::from_value(&nds!({
//!     "lat": {"path": "/pos/0", "parse": "number"},
//!     "lng": ["pos", 1],
//!     "color": "red"
//! }))
//! .unwrap();
//!
//! let records = template
//!     .render_all(&nds!([{"pos": ["52.5", 13.4]}]))
//!     .unwrap();
//! assert_eq!(
//!     records[0],
//!     nds!({"lat": 52.5, "lng": 13.4, "color": "red"}).as_object().cloned().unwrap()
//! );
//! ```

use crate::path::is_path_tokens;
use crate::{Error, Map, Path, PathSpec, Result, Value};

#[derive(Clone, Debug, PartialEq)]
enum Field {
    Static(Value),
    Path(Path),
}

/// A compiled record template.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Template {
    fields: Vec<(String, Field)>,
}

impl Template {
    /// Compiles every path field of `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateConfig`] naming the first field that looks like
    /// a path but does not compile (an invalid regular expression, say).
    pub fn compile(fields: &Map) -> Result<Self> {
        let fields = fields
            .iter()
            .map(|(key, value)| {
                let field = if is_path_tokens(value) {
                    let path = PathSpec::from_value(value)
                        .and_then(|spec| Path::create(&spec))
                        .map_err(|e| Error::template_config(key, e))?;
                    Field::Path(path)
                } else {
                    Field::Static(value.clone())
                };
                Ok((key.clone(), field))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Template { fields })
    }

    /// Compiles a template given as an object value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] if `value` is not an object, or
    /// see [`Template::compile`].
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = value.as_object().ok_or_else(|| {
            Error::config_validation(format!(
                "template must be an object, found {}",
                value.kind()
            ))
        })?;
        Template::compile(fields)
    }

    /// Names of the fields resolved from data, in field order.
    pub fn path_fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter_map(|(key, field)| match field {
            Field::Path(_) => Some(key.as_str()),
            Field::Static(_) => None,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders a single record. Failures report element `0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateValue`] naming the field that failed to resolve.
    pub fn render(&self, record: &Value) -> Result<Map> {
        self.render_element(record, 0)
    }

    /// Renders one record per element of the array `data`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataValidation`] if `data` is not an array and
    /// [`Error::TemplateValue`] naming the field and element of the first
    /// resolution failure.
    pub fn render_all(&self, data: &Value) -> Result<Vec<Map>> {
        let elements = data.as_array().ok_or_else(|| {
            Error::data_validation(format!("expected an array, found {}", data.kind()))
        })?;
        let records = elements
            .iter()
            .enumerate()
            .map(|(i, element)| self.render_element(element, i))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(records = records.len(), fields = self.len(), "rendered template");
        Ok(records)
    }

    /// Resolves `data_path` against `data`, then renders the array of objects
    /// it points to.
    ///
    /// # Errors
    ///
    /// Returns the resolution error of `data_path`, [`Error::DataValidation`]
    /// when the resolved value is not an array of objects, or see
    /// [`Template::render_all`].
    pub fn render_at(&self, data_path: &Path, data: &Value) -> Result<Vec<Map>> {
        let resolved = data_path.lookup(data)?;
        let elements = resolved.as_array().ok_or_else(|| {
            Error::data_validation(format!(
                "data referenced by {} must be an array of objects, found {}",
                data_path,
                resolved.kind()
            ))
        })?;
        if let Some(i) = elements.iter().position(|e| !e.is_object()) {
            return Err(Error::data_validation(format!(
                "data referenced by {} must be an array of objects, element at {} is not",
                data_path, i
            )));
        }
        self.render_all(resolved)
    }

    fn render_element(&self, element: &Value, index: usize) -> Result<Map> {
        let mut record = Map::with_capacity(self.fields.len());
        for (key, field) in &self.fields {
            let value = match field {
                Field::Static(value) => value.clone(),
                Field::Path(path) => path
                    .resolve(element)
                    .map_err(|e| Error::template_value(key, index, e))?,
            };
            record.insert(key.clone(), value);
        }
        Ok(record)
    }
}

impl TryFrom<&Map> for Template {
    type Error = Error;

    fn try_from(fields: &Map) -> Result<Self> {
        Template::compile(fields)
    }
}
