//! The four normalized data structure (NDS) shapes and their validation.
//!
//! | `elementsAreObjects` | `dataContainsTuples` | Shape | Example |
//! |---|---|---|---|
//! | `true` | `true` | [`NdsShape::ObjectTuples`] | `[{"a":1,"b":4},{"a":2,"b":5}]` |
//! | `true` | `false` | [`NdsShape::ObjectSeries`] | `{"a":[1,2],"b":[4,5]}` |
//! | `false` | `true` | [`NdsShape::ArrayTuples`] | `[[1,4],[2,5]]` |
//! | `false` | `false` | [`NdsShape::ArraySeries`] | `[[1,2],[4,5]]` |
//!
//! [`NdsShape::validate`] is the structural gate every transform passes
//! before it runs: the container kinds must match the shape, and every row
//! (tuples) or series (series) must have the same length.

use crate::{Error, Result, Value};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NdsShape {
    /// Array of row objects keyed by column name.
    ObjectTuples,
    /// Object keyed by column name, each value a column array.
    ObjectSeries,
    /// Array of row arrays, column-indexed.
    ArrayTuples,
    /// Array of column arrays, row-indexed.
    ArraySeries,
}

impl NdsShape {
    /// Selects the shape from the two configuration flags.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nds_path::NdsShape;
    ///
    /// let shape = NdsShape::from_flags(true, false);
    /// assert_eq!(shape, NdsShape::ObjectSeries);
    /// assert!(shape.elements_are_objects());
    /// assert!(!shape.data_contains_tuples());
    /// ```
    #[must_use]
    pub const fn from_flags(elements_are_objects: bool, data_contains_tuples: bool) -> Self {
        match (elements_are_objects, data_contains_tuples) {
            (true, true) => NdsShape::ObjectTuples,
            (true, false) => NdsShape::ObjectSeries,
            (false, true) => NdsShape::ArrayTuples,
            (false, false) => NdsShape::ArraySeries,
        }
    }

    #[must_use]
    pub const fn elements_are_objects(&self) -> bool {
        matches!(self, NdsShape::ObjectTuples | NdsShape::ObjectSeries)
    }

    #[must_use]
    pub const fn data_contains_tuples(&self) -> bool {
        matches!(self, NdsShape::ObjectTuples | NdsShape::ArrayTuples)
    }

    /// The same element kind with the tuple/series orientation swapped.
    #[must_use]
    pub const fn transposed(&self) -> Self {
        Self::from_flags(self.elements_are_objects(), !self.data_contains_tuples())
    }

    /// Checks that `data` conforms to this shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataValidation`] when a container has the wrong kind
    /// (or an object row lacks a column of the first row), and
    /// [`Error::ShapeLengthMismatch`] naming the first row index or series key
    /// whose length differs from the first one.
    pub fn validate(&self, data: &Value) -> Result<()> {
        match self {
            NdsShape::ObjectTuples => validate_object_tuples(data),
            NdsShape::ObjectSeries => validate_object_series(data),
            NdsShape::ArrayTuples | NdsShape::ArraySeries => validate_arrays(data),
        }
    }
}

impl fmt::Display for NdsShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NdsShape::ObjectTuples => "array of object tuples",
            NdsShape::ObjectSeries => "object of series",
            NdsShape::ArrayTuples => "array of array tuples",
            NdsShape::ArraySeries => "array of array series",
        };
        f.write_str(name)
    }
}

fn expect_array<'a>(data: &'a Value, shape: &str) -> Result<&'a Vec<Value>> {
    data.as_array().ok_or_else(|| {
        Error::data_validation(format!("expected {}, found {}", shape, data.kind()))
    })
}

fn validate_object_tuples(data: &Value) -> Result<()> {
    let rows = expect_array(data, "an array of objects")?;
    let mut columns = None;
    for (i, row) in rows.iter().enumerate() {
        let obj = row.as_object().ok_or_else(|| {
            Error::data_validation(format!("element at {} is not an object", i))
        })?;
        let first = match columns {
            None => {
                columns = Some(obj);
                continue;
            }
            Some(first) => first,
        };
        if obj.len() != first.len() {
            return Err(Error::shape_length_mismatch(i, first.len(), obj.len()));
        }
        if let Some(missing) = first.keys().find(|k| !obj.contains_key(k)) {
            return Err(Error::data_validation(format!(
                "element at {} lacks column {:?}",
                i, missing
            )));
        }
    }
    Ok(())
}

fn validate_object_series(data: &Value) -> Result<()> {
    let obj = data.as_object().ok_or_else(|| {
        Error::data_validation(format!(
            "expected an object of arrays, found {}",
            data.kind()
        ))
    })?;
    let mut expected = None;
    for (key, series) in obj.iter() {
        let arr = series.as_array().ok_or_else(|| {
            Error::data_validation(format!("series with key {:?} is not an array", key))
        })?;
        match expected {
            None => expected = Some(arr.len()),
            Some(len) if len != arr.len() => {
                return Err(Error::shape_length_mismatch(key, len, arr.len()))
            }
            Some(_) => {}
        }
    }
    Ok(())
}

fn validate_arrays(data: &Value) -> Result<()> {
    let outer = expect_array(data, "an array of arrays")?;
    let mut expected = None;
    for (i, elem) in outer.iter().enumerate() {
        let arr = elem.as_array().ok_or_else(|| {
            Error::data_validation(format!("element at {} is not an array", i))
        })?;
        match expected {
            None => expected = Some(arr.len()),
            Some(len) if len != arr.len() => {
                return Err(Error::shape_length_mismatch(i, len, arr.len()))
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Element kind of a homogeneous input array for the mapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Objects,
    Arrays,
}

/// Checks that `data` is an array whose elements are all objects or all arrays.
///
/// Returns `None` for an empty array.
///
/// # Errors
///
/// Returns [`Error::DataValidation`] for non-arrays, scalar elements, or a
/// mix of objects and arrays.
pub fn homogeneous_elements(data: &Value) -> Result<Option<ElementKind>> {
    let elements = expect_array(data, "an array")?;
    let mut kind = None;
    for (i, elem) in elements.iter().enumerate() {
        let this = match elem {
            Value::Object(_) => ElementKind::Objects,
            Value::Array(_) => ElementKind::Arrays,
            other => {
                return Err(Error::data_validation(format!(
                    "element at {} must be an object or an array, found {}",
                    i,
                    other.kind()
                )))
            }
        };
        match kind {
            None => kind = Some(this),
            Some(k) if k != this => {
                return Err(Error::data_validation(format!(
                    "element at {} mixes objects and arrays",
                    i
                )))
            }
            Some(_) => {}
        }
    }
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nds;

    #[test]
    fn test_transposed_swaps_orientation_only() {
        assert_eq!(NdsShape::ObjectTuples.transposed(), NdsShape::ObjectSeries);
        assert_eq!(NdsShape::ArraySeries.transposed(), NdsShape::ArrayTuples);
    }

    #[test]
    fn test_array_length_mismatch_names_index() {
        let err = NdsShape::ArrayTuples
            .validate(&nds!([[1, 2], [3]]))
            .unwrap_err();
        match err {
            Error::ShapeLengthMismatch { at, expected, found } => {
                assert_eq!(at, "1");
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_series_length_mismatch_names_key() {
        let err = NdsShape::ObjectSeries
            .validate(&nds!({"a": [1, 2], "b": [3, 4], "c": [5]}))
            .unwrap_err();
        assert!(matches!(err, Error::ShapeLengthMismatch { ref at, .. } if at == "c"));
    }

    #[test]
    fn test_object_tuples_require_same_columns() {
        assert!(NdsShape::ObjectTuples
            .validate(&nds!([{"a": 1}, {"b": 2}]))
            .is_err());
        assert!(matches!(
            NdsShape::ObjectTuples.validate(&nds!([{"a": 1}, {"a": 2, "b": 3}])),
            Err(Error::ShapeLengthMismatch { .. })
        ));
        assert!(NdsShape::ObjectTuples
            .validate(&nds!([{"a": 1, "b": 2}, {"b": 3, "a": 4}]))
            .is_ok());
    }

    #[test]
    fn test_wrong_container_kinds() {
        assert!(matches!(
            NdsShape::ObjectSeries.validate(&nds!([[1]])),
            Err(Error::DataValidation(_))
        ));
        assert!(matches!(
            NdsShape::ArrayTuples.validate(&nds!([{"a": 1}])),
            Err(Error::DataValidation(_))
        ));
        assert!(NdsShape::ObjectTuples.validate(&nds!([])).is_ok());
        assert!(NdsShape::ObjectSeries.validate(&nds!({})).is_ok());
    }

    #[test]
    fn test_homogeneous_elements() {
        assert_eq!(homogeneous_elements(&nds!([])).unwrap(), None);
        assert_eq!(
            homogeneous_elements(&nds!([{}, {"a": 1}])).unwrap(),
            Some(ElementKind::Objects)
        );
        assert!(homogeneous_elements(&nds!([{}, []])).is_err());
        assert!(homogeneous_elements(&nds!([1])).is_err());
        assert!(homogeneous_elements(&nds!({"a": 1})).is_err());
    }
}
