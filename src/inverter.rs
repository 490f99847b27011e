//! Row/column inversion of normalized data structures.
//!
//! Inversion swaps the role of row index and column key. Object shapes keep
//! their element kind: original row indices become the (stringified) keys of
//! the output, original keys become positions.
//!
//! | Input shape | Input | Output |
//! |---|---|---|
//! | object tuples | `[{"a":1,"b":4},{"a":2,"b":5}]` | `[{"0":1,"1":2},{"0":4,"1":5}]` |
//! | object series | `{"a":[1,2,3],"b":[4,5,6]}` | `{"0":[1,4],"1":[2,5],"2":[3,6]}` |
//! | array tuples / series | `[[1,4],[2,5],[3,6]]` | `[[1,2,3],[4,5,6]]` |
//!
//! The input is validated against its shape first; once that passes,
//! inversion cannot fail.
//!
//! ## Examples
//!
//! ```rust
//! use nds_path::{invert, nds, InverterConfig};
//!
//! let config = InverterConfig::new(false, true);
//! let rows = nds!([[1, 4], [2, 5], [3, 6]]);
//!
//! let columns = invert(&rows, &config).unwrap();
//! assert_eq!(columns, nds!([[1, 2, 3], [4, 5, 6]]));
//! assert_eq!(invert(&columns, &config.transposed()).unwrap(), rows);
//! ```

use crate::{Error, InverterConfig, Map, NdsShape, Result, Value};

/// Inverts `data`, whose shape is described by `config`.
///
/// # Errors
///
/// Returns [`Error::DataValidation`] when `data` does not have the configured
/// shape and [`Error::ShapeLengthMismatch`] when its rows or series differ in
/// length.
pub fn invert(data: &Value, config: &InverterConfig) -> Result<Value> {
    let shape = config.shape();
    shape.validate(data)?;

    let out = match (shape, data) {
        (NdsShape::ObjectTuples, Value::Array(rows)) => invert_object_tuples(rows),
        (NdsShape::ObjectSeries, Value::Object(series)) => invert_object_series(series),
        (NdsShape::ArrayTuples | NdsShape::ArraySeries, Value::Array(rows)) => {
            transpose_arrays(rows)
        }
        (shape, other) => {
            return Err(Error::data_validation(format!(
                "expected {}, found {}",
                shape,
                other.kind()
            )))
        }
    };
    tracing::debug!(%shape, "inverted data");
    Ok(out)
}

/// One output object per column of the first row, keyed by input row index.
fn invert_object_tuples(rows: &[Value]) -> Value {
    let Some(Value::Object(first)) = rows.first() else {
        return Value::Array(Vec::new());
    };
    let inverted = first
        .keys()
        .map(|key| {
            let column: Map = rows
                .iter()
                .enumerate()
                .map(|(r, row)| {
                    let cell = row
                        .as_object()
                        .and_then(|obj| obj.get(key))
                        .cloned()
                        .unwrap_or_default();
                    (r.to_string(), cell)
                })
                .collect();
            Value::Object(column)
        })
        .collect();
    Value::Array(inverted)
}

/// One output series per input position, keyed by that position.
fn invert_object_series(series: &Map) -> Value {
    let len = series
        .values()
        .next()
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    let inverted = (0..len)
        .map(|r| {
            let row = series
                .values()
                .map(|column| {
                    column
                        .as_array()
                        .and_then(|c| c.get(r))
                        .cloned()
                        .unwrap_or_default()
                })
                .collect();
            (r.to_string(), Value::Array(row))
        })
        .collect();
    Value::Object(inverted)
}

fn transpose_arrays(rows: &[Value]) -> Value {
    let width = rows
        .first()
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    let transposed = (0..width)
        .map(|c| {
            let column = rows
                .iter()
                .map(|row| {
                    row.as_array()
                        .and_then(|r| r.get(c))
                        .cloned()
                        .unwrap_or_default()
                })
                .collect();
            Value::Array(column)
        })
        .collect();
    Value::Array(transposed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nds;

    #[test]
    fn test_object_tuples_keyed_by_row_index() {
        let out = invert(
            &nds!([{"a": 1, "b": 4}, {"a": 2, "b": 5}]),
            &InverterConfig::new(true, true),
        )
        .unwrap();
        assert_eq!(out, nds!([{"0": 1, "1": 2}, {"0": 4, "1": 5}]));
    }

    #[test]
    fn test_object_tuples_follow_first_row_key_order() {
        let out = invert(
            &nds!([{"b": 1, "a": 2}, {"a": 3, "b": 4}]),
            &InverterConfig::new(true, true),
        )
        .unwrap();
        assert_eq!(out, nds!([{"0": 1, "1": 4}, {"0": 2, "1": 3}]));
    }

    #[test]
    fn test_object_series() {
        let out = invert(
            &nds!({"a": [1, 2, 3], "b": [4, 5, 6]}),
            &InverterConfig::new(true, false),
        )
        .unwrap();
        assert_eq!(out, nds!({"0": [1, 4], "1": [2, 5], "2": [3, 6]}));
    }

    #[test]
    fn test_length_mismatch_produces_no_output() {
        let err = invert(&nds!([[1, 2], [3]]), &InverterConfig::new(false, true)).unwrap_err();
        assert!(matches!(err, Error::ShapeLengthMismatch { .. }));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(
            invert(&nds!([]), &InverterConfig::new(true, true)).unwrap(),
            nds!([])
        );
        assert_eq!(
            invert(&nds!({}), &InverterConfig::new(true, false)).unwrap(),
            nds!({})
        );
        assert_eq!(
            invert(&nds!([[], []]), &InverterConfig::new(false, false)).unwrap(),
            nds!([])
        );
    }
}
