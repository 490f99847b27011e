//! Element-wise mapping of an array into one of the four NDS shapes.
//!
//! Each input element (all objects or all arrays) becomes one *mapped
//! element*: an object when `mapToObjects` is set, an array otherwise. Every
//! mapping rule resolves its `src` path against the input element and stores
//! the result under its `target`. With `mapToTuples` unset the mapped rows
//! are then turned into series.
//!
//! The whole operation is atomic: the first rule that fails to resolve aborts
//! it with [`Error::MappingValue`] and nothing is returned.
//!
//! ## Examples
//!
//! ```rust
//! use nds_path::{map, nds, MapperConfig};
//!
//! let data = nds!([
//!     {"foo": "boo1", "b": ["3"]},
//!     {"foo": "boo3", "b": ["4"]}
//! ]);
//! let config = MapperConfig::from_value(&nds!({
//!     "mapToObjects": true,
//!     "mapToTuples": false,
//!     "mappings": [
//!         {"src": "/foo", "target": "name"},
//!         {"src": {"path": ["b", 0], "parse": "number"}, "target": "count"}
//!     ]
//! }))
//! .unwrap();
//!
//! assert_eq!(
//!     map(&data, &config).unwrap(),
//!     nds!({"name": ["boo1", "boo3"], "count": [3, 4]})
//! );
//! ```

use crate::shape::homogeneous_elements;
use crate::{Error, MapperConfig, MappingRule, NdsShape, Path, Result, Target, Value};
use indexmap::IndexMap;

/// Maps every element of the array `data` according to `config`.
///
/// # Errors
///
/// - [`Error::ConfigValidation`] if the config breaks its target or uniqueness rules
/// - [`Error::DataValidation`] if `data` is not an array of only objects or only arrays
/// - [`Error::MappingConfig`] naming the rule whose `src` does not compile
/// - [`Error::MappingValue`] naming the rule and element that failed to resolve
pub fn map(data: &Value, config: &MapperConfig) -> Result<Value> {
    config.validate()?;
    let element_kind = homogeneous_elements(data)?;
    let elements = data.as_array().map(Vec::as_slice).unwrap_or_default();

    let paths = compile_rules(config.mappings())?;
    let shape = config.shape();
    tracing::debug!(
        elements = elements.len(),
        rules = paths.len(),
        ?element_kind,
        %shape,
        "mapping array elements"
    );

    let out = match shape {
        NdsShape::ObjectTuples => Value::Array(
            object_rows(elements, config.mappings(), &paths)?
                .into_iter()
                .map(Value::Object)
                .collect(),
        ),
        NdsShape::ObjectSeries => series_by_key(object_rows(elements, config.mappings(), &paths)?),
        NdsShape::ArrayTuples => Value::Array(
            array_rows(elements, config.mappings(), &paths)?
                .into_iter()
                .map(Value::Array)
                .collect(),
        ),
        NdsShape::ArraySeries => {
            series_by_position(array_rows(elements, config.mappings(), &paths)?)
        }
    };
    Ok(out)
}

fn compile_rules(rules: &[MappingRule]) -> Result<Vec<Path>> {
    rules
        .iter()
        .enumerate()
        .map(|(i, rule)| Path::create(&rule.src).map_err(|e| Error::mapping_config(i, e)))
        .collect()
}

/// Resolves every rule against one element, in rule order.
fn resolve_element<'r>(
    element: &Value,
    element_index: usize,
    rules: &'r [MappingRule],
    paths: &[Path],
) -> Result<Vec<(&'r Target, Value)>> {
    rules
        .iter()
        .zip(paths)
        .enumerate()
        .map(|(rule_index, (rule, path))| {
            path.resolve(element)
                .map(|value| (&rule.target, value))
                .map_err(|e| Error::mapping_value(rule_index, element_index, e))
        })
        .collect()
}

fn object_rows(
    elements: &[Value],
    rules: &[MappingRule],
    paths: &[Path],
) -> Result<Vec<crate::Map>> {
    elements
        .iter()
        .enumerate()
        .map(|(i, element)| {
            let mut row = crate::Map::with_capacity(rules.len());
            for (target, value) in resolve_element(element, i, rules, paths)? {
                if let Target::Key(key) = target {
                    row.insert(key.clone(), value);
                }
            }
            Ok(row)
        })
        .collect()
}

/// Array rows are as long as the highest target index; unset positions are null.
fn array_rows(
    elements: &[Value],
    rules: &[MappingRule],
    paths: &[Path],
) -> Result<Vec<Vec<Value>>> {
    elements
        .iter()
        .enumerate()
        .map(|(i, element)| {
            let mut row = Vec::with_capacity(rules.len());
            for (target, value) in resolve_element(element, i, rules, paths)? {
                if let Target::Index(index) = *target {
                    if row.len() <= index {
                        row.resize(index + 1, Value::Null);
                    }
                    row[index] = value;
                }
            }
            Ok(row)
        })
        .collect()
}

/// One column per key in first-seen order. A row lacking a key adds nothing
/// to that key's column, so columns are only equal in length when every row
/// carries every key.
fn series_by_key(rows: Vec<crate::Map>) -> Value {
    let mut columns: IndexMap<String, Vec<Value>> = IndexMap::new();
    for row in rows {
        for (key, value) in row {
            columns.entry(key).or_default().push(value);
        }
    }
    Value::Object(
        columns
            .into_iter()
            .map(|(key, column)| (key, Value::Array(column)))
            .collect(),
    )
}

fn series_by_position(rows: Vec<Vec<Value>>) -> Value {
    let mut columns: Vec<Vec<Value>> = Vec::new();
    for row in rows {
        for (j, value) in row.into_iter().enumerate() {
            if columns.len() <= j {
                columns.push(Vec::new());
            }
            columns[j].push(value);
        }
    }
    Value::Array(columns.into_iter().map(Value::Array).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{nds, Map, PathSpec};

    #[test]
    fn test_series_by_key_is_row_driven() {
        let rows: Vec<Map> = vec![
            vec![("a".to_string(), Value::from(1))].into_iter().collect(),
            vec![
                ("b".to_string(), Value::from(2)),
                ("a".to_string(), Value::from(3)),
            ]
            .into_iter()
            .collect(),
        ];
        assert_eq!(series_by_key(rows), nds!({"a": [1, 3], "b": [2]}));
    }

    #[test]
    fn test_sparse_array_targets_fill_null() {
        let config = MapperConfig::new(false)
            .with_rule(PathSpec::from("/a"), 2usize)
            .with_rule(PathSpec::from("/b"), 0usize);
        let out = map(&nds!([{"a": 1, "b": 2}]), &config).unwrap();
        assert_eq!(out, nds!([[2, null, 1]]));
    }

    #[test]
    fn test_empty_input_per_shape() {
        let rule = PathSpec::from("/a");
        let objects = MapperConfig::new(true).with_rule(rule.clone(), "a");
        let arrays = MapperConfig::new(false).with_rule(rule, 0usize);

        assert_eq!(map(&nds!([]), &objects).unwrap(), nds!([]));
        assert_eq!(map(&nds!([]), &objects.with_tuples(false)).unwrap(), nds!({}));
        assert_eq!(map(&nds!([]), &arrays.with_tuples(false)).unwrap(), nds!([]));
    }

    #[test]
    fn test_uncompilable_regex_is_mapping_config_error() {
        let config = MapperConfig::new(true)
            .with_rule(PathSpec::from("/a"), "a")
            .with_rule(PathSpec::Tokens(vec![crate::TokenSpec::Name("/(/".into())]), "b");
        let err = map(&nds!([{"a": 1}]), &config).unwrap_err();
        assert!(matches!(err, Error::MappingConfig { rule: 1, .. }));
    }
}
