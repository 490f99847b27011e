//! Property-based tests for the guarantees the transforms make on any input:
//! array inversion round-trips, pointers and token arrays agree, and the
//! mapper keeps element order.

use nds_path::{invert, map, resolve, InverterConfig, MapperConfig, PathSpec, Value};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
    ]
}

/// Rectangular `rows x cols` array of arrays.
fn table() -> impl Strategy<Value = Value> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(scalar(), cols), rows).prop_map(|rows| {
            Value::Array(rows.into_iter().map(Value::Array).collect())
        })
    })
}

fn escape(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

proptest! {
    #[test]
    fn prop_array_inversion_round_trips(data in table(), tuples in any::<bool>()) {
        let config = InverterConfig::new(false, tuples);
        let once = invert(&data, &config).unwrap();
        prop_assert_eq!(invert(&once, &config.transposed()).unwrap(), data);
    }

    #[test]
    fn prop_inversion_swaps_dimensions(data in table()) {
        let rows = data.as_array().unwrap();
        let cols = rows[0].as_array().unwrap().len();
        let once = invert(&data, &InverterConfig::new(false, true)).unwrap();
        let out = once.as_array().unwrap();
        prop_assert_eq!(out.len(), cols);
        prop_assert!(out.iter().all(|c| c.as_array().map(Vec::len) == Some(rows.len())));
    }

    #[test]
    fn prop_pointer_matches_token_array(
        keys in prop::collection::vec("[a-z~/]{1,4}", 1..4),
        leaf in scalar(),
    ) {
        let mut data = leaf.clone();
        for key in keys.iter().rev() {
            data = Value::Object(std::iter::once((key.clone(), data)).collect());
        }
        let pointer: String = keys.iter().map(|k| format!("/{}", escape(k))).collect();
        let tokens = Value::Array(keys.iter().map(|k| Value::from(k.as_str())).collect());

        let by_pointer = resolve(&Value::from(pointer), &data).unwrap();
        prop_assert_eq!(&by_pointer, &leaf);
        // Token names that look like regexes match by pattern instead.
        if keys.iter().all(|k| !(k.len() >= 2 && k.starts_with('/') && k.ends_with('/'))) {
            prop_assert_eq!(resolve(&tokens, &data).unwrap(), leaf);
        }
    }

    #[test]
    fn prop_mapper_keeps_element_order(values in prop::collection::vec(any::<i64>(), 0..20)) {
        let data = Value::Array(
            values
                .iter()
                .map(|v| Value::Object(std::iter::once(("v".to_string(), Value::from(*v))).collect()))
                .collect(),
        );
        let config = MapperConfig::new(false).with_rule(PathSpec::from("/v"), 0usize);

        let tuples = map(&data, &config).unwrap();
        let expected: Vec<Value> = values.iter().map(|v| Value::Array(vec![Value::from(*v)])).collect();
        prop_assert_eq!(tuples, Value::Array(expected));

        let series = map(&data, &config.with_tuples(false)).unwrap();
        let column: Vec<Value> = values.iter().map(|v| Value::from(*v)).collect();
        let expected = if values.is_empty() { vec![] } else { vec![Value::Array(column)] };
        prop_assert_eq!(series, Value::Array(expected));
    }
}
