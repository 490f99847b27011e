use nds_path::{
    nds, recompute, ArrayElementMapper, Component, ComponentState, Error, NdsInverter, Value,
};

fn mapper_config() -> Value {
    nds!({
        "mapToObjects": true,
        "mapToTuples": false,
        "mappings": [{"src": "/v", "target": "v"}]
    })
}

#[test]
fn test_nothing_published_before_ready() {
    let mut component = Component::new(ArrayElementMapper);
    assert_eq!(component.state(), ComponentState::Uninitialized);
    assert!(component.output().is_empty());

    component.set_config(mapper_config());
    assert_eq!(component.state(), ComponentState::PartiallyConfigured);
    assert!(component.output().is_empty());

    component.set_data_in(nds!([{"v": 1}, {"v": 2}]));
    assert_eq!(component.state(), ComponentState::Ready);
    assert_eq!(component.output().data_out, Some(nds!({"v": [1, 2]})));
}

#[test]
fn test_each_input_change_recomputes() {
    let mut component = Component::new(ArrayElementMapper);
    component.set_data_in(nds!([{"v": 1, "w": 2}]));
    component.set_config(mapper_config());
    assert_eq!(component.output().data_out, Some(nds!({"v": [1]})));

    component.set_config(nds!({
        "mapToObjects": true,
        "mappings": [{"src": "/w", "target": "w"}]
    }));
    assert_eq!(component.output().data_out, Some(nds!([{"w": 2}])));

    component.set_data_in(nds!([{"w": 3}]));
    assert_eq!(component.output().data_out, Some(nds!([{"w": 3}])));
}

#[test]
fn test_invalid_config_publishes_error_only() {
    let mut component = Component::new(NdsInverter);
    component.set_data_in(nds!([[1, 2]]));
    let out = component.set_config(nds!({"dataContainsTuples": true}));

    assert!(out.data_out.is_none());
    let error = out.error.as_ref().unwrap();
    assert_eq!(error.message, "config is invalid: elementsAreObjects is required");
    assert!(error.error_obj.is_none());
}

#[test]
fn test_success_clears_previous_error() {
    let mut component = Component::new(NdsInverter);
    component.set_config(nds!({"elementsAreObjects": true, "dataContainsTuples": false}));
    assert!(component.set_data_in(nds!({"a": [1], "b": []})).error.is_some());

    let out = component.set_data_in(nds!({"a": [1], "b": [2]}));
    assert!(out.error.is_none());
    assert_eq!(out.data_out, Some(nds!({"0": [1, 2]})));
}

#[test]
fn test_mapping_error_carries_cause() {
    let mut component = Component::new(ArrayElementMapper);
    component.set_config(mapper_config());
    let out = component.set_data_in(nds!([{"v": 1}, {"x": 1}]));

    let error = out.error.as_ref().unwrap();
    assert_eq!(
        error.message,
        "unable to map value with mapping config at 0 for element 1"
    );
    assert_eq!(
        error.error_obj,
        Some(Value::from("path resolution failed at token 0: missing key \"v\""))
    );
}

#[test]
fn test_clearing_an_input_keeps_last_output() {
    let mut component = Component::new(NdsInverter);
    component.set_config(nds!({"elementsAreObjects": false}));
    component.set_data_in(nds!([[1]]));
    let published = component.output().clone();

    component.set_data_in(Value::Null);
    assert_eq!(component.state(), ComponentState::PartiallyConfigured);
    assert_eq!(component.output(), &published);
}

#[test]
fn test_output_serializes_camel_case() {
    let mut component = Component::new(NdsInverter);
    component.set_config(nds!({"elementsAreObjects": false}));
    component.set_data_in(nds!([[1, 2]]));
    assert_eq!(
        serde_json::to_string(component.output()).unwrap(),
        r#"{"dataOut":[[1],[2]],"error":null}"#
    );
}

#[test]
fn test_recompute_classifies_failures() {
    let config = nds!({"elementsAreObjects": false});
    assert!(recompute(&NdsInverter, &nds!({"elementsAreObjects": 1}), &nds!([]))
        .unwrap_err()
        .is_config_error());

    let err = recompute(&NdsInverter, &config, &nds!([[1], [2, 3]])).unwrap_err();
    assert!(!err.is_config_error());
    assert!(matches!(err, Error::ShapeLengthMismatch { .. }));
}
