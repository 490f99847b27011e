use chrono::{TimeZone, Utc};
use nds_path::path::{create, is_path_tokens};
use nds_path::{nds, resolve, Error, ParseKind, Path, PathSpec, Token, TokenSpec, Value};

fn json(s: &str) -> Value {
    serde_json::from_str(s).unwrap()
}

#[test]
fn test_pointer_escapes() {
    let data = json(r#"{"a/b": {"c~d": 1}, "~1": 2}"#);
    assert_eq!(resolve(&nds!("/a~1b/c~0d"), &data).unwrap(), Value::from(1));
    assert_eq!(resolve(&nds!("/~01"), &data).unwrap(), Value::from(2));
}

#[test]
fn test_pointer_and_tokens_agree() {
    let data = json(r#"{"rows": [{"name": "x"}, {"name": "y"}]}"#);
    let pointer = resolve(&nds!("/rows/1/name"), &data).unwrap();
    let tokens = resolve(&nds!(["rows", 1, "name"]), &data).unwrap();
    assert_eq!(pointer, tokens);
    assert_eq!(pointer, Value::from("y"));
}

#[test]
fn test_name_tokens_do_not_index_arrays() {
    let data = nds!({"rows": [10, 20]});
    assert!(resolve(&nds!(["rows", "1"]), &data).is_err());
    assert_eq!(resolve(&nds!(["rows", 1]), &data).unwrap(), Value::from(20));
}

#[test]
fn test_index_tokens_do_not_select_object_members() {
    let data = nds!({"0": "zero"});
    assert!(matches!(
        resolve(&nds!([0]), &data),
        Err(Error::PathResolution { position: 0, .. })
    ));
}

#[test]
fn test_regex_takes_first_match_in_insertion_order() {
    let data = json(r#"{"foo": 0, "y2": "second", "x1": "first"}"#);
    assert_eq!(
        resolve(&nds!(["/^[a-z]\\d$/"]), &data).unwrap(),
        Value::from("second")
    );
}

#[test]
fn test_regex_over_array_matches_stringified_index() {
    let data = nds!(["a", "b", "c"]);
    assert_eq!(resolve(&nds!(["/^[12]$/"]), &data).unwrap(), Value::from("b"));
}

#[test]
fn test_resolution_failure_reports_position() {
    let data = nds!({"a": {"b": 1}});
    match resolve(&nds!(["a", "c"]), &data) {
        Err(Error::PathResolution { position, reason }) => {
            assert_eq!(position, 1);
            assert!(reason.contains("\"c\""));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_descending_into_scalar_fails() {
    assert!(resolve(&nds!("/a/b"), &nds!({"a": 5})).is_err());
}

#[test]
fn test_parse_number_and_date() {
    let data = json(r#"{"n": " 12.5 ", "d": "2020-01-02", "ms": 0}"#);
    assert_eq!(
        resolve(&nds!({"path": "/n", "parse": "number"}), &data).unwrap(),
        Value::from(12.5)
    );
    assert_eq!(
        resolve(&nds!({"path": ["d"], "parse": "date"}), &data).unwrap(),
        Value::Date(Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap())
    );
    assert_eq!(
        resolve(&nds!({"path": "/ms", "parse": "date"}), &data).unwrap(),
        Value::Date(Utc.timestamp_millis_opt(0).unwrap())
    );
}

#[test]
fn test_parse_failure() {
    let err = resolve(&nds!({"path": "/a", "parse": "boolean"}), &nds!({"a": "maybe"})).unwrap_err();
    assert!(matches!(
        err,
        Error::Parse {
            kind: ParseKind::Boolean,
            ..
        }
    ));
}

#[test]
fn test_structured_form_without_parse_is_plain() {
    let data = nds!({"a": "1"});
    assert_eq!(
        resolve(&nds!({"path": "/a"}), &data).unwrap(),
        Value::from("1")
    );
}

#[test]
fn test_invalid_specs() {
    let invalid = [
        nds!("a/b"),
        nds!("/a~"),
        nds!(["a", (-1)]),
        nds!(["a", 1.5]),
        nds!([["a"]]),
        nds!({"parse": "number"}),
        nds!({"path": "/a", "parse": "float"}),
        nds!({"path": "/a", "extra": true}),
        nds!({"path": {"path": "/a"}}),
        nds!(12),
        nds!(null),
    ];
    for spec in &invalid {
        assert!(
            matches!(create(spec), Err(Error::InvalidPathSpec(_))),
            "accepted {spec}"
        );
        assert!(!is_path_tokens(spec), "{spec} looks like a path");
    }
}

#[test]
fn test_bad_regex_is_syntactically_a_path() {
    let spec = nds!(["/(/"]);
    assert!(is_path_tokens(&spec));
    assert!(matches!(create(&spec), Err(Error::InvalidPathSpec(_))));
}

#[test]
fn test_lookup_borrows_without_parse() {
    let data = nds!({"a": {"b": [1, 2]}});
    let path = create(&nds!({"path": "/a/b", "parse": "string"})).unwrap();
    assert_eq!(path.lookup(&data).unwrap(), &nds!([1, 2]));
    assert!(path.resolve(&data).is_err());
}

#[test]
fn test_path_spec_serde() {
    let spec: PathSpec = serde_json::from_str(r#"{"path": ["a", 0], "parse": "integer"}"#).unwrap();
    assert_eq!(spec.parse_kind(), Some(ParseKind::Integer));
    assert_eq!(
        spec,
        PathSpec::Parsed {
            path: Box::new(PathSpec::Tokens(vec![
                TokenSpec::Name("a".into()),
                TokenSpec::Index(0)
            ])),
            parse: Some(ParseKind::Integer),
        }
    );
    assert_eq!(
        serde_json::to_string(&spec).unwrap(),
        r#"{"path":["a",0],"parse":"integer"}"#
    );
}

#[test]
fn test_compiled_tokens() {
    let path = Path::create(&PathSpec::from("/a/0")).unwrap();
    assert_eq!(
        path.tokens(),
        &[Token::Segment("a".into()), Token::Segment("0".into())]
    );
    assert!(Path::root().is_root());
    assert_eq!(Path::root().resolve(&nds!([1])).unwrap(), nds!([1]));
}
