/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Negative numbers and other multi-token expressions must be parenthesized.
///
/// # Examples
///
/// ```rust
/// use nds_path::{nds, Value};
///
/// let rows = nds!([
///     {"a": 1, "b": 4},
///     {"a": 2, "b": (-5)}
/// ]);
/// assert_eq!(rows.as_array().map(Vec::len), Some(2));
/// assert_eq!(nds!(null), Value::Null);
/// ```
#[macro_export]
macro_rules! nds {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::nds!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::nds!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
