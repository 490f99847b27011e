//! Paths and NDS shapes, by example
//!
//! This module has no items. It walks through the data model the rest of
//! the crate operates on.
//!
//! # Paths
//!
//! A path names one location inside nested data. Three notations are accepted
//! wherever a path is configured.
//!
//! ## JSON Pointer
//!
//! ```text
//! "/rows/0/name"
//! ```
//!
//! - `""` is the whole document; every other pointer starts with `/`
//! - `~1` stands for `/` and `~0` for `~`; any other `~` sequence is rejected
//! - unescaping is done in that order, so `"~01"` is the key `~1`
//! - against an array, a segment is an index when it is `0` or has no leading zero
//!
//! ## Token arrays
//!
//! ```text
//! ["rows", 0, "/^na/"]
//! ```
//!
//! - strings are member names and only descend into objects
//! - non-negative integers are indices and only descend into arrays
//! - strings of the form `/…/` (at least two characters) are regular
//!   expressions; the first member whose name matches is taken, in the
//!   order the members were inserted. Against an array the pattern is
//!   matched with the stringified index.
//!
//! ## Structured form
//!
//! ```text
//! {"path": "/rows/0/count", "parse": "integer"}
//! ```
//!
//! `path` holds one of the two notations above, `parse` one of
//! `number`, `integer`, `boolean`, `string` and `date`. The coercion is
//! applied to the resolved value:
//!
//! | `parse` | Accepts |
//! |---|---|
//! | `number` | numbers, numeric text, booleans (as `0`/`1`), dates (as epoch milliseconds) |
//! | `integer` | anything `number` accepts that has no fractional part |
//! | `boolean` | booleans, numbers (non-zero is `true`), `"true"`/`"false"` in any case |
//! | `string` | any scalar |
//! | `date` | RFC 3339 text, `YYYY-MM-DD`, epoch milliseconds |
//!
//! No other keys are allowed next to `path` and `parse`, and structured
//! forms do not nest.
//!
//! # NDS shapes
//!
//! A normalized data structure (NDS) is a table stored in one of four ways.
//! The same three-row, two-column table looks like this in each:
//!
//! ```text
//! object tuples   [{"a":1,"b":4},{"a":2,"b":5},{"a":3,"b":6}]
//! object series   {"a":[1,2,3],"b":[4,5,6]}
//! array tuples    [[1,4],[2,5],[3,6]]
//! array series    [[1,2,3],[4,5,6]]
//! ```
//!
//! Tuples hold one entry per row; series hold one entry per column. All
//! rows (or all series) must be of equal length, and object rows must share
//! the columns of the first row.
//!
//! # Mapping
//!
//! The mapper reads an array of objects, or of arrays, and emits one of the
//! four shapes. `mapToObjects` picks object or array elements, `mapToTuples`
//! (default `true`, `mapToTupels` is read too) picks tuples or series.
//! String targets go with `mapToObjects: true`, index targets with `false`.
//!
//! ```text
//! input    [{"foo":"boo1","b":["3"]},{"foo":"boo3","b":["4"]}]
//! rules    /foo -> "name",  {"path":["b",0],"parse":"number"} -> "count"
//! tuples   [{"name":"boo1","count":3},{"name":"boo3","count":4}]
//! series   {"name":["boo1","boo3"],"count":[3,4]}
//! ```
//!
//! A rule that does not resolve for some element fails the whole call with
//! the rule and element index.
//!
//! # Inversion
//!
//! The inverter swaps rows and columns while keeping the element kind:
//!
//! ```text
//! [{"a":1,"b":4},{"a":2,"b":5}]  ->  [{"0":1,"1":2},{"0":4,"1":5}]
//! [[1,4],[2,5],[3,6]]            ->  [[1,2,3],[4,5,6]]
//! ```
//!
//! For array shapes, inverting twice with the transposed config gives back
//! the input. For object shapes the original keys are replaced by their
//! positions.
