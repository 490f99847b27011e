//! Path specifications and their resolution against nested data.
//!
//! A *path specification* ([`PathSpec`]) is the user-supplied description of
//! a location inside a [`Value`]. It comes in three forms:
//!
//! - a JSON Pointer string: `"/a~1b/c"` (`~1` is `/`, `~0` is `~`); `""` is the root
//! - a token array: `["items", 0, "/^x\\d$/"]`, where strings are member names,
//!   non-negative integers are array indices, and `/…/`-delimited strings are
//!   regular expressions matched against member names (or stringified indices)
//! - a structured form: `{"path": <pointer or tokens>, "parse": "number"}`,
//!   which additionally coerces the final value (see [`ParseKind`])
//!
//! [`Path::create`] compiles a specification into an immutable [`Path`];
//! [`Path::resolve`] walks it against data.
//!
//! ## Examples
//!
//! ```rust
//! use nds_path::{nds, path, Value};
//!
//! let data = nds!({"a/b": {"c": 5}, "a~b": 7});
//!
//! let p = path::create(&nds!("/a~1b/c")).unwrap();
//! assert_eq!(p.resolve(&data).unwrap(), Value::from(5));
//!
//! let p = path::create(&nds!("/a~0b")).unwrap();
//! assert_eq!(p.resolve(&data).unwrap(), Value::from(7));
//! ```
//!
//! ### Regex tokens
//!
//! The first member whose name matches wins, in the object's iteration order:
//!
//! ```rust
//! use nds_path::{nds, path, Value};
//!
//! let p = path::create(&nds!(["/^[a-z]\\d$/"])).unwrap();
//! assert_eq!(p.resolve(&nds!({"x1": 1, "y2": 2})).unwrap(), Value::from(1));
//! ```

use crate::{Error, Map, ParseKind, Result, Value};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single literal token of a token-array specification.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenSpec {
    /// A member name, or a regex when delimited by `/…/`.
    Name(String),
    Index(usize),
}

/// An unparsed path specification.
///
/// Build one from a [`Value`] with [`PathSpec::from_value`] (or serde), or
/// directly from its variants.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum PathSpec {
    Pointer(String),
    Tokens(Vec<TokenSpec>),
    Parsed {
        path: Box<PathSpec>,
        parse: Option<ParseKind>,
    },
}

impl PathSpec {
    /// Interprets `value` as a path specification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathSpec`] when `value` is not a JSON Pointer
    /// string, a token array, or a `{path, parse}` object.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(obj) => parse_structured(obj),
            other => parse_plain(other),
        }
    }

    /// Returns the parse directive, if any.
    #[must_use]
    pub fn parse_kind(&self) -> Option<ParseKind> {
        match self {
            PathSpec::Parsed { parse, .. } => *parse,
            _ => None,
        }
    }

    /// Converts back into the literal [`Value`] form.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            PathSpec::Pointer(s) => Value::String(s.clone()),
            PathSpec::Tokens(tokens) => Value::Array(
                tokens
                    .iter()
                    .map(|t| match t {
                        TokenSpec::Name(name) => Value::String(name.clone()),
                        TokenSpec::Index(i) => Value::from(*i),
                    })
                    .collect(),
            ),
            PathSpec::Parsed { path, parse } => {
                let mut obj = Map::with_capacity(2);
                obj.insert("path".to_string(), path.to_value());
                if let Some(kind) = parse {
                    obj.insert("parse".to_string(), Value::from(kind.as_str()));
                }
                Value::Object(obj)
            }
        }
    }
}

fn parse_plain(value: &Value) -> Result<PathSpec> {
    match value {
        Value::String(s) if s.is_empty() || s.starts_with('/') => Ok(PathSpec::Pointer(s.clone())),
        Value::String(s) => Err(Error::invalid_path_spec(format!(
            "string {:?} is not a JSON pointer",
            s
        ))),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(name) => Ok(TokenSpec::Name(name.clone())),
                Value::Number(n) => n.as_index().map(TokenSpec::Index).ok_or_else(|| {
                    Error::invalid_path_spec(format!(
                        "token at {} is not a non-negative integer: {}",
                        i, n
                    ))
                }),
                other => Err(Error::invalid_path_spec(format!(
                    "token at {} must be a string or an array index, found {}",
                    i,
                    other.kind()
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(PathSpec::Tokens),
        other => Err(Error::invalid_path_spec(format!(
            "expected a string, array or object, found {}",
            other.kind()
        ))),
    }
}

fn parse_structured(obj: &Map) -> Result<PathSpec> {
    if let Some(key) = obj.keys().find(|k| *k != "path" && *k != "parse") {
        return Err(Error::invalid_path_spec(format!(
            "unexpected property {:?}",
            key
        )));
    }
    let path = obj
        .get("path")
        .ok_or_else(|| Error::invalid_path_spec("missing property \"path\""))?;
    let parse = match obj.get("parse") {
        None => None,
        Some(Value::String(name)) => Some(name.parse::<ParseKind>()?),
        Some(other) => {
            return Err(Error::invalid_path_spec(format!(
                "\"parse\" must be a string, found {}",
                other.kind()
            )))
        }
    };
    Ok(PathSpec::Parsed {
        path: Box::new(parse_plain(path)?),
        parse,
    })
}

impl TryFrom<Value> for PathSpec {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        PathSpec::from_value(&value)
    }
}

impl TryFrom<&Value> for PathSpec {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        PathSpec::from_value(value)
    }
}

impl From<PathSpec> for Value {
    fn from(spec: PathSpec) -> Self {
        spec.to_value()
    }
}

impl From<&str> for PathSpec {
    /// Treats the string as a JSON pointer without validating it.
    fn from(pointer: &str) -> Self {
        PathSpec::Pointer(pointer.to_string())
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSpec::Pointer(s) => write!(f, "{:?}", s),
            other => write!(f, "{}", other.to_value()),
        }
    }
}

/// A compiled path token.
#[derive(Clone, Debug)]
pub enum Token {
    /// Member name; only descends into objects.
    Key(String),
    /// Array index; only descends into arrays.
    Index(usize),
    /// JSON Pointer reference token; a member name, or an index on arrays.
    Segment(String),
    /// First member name (or stringified index) matching the pattern.
    Pattern(Regex),
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Token::Key(a), Token::Key(b)) | (Token::Segment(a), Token::Segment(b)) => a == b,
            (Token::Index(a), Token::Index(b)) => a == b,
            (Token::Pattern(a), Token::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Key(k) | Token::Segment(k) => write!(f, "{:?}", k),
            Token::Index(i) => write!(f, "{}", i),
            Token::Pattern(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

/// An immutable, compiled path ready for resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    tokens: Vec<Token>,
    parse: Option<ParseKind>,
}

impl Path {
    /// The empty path, which resolves to the data itself.
    #[must_use]
    pub fn root() -> Self {
        Path {
            tokens: Vec::new(),
            parse: None,
        }
    }

    /// Compiles a path specification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathSpec`] for malformed JSON Pointer escapes
    /// and for regex tokens that do not compile.
    pub fn create(spec: &PathSpec) -> Result<Self> {
        match spec {
            PathSpec::Pointer(pointer) => Ok(Path {
                tokens: parse_pointer(pointer)?,
                parse: None,
            }),
            PathSpec::Tokens(tokens) => Ok(Path {
                tokens: tokens.iter().map(compile_token).collect::<Result<_>>()?,
                parse: None,
            }),
            PathSpec::Parsed { path, parse } => {
                let inner = Path::create(path)?;
                Ok(Path {
                    tokens: inner.tokens,
                    parse: *parse,
                })
            }
        }
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn parse_kind(&self) -> Option<ParseKind> {
        self.parse
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Walks the tokens against `data` and returns the addressed value,
    /// ignoring any parse directive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathResolution`] at the first token that finds no
    /// value or meets the wrong kind of container.
    pub fn lookup<'a>(&self, data: &'a Value) -> Result<&'a Value> {
        self.tokens
            .iter()
            .enumerate()
            .try_fold(data, |current, (position, token)| {
                descend(current, token).map_err(|reason| Error::path_resolution(position, reason))
            })
    }

    /// Resolves the path against `data` and applies the parse directive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nds_path::{nds, path, Value};
    ///
    /// let p = path::create(&nds!({"path": ["b", 0], "parse": "number"})).unwrap();
    /// assert_eq!(p.resolve(&nds!({"b": ["3"]})).unwrap(), Value::from(3));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathResolution`] as for [`Path::lookup`], or
    /// [`Error::Parse`] when coercion fails.
    pub fn resolve(&self, data: &Value) -> Result<Value> {
        let found = self.lookup(data)?;
        tracing::trace!(path = %self, kind = found.kind(), "resolved path");
        match self.parse {
            Some(kind) => kind.apply(found),
            None => Ok(found.clone()),
        }
    }
}

impl Default for Path {
    fn default() -> Self {
        Path::root()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", token)?;
        }
        write!(f, "]")?;
        if let Some(kind) = self.parse {
            write!(f, " as {}", kind)?;
        }
        Ok(())
    }
}

impl TryFrom<&PathSpec> for Path {
    type Error = Error;

    fn try_from(spec: &PathSpec) -> Result<Self> {
        Path::create(spec)
    }
}

fn parse_pointer(pointer: &str) -> Result<Vec<Token>> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let rest = pointer.strip_prefix('/').ok_or_else(|| {
        Error::invalid_path_spec(format!("pointer {:?} must start with '/'", pointer))
    })?;
    rest.split('/')
        .map(|segment| unescape_segment(segment).map(Token::Segment))
        .collect()
}

fn unescape_segment(segment: &str) -> Result<String> {
    let mut out = String::with_capacity(segment.len());
    let mut chars = segment.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            _ => {
                return Err(Error::invalid_path_spec(format!(
                    "invalid escape in pointer segment {:?}",
                    segment
                )))
            }
        }
    }
    Ok(out)
}

fn compile_token(token: &TokenSpec) -> Result<Token> {
    match token {
        TokenSpec::Index(i) => Ok(Token::Index(*i)),
        TokenSpec::Name(name) => match regex_body(name) {
            Some(pattern) => Regex::new(pattern).map(Token::Pattern).map_err(|e| {
                Error::invalid_path_spec(format!("invalid regex token {}: {}", name, e))
            }),
            None => Ok(Token::Key(name.clone())),
        },
    }
}

fn regex_body(name: &str) -> Option<&str> {
    if name.len() >= 2 {
        name.strip_prefix('/')?.strip_suffix('/')
    } else {
        None
    }
}

/// Parses a pointer segment as an array index: `0` or digits without a leading zero.
fn array_index(segment: &str) -> Option<usize> {
    let canonical = segment == "0"
        || (!segment.is_empty()
            && !segment.starts_with('0')
            && segment.bytes().all(|b| b.is_ascii_digit()));
    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}

fn descend<'a>(current: &'a Value, token: &Token) -> std::result::Result<&'a Value, String> {
    match (token, current) {
        (Token::Key(key) | Token::Segment(key), Value::Object(obj)) => obj
            .get(key)
            .ok_or_else(|| format!("missing key {:?}", key)),
        (Token::Index(i), Value::Array(arr)) => arr
            .get(*i)
            .ok_or_else(|| format!("index {} out of bounds (length {})", i, arr.len())),
        (Token::Segment(segment), Value::Array(arr)) => {
            let i = array_index(segment)
                .ok_or_else(|| format!("{:?} is not an array index", segment))?;
            arr.get(i)
                .ok_or_else(|| format!("index {} out of bounds (length {})", i, arr.len()))
        }
        (Token::Pattern(re), Value::Object(obj)) => obj
            .find(|key| re.is_match(key))
            .map(|(_, v)| v)
            .ok_or_else(|| format!("no key matches /{}/", re.as_str())),
        (Token::Pattern(re), Value::Array(arr)) => arr
            .iter()
            .enumerate()
            .find(|(i, _)| re.is_match(&i.to_string()))
            .map(|(_, v)| v)
            .ok_or_else(|| format!("no index matches /{}/", re.as_str())),
        (Token::Key(_), other) => Err(format!("expected object, found {}", other.kind())),
        (Token::Index(_), other) => Err(format!("expected array, found {}", other.kind())),
        (Token::Segment(_) | Token::Pattern(_), other) => Err(format!(
            "expected object or array, found {}",
            other.kind()
        )),
    }
}

/// Parses and compiles a path specification given as a [`Value`].
///
/// # Errors
///
/// Returns [`Error::InvalidPathSpec`] when `spec` is malformed.
pub fn create(spec: &Value) -> Result<Path> {
    Path::create(&PathSpec::from_value(spec)?)
}

/// Resolves `path` against `data`. Equivalent to [`Path::resolve`].
///
/// # Errors
///
/// See [`Path::resolve`].
pub fn resolve(path: &Path, data: &Value) -> Result<Value> {
    path.resolve(data)
}

/// Returns `true` when `value` is syntactically a path specification.
///
/// Consumers use this to tell templated fields from static ones. Regex
/// tokens are not compiled here.
///
/// # Examples
///
/// ```rust
/// use nds_path::{nds, path::is_path_tokens};
///
/// assert!(is_path_tokens(&nds!("/a/b")));
/// assert!(is_path_tokens(&nds!(["a", 0])));
/// assert!(is_path_tokens(&nds!({"path": "/a", "parse": "number"})));
/// assert!(!is_path_tokens(&nds!("red")));
/// assert!(!is_path_tokens(&nds!(12)));
/// ```
#[must_use]
pub fn is_path_tokens(value: &Value) -> bool {
    PathSpec::from_value(value).is_ok()
}
