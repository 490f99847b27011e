//! Typed configuration for the mapper and the inverter.
//!
//! Both configs can be built in code with `with_*` builders or read from a
//! JSON-like [`Value`] (directly with `from_value`, or through serde). Reading
//! from a value performs every schema-level check once, up front:
//!
//! - required fields and their types
//! - defaults (`mapToTuples` and `dataContainsTuples` default to `true`)
//! - the mapper's cross-field rule: string targets require `mapToObjects: true`,
//!   integer targets require `mapToObjects: false`
//! - unique mapping rules
//!
//! ## Examples
//!
//! ```rust
//! use nds_path::{nds, MapperConfig, PathSpec, Target};
//!
//! let config = MapperConfig::from_value(&nds!({
//!     "mapToObjects": true,
//!     "mappings": [{"src": "/foo", "target": "mapped"}]
//! }))
//! .unwrap();
//! assert!(config.map_to_tuples());
//!
//! let built = MapperConfig::new(true).with_rule(PathSpec::from("/foo"), "mapped");
//! assert_eq!(config, built);
//! ```

use crate::{Error, Map, NdsShape, PathSpec, Result, Value};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

/// Highest index an array target may name. Mapped array rows are as long as
/// their highest target index plus one.
pub const MAX_TARGET_INDEX: usize = 65_535;

/// Where a mapping rule stores its value in the mapped element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Key(String),
    Index(usize),
}

impl Target {
    #[must_use]
    pub const fn is_key(&self) -> bool {
        matches!(self, Target::Key(_))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Key(k) => write!(f, "{:?}", k),
            Target::Index(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for Target {
    fn from(key: &str) -> Self {
        Target::Key(key.to_string())
    }
}

impl From<String> for Target {
    fn from(key: String) -> Self {
        Target::Key(key)
    }
}

impl From<usize> for Target {
    fn from(index: usize) -> Self {
        Target::Index(index)
    }
}

/// A single `{src, target}` mapping rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MappingRule {
    pub src: PathSpec,
    pub target: Target,
}

impl MappingRule {
    pub fn new(src: PathSpec, target: impl Into<Target>) -> Self {
        MappingRule {
            src,
            target: target.into(),
        }
    }
}

/// Configuration of the element-wise mapper.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct MapperConfig {
    map_to_objects: bool,
    map_to_tuples: bool,
    mappings: Vec<MappingRule>,
}

impl MapperConfig {
    /// Creates a config producing tuples, with no rules yet.
    #[must_use]
    pub fn new(map_to_objects: bool) -> Self {
        MapperConfig {
            map_to_objects,
            map_to_tuples: true,
            mappings: Vec::new(),
        }
    }

    /// Selects tuple (`true`) or series (`false`) output.
    #[must_use]
    pub fn with_tuples(mut self, map_to_tuples: bool) -> Self {
        self.map_to_tuples = map_to_tuples;
        self
    }

    /// Appends a mapping rule. Rules are checked by [`MapperConfig::validate`].
    #[must_use]
    pub fn with_rule(mut self, src: PathSpec, target: impl Into<Target>) -> Self {
        self.mappings.push(MappingRule::new(src, target));
        self
    }

    #[must_use]
    pub fn map_to_objects(&self) -> bool {
        self.map_to_objects
    }

    #[must_use]
    pub fn map_to_tuples(&self) -> bool {
        self.map_to_tuples
    }

    #[must_use]
    pub fn mappings(&self) -> &[MappingRule] {
        &self.mappings
    }

    /// The output shape selected by the two flags.
    #[must_use]
    pub fn shape(&self) -> NdsShape {
        NdsShape::from_flags(self.map_to_objects, self.map_to_tuples)
    }

    /// Checks the cross-field target rule, the [`MAX_TARGET_INDEX`] bound
    /// and rule uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] naming the first offending rule.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.mappings.len());
        for (i, rule) in self.mappings.iter().enumerate() {
            if rule.target.is_key() != self.map_to_objects {
                let expected = if self.map_to_objects {
                    "a string"
                } else {
                    "a non-negative integer"
                };
                return Err(Error::config_validation(format!(
                    "target of mapping {} must be {} when mapToObjects is {}, found {}",
                    i, expected, self.map_to_objects, rule.target
                )));
            }
            if let Target::Index(index) = rule.target {
                if index > MAX_TARGET_INDEX {
                    return Err(Error::config_validation(format!(
                        "target of mapping {} must be at most {}, found {}",
                        i, MAX_TARGET_INDEX, index
                    )));
                }
            }
            if !seen.insert(rule) {
                return Err(Error::config_validation(format!(
                    "mapping {} duplicates an earlier mapping",
                    i
                )));
            }
        }
        Ok(())
    }

    /// Reads and validates a config from its JSON-like form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] for schema violations and
    /// [`Error::MappingConfig`] naming the rule whose `src` is malformed.
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = expect_object(value)?;
        let map_to_objects = bool_field(obj, "mapToObjects", None)?;
        let map_to_tuples = match obj.get("mapToTuples") {
            Some(_) => bool_field(obj, "mapToTuples", Some(true))?,
            None => bool_field(obj, "mapToTupels", Some(true))?,
        };
        let mappings = match obj.get("mappings") {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| parse_rule(i, item))
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(Error::config_validation(format!(
                    "mappings must be an array, found {}",
                    other.kind()
                )))
            }
            None => return Err(Error::config_validation("mappings is required")),
        };
        let config = MapperConfig {
            map_to_objects,
            map_to_tuples,
            mappings,
        };
        config.validate()?;
        Ok(config)
    }
}

impl TryFrom<Value> for MapperConfig {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        MapperConfig::from_value(&value)
    }
}

fn parse_rule(i: usize, item: &Value) -> Result<MappingRule> {
    let obj = item.as_object().ok_or_else(|| {
        Error::config_validation(format!("mapping {} must be an object", i))
    })?;
    let src = obj
        .get("src")
        .ok_or_else(|| Error::config_validation(format!("mapping {} lacks src", i)))?;
    let src = PathSpec::from_value(src).map_err(|e| Error::mapping_config(i, e))?;
    let target = match obj.get("target") {
        Some(Value::String(key)) => Target::Key(key.clone()),
        Some(Value::Number(n)) => n.as_index().map(Target::Index).ok_or_else(|| {
            Error::config_validation(format!(
                "target of mapping {} must be a non-negative integer, found {}",
                i, n
            ))
        })?,
        Some(other) => {
            return Err(Error::config_validation(format!(
                "target of mapping {} must be a string or an index, found {}",
                i,
                other.kind()
            )))
        }
        None => {
            return Err(Error::config_validation(format!(
                "mapping {} lacks target",
                i
            )))
        }
    };
    Ok(MappingRule { src, target })
}

/// Configuration of the inverter: the shape of its input.
///
/// # Examples
///
/// ```rust
/// use nds_path::{nds, InverterConfig, NdsShape};
///
/// let config = InverterConfig::from_value(&nds!({"elementsAreObjects": false})).unwrap();
/// assert_eq!(config.shape(), NdsShape::ArrayTuples);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct InverterConfig {
    shape: NdsShape,
}

impl InverterConfig {
    #[must_use]
    pub const fn new(elements_are_objects: bool, data_contains_tuples: bool) -> Self {
        InverterConfig {
            shape: NdsShape::from_flags(elements_are_objects, data_contains_tuples),
        }
    }

    #[must_use]
    pub const fn shape(&self) -> NdsShape {
        self.shape
    }

    /// The config for inverting this config's output back, for the two array
    /// shapes. Object shapes keep their orientation when inverted, so their
    /// output inverts back with the same config.
    #[must_use]
    pub const fn transposed(&self) -> Self {
        InverterConfig {
            shape: self.shape.transposed(),
        }
    }

    /// Reads a config from its JSON-like form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] when `elementsAreObjects` is missing
    /// or either flag is not a boolean.
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = expect_object(value)?;
        let elements_are_objects = bool_field(obj, "elementsAreObjects", None)?;
        let data_contains_tuples = bool_field(obj, "dataContainsTuples", Some(true))?;
        Ok(InverterConfig::new(elements_are_objects, data_contains_tuples))
    }
}

impl From<NdsShape> for InverterConfig {
    fn from(shape: NdsShape) -> Self {
        InverterConfig { shape }
    }
}

impl TryFrom<Value> for InverterConfig {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        InverterConfig::from_value(&value)
    }
}

fn expect_object(value: &Value) -> Result<&Map> {
    value.as_object().ok_or_else(|| {
        Error::config_validation(format!("expected an object, found {}", value.kind()))
    })
}

fn bool_field(obj: &Map, name: &str, default: Option<bool>) -> Result<bool> {
    match (obj.get(name), default) {
        (Some(Value::Bool(b)), _) => Ok(*b),
        (Some(other), _) => Err(Error::config_validation(format!(
            "{} must be a boolean, found {}",
            name,
            other.kind()
        ))),
        (None, Some(default)) => Ok(default),
        (None, None) => Err(Error::config_validation(format!("{} is required", name))),
    }
}
