//! Reactive wrappers around the mapper and the inverter.
//!
//! A [`Component`] owns two inputs, `config` and `dataIn`, and one published
//! [`Output`]. Whenever an input changes and both are present, the output is
//! recomputed from scratch. The component's [`ComponentState`] follows from
//! which inputs are present:
//!
//! | `config` | `dataIn` | State |
//! |---|---|---|
//! | absent | absent | [`ComponentState::Uninitialized`] |
//! | one of them present | | [`ComponentState::PartiallyConfigured`] |
//! | present | present | [`ComponentState::Ready`] |
//!
//! A `null` input counts as absent. Nothing is published before the
//! component is ready, and a published output holds either `dataOut` or
//! `error`, never both.
//!
//! ## Examples
//!
//! ```rust
//! use nds_path::{nds, Component, ComponentState, NdsInverter};
//!
//! let mut inverter = Component::new(NdsInverter);
//! inverter.set_config(nds!({"elementsAreObjects": false}));
//! assert_eq!(inverter.state(), ComponentState::PartiallyConfigured);
//! assert!(inverter.output().is_empty());
//!
//! let out = inverter.set_data_in(nds!([[1, 2], [3, 4]]));
//! assert_eq!(out.data_out, Some(nds!([[1, 3], [2, 4]])));
//! assert!(out.error.is_none());
//! ```

use crate::{invert, map, ErrorObject, InverterConfig, MapperConfig, Result, Value};
use serde::Serialize;

/// A configurable transform over NDS data.
pub trait Transform {
    /// The typed configuration the transform runs with.
    type Config;

    /// Name used in log output.
    fn name(&self) -> &'static str;

    /// Reads and validates a configuration value.
    ///
    /// # Errors
    ///
    /// Returns a configuration error (see [`crate::Error::is_config_error`]).
    fn configure(&self, config: &Value) -> Result<Self::Config>;

    /// Validates `data` against `config` and transforms it.
    ///
    /// # Errors
    ///
    /// Returns a data or resolution error; no partial output is produced.
    fn apply(&self, config: &Self::Config, data: &Value) -> Result<Value>;
}

/// Maps array elements; see [`crate::mapper`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArrayElementMapper;

impl Transform for ArrayElementMapper {
    type Config = MapperConfig;

    fn name(&self) -> &'static str {
        "array-element-mapper"
    }

    fn configure(&self, config: &Value) -> Result<MapperConfig> {
        MapperConfig::from_value(config)
    }

    fn apply(&self, config: &MapperConfig, data: &Value) -> Result<Value> {
        map(data, config)
    }
}

/// Inverts NDS data; see [`crate::inverter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NdsInverter;

impl Transform for NdsInverter {
    type Config = InverterConfig;

    fn name(&self) -> &'static str {
        "nds-inverter"
    }

    fn configure(&self, config: &Value) -> Result<InverterConfig> {
        InverterConfig::from_value(config)
    }

    fn apply(&self, config: &InverterConfig, data: &Value) -> Result<Value> {
        invert(data, config)
    }
}

/// Configuration progress of a [`Component`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentState {
    Uninitialized,
    PartiallyConfigured,
    Ready,
}

impl ComponentState {
    #[must_use]
    pub const fn from_inputs(has_config: bool, has_data: bool) -> Self {
        match (has_config, has_data) {
            (true, true) => ComponentState::Ready,
            (false, false) => ComponentState::Uninitialized,
            _ => ComponentState::PartiallyConfigured,
        }
    }
}

/// Runs `transform` once: configure, then apply.
///
/// # Errors
///
/// Returns the configuration error if `config` is rejected, otherwise the
/// data or resolution error from [`Transform::apply`].
pub fn recompute<T: Transform>(transform: &T, config: &Value, data: &Value) -> Result<Value> {
    let config = transform.configure(config)?;
    transform.apply(&config, data)
}

/// What a component last published.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    pub data_out: Option<Value>,
    pub error: Option<ErrorObject>,
}

impl Output {
    /// `true` until the component has published anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data_out.is_none() && self.error.is_none()
    }

    fn publish(&mut self, result: Result<Value>) {
        match result {
            Ok(value) => {
                self.data_out = Some(value);
                self.error = None;
            }
            Err(err) => {
                self.data_out = None;
                self.error = Some(ErrorObject::from(&err));
            }
        }
    }
}

/// A transform with its current inputs and published output.
#[derive(Clone, Debug)]
pub struct Component<T: Transform> {
    transform: T,
    config: Option<Value>,
    data_in: Option<Value>,
    output: Output,
}

impl<T: Transform> Component<T> {
    pub fn new(transform: T) -> Self {
        Component {
            transform,
            config: None,
            data_in: None,
            output: Output::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> ComponentState {
        ComponentState::from_inputs(self.config.is_some(), self.data_in.is_some())
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    pub fn config(&self) -> Option<&Value> {
        self.config.as_ref()
    }

    pub fn data_in(&self) -> Option<&Value> {
        self.data_in.as_ref()
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Replaces the config input and recomputes when ready.
    pub fn set_config(&mut self, config: Value) -> &Output {
        self.config = present(config);
        self.refresh()
    }

    /// Replaces the data input and recomputes when ready.
    pub fn set_data_in(&mut self, data: Value) -> &Output {
        self.data_in = present(data);
        self.refresh()
    }

    fn refresh(&mut self) -> &Output {
        let (Some(config), Some(data)) = (&self.config, &self.data_in) else {
            tracing::trace!(
                component = self.transform.name(),
                state = ?self.state(),
                "waiting for inputs"
            );
            return &self.output;
        };
        let result = recompute(&self.transform, config, data);
        match &result {
            Ok(_) => tracing::debug!(component = self.transform.name(), "published dataOut"),
            Err(err) => tracing::warn!(
                component = self.transform.name(),
                config_error = err.is_config_error(),
                error = %err,
                "published error"
            ),
        }
        self.output.publish(result);
        &self.output
    }
}

fn present(value: Value) -> Option<Value> {
    if value.is_null() {
        None
    } else {
        Some(value)
    }
}
