//! Identifiers for trended parameters.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DwellError;

const INSTANCE_SEPARATOR: char = ':';

/// Identity of a trended parameter, optionally qualified by the instance
/// (plant, station, controller) that owns it.
///
/// The textual form is either `name` or `instance:name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParameterId {
    instance: Option<String>,
    name: String,
}

impl ParameterId {
    /// An unqualified parameter.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, DwellError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DwellError::InvalidArg("parameter name is blank".into()));
        }
        Ok(Self {
            instance: None,
            name,
        })
    }

    /// A parameter qualified by its owning instance.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `instance` or `name` is blank.
    pub fn qualified(
        instance: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, DwellError> {
        let instance = instance.into();
        if instance.trim().is_empty() {
            return Err(DwellError::InvalidArg("parameter instance is blank".into()));
        }
        let mut id = Self::new(name)?;
        id.instance = Some(instance);
        Ok(id)
    }

    /// The owning instance, if qualified.
    #[must_use]
    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    /// The parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for ParameterId {
    type Err = DwellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(INSTANCE_SEPARATOR) {
            Some((instance, name)) => Self::qualified(instance.trim(), name.trim()),
            None => Self::new(s),
        }
    }
}

impl TryFrom<String> for ParameterId {
    type Error = DwellError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ParameterId> for String {
    fn from(id: ParameterId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.instance {
            Some(instance) => write!(f, "{instance}{INSTANCE_SEPARATOR}{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}
