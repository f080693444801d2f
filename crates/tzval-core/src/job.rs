//! # Job Arguments
//!
//! Carries a [`TimezoneValue`] across a background-job queue as
//! `{"value": "<string form>"}`. Restoring casts the string again, so every
//! kind round-trips: regular values by identifier, blank as `""`, and
//! exceptional values by their raw input.

use serde::{Deserialize, Serialize};

use crate::cast::{default_caster, Caster};
use crate::error::TzvalError;
use crate::lookup::TimezoneLookup;
use crate::value::TimezoneValue;

/// Serialized form of a timezone value in a job payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobArgument {
    pub value: String,
}

impl JobArgument {
    pub fn serialize(value: &TimezoneValue) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Restore with the process-wide caster.
    pub fn deserialize(&self) -> TimezoneValue {
        default_caster().cast(self.value.as_str())
    }

    /// Restore with a specific caster.
    pub fn try_deserialize_with<L: TimezoneLookup>(
        &self,
        caster: &Caster<L>,
    ) -> Result<TimezoneValue, L::Error> {
        caster.try_cast(self.value.as_str())
    }

    pub fn to_json(&self) -> Result<String, TzvalError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, TzvalError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&TimezoneValue> for JobArgument {
    fn from(value: &TimezoneValue) -> Self {
        Self::serialize(value)
    }
}
