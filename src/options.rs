//! Check configuration: ambient options per check call, partial overrides
//! per cake, and the lookup that combines them.

use serde::{Deserialize, Serialize};

/// What to do with object properties the cake does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExcessProperties {
    Ignore,
    Error,
}

/// Ambient options for a whole check call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOptions {
    pub object_excess_properties: ExcessProperties,
}

impl CheckOptions {
    /// The default for `check`/`is`/`as_`: suited to untrusted external data.
    pub const STRICT: CheckOptions = CheckOptions {
        object_excess_properties: ExcessProperties::Error,
    };

    /// Used by the `*_shape` variants, closer to structural typing.
    pub const LENIENT: CheckOptions = CheckOptions {
        object_excess_properties: ExcessProperties::Ignore,
    };

    /// Per-cake override first, then these ambient options.
    pub fn lookup(&self, overrides: &CheckOptionsOverride) -> CheckOptions {
        CheckOptions {
            object_excess_properties: overrides
                .object_excess_properties
                .unwrap_or(self.object_excess_properties),
        }
    }
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions::STRICT
    }
}

/// Options a single cake pins regardless of the ambient configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckOptionsOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_excess_properties: Option<ExcessProperties>,
}

impl CheckOptionsOverride {
    pub fn excess_properties(mode: ExcessProperties) -> Self {
        CheckOptionsOverride {
            object_excess_properties: Some(mode),
        }
    }
}

impl From<CheckOptions> for CheckOptionsOverride {
    fn from(value: CheckOptions) -> Self {
        CheckOptionsOverride {
            object_excess_properties: Some(value.object_excess_properties),
        }
    }
}
