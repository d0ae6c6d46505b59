use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Global properties
// ---------------------------------------------------------------------------

/// Platform-wide named configuration value. Unique by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalProperty {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl GlobalProperty {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

// ---------------------------------------------------------------------------
// Metadata bundles
// ---------------------------------------------------------------------------

/// Opaque, idempotently installable unit of reference data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetadataBundle {
    pub name: String,
}

impl MetadataBundle {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

/// A form definition resolved from a UI resource such as
/// `ebolaexample:htmlforms/triage.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefinition {
    pub name: String,
    pub resource_path: String,
}

impl FormDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, resource_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_path: resource_path.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// Named capability marker attached to a location.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationTag {
    pub name: String,
}

impl LocationTag {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    tags: BTreeSet<LocationTag>,
}

impl Location {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: LocationTag) -> Self {
        self.tags.insert(tag);
        self
    }

    pub fn add_tag(&mut self, tag: LocationTag) {
        self.tags.insert(tag);
    }

    /// Detaches `tag` from this location. Returns `false` when it was not attached.
    pub fn remove_tag(&mut self, tag: &LocationTag) -> bool {
        self.tags.remove(tag)
    }

    #[must_use]
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }

    pub fn tags(&self) -> impl Iterator<Item = &LocationTag> {
        self.tags.iter()
    }
}

// ---------------------------------------------------------------------------
// Apps and modules
// ---------------------------------------------------------------------------

/// Toggleable application shortcut in the host menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDescriptor {
    pub key: String,
    pub enabled: bool,
}

impl AppDescriptor {
    #[must_use]
    pub fn enabled(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleStatus {
    Started,
    Stopped,
}
