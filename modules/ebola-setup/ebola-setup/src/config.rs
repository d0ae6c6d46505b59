use serde::{Deserialize, Serialize};

use crate::domain::catalog;

/// Configuration for the Ebola setup module.
///
/// Every field defaults to the fixed catalog, so an empty document yields the
/// standard ETU configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EbolaSetupConfig {
    /// Id the host knows this module by; used to stop it on startup failure.
    #[serde(default = "default_module_id")]
    pub module_id: String,
    #[serde(default = "default_bundles")]
    pub bundles: Vec<String>,
    #[serde(default = "catalog::global_property_table")]
    pub global_properties: Vec<GlobalPropertySetting>,
    /// UI resource paths of HTML forms, `provider:path` form.
    #[serde(default = "default_forms")]
    pub forms: Vec<String>,
    #[serde(default = "default_disabled_apps")]
    pub disabled_apps: Vec<String>,
    #[serde(default)]
    pub legacy_location: LegacyLocationConfig,
}

impl Default for EbolaSetupConfig {
    fn default() -> Self {
        Self {
            module_id: default_module_id(),
            bundles: default_bundles(),
            global_properties: catalog::global_property_table(),
            forms: default_forms(),
            disabled_apps: default_disabled_apps(),
            legacy_location: LegacyLocationConfig::default(),
        }
    }
}

fn default_module_id() -> String {
    catalog::MODULE_ID.to_owned()
}

fn default_bundles() -> Vec<String> {
    catalog::owned(catalog::METADATA_BUNDLES)
}

fn default_forms() -> Vec<String> {
    catalog::owned(catalog::HTML_FORMS)
}

fn default_disabled_apps() -> Vec<String> {
    catalog::owned(catalog::DISABLED_APPS)
}

/// One row of the global property table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalPropertySetting {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl GlobalPropertySetting {
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
}

/// The location whose legacy tags are removed at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyLocationConfig {
    #[serde(default = "default_location_name")]
    pub name: String,
    /// Login support tag, looked up by name through the location service.
    #[serde(default = "default_login_tag")]
    pub login_tag: String,
}

impl Default for LegacyLocationConfig {
    fn default() -> Self {
        Self {
            name: default_location_name(),
            login_tag: default_login_tag(),
        }
    }
}

fn default_location_name() -> String {
    catalog::UNKNOWN_LOCATION.to_owned()
}

fn default_login_tag() -> String {
    catalog::LOCATION_TAG_SUPPORTS_LOGIN.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_catalog_defaults() {
        let cfg: EbolaSetupConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, EbolaSetupConfig::default());
        assert_eq!(cfg.module_id, "ebolaexample");
        assert_eq!(cfg.bundles, vec!["ebolaMetadata", "ebolaDemoData"]);
        assert_eq!(cfg.legacy_location.name, "Unknown Location");
        assert_eq!(cfg.global_properties.len(), 2);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg: EbolaSetupConfig = serde_json::from_value(serde_json::json!({
            "disabled_apps": ["coreapps.findPatient"],
            "legacy_location": { "name": "Triage Tent" }
        }))
        .unwrap();

        assert_eq!(cfg.disabled_apps, vec!["coreapps.findPatient"]);
        assert_eq!(cfg.legacy_location.name, "Triage Tent");
        assert_eq!(cfg.legacy_location.login_tag, "Login Location");
        assert_eq!(cfg.forms, vec!["ebolaexample:htmlforms/triage.xml"]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<EbolaSetupConfig, _> =
            serde_json::from_value(serde_json::json!({ "bundle": ["x"] }));
        assert!(result.is_err());
    }
}
