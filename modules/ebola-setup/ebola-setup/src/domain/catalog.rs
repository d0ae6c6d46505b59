//! Fixed reference data applied by the startup sequence.
//!
//! These tables are the defaults for [`crate::config::EbolaSetupConfig`].

use crate::config::GlobalPropertySetting;

pub const MODULE_ID: &str = "ebolaexample";

pub const METADATA_BUNDLES: &[&str] = &["ebolaMetadata", "ebolaDemoData"];

/// Global property naming the encounter role used for clinicians.
pub const GP_CLINICIAN_ENCOUNTER_ROLE: &str = "emr.clinicianEncounterRole";

/// Clinician encounter role shipped in the `ebolaMetadata` bundle.
pub const CLINICIAN_ENCOUNTER_ROLE_UUID: &str = "4f10ad1a-ec49-48df-98c7-1391c6ac7f05";

pub const GP_ADDRESS_FORMAT: &str = "layout.address.format";

pub const ADDRESS_FORMAT_DESCRIPTION: &str = "XML description of address formats";

/// Address layout requested for Sierra Leone: district, chiefdom, village.
pub const ADDRESS_FORMAT_TEMPLATE: &str = concat!(
    "<org.openmrs.layout.web.address.AddressTemplate>",
    "<nameMappings class=\"properties\">",
    "<property name=\"countyDistrict\" value=\"Location.district\"/>",
    "<property name=\"address2\" value=\"Chiefdom\"/>",
    "<property name=\"cityVillage\" value=\"Location.cityVillage\"/>",
    "</nameMappings>",
    "<sizeMappings class=\"properties\">",
    "<property name=\"countyDistrict\" value=\"40\"/>",
    "<property name=\"address2\" value=\"40\"/>",
    "<property name=\"cityVillage\" value=\"10\"/>",
    "</sizeMappings>",
    "<lineByLineFormat>",
    "<string>countyDistrict</string>",
    "<string>address2</string>",
    "<string>cityVillage</string>",
    "</lineByLineFormat>",
    "</org.openmrs.layout.web.address.AddressTemplate>",
);

pub const HTML_FORMS: &[&str] = &["ebolaexample:htmlforms/triage.xml"];

/// Reference application shortcuts that do not apply to an ETU.
pub const DISABLED_APPS: &[&str] = &[
    "coreapps.configuremetadata",
    "coreapps.findPatient",
    "coreapps.activeVisits",
    "referenceapplication.registrationapp.registerPatient",
    "referenceapplication.vitals",
];

pub const UNKNOWN_LOCATION: &str = "Unknown Location";

pub const LOCATION_TAG_SUPPORTS_LOGIN: &str = "Login Location";
pub const LOCATION_TAG_SUPPORTS_ADMISSION: &str = "Admission Location";
pub const LOCATION_TAG_SUPPORTS_TRANSFER: &str = "Transfer Location";

#[must_use]
pub fn global_property_table() -> Vec<GlobalPropertySetting> {
    vec![
        GlobalPropertySetting::new(GP_CLINICIAN_ENCOUNTER_ROLE, CLINICIAN_ENCOUNTER_ROLE_UUID),
        GlobalPropertySetting::new(GP_ADDRESS_FORMAT, ADDRESS_FORMAT_TEMPLATE)
            .with_description(ADDRESS_FORMAT_DESCRIPTION),
    ]
}

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_names_are_unique() {
        let table = global_property_table();
        let mut names: Vec<_> = table.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), table.len());
    }

    #[test]
    fn address_template_lists_three_lines() {
        assert_eq!(ADDRESS_FORMAT_TEMPLATE.matches("<string>").count(), 3);
        assert!(ADDRESS_FORMAT_TEMPLATE.starts_with("<org.openmrs.layout.web.address"));
    }

    #[test]
    fn five_apps_are_disabled() {
        assert_eq!(DISABLED_APPS.len(), 5);
    }
}
