use std::path::Path;

use anyhow::Context;
use ebola_setup::EbolaSetupConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};

/// Environment prefix for overrides, e.g. `EBOLA_SETUP__MODULE_ID`.
pub const ENV_PREFIX: &str = "EBOLA_SETUP__";

/// Layer catalog defaults, an optional YAML file and environment overrides.
///
/// # Errors
/// Returns an error if the file is missing or any layer fails to deserialize.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<EbolaSetupConfig> {
    let mut figment = Figment::from(Serialized::defaults(EbolaSetupConfig::default()));
    if let Some(path) = path {
        anyhow::ensure!(path.exists(), "config file not found: {}", path.display());
        figment = figment.merge(Yaml::file(path));
    }
    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    figment
        .extract()
        .context("failed to load ebola setup configuration")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_without_file_or_env() {
        temp_env::with_vars_unset(["EBOLA_SETUP__MODULE_ID"], || {
            let cfg = load_config(None).unwrap();
            assert_eq!(cfg, EbolaSetupConfig::default());
        });
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "disabled_apps:\n  - coreapps.findPatient\nlegacy_location:\n  name: Triage Tent"
        )
        .unwrap();

        temp_env::with_vars_unset(["EBOLA_SETUP__MODULE_ID"], || {
            let cfg = load_config(Some(file.path())).unwrap();
            assert_eq!(cfg.disabled_apps, vec!["coreapps.findPatient"]);
            assert_eq!(cfg.legacy_location.name, "Triage Tent");
            assert_eq!(cfg.legacy_location.login_tag, "Login Location");
            assert_eq!(cfg.bundles, vec!["ebolaMetadata", "ebolaDemoData"]);
        });
    }

    #[test]
    fn env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "module_id: from-file").unwrap();

        temp_env::with_var("EBOLA_SETUP__MODULE_ID", Some("from-env"), || {
            let cfg = load_config(Some(file.path())).unwrap();
            assert_eq!(cfg.module_id, "from-env");
        });
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/ebola-setup.yaml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bundle: [x]").unwrap();

        temp_env::with_vars_unset(["EBOLA_SETUP__MODULE_ID"], || {
            assert!(load_config(Some(file.path())).is_err());
        });
    }
}
