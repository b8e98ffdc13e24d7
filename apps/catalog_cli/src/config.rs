use std::{fs, path::Path};

use anyhow::{bail, Context};
use catalog_core::{state::DEFAULT_PAGE_SIZE_OPTIONS, DEFAULT_CATALOG_URL};
use serde::Deserialize;
use url::Url;

const DEFAULT_CONFIG_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint_url: String,
    pub items_per_page: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_CATALOG_URL.into(),
            items_per_page: 10,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

impl Settings {
    pub fn endpoint(&self) -> anyhow::Result<Url> {
        let url = Url::parse(self.endpoint_url.trim())
            .with_context(|| format!("invalid catalog endpoint '{}'", self.endpoint_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("catalog endpoint must be http or https, got '{}'", url.scheme());
        }
        Ok(url)
    }

    /// Accepts `items_per_page` only when it is one of the offered page sizes.
    pub fn check_page_size(&self, items_per_page: usize) -> anyhow::Result<usize> {
        if !self.page_size_options.contains(&items_per_page) {
            bail!(
                "page size {items_per_page} is not one of {:?}",
                self.page_size_options
            );
        }
        Ok(items_per_page)
    }
}

/// Defaults, then `catalog.toml` (or `explicit_path`), then environment overrides.
///
/// A missing default file is ignored; a missing explicit file is an error.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    let path = explicit_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    let mut settings = match fs::read_to_string(path) {
        Ok(raw) => toml::from_str::<Settings>(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?,
        Err(err) if explicit_path.is_some() => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()));
        }
        Err(_) => Settings::default(),
    };

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("CATALOG_ENDPOINT_URL") {
        settings.endpoint_url = v;
    }
    if let Some(v) = lookup("APP__ENDPOINT_URL") {
        settings.endpoint_url = v;
    }

    if let Some(v) = lookup("APP__ITEMS_PER_PAGE") {
        if let Ok(parsed) = v.trim().parse::<usize>() {
            settings.items_per_page = parsed;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    #[test]
    fn defaults_point_at_public_catalog() {
        let settings = Settings::default();
        assert_eq!(
            settings.endpoint().expect("endpoint").as_str(),
            "https://api.escuelajs.co/api/v1/products"
        );
        assert_eq!(settings.check_page_size(10).expect("page size"), 10);
    }

    #[test]
    fn env_overrides_take_precedence_in_order() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("CATALOG_ENDPOINT_URL", "http://one.test/products"),
            ("APP__ENDPOINT_URL", "http://two.test/products"),
            ("APP__ITEMS_PER_PAGE", " 20 "),
        ]);
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings, |key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.endpoint_url, "http://two.test/products");
        assert_eq!(settings.items_per_page, 20);
    }

    #[test]
    fn ignores_unparseable_page_size_override() {
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings, |key| {
            (key == "APP__ITEMS_PER_PAGE").then(|| "lots".to_string())
        });
        assert_eq!(settings.items_per_page, 10);
    }

    #[test]
    fn rejects_unknown_page_size_and_bad_endpoint() {
        let settings = Settings {
            endpoint_url: "ftp://files.test/products".into(),
            ..Settings::default()
        };
        assert!(settings.check_page_size(7).is_err());
        assert!(settings.endpoint().is_err());
    }

    #[test]
    fn reads_partial_settings_file() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("catalog_settings_test_{suffix}.toml"));
        fs::write(&path, "items_per_page = 5\npage_size_options = [5, 25]\n").expect("write");

        let settings = load_settings(Some(&path)).expect("load settings");
        assert_eq!(settings.items_per_page, 5);
        assert_eq!(settings.page_size_options, vec![5, 25]);

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = env::temp_dir().join("catalog_settings_test_does_not_exist.toml");
        assert!(load_settings(Some(&path)).is_err());
    }
}
