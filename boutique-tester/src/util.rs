use anyhow::{Context, Result};
use boutique_core::CatalogFixture;
use std::fs;
use std::path::Path;

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Catalog fixture from `path`, or the bundled sample catalog.
pub fn load_fixture(path: Option<&Path>) -> Result<CatalogFixture> {
    let Some(path) = path else {
        return Ok(CatalogFixture::sample());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture {}", path.display()))?;
    CatalogFixture::from_json(&raw)
        .with_context(|| format!("failed to parse fixture {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" smoke, ,cross-list-sync,  all ");
        assert_eq!(parts, vec!["smoke", "cross-list-sync", "all"]);
    }

    #[test]
    fn missing_path_loads_sample() {
        let fixture = load_fixture(None).unwrap();
        assert_eq!(fixture.products.len(), 9);
    }

    #[test]
    fn unreadable_fixture_reports_path() {
        let path = std::env::temp_dir().join("boutique-missing-fixture.json");
        let err = load_fixture(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("boutique-missing-fixture.json"));
    }
}
