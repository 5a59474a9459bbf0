// Sample deployment catalog embedded in the binary. Parsed on a worker
// thread so the filters' loading body gets exercised; a parse failure
// surfaces through their error body.

use serde::Deserialize;
use thiserror::Error;

use crate::types::{Environment, Health, SyncState};

#[derive(Debug, Clone, Deserialize)]
pub struct DeployEntry {
    pub name: String,
    pub project: String,
    pub environment: Environment,
    pub health: Health,
    pub sync: SyncState,
    #[serde(default)]
    pub labels: Vec<String>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse embedded catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load() -> Result<Vec<DeployEntry>, CatalogError> {
    let entries: Vec<DeployEntry> = serde_json::from_str(include_str!("catalog.json"))?;
    Ok(entries)
}

/// All distinct labels across the catalog, sorted. Autocomplete source for
/// the LABELS filter.
pub fn label_universe(entries: &[DeployEntry]) -> Vec<String> {
    let mut labels: Vec<String> = entries.iter().flat_map(|e| e.labels.iter().cloned()).collect();
    labels.sort();
    labels.dedup();
    labels
}

/// Whether an entry passes every non-empty filter. Empty filters match
/// everything; the labels filter matches when any selected label is
/// attached to the entry.
pub fn matches(
    entry: &DeployEntry,
    health: &[String],
    sync: &[String],
    environment: &[String],
    labels: &[String],
) -> bool {
    let value_match = |selected: &[String], value: String| {
        selected.is_empty() || selected.iter().any(|l| *l == value)
    };
    value_match(health, entry.health.to_string())
        && value_match(sync, entry.sync.to_string())
        && value_match(environment, entry.environment.to_string())
        && (labels.is_empty() || labels.iter().any(|l| entry.labels.contains(l)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn embedded_catalog_parses() {
        let entries = load().expect("embedded catalog must parse");
        assert!(!entries.is_empty());
        assert!(entries.iter().any(|e| e.sync == SyncState::OutOfSync));
        assert!(entries.iter().all(|e| !e.labels.is_empty()));
    }

    #[test]
    fn empty_filters_match_everything() {
        let entries = load().unwrap();
        let passed = entries
            .iter()
            .filter(|e| matches(e, &[], &[], &[], &[]))
            .count();
        assert_eq!(passed, entries.len());
    }

    #[test]
    fn health_filter_matches_display_label() {
        let entries = load().unwrap();
        let selected = labels(&["Degraded"]);
        for e in &entries {
            assert_eq!(
                matches(e, &selected, &[], &[], &[]),
                e.health == Health::Degraded
            );
        }
    }

    #[test]
    fn environment_filter_uses_display_name() {
        let entries = load().unwrap();
        // The Prod variant renders as "Production"; filters carry that form.
        let selected = labels(&["Production"]);
        assert!(entries
            .iter()
            .filter(|e| matches(e, &[], &[], &selected, &[]))
            .all(|e| e.environment == Environment::Prod));
        assert!(entries.iter().any(|e| matches(e, &[], &[], &selected, &[])));
    }

    #[test]
    fn label_filter_is_any_of() {
        let entries = load().unwrap();
        let selected = labels(&["team:payments", "team:data"]);
        for e in &entries {
            let expect = e.labels.iter().any(|l| l == "team:payments" || l == "team:data");
            assert_eq!(matches(e, &[], &[], &[], &selected), expect);
        }
    }

    #[test]
    fn filters_combine_conjunctively() {
        let entries = load().unwrap();
        let health = labels(&["Healthy"]);
        let sync = labels(&["Synced"]);
        for e in &entries {
            let expect = e.health == Health::Healthy && e.sync == SyncState::Synced;
            assert_eq!(matches(e, &health, &sync, &[], &[]), expect);
        }
    }

    #[test]
    fn label_universe_is_sorted_and_unique() {
        let entries = load().unwrap();
        let universe = label_universe(&entries);
        let mut sorted = universe.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(universe, sorted);
        assert!(universe.iter().any(|l| l == "team:payments"));
    }
}
