//! Terraform state snapshot id extraction
//!
//! Only the `resources[].instances[].attributes.id` path of the snapshot is
//! read; everything else in the state file is ignored.

use std::collections::HashSet;
use std::path::Path;

use ngwaf_import_types::{ImportError, ImportResult};
use serde::Deserialize;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct StateSnapshot {
    #[serde(default)]
    resources: Vec<StateResource>,
}

#[derive(Debug, Deserialize)]
struct StateResource {
    #[serde(rename = "type")]
    resource_type: String,
    #[serde(default)]
    instances: Vec<StateInstance>,
}

#[derive(Debug, Deserialize)]
struct StateInstance {
    #[serde(default)]
    attributes: Option<StateAttributes>,
}

#[derive(Debug, Deserialize)]
struct StateAttributes {
    #[serde(default)]
    id: Option<serde_json::Value>,
}

/// Remote ids already under Terraform management
///
/// Loaded once per run and never mutated afterwards. Membership is keyed by
/// the raw remote id only, independent of kind or scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateIds {
    ids: HashSet<String>,
}

impl StateIds {
    /// Empty set: nothing imported yet
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read every instance `id` from the snapshot at `path`
    ///
    /// With `type_filter`, only resources of that Terraform type contribute.
    /// Fails with `NotFound` when the file is missing or yields no ids, and
    /// with `ParseError` when it is not valid state JSON.
    pub fn from_snapshot(path: &Path, type_filter: Option<&str>) -> ImportResult<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ImportError::NotFound(path.display().to_string()));
            }
            Err(e) => {
                return Err(ImportError::ParseError {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        };

        let ids = Self::parse(&raw, type_filter).map_err(|e| ImportError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if ids.is_empty() {
            return Err(ImportError::NotFound(format!(
                "no resource ids in {}",
                path.display()
            )));
        }

        debug!("Loaded {} ids from {}", ids.len(), path.display());
        Ok(ids)
    }

    /// Load the snapshot, downgrading every failure to an empty set
    ///
    /// A missing or empty snapshot means nothing has been imported yet. A
    /// malformed one is reported as a warning so the operator notices.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::from_snapshot(path, None) {
            Ok(ids) => {
                info!(
                    "{} resources already imported according to {}",
                    ids.len(),
                    path.display()
                );
                ids
            }
            Err(ImportError::NotFound(what)) => {
                info!("No existing state ({}), importing everything", what);
                Self::empty()
            }
            Err(e) => {
                warn!("Ignoring unreadable state snapshot: {}", e);
                Self::empty()
            }
        }
    }

    /// Parse state JSON into an id set
    pub fn parse(raw: &str, type_filter: Option<&str>) -> Result<Self, serde_json::Error> {
        let snapshot: StateSnapshot = serde_json::from_str(raw)?;

        let ids = snapshot
            .resources
            .into_iter()
            .filter(|r| type_filter.map_or(true, |t| r.resource_type == t))
            .flat_map(|r| r.instances)
            .filter_map(|i| i.attributes.and_then(|a| a.id))
            .filter_map(|id| match id {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect();

        Ok(Self { ids })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<String> for StateIds {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "version": 4,
        "terraform_version": "1.6.0",
        "resources": [
            {
                "mode": "managed",
                "type": "sigsci_site_rule",
                "name": "GEdeIJHDGJJDbaABdEfcAGba",
                "instances": [
                    {"schema_version": 0, "attributes": {"id": "64de89736993ba01d4fc06ba", "site_short_name": "www"}}
                ]
            },
            {
                "mode": "managed",
                "type": "sigsci_corp_list",
                "name": "corpdotbad-ips",
                "instances": [
                    {"attributes": {"id": "corp.bad-ips"}},
                    {"attributes": {"name": "no id here"}},
                    {}
                ]
            }
        ]
    }"#;

    fn write_snapshot(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_collects_ids_across_types() {
        let file = write_snapshot(SNAPSHOT);
        let ids = StateIds::from_snapshot(file.path(), None).unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("64de89736993ba01d4fc06ba"));
        assert!(ids.contains("corp.bad-ips"));
        assert!(!ids.contains("www"));
    }

    #[test]
    fn test_type_filter() {
        let file = write_snapshot(SNAPSHOT);
        let ids = StateIds::from_snapshot(file.path(), Some("sigsci_corp_list")).unwrap();
        assert_eq!(ids.len(), 1);
        assert!(ids.contains("corp.bad-ips"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = StateIds::from_snapshot(&dir.path().join("terraform.tfstate"), None).unwrap_err();
        assert!(matches!(err, ImportError::NotFound(_)));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let file = write_snapshot("{ not json");
        let err = StateIds::from_snapshot(file.path(), None).unwrap_err();
        assert!(matches!(err, ImportError::ParseError { .. }));
    }

    #[test]
    fn test_empty_state_is_not_found() {
        let file = write_snapshot(r#"{"version": 4, "resources": []}"#);
        let err = StateIds::from_snapshot(file.path(), None).unwrap_err();
        assert!(matches!(err, ImportError::NotFound(_)));

        let file = write_snapshot(SNAPSHOT);
        let err = StateIds::from_snapshot(file.path(), Some("sigsci_site")).unwrap_err();
        assert!(matches!(err, ImportError::NotFound(_)));
    }

    #[test]
    fn test_load_or_empty_downgrades() {
        let file = write_snapshot("[1, 2, 3]");
        assert!(StateIds::load_or_empty(file.path()).is_empty());

        let dir = tempfile::tempdir().unwrap();
        assert!(StateIds::load_or_empty(&dir.path().join("missing.tfstate")).is_empty());

        let file = write_snapshot(SNAPSHOT);
        assert_eq!(StateIds::load_or_empty(file.path()).len(), 2);
    }

    #[test]
    fn test_numeric_ids_are_stringified() {
        let ids = StateIds::parse(
            r#"{"resources": [{"type": "x", "instances": [{"attributes": {"id": 42}}]}]}"#,
            None,
        )
        .unwrap();
        assert!(ids.contains("42"));
    }
}
