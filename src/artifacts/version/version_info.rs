use crate::artifacts::version::version_kind::VersionKind;
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Version data reported by the version-computation tool for the checked-out
/// branch.
///
/// Only `FullSemVer` is required; every other top-level field is kept so a
/// `ver` display kind can select it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VersionInfo {
    #[serde(rename = "FullSemVer")]
    full_sem_ver: String,
    #[serde(flatten)]
    fields: BTreeMap<String, serde_json::Value>,
}

impl VersionInfo {
    pub fn try_parse(output: &str) -> anyhow::Result<Self> {
        serde_json::from_str(output.trim()).context("could not deserialize version info")
    }

    /// Text shown in a version annotation for the given display kind.
    pub fn display(&self, kind: &VersionKind) -> anyhow::Result<String> {
        let field = kind.field_name();
        if field == crate::artifacts::version::FULL_SEM_VER_FIELD {
            return Ok(self.full_sem_ver.clone());
        }

        match self.fields.get(field) {
            Some(serde_json::Value::String(text)) => Ok(text.clone()),
            Some(serde_json::Value::Null) | None => {
                anyhow::bail!("version info has no field '{}'", field)
            }
            Some(other) => Ok(other.to_string()),
        }
    }
}
