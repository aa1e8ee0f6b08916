use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::Value;

use super::catalog::{LabelCatalog, LabelRecord};

#[derive(Clone, Debug, Deserialize)]
struct RawLabel {
    count: u64,
    #[serde(default)]
    mixes: Vec<String>,
}

pub fn load_label_catalog(path: &str) -> Result<LabelCatalog> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    let catalog = parse_label_catalog(&raw).with_context(|| format!("failed to parse {path}"))?;

    log::info!(
        "loaded {} labels ({} mix references) from {path}",
        catalog.label_count(),
        catalog.mix_reference_count(),
    );
    Ok(catalog)
}

fn parse_label_catalog(raw: &str) -> Result<LabelCatalog> {
    let parsed: Value = serde_json::from_str(raw).context("invalid JSON")?;
    let object = parsed
        .as_object()
        .ok_or_else(|| anyhow!("expected a JSON object at the top level"))?;

    // The scraper wraps the mapping in a "labels_count" key; accept a bare
    // mapping too so hand-trimmed files keep working.
    let entries = object
        .get("labels_count")
        .and_then(Value::as_object)
        .unwrap_or(object);

    let mut labels = HashMap::with_capacity(entries.len());
    for (name, value) in entries {
        let id = name.trim();
        if id.is_empty() {
            log::warn!("skipping label entry with empty name");
            continue;
        }

        match RawLabel::deserialize(value) {
            Ok(raw_label) => {
                labels.insert(
                    id.to_owned(),
                    LabelRecord {
                        id: id.to_owned(),
                        count: raw_label.count,
                        mixes: raw_label.mixes,
                    },
                );
            }
            Err(error) => {
                log::warn!("skipping malformed label entry {id:?}: {error}");
            }
        }
    }

    if labels.is_empty() {
        log::warn!("label file contained no usable entries");
    }

    Ok(LabelCatalog::new(labels))
}
