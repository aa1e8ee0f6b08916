use super::catalog::{LabelCatalog, LabelRecord};
use crate::util::mix_display_name;

/// The visible subset of the catalog. All three rules are conjunctive; the
/// release-artifact exclusion is unconditional.
pub fn visible_labels<'a>(
    catalog: &'a LabelCatalog,
    min_count: u64,
    query: &str,
) -> Vec<&'a LabelRecord> {
    catalog
        .labels
        .values()
        .filter(|label| !is_release_artifact(&label.id))
        .filter(|label| label.count >= min_count)
        .filter(|label| matches_search(label, query))
        .collect()
}

/// Numbered-release artifacts like "Label - 12 Edit" share a namespace with
/// real label names: a literal " - " immediately followed by a digit.
fn is_release_artifact(id: &str) -> bool {
    id.match_indices(" - ").any(|(index, separator)| {
        id[index + separator.len()..]
            .chars()
            .next()
            .is_some_and(|next| next.is_ascii_digit())
    })
}

fn matches_search(label: &LabelRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    if label.id.to_lowercase().contains(&query) {
        return true;
    }

    label
        .mixes
        .iter()
        .any(|mix| mix_display_name(mix).to_lowercase().contains(&query))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn catalog(entries: &[(&str, u64, &[&str])]) -> LabelCatalog {
        let labels = entries
            .iter()
            .map(|(id, count, mixes)| {
                (
                    (*id).to_owned(),
                    LabelRecord {
                        id: (*id).to_owned(),
                        count: *count,
                        mixes: mixes.iter().map(|mix| (*mix).to_owned()).collect(),
                    },
                )
            })
            .collect::<HashMap<_, _>>();
        LabelCatalog::new(labels)
    }

    fn visible_ids(catalog: &LabelCatalog, min_count: u64, query: &str) -> Vec<String> {
        let mut ids = visible_labels(catalog, min_count, query)
            .into_iter()
            .map(|label| label.id.clone())
            .collect::<Vec<_>>();
        ids.sort();
        ids
    }

    #[test]
    fn release_artifacts_are_always_excluded() {
        let catalog = catalog(&[
            ("Label - 12 Edit", 500, &[]),
            ("Label", 500, &[]),
            ("Dash-2 But No Spaces", 500, &[]),
            ("Trailing - ", 500, &[]),
        ]);

        assert_eq!(
            visible_ids(&catalog, 0, ""),
            vec!["Dash-2 But No Spaces", "Label", "Trailing - "]
        );
    }

    #[test]
    fn count_threshold_is_inclusive() {
        let catalog = catalog(&[("A", 49, &[]), ("B", 50, &[]), ("C", 51, &[])]);
        assert_eq!(visible_ids(&catalog, 50, ""), vec!["B", "C"]);
    }

    #[test]
    fn search_matches_label_name_case_insensitively() {
        let catalog = catalog(&[("Warp Records", 10, &[]), ("Hyperdub", 10, &[])]);
        assert_eq!(visible_ids(&catalog, 0, "warp"), vec!["Warp Records"]);
    }

    #[test]
    fn search_matches_mix_name_after_cleanup() {
        let catalog = catalog(&[
            ("Warp Records", 10, &["https://x/DJ_Set_One"] as &[&str]),
            ("Hyperdub", 10, &["https://x/Other_Mix"]),
        ]);

        // "set one" only appears in the mix URL, underscore-separated.
        assert_eq!(visible_ids(&catalog, 0, "set one"), vec!["Warp Records"]);
    }

    #[test]
    fn rules_are_conjunctive() {
        let catalog = catalog(&[
            ("Warp Records", 10, &["https://x/DJ_Set_One"] as &[&str]),
            ("Warp Records - 3", 99, &["https://x/DJ_Set_One"]),
            ("Warp Quiet", 1, &["https://x/DJ_Set_One"]),
        ]);

        assert_eq!(visible_ids(&catalog, 5, "warp"), vec!["Warp Records"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let catalog = catalog(&[]);
        assert!(visible_labels(&catalog, 50, "").is_empty());
    }

    #[test]
    fn labels_without_mixes_are_searchable_by_name_only() {
        let catalog = catalog(&[("Rephlex", 10, &[])]);
        assert_eq!(visible_ids(&catalog, 0, "rephlex"), vec!["Rephlex"]);
        assert!(visible_ids(&catalog, 0, "set one").is_empty());
    }
}
