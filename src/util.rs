use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Last path segment of the mix URL, with underscores turned back into
/// spaces.
pub fn mix_display_name(url: &str) -> String {
    url.rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(url)
        .replace('_', " ")
}

pub fn appearances_label(count: u64) -> String {
    if count == 1 {
        "1 appearance".to_owned()
    } else {
        format!("{count} appearances")
    }
}

pub fn stable_pair(id: &str) -> (f32, f32) {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    let hash = hasher.finish();

    let x = ((hash & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    let y = (((hash >> 32) & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    ((x * 2.0) - 1.0, (y * 2.0) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_display_name_strips_path_and_underscores() {
        assert_eq!(
            mix_display_name("https://example.com/mixes/DJ_Set_One"),
            "DJ Set One"
        );
        assert_eq!(mix_display_name("Plain_Name"), "Plain Name");
        assert_eq!(mix_display_name("trailing/slash/"), "slash");
    }

    #[test]
    fn stable_pair_is_deterministic_and_bounded() {
        let (x, y) = stable_pair("Warp Records");
        assert_eq!(stable_pair("Warp Records"), (x, y));
        assert!((-1.0..=1.0).contains(&x));
        assert!((-1.0..=1.0).contains(&y));
    }
}
