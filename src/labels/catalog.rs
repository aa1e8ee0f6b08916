use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct LabelRecord {
    pub id: String,
    pub count: u64,
    pub mixes: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LabelCatalog {
    pub labels: HashMap<String, LabelRecord>,
    pub max_count: u64,
}

impl LabelCatalog {
    pub fn new(labels: HashMap<String, LabelRecord>) -> Self {
        let max_count = labels.values().map(|label| label.count).max().unwrap_or(0);
        Self { labels, max_count }
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn mix_reference_count(&self) -> usize {
        self.labels.values().map(|label| label.mixes.len()).sum()
    }
}
