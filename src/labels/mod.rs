mod catalog;
mod filter;
mod load;

pub use catalog::{LabelCatalog, LabelRecord};
pub use filter::visible_labels;
pub use load::load_label_catalog;
