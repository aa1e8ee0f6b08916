use std::collections::HashSet;

use crate::labels::visible_labels;

use super::super::ViewModel;
use super::super::scale::bubble_radius;

impl ViewModel {
    /// Recomputes the visible set from the current filter parameters,
    /// retargets the simulation and prunes stale interaction state.
    pub(in crate::app) fn rebuild_visible(&mut self) {
        let mut visible = visible_labels(&self.catalog, self.min_count, self.search.trim());
        visible.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id)));

        self.visible_max_count = visible.first().map(|label| label.count).unwrap_or(0);
        self.visible_sorted = visible.iter().map(|label| label.id.clone()).collect();

        let targets = visible
            .iter()
            .map(|label| {
                (
                    label.id.clone(),
                    label.count,
                    bubble_radius(label.count, self.visible_max_count),
                )
            })
            .collect::<Vec<_>>();
        self.simulation.retarget(targets);

        let visible_ids = self
            .visible_sorted
            .iter()
            .map(String::as_str)
            .collect::<HashSet<_>>();
        self.interaction.retain_ids(|id| visible_ids.contains(id));

        self.visible_dirty = false;
    }
}
