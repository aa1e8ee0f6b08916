/// Hover/selection state for the bubble canvas and the details popup. Hover
/// and selection are independent axes; `popup_open` is only ever true while
/// a label is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(super) struct InteractionState {
    pub(super) hovered: Option<String>,
    pub(super) selected: Option<String>,
    pub(super) popup_open: bool,
    pub(super) mixes_expanded: bool,
}

impl InteractionState {
    pub(super) fn pointer_enter(&mut self, id: &str) {
        if self.hovered.as_deref() != Some(id) {
            self.hovered = Some(id.to_owned());
        }
    }

    /// A leave for an id that is no longer hovered is stale and ignored.
    pub(super) fn pointer_leave(&mut self, id: &str) {
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
    }

    pub(super) fn click(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
            self.popup_open = false;
        } else {
            self.selected = Some(id.to_owned());
            self.popup_open = true;
            self.mixes_expanded = true;
        }
    }

    /// Closing the popup clears the selection, so re-clicking the same
    /// bubble afterwards reselects it instead of toggling it off.
    pub(super) fn close_popup(&mut self) {
        self.popup_open = false;
        self.selected = None;
    }

    pub(super) fn toggle_mixes(&mut self) {
        self.mixes_expanded = !self.mixes_expanded;
    }

    /// Drops hover/selection that refer to labels no longer visible.
    pub(super) fn retain_ids(&mut self, still_visible: impl Fn(&str) -> bool) {
        if self.hovered.as_deref().is_some_and(|id| !still_visible(id)) {
            self.hovered = None;
        }
        if self.selected.as_deref().is_some_and(|id| !still_visible(id)) {
            self.selected = None;
            self.popup_open = false;
        }
    }

    pub(super) fn is_hovered(&self, id: &str) -> bool {
        self.hovered.as_deref() == Some(id)
    }

    pub(super) fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_selects_and_opens_popup() {
        let mut state = InteractionState::default();
        state.click("Warp Records");

        assert!(state.is_selected("Warp Records"));
        assert!(state.popup_open);
        assert!(state.mixes_expanded);
    }

    #[test]
    fn clicking_twice_is_idempotent_deselection() {
        let mut state = InteractionState::default();
        state.pointer_enter("Warp Records");
        state.click("Warp Records");
        state.click("Warp Records");

        assert_eq!(state.selected, None);
        assert!(!state.popup_open);
        // Hover is an independent axis and survives the toggle.
        assert!(state.is_hovered("Warp Records"));
    }

    #[test]
    fn clicking_another_bubble_moves_the_selection() {
        let mut state = InteractionState::default();
        state.click("Warp Records");
        state.click("Hyperdub");

        assert!(state.is_selected("Hyperdub"));
        assert!(state.popup_open);
    }

    #[test]
    fn stale_pointer_leave_is_a_no_op() {
        let mut state = InteractionState::default();
        state.pointer_enter("Hyperdub");
        state.pointer_leave("Warp Records");

        assert!(state.is_hovered("Hyperdub"));

        state.pointer_leave("Hyperdub");
        assert_eq!(state.hovered, None);
    }

    #[test]
    fn close_clears_selection_so_reclick_reselects() {
        let mut state = InteractionState::default();
        state.click("Warp Records");
        state.close_popup();

        assert_eq!(state.selected, None);
        assert!(!state.popup_open);

        state.click("Warp Records");
        assert!(state.is_selected("Warp Records"));
        assert!(state.popup_open);
    }

    #[test]
    fn toggle_mixes_is_independent_of_popup() {
        let mut state = InteractionState::default();
        state.click("Warp Records");
        state.toggle_mixes();
        assert!(!state.mixes_expanded);
        assert!(state.popup_open);

        state.toggle_mixes();
        assert!(state.mixes_expanded);
    }

    #[test]
    fn retain_ids_enforces_popup_invariant() {
        let mut state = InteractionState::default();
        state.pointer_enter("Warp Records");
        state.click("Hyperdub");

        state.retain_ids(|id| id == "Warp Records");
        assert!(state.is_hovered("Warp Records"));
        assert_eq!(state.selected, None);
        assert!(!state.popup_open);
    }
}
