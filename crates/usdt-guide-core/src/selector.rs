//! View selector: the single piece of mutable UI state.

use crate::section::ActiveSection;

/// Holds the active section. Starts on the desktop guide and can move
/// between any two sections freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewSelector {
    active: ActiveSection,
}

impl ViewSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently displayed section
    pub fn active(&self) -> ActiveSection {
        self.active
    }

    /// Replace the active section unconditionally.
    pub fn select(&mut self, section: ActiveSection) {
        if self.active != section {
            tracing::debug!(from = %self.active, to = %section, "Switching section");
        }
        self.active = section;
    }

    pub fn is_active(&self, section: ActiveSection) -> bool {
        self.active == section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_on_desktop() {
        let selector = ViewSelector::new();
        assert_eq!(selector.active(), ActiveSection::Desktop);
        assert!(selector.is_active(ActiveSection::Desktop));
    }

    #[test]
    fn select_is_idempotent() {
        let mut selector = ViewSelector::new();
        selector.select(ActiveSection::Notes);
        let before = selector;
        selector.select(ActiveSection::Notes);
        assert_eq!(selector, before);
    }

    #[test]
    fn mobile_notes_pc_ends_on_desktop() {
        let mut selector = ViewSelector::new();
        selector.select(ActiveSection::Mobile);
        selector.select(ActiveSection::Notes);
        selector.select(ActiveSection::Desktop);
        assert_eq!(selector.active(), ActiveSection::Desktop);
        assert!(!selector.is_active(ActiveSection::Mobile));
        assert!(!selector.is_active(ActiveSection::Notes));
    }

    fn any_section() -> impl Strategy<Value = ActiveSection> {
        prop_oneof![
            Just(ActiveSection::Desktop),
            Just(ActiveSection::Mobile),
            Just(ActiveSection::Notes),
        ]
    }

    proptest! {
        #[test]
        fn last_selection_wins(picks in proptest::collection::vec(any_section(), 0..32)) {
            let mut selector = ViewSelector::new();
            for pick in &picks {
                selector.select(*pick);
            }
            let expected = picks.last().copied().unwrap_or_default();
            prop_assert_eq!(selector.active(), expected);
            let active_count = ActiveSection::ALL
                .iter()
                .filter(|s| selector.is_active(**s))
                .count();
            prop_assert_eq!(active_count, 1);
        }
    }
}
