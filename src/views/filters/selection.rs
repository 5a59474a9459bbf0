// Selection state machine backing one Filter widget.
// The widget layer in filter.rs is a thin renderer over these operations,
// so everything interesting is testable without a Ui.

use std::collections::HashSet;

/// Set of labels a filter knows about, plus the subset currently selected.
/// Labels are kept in first-seen order; a label that was committed or
/// toggled once stays known even after it is unchecked, which is what keeps
/// free-text entries visible as rows while they are off.
#[derive(Debug, Default, Clone)]
pub struct Selection {
    order: Vec<String>,
    selected: HashSet<String>,
}

impl Selection {
    /// Seed from an externally supplied selected list (all labels checked).
    pub fn from_labels(labels: &[String]) -> Self {
        let mut sel = Self::default();
        for label in labels {
            sel.insert(label);
        }
        sel
    }

    /// True when nothing is selected. Known-but-unchecked entries don't count.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// True when the filter knows any label at all (field-mode rows).
    pub fn has_entries(&self) -> bool {
        !self.order.is_empty()
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.contains(label)
    }

    /// Multi-select toggle: mark `label` on or off, remembering it either way.
    pub fn set(&mut self, label: &str, on: bool) {
        self.remember(label);
        if on {
            self.selected.insert(label.to_string());
        } else {
            self.selected.remove(label);
        }
    }

    /// Radio select: the selection becomes exactly `label`.
    pub fn select_only(&mut self, label: &str) {
        self.order.clear();
        self.selected.clear();
        self.insert(label);
    }

    /// Commit a label as selected (free-text entry or seeding).
    pub fn insert(&mut self, label: &str) {
        self.remember(label);
        self.selected.insert(label.to_string());
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.selected.clear();
    }

    /// The externally visible contract: selected labels in first-seen order.
    /// Consumers must treat this as a set; the order is not guaranteed.
    pub fn selected_labels(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|l| self.selected.contains(*l))
            .cloned()
            .collect()
    }

    /// Every known label, checked or not (one checkbox row per entry).
    pub fn entries(&self) -> &[String] {
        &self.order
    }

    fn remember(&mut self, label: &str) {
        if !self.order.iter().any(|l| l == label) {
            self.order.push(label.to_string());
        }
    }
}

/// Per-widget owned state: the selection, the pending autocomplete text and
/// the collapsed flag. The host owns the authoritative selected list; this
/// struct owns everything transient.
#[derive(Debug, Default, Clone)]
pub struct FilterState {
    pub selection: Selection,
    pub input: String,
    pub collapsed: bool,
    /// The selected list as last written to (or seeded from) the host.
    /// Used to tell a host-driven clear apart from our own empty write.
    synced: Vec<String>,
}

impl FilterState {
    pub fn new(selected: &[String]) -> Self {
        Self {
            selection: Selection::from_labels(selected),
            input: String::new(),
            collapsed: false,
            synced: selected.to_vec(),
        }
    }

    /// External reset: when the host emptied its list since our last write,
    /// wipe the local state so a host-level "clear all" propagates here
    /// without the widget knowing why. Runs at the top of every frame.
    pub fn sync_external(&mut self, external: &[String]) {
        if external.is_empty() && !self.synced.is_empty() {
            self.reset();
        }
    }

    /// Wipe selection, entries and pending input.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.input.clear();
        self.synced.clear();
    }

    /// Commit confirmed autocomplete text as a selected label.
    pub fn commit(&mut self, value: &str) {
        self.selection.insert(value);
        self.input.clear();
    }

    /// End-of-frame write-back: recompute the selected list and hand it to
    /// the host. Returns true only when the list actually changed, so an
    /// idempotent clear reports nothing.
    pub fn write_back(&mut self, external: &mut Vec<String>) -> bool {
        let out = self.selection.selected_labels();
        self.synced = out.clone();
        if *external != out {
            *external = out;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn seed_round_trips_as_set() {
        let state = FilterState::new(&labels(&["a", "b"]));
        let got: HashSet<String> = state.selection.selected_labels().into_iter().collect();
        let want: HashSet<String> = labels(&["a", "b"]).into_iter().collect();
        assert_eq!(got, want);
    }

    #[test]
    fn multi_select_accumulates_then_clears() {
        let mut state = FilterState::new(&[]);
        let mut host: Vec<String> = Vec::new();

        state.selection.set("A", true);
        assert!(state.write_back(&mut host));
        assert_eq!(host, labels(&["A"]));

        state.selection.set("B", true);
        assert!(state.write_back(&mut host));
        assert_eq!(host, labels(&["A", "B"]));

        state.reset();
        assert!(state.write_back(&mut host));
        assert_eq!(host, Vec::<String>::new());
    }

    #[test]
    fn clear_when_already_empty_reports_no_change() {
        let mut state = FilterState::new(&[]);
        let mut host: Vec<String> = Vec::new();
        state.reset();
        assert!(!state.write_back(&mut host));
        assert_eq!(host, Vec::<String>::new());
    }

    #[test]
    fn radio_keeps_at_most_one() {
        let mut state = FilterState::new(&[]);
        let mut host: Vec<String> = Vec::new();

        state.selection.select_only("X");
        state.write_back(&mut host);
        assert_eq!(host, labels(&["X"]));

        state.selection.select_only("Y");
        state.write_back(&mut host);
        assert_eq!(host, labels(&["Y"]));

        for l in ["X", "Y", "Z"] {
            state.selection.select_only(l);
            assert!(state.selection.selected_labels().len() <= 1);
        }
    }

    #[test]
    fn radio_off_toggle_deselects() {
        let mut state = FilterState::new(&[]);
        state.selection.select_only("X");
        state.selection.set("X", false);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn external_empty_list_resets_state() {
        let mut state = FilterState::new(&labels(&["a"]));
        let mut host = labels(&["a"]);
        state.selection.set("b", true);
        state.write_back(&mut host);
        assert_eq!(host, labels(&["a", "b"]));

        // Host-side clear-all: the list empties outside the widget.
        host.clear();
        state.sync_external(&host);
        assert!(state.selection.is_empty());
        assert!(!state.selection.has_entries());
        assert!(!state.write_back(&mut host));
        assert_eq!(host, Vec::<String>::new());
    }

    #[test]
    fn own_empty_write_does_not_reset_entries() {
        // Field mode: committing then unchecking leaves the selected list
        // empty, but the entry row must survive the next frame's sync.
        let mut state = FilterState::new(&[]);
        let mut host: Vec<String> = Vec::new();

        state.commit("foo");
        state.write_back(&mut host);
        assert_eq!(host, labels(&["foo"]));

        state.selection.set("foo", false);
        state.write_back(&mut host);
        assert_eq!(host, Vec::<String>::new());

        state.sync_external(&host);
        assert_eq!(state.selection.entries(), labels(&["foo"]).as_slice());
        assert!(!state.selection.is_selected("foo"));
    }

    #[test]
    fn commit_clears_input_and_selects() {
        let mut state = FilterState::new(&[]);
        state.input = "abc".to_string();
        state.commit("abc");
        assert!(state.input.is_empty());
        assert!(state.selection.is_selected("abc"));
        assert_eq!(state.selection.entries(), labels(&["abc"]).as_slice());
    }

    #[test]
    fn recommit_is_a_no_op() {
        let mut state = FilterState::new(&[]);
        state.commit("foo");
        state.commit("foo");
        assert_eq!(state.selection.entries().len(), 1);
        assert_eq!(state.selection.selected_labels(), labels(&["foo"]));
    }

    #[test]
    fn selected_order_is_first_seen() {
        let mut sel = Selection::default();
        sel.set("b", true);
        sel.set("a", true);
        sel.set("b", false);
        sel.set("b", true);
        assert_eq!(sel.selected_labels(), labels(&["b", "a"]));
    }
}
