use crate::model::readiness::Readiness;
use crate::model::selection::{SelectionError, SelectionState};
use crate::model::source_file::{CsvSuffixPolicy, SourceFile};
use log::debug;

/// Identifies one file pick. Only the latest pick may set the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickTicket(u64);

/// Everything the user has chosen so far: the uploaded file and the document keys.
///
/// Mutated only from the UI thread; readiness is recomputed on each call.
#[derive(Debug, Clone, Default)]
pub struct WorkflowState {
    file: Option<SourceFile>,
    selection: SelectionState,
    csv_policy: CsvSuffixPolicy,
    picks: u64,
}

impl WorkflowState {
    pub fn new(csv_policy: CsvSuffixPolicy) -> Self {
        Self {
            csv_policy,
            ..Self::default()
        }
    }

    /// Replaces the file, whatever its extension. A wrong extension only shows
    /// up later through [`Readiness::is_csv`].
    pub fn set_file(&mut self, file: Option<SourceFile>) {
        match &file {
            Some(f) => debug!("source file set: {} ({} bytes)", f.name, f.size()),
            None => debug!("source file cleared"),
        }
        self.file = file;
    }

    /// Starts a new pick: the previous file is dropped right away, and any
    /// pick still being read goes stale.
    pub fn begin_pick(&mut self) -> PickTicket {
        self.picks += 1;
        self.set_file(None);
        PickTicket(self.picks)
    }

    /// Sets the file read for `ticket`. Returns `false`, leaving the state
    /// untouched, when a newer pick has started since.
    pub fn finish_pick(&mut self, ticket: PickTicket, file: Option<SourceFile>) -> bool {
        if ticket.0 != self.picks {
            debug!("dropping stale file pick #{}", ticket.0);
            return false;
        }
        self.set_file(file);
        true
    }

    pub fn toggle_key(&mut self, key: &str, checked: bool) -> Result<bool, SelectionError> {
        self.selection.toggle(key, checked)
    }

    pub fn readiness(&self) -> Readiness {
        let has_file = self.file.is_some();
        Readiness {
            has_file,
            is_csv: self
                .file
                .as_ref()
                .is_some_and(|file| file.is_csv(self.csv_policy)),
            has_selection: !self.selection.is_empty(),
        }
    }

    pub fn file(&self) -> Option<&SourceFile> {
        self.file.as_ref()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn csv_policy(&self) -> CsvSuffixPolicy {
        self.csv_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::document::CATALOG;

    fn csv(name: &str) -> Option<SourceFile> {
        Some(SourceFile::new(name, b"niveau;lot".to_vec()))
    }

    #[test]
    fn set_file_accepts_any_extension() {
        let mut state = WorkflowState::default();
        state.set_file(Some(SourceFile::new("notes.txt", Vec::new())));
        assert_eq!(state.file().map(|f| f.name.as_str()), Some("notes.txt"));
        assert!(!state.readiness().is_csv);
    }

    #[test]
    fn new_pick_replaces_the_previous_file() {
        let mut state = WorkflowState::default();
        state.set_file(Some(SourceFile::new("a.csv", vec![1])));
        state.set_file(Some(SourceFile::new("b.csv", vec![2, 3])));
        assert_eq!(state.file().map(|f| f.bytes.clone()), Some(vec![2, 3]));

        state.set_file(None);
        assert!(state.file().is_none());
    }

    #[test]
    fn readiness_follows_mutations_without_refresh() {
        let mut state = WorkflowState::default();
        state.set_file(csv("data.csv"));
        assert!(state.readiness().can_generate());

        for kind in CATALOG {
            state.toggle_key(kind.key, false).unwrap();
        }
        assert!(!state.readiness().can_generate());

        state.toggle_key("TA", true).unwrap();
        assert!(state.readiness().can_generate());
    }

    #[test]
    fn policy_is_applied_to_readiness() {
        let mut state = WorkflowState::new(CsvSuffixPolicy::CaseInsensitive);
        state.set_file(Some(SourceFile::new("DATA.CSV", Vec::new())));
        assert!(state.readiness().is_csv);
        assert_eq!(state.csv_policy(), CsvSuffixPolicy::CaseInsensitive);
    }

    #[test]
    fn starting_a_pick_clears_the_old_file() {
        let mut state = WorkflowState::default();
        state.set_file(csv("old.csv"));
        assert!(state.readiness().can_generate());

        let _ticket = state.begin_pick();
        assert!(state.file().is_none());
        assert!(!state.readiness().can_generate());
    }

    #[test]
    fn slower_earlier_read_cannot_overwrite_latest_pick() {
        let mut state = WorkflowState::default();
        let big = state.begin_pick();
        let small = state.begin_pick();

        assert!(state.finish_pick(small, csv("small.csv")));
        assert!(!state.finish_pick(big, csv("big.csv")));

        assert_eq!(state.file().map(|f| f.name.as_str()), Some("small.csv"));
    }

    #[test]
    fn stale_empty_read_does_not_clear_latest_pick() {
        let mut state = WorkflowState::default();
        let first = state.begin_pick();
        let second = state.begin_pick();
        assert!(state.finish_pick(second, csv("data.csv")));
        assert!(!state.finish_pick(first, None));
        assert!(state.file().is_some());
    }
}
