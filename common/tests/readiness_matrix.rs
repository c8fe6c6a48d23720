use common::{CsvSuffixPolicy, GenerationRequest, SourceFile, WorkflowState, CATALOG};

fn state_for(has_file: bool, is_csv: bool, has_selection: bool) -> WorkflowState {
    let mut state = WorkflowState::default();
    if has_file {
        let name = if is_csv { "data.csv" } else { "data.txt" };
        state.set_file(Some(SourceFile::new(name, b"a;b\n1;2".to_vec())));
    }
    if !has_selection {
        for kind in CATALOG {
            state.toggle_key(kind.key, false).unwrap();
        }
    }
    state
}

#[test]
fn can_generate_truth_table() {
    for has_file in [false, true] {
        for is_csv in [false, true] {
            for has_selection in [false, true] {
                let readiness = state_for(has_file, is_csv, has_selection).readiness();
                let expected = has_file && is_csv && has_selection;
                assert_eq!(
                    readiness.can_generate(),
                    expected,
                    "has_file={has_file} is_csv={is_csv} has_selection={has_selection}"
                );
                assert_eq!(readiness.has_file, has_file);
                assert_eq!(readiness.is_csv, has_file && is_csv);
                assert_eq!(readiness.has_selection, has_selection);
            }
        }
    }
}

#[test]
fn initial_state_selects_everything_but_cannot_generate() {
    let state = WorkflowState::default();
    assert_eq!(state.selection().len(), CATALOG.len());
    assert_eq!(state.selection().len(), 7);
    assert!(!state.readiness().can_generate());
}

#[test]
fn csv_with_default_selection_can_generate() {
    let mut state = WorkflowState::default();
    state.set_file(Some(SourceFile::new("data.csv", Vec::new())));
    assert!(state.readiness().can_generate());
    let request = GenerationRequest::new(state.file(), state.selection().keys());
    assert_eq!(request.map(|r| r.keys.len()), Some(7));
}

#[test]
fn txt_file_never_generates() {
    let mut state = WorkflowState::default();
    state.set_file(Some(SourceFile::new("data.txt", Vec::new())));
    assert!(!state.readiness().can_generate());

    for kind in CATALOG {
        state.toggle_key(kind.key, false).unwrap();
        assert!(!state.readiness().can_generate());
    }
    state.toggle_key("TA", true).unwrap();
    assert!(!state.readiness().can_generate());
}

#[test]
fn deselecting_everything_blocks_a_valid_csv() {
    let mut state = WorkflowState::default();
    state.set_file(Some(SourceFile::new("data.csv", Vec::new())));
    for kind in CATALOG {
        state.toggle_key(kind.key, false).unwrap();
    }
    assert!(state.selection().is_empty());
    assert!(!state.readiness().can_generate());
}

#[test]
fn upper_case_extension_depends_on_policy() {
    let file = SourceFile::new("DATA.CSV", Vec::new());

    let mut strict = WorkflowState::new(CsvSuffixPolicy::CaseSensitive);
    strict.set_file(Some(file.clone()));
    assert!(!strict.readiness().can_generate());

    let mut relaxed = WorkflowState::new(CsvSuffixPolicy::CaseInsensitive);
    relaxed.set_file(Some(file));
    assert!(relaxed.readiness().can_generate());
}
