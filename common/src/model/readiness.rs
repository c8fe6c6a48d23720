/// Whether the generate action may run, derived from the current file and selection.
///
/// Never stored: callers rebuild it on each read, since the file and selection
/// change without any invalidation signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readiness {
    pub has_file: bool,
    pub is_csv: bool,
    pub has_selection: bool,
}

/// A reason the generate action is disabled, in the order the page lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessWarning {
    NoFile,
    NotCsv,
    EmptySelection,
}

impl ReadinessWarning {
    pub fn message(self) -> &'static str {
        match self {
            ReadinessWarning::NoFile => "Aucun fichier sélectionné",
            ReadinessWarning::NotCsv => "Le fichier doit être au format CSV",
            ReadinessWarning::EmptySelection => "Sélectionnez au moins un fichier à générer",
        }
    }
}

impl Readiness {
    pub fn can_generate(&self) -> bool {
        self.has_file && self.is_csv && self.has_selection
    }

    /// `NotCsv` is only reported once a file is present.
    pub fn warnings(&self) -> Vec<ReadinessWarning> {
        let mut warnings = Vec::new();
        if !self.has_file {
            warnings.push(ReadinessWarning::NoFile);
        } else if !self.is_csv {
            warnings.push(ReadinessWarning::NotCsv);
        }
        if !self.has_selection {
            warnings.push(ReadinessWarning::EmptySelection);
        }
        warnings
    }
}
