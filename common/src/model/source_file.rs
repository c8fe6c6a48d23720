use serde::{Deserialize, Serialize};

const CSV_SUFFIX: &str = ".csv";

/// How the `.csv` extension of the uploaded file is matched.
///
/// `CaseSensitive` keeps the historical behavior, where `DATA.CSV` is refused
/// even though the service would accept its content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CsvSuffixPolicy {
    #[default]
    CaseSensitive,
    CaseInsensitive,
}

impl CsvSuffixPolicy {
    pub fn matches(self, file_name: &str) -> bool {
        match self {
            CsvSuffixPolicy::CaseSensitive => file_name.ends_with(CSV_SUFFIX),
            CsvSuffixPolicy::CaseInsensitive => file_name
                .len()
                .checked_sub(CSV_SUFFIX.len())
                .and_then(|start| file_name.get(start..))
                .is_some_and(|suffix| suffix.eq_ignore_ascii_case(CSV_SUFFIX)),
        }
    }
}

/// The file picked by the user, read fully into memory.
///
/// Only the name is ever inspected here; the content is forwarded untouched to
/// the generation service, which owns every content check.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        let content_type = content_type.into();
        self.content_type = (!content_type.is_empty()).then_some(content_type);
        self
    }

    pub fn is_csv(&self, policy: CsvSuffixPolicy) -> bool {
        policy.matches(&self.name)
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}
