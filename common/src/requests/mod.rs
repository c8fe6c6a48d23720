//! Wire shape of the generation request.
//!
//! The service expects a multipart form with the uploaded CSV under `file` and
//! one `fichiersAGenerer` text field per requested document key.

use crate::model::source_file::SourceFile;

pub const FILE_FIELD: &str = "file";
pub const KEYS_FIELD: &str = "fichiersAGenerer";

/// A file plus the document keys to generate from it.
///
/// Can only be built with a file and at least one key, which is the guard that
/// keeps an incomplete submission off the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub file: SourceFile,
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormValue<'a> {
    File {
        file_name: &'a str,
        content_type: Option<&'a str>,
        bytes: &'a [u8],
    },
    Text(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormPart<'a> {
    pub name: &'static str,
    pub value: FormValue<'a>,
}

impl GenerationRequest {
    /// Returns `None` when there is no file or no key.
    ///
    /// Keys are kept as given: duplicates are sent twice, deduplication is the
    /// caller's concern.
    pub fn new<K: AsRef<str>>(file: Option<&SourceFile>, keys: &[K]) -> Option<Self> {
        let file = file?;
        if keys.is_empty() {
            return None;
        }
        Some(Self {
            file: file.clone(),
            keys: keys.iter().map(|k| k.as_ref().to_string()).collect(),
        })
    }

    /// The form parts in send order: the file first, then each key.
    pub fn parts(&self) -> Vec<FormPart<'_>> {
        let mut parts = Vec::with_capacity(self.keys.len() + 1);
        parts.push(FormPart {
            name: FILE_FIELD,
            value: FormValue::File {
                file_name: &self.file.name,
                content_type: self.file.content_type.as_deref(),
                bytes: &self.file.bytes,
            },
        });
        parts.extend(self.keys.iter().map(|key| FormPart {
            name: KEYS_FIELD,
            value: FormValue::Text(key),
        }));
        parts
    }
}
