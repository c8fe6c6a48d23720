/// Binary body returned by the generation service.
#[derive(Clone, PartialEq, Eq)]
pub struct Payload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl Payload {
    /// Wraps a response body whose media type is unknown.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            content_type: None,
        }
    }

    /// Records the `Content-Type` the service sent. Empty values count as absent.
    pub fn with_content_type(mut self, content_type: Option<String>) -> Self {
        self.content_type = content_type.filter(|value| !value.is_empty());
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Payload")
            .field("len", &self.bytes.len())
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// The two artifacts the service hands back. Each is offered under a fixed
/// file name; response headers are never consulted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Template,
    Bundle,
}

impl PayloadKind {
    pub const TEMPLATE_FILE_NAME: &'static str = "TB_template.xlsx";
    pub const BUNDLE_FILE_NAME: &'static str = "Fichier_de_coproprieté";

    /// Name the browser saves this artifact under.
    pub fn file_name(self) -> &'static str {
        match self {
            PayloadKind::Template => Self::TEMPLATE_FILE_NAME,
            PayloadKind::Bundle => Self::BUNDLE_FILE_NAME,
        }
    }
}
