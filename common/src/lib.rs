//! Platform-independent model shared by the condominium file generator.
//!
//! Nothing in this crate touches the browser: the frontend wires these types to
//! `web-sys`/`gloo` while tests exercise them natively.

pub mod config;
pub mod model;
pub mod requests;
pub mod state;

pub use config::ServiceConfig;
pub use model::document::{DocumentKind, CATALOG};
pub use model::payload::{Payload, PayloadKind};
pub use model::readiness::{Readiness, ReadinessWarning};
pub use model::selection::{SelectionError, SelectionState};
pub use model::source_file::{CsvSuffixPolicy, SourceFile};
pub use requests::{FormPart, FormValue, GenerationRequest};
pub use state::{PickTicket, WorkflowState};
