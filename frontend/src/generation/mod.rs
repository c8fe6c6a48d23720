//! File-generation workflow: the user's choices, the calls to the generation
//! service and the browser download of whatever comes back.

pub mod download;
pub mod error;
pub mod transport;
pub mod workflow;

pub use download::{BrowserSaveHost, DownloadTrigger, SaveHost};
pub use error::{DownloadError, TransportError, WorkflowError};
pub use transport::{GlooTransport, Transport, TransportClient};
pub use workflow::GenerationWorkflow;

/// The workflow as wired in the browser.
pub type BrowserWorkflow = GenerationWorkflow<GlooTransport, BrowserSaveHost>;

pub fn browser_workflow(config: common::ServiceConfig) -> BrowserWorkflow {
    GenerationWorkflow::new(
        TransportClient::new(GlooTransport, config),
        DownloadTrigger::new(BrowserSaveHost),
    )
}
