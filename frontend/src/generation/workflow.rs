//! Owns the user's choices and turns button presses into downloads.
//!
//! Remote calls run on snapshots of the current state, so the user can keep
//! toggling documents while a request is in flight. Nothing prevents two
//! generations from overlapping; each one ends in its own download.

use std::future::Future;

use log::{info, warn};

use common::{PayloadKind, PickTicket, Readiness, SelectionError, SourceFile, WorkflowState};

use super::download::{DownloadTrigger, SaveHost};
use super::error::WorkflowError;
use super::transport::{Transport, TransportClient};

pub struct GenerationWorkflow<T, H> {
    state: WorkflowState,
    client: TransportClient<T>,
    download: DownloadTrigger<H>,
}

impl<T, H> GenerationWorkflow<T, H>
where
    T: Transport + 'static,
    H: SaveHost + 'static,
{
    pub fn new(client: TransportClient<T>, download: DownloadTrigger<H>) -> Self {
        let state = WorkflowState::new(client.config().csv_policy);
        Self {
            state,
            client,
            download,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn set_file(&mut self, file: Option<SourceFile>) {
        self.state.set_file(file);
    }

    /// Drops the current file and returns the ticket the coming read must present.
    pub fn begin_pick(&mut self) -> PickTicket {
        self.state.begin_pick()
    }

    /// `false` when the read belongs to an older pick and was ignored.
    pub fn finish_pick(&mut self, ticket: PickTicket, file: Option<SourceFile>) -> bool {
        self.state.finish_pick(ticket, file)
    }

    pub fn toggle_key(&mut self, key: &str, checked: bool) -> Result<bool, SelectionError> {
        self.state.toggle_key(key, checked)
    }

    pub fn readiness(&self) -> Readiness {
        self.state.readiness()
    }

    /// Downloads the template. Failures are logged and otherwise ignored.
    pub async fn fetch_template(&self) -> Option<&'static str> {
        self.template_task().await
    }

    pub async fn try_fetch_template(&self) -> Result<&'static str, WorkflowError> {
        try_template(self.client.clone(), self.download.clone()).await
    }

    /// Generates the selected documents for the current file. Does nothing
    /// when there is no file or no selected key; failures are logged.
    pub async fn generate(&self) -> Option<&'static str> {
        self.generation_task().await
    }

    /// `Ok(None)` when nothing was sent.
    pub async fn try_generate(&self) -> Result<Option<&'static str>, WorkflowError> {
        self.try_generation_task().await
    }

    /// Detached form of [`Self::fetch_template`], for `spawn_local`.
    pub fn template_task(&self) -> impl Future<Output = Option<&'static str>> + 'static {
        let attempt = try_template(self.client.clone(), self.download.clone());
        async move { attempt.await.map_err(log_failure).ok() }
    }

    /// Detached form of [`Self::generate`], bound to the state at call time.
    pub fn generation_task(&self) -> impl Future<Output = Option<&'static str>> + 'static {
        let attempt = self.try_generation_task();
        async move { attempt.await.map_err(log_failure).ok().flatten() }
    }

    fn try_generation_task(
        &self,
    ) -> impl Future<Output = Result<Option<&'static str>, WorkflowError>> + 'static {
        try_generation(
            self.client.clone(),
            self.download.clone(),
            self.state.file().cloned(),
            self.state.selection().to_vec(),
        )
    }
}

async fn try_template<T: Transport, H: SaveHost>(
    client: TransportClient<T>,
    download: DownloadTrigger<H>,
) -> Result<&'static str, WorkflowError> {
    let payload = client.fetch_template().await?;
    let file_name = PayloadKind::Template.file_name();
    download.save(&payload, file_name)?;
    info!("template downloaded as {}", file_name);
    Ok(file_name)
}

async fn try_generation<T: Transport, H: SaveHost>(
    client: TransportClient<T>,
    download: DownloadTrigger<H>,
    file: Option<SourceFile>,
    keys: Vec<String>,
) -> Result<Option<&'static str>, WorkflowError> {
    let Some(payload) = client.request_generation(file.as_ref(), &keys).await? else {
        warn!("generate called without a file or document selection");
        return Ok(None);
    };
    let file_name = PayloadKind::Bundle.file_name();
    download.save(&payload, file_name)?;
    info!("generated documents downloaded as {}", file_name);
    Ok(Some(file_name))
}

fn log_failure(error: WorkflowError) {
    warn!("no file produced: {}", error);
}
