use common::ServiceConfig;

use copro_frontend::generation::{browser_workflow, BrowserWorkflow};

pub struct GenererFichiersPage {
    pub workflow: BrowserWorkflow,

    /// Requests sent and not yet answered. Informational only: nothing stops a
    /// second generation while one is pending.
    pub pending: usize,

    /// Show a toast when a request ends without a download.
    pub notify_failures: bool,
}

impl GenererFichiersPage {
    pub fn new(config: ServiceConfig) -> Self {
        let notify_failures = config.notify_failures;
        Self {
            workflow: browser_workflow(config),
            pending: 0,
            notify_failures,
        }
    }
}
