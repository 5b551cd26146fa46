//! The force-refresh mutation.
//!
//! Triggers a server-side recomputation of every tenant's snapshot. The
//! call is deliberately heavyweight for the service, so every surface asks
//! for explicit confirmation first; the confirmation copy lives here so the
//! UI dialog and the CLI prompt stay in sync.

use log::{error, info};

use crate::config::BusinessConfig;
use crate::error::FetchError;

/// Route of the refresh mutation, under the `/api` root.
pub const EXEC_ROUTE: &str = "/ExecBestPracticeAnalyser";

/// Confirmation prompt shown before the mutation fires.
pub const CONFIRM_BODY: &str = "Are you sure you want to force the Best Practice Analysis to \
                                run? This will slow down normal usage considerably.";

/// Secondary note shown with the prompt.
pub const CONFIRM_NOTE: &str = "Please note: this runs at midnight automatically every day.";

/// Result of the refresh mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RefreshResult {
    /// No refresh attempted yet.
    #[default]
    Idle,
    /// Mutation in flight.
    Pending,
    /// The server accepted the refresh.
    Success,
    /// The mutation failed.
    Error(FetchError),
}

/// Fire the refresh mutation and hand the outcome to `on_done`.
///
/// Must only be called after the user confirmed; no confirmation happens
/// here.
pub fn exec_refresh(
    config: &BusinessConfig,
    on_done: impl FnOnce(Result<(), FetchError>) + Send + 'static,
) {
    let url = format!("{}{EXEC_ROUTE}", config.api_url());
    info!("forcing best-practice analysis via {url}");
    let request = ehttp::Request::post(&url, Vec::new());
    ehttp::fetch(request, move |result| {
        on_done(match result {
            Ok(response) if response.ok => Ok(()),
            Ok(response) => {
                error!("refresh returned status {}", response.status);
                Err(FetchError::Status(response.status))
            }
            Err(err) => {
                error!("refresh failed: {err}");
                Err(FetchError::Transport(err))
            }
        });
    });
}

/// Await the refresh mutation on an async runtime (the CLI path).
pub async fn exec_refresh_async(config: &BusinessConfig) -> Result<(), FetchError> {
    let (tx, rx) = flume::bounded(1);
    exec_refresh(config, move |result| {
        let _ = tx.send(result);
    });
    rx.recv_async()
        .await
        .map_err(|_| FetchError::Transport("refresh was dropped before completing".to_owned()))?
}

/// Frame-polled refresh state machine for the UI.
///
/// Multiple starts are not de-duplicated; each start abandons the previous
/// request's result, mirroring how the console has always behaved.
#[derive(Debug, Default)]
pub struct RefreshTrigger {
    result: RefreshResult,
    rx: Option<flume::Receiver<Result<(), FetchError>>>,
}

impl RefreshTrigger {
    pub fn start(&mut self, config: &BusinessConfig) {
        let (tx, rx) = flume::bounded(1);
        exec_refresh(config, move |result| {
            let _ = tx.send(result);
        });
        self.rx = Some(rx);
        self.result = RefreshResult::Pending;
    }

    /// Apply a completed request, if any. Call once per frame.
    pub fn poll(&mut self) {
        let Some(rx) = &self.rx else { return };
        match rx.try_recv() {
            Ok(Ok(())) => {
                self.result = RefreshResult::Success;
                self.rx = None;
            }
            Ok(Err(err)) => {
                self.result = RefreshResult::Error(err);
                self.rx = None;
            }
            Err(flume::TryRecvError::Empty) => {}
            Err(flume::TryRecvError::Disconnected) => {
                self.result = RefreshResult::Error(FetchError::Transport(
                    "refresh was dropped before completing".to_owned(),
                ));
                self.rx = None;
            }
        }
    }

    pub fn result(&self) -> &RefreshResult {
        &self.result
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.result, RefreshResult::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.result, RefreshResult::Pending)
    }
}
