//! Fetching the best-practice report.
//!
//! Network IO runs through `ehttp`, which performs the request on a
//! background thread and reports back through a callback. The UI wraps the
//! callback in [`ReportFetch`], a state machine polled once per frame; the
//! CLI awaits [`fetch_report_async`] instead. Both paths share
//! [`fetch_report`].

use log::{error, info};

use crate::config::BusinessConfig;
use crate::error::FetchError;
use crate::report::ComplianceRow;

/// Route of the report list endpoint, under the `/api` root.
pub const REPORT_ROUTE: &str = "/BestPracticeAnalyser_List";

/// Result of fetching the compliance report.
#[derive(Debug, Clone, Default)]
pub enum ReportFetchResult {
    /// No fetch attempted yet.
    #[default]
    Idle,
    /// Fetch in progress.
    Pending,
    /// Report fetched successfully.
    Success(Vec<ComplianceRow>),
    /// Fetch failed.
    Error(FetchError),
}

/// Fetch the report and hand the outcome to `on_done`.
///
/// The callback runs on ehttp's IO thread; forward the result to the owning
/// thread through a channel (as [`ReportFetch`] does) before touching UI
/// state.
pub fn fetch_report(
    config: &BusinessConfig,
    on_done: impl FnOnce(Result<Vec<ComplianceRow>, FetchError>) + Send + 'static,
) {
    let url = format!("{}{REPORT_ROUTE}", config.api_url());
    info!("fetching best-practice report from {url}");
    let request = ehttp::Request::get(&url);
    ehttp::fetch(request, move |result| {
        on_done(decode_report_response(result));
    });
}

fn decode_report_response(
    result: ehttp::Result<ehttp::Response>,
) -> Result<Vec<ComplianceRow>, FetchError> {
    match result {
        Ok(response) if response.ok => {
            serde_json::from_slice::<Vec<ComplianceRow>>(&response.bytes).map_err(|err| {
                error!("report response did not decode: {err}");
                FetchError::Decode(err.to_string())
            })
        }
        Ok(response) => {
            error!("report fetch returned status {}", response.status);
            Err(FetchError::Status(response.status))
        }
        Err(err) => {
            error!("report fetch failed: {err}");
            Err(FetchError::Transport(err))
        }
    }
}

/// Await the report on an async runtime (the CLI path).
pub async fn fetch_report_async(
    config: &BusinessConfig,
) -> Result<Vec<ComplianceRow>, FetchError> {
    let (tx, rx) = flume::bounded(1);
    fetch_report(config, move |result| {
        let _ = tx.send(result);
    });
    rx.recv_async()
        .await
        .map_err(|_| FetchError::Transport("fetch was dropped before completing".to_owned()))?
}

/// Frame-polled fetch state machine for the UI.
///
/// `start` kicks off the request and flips to pending; `poll` drains the
/// completion channel and settles into success or error. Starting again
/// while pending simply abandons the older request's result.
#[derive(Debug, Default)]
pub struct ReportFetch {
    result: ReportFetchResult,
    rx: Option<flume::Receiver<Result<Vec<ComplianceRow>, FetchError>>>,
}

impl ReportFetch {
    pub fn start(&mut self, config: &BusinessConfig) {
        let (tx, rx) = flume::bounded(1);
        fetch_report(config, move |result| {
            let _ = tx.send(result);
        });
        self.rx = Some(rx);
        self.result = ReportFetchResult::Pending;
    }

    /// Apply a completed request, if any. Call once per frame.
    pub fn poll(&mut self) {
        let Some(rx) = &self.rx else { return };
        match rx.try_recv() {
            Ok(Ok(rows)) => {
                info!("report fetch completed with {} tenants", rows.len());
                self.result = ReportFetchResult::Success(rows);
                self.rx = None;
            }
            Ok(Err(err)) => {
                self.result = ReportFetchResult::Error(err);
                self.rx = None;
            }
            Err(flume::TryRecvError::Empty) => {}
            Err(flume::TryRecvError::Disconnected) => {
                self.result = ReportFetchResult::Error(FetchError::Transport(
                    "fetch was dropped before completing".to_owned(),
                ));
                self.rx = None;
            }
        }
    }

    pub fn result(&self) -> &ReportFetchResult {
        &self.result
    }

    pub fn rows(&self) -> Option<&[ComplianceRow]> {
        if let ReportFetchResult::Success(rows) = &self.result {
            Some(rows)
        } else {
            None
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        if let ReportFetchResult::Error(err) = &self.result {
            Some(err)
        } else {
            None
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.result, ReportFetchResult::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.result, ReportFetchResult::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_rows() -> serde_json::Value {
        serde_json::json!([
            {
                "Tenant": "contoso.example",
                "LastRefresh": "2026-03-04T00:12:00Z",
                "UnifiedAuditLog": true,
                "SecureScorePercentage": 61.5
            },
            {
                "Tenant": "fabrikam.example"
            }
        ])
    }

    #[tokio::test]
    async fn test_fetch_report_success() {
        let _ = env_logger::builder().is_test(true).try_init();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/BestPracticeAnalyser_List"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_rows()))
            .mount(&server)
            .await;

        let config = BusinessConfig::new(server.uri());
        let rows = fetch_report_async(&config).await.expect("fetch succeeds");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tenant, "contoso.example");
        assert!(rows[1].unified_audit_log.is_none());
    }

    #[tokio::test]
    async fn test_fetch_report_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/BestPracticeAnalyser_List"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let config = BusinessConfig::new(server.uri());
        let err = fetch_report_async(&config).await.expect_err("fetch fails");
        assert_eq!(err, FetchError::Status(500));
    }

    #[tokio::test]
    async fn test_fetch_report_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/BestPracticeAnalyser_List"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let config = BusinessConfig::new(server.uri());
        let err = fetch_report_async(&config).await.expect_err("fetch fails");
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_report_fetch_state_machine() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/BestPracticeAnalyser_List"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_rows()))
            .mount(&server)
            .await;

        let config = BusinessConfig::new(server.uri());
        let mut fetch = ReportFetch::default();
        assert!(fetch.is_idle());

        fetch.start(&config);
        assert!(fetch.is_pending());

        // Poll until the IO thread delivers, as the UI does each frame.
        for _ in 0..100 {
            fetch.poll();
            if !fetch.is_pending() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        assert_eq!(fetch.rows().map(<[ComplianceRow]>::len), Some(2));
        assert!(fetch.error().is_none());
    }
}
