use std::sync::{Arc, Mutex};
use std::thread;

use tracing::{debug, warn};

use crate::error::{PlotError, PlotResult};
use crate::sync::{DetailPanel, DetailPanelClient, DetailRequest};

/// Detail-panel client that fetches over HTTP on a background thread.
///
/// Each request runs on its own thread and writes its body into the shared
/// [`DetailPanel`] when it arrives. In-flight requests are never cancelled.
#[derive(Debug, Clone)]
pub struct HttpDetailPanelClient {
    base_url: String,
    client: reqwest::blocking::Client,
    panel: Arc<Mutex<DetailPanel>>,
}

impl HttpDetailPanelClient {
    pub fn new(base_url: impl Into<String>) -> PlotResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|err| PlotError::Sync(format!("failed to build http client: {err}")))?;
        Ok(Self {
            base_url: base_url.into(),
            client,
            panel: Arc::new(Mutex::new(DetailPanel::new())),
        })
    }

    /// Shared handle to the panel the responses are written into.
    #[must_use]
    pub fn panel(&self) -> Arc<Mutex<DetailPanel>> {
        Arc::clone(&self.panel)
    }
}

impl DetailPanelClient for HttpDetailPanelClient {
    fn request(&mut self, request: &DetailRequest) -> PlotResult<()> {
        let sequence = self
            .panel
            .lock()
            .map_err(|_| PlotError::Sync("detail panel lock poisoned".to_owned()))?
            .begin_request();
        let url = request.url(&self.base_url);
        let client = self.client.clone();
        let panel = Arc::clone(&self.panel);
        debug!(sequence, %url, "issuing detail request");

        thread::Builder::new()
            .name(format!("detail-request-{sequence}"))
            .spawn(move || {
                let body = client
                    .get(&url)
                    .send()
                    .and_then(reqwest::blocking::Response::error_for_status)
                    .and_then(reqwest::blocking::Response::text);
                match body {
                    Ok(body) => match panel.lock() {
                        Ok(mut panel) => panel.deliver(sequence, body),
                        Err(_) => warn!(sequence, "detail panel lock poisoned; dropping response"),
                    },
                    Err(err) => warn!(sequence, error = %err, "detail request failed"),
                }
            })
            .map_err(|err| PlotError::Sync(format!("failed to spawn detail request: {err}")))?;
        Ok(())
    }
}
