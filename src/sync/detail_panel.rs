use tracing::trace;

use crate::error::PlotResult;

/// Capability surface of the backend that renders variant details.
///
/// Implementations are fire-and-forget: `request` returns once the request
/// has been issued, not when the response arrives.
pub trait DetailPanelClient {
    fn request(&mut self, request: &DetailRequest) -> PlotResult<()>;
}

/// Detail lookup for a list of variant ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailRequest {
    pub ids: Vec<String>,
}

impl DetailRequest {
    pub const PATH: &'static str = "/variant";

    #[must_use]
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }

    /// Comma-joined id list; empty when nothing is selected.
    #[must_use]
    pub fn ids_query(&self) -> String {
        self.ids.join(",")
    }

    /// Renders `/variant?ids=<ids>`.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        format!("{}?ids={}", Self::PATH, self.ids_query())
    }

    /// Absolute URL against `base_url`, tolerating a trailing slash.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path_and_query())
    }
}

/// Content region fed by detail responses.
///
/// Requests are numbered as they are issued. Responses are shown in arrival
/// order with no cancellation, so a slow response to an older request can
/// replace a newer one; `is_stale` reports when that has happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPanel {
    issued: u64,
    displayed: Option<u64>,
    content: String,
}

impl DetailPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the sequence number for a new request.
    pub fn begin_request(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Replaces the content with a response body.
    pub fn deliver(&mut self, sequence: u64, body: impl Into<String>) {
        trace!(sequence, latest = self.issued, "detail response arrived");
        self.displayed = Some(sequence);
        self.content = body.into();
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn displayed_sequence(&self) -> Option<u64> {
        self.displayed
    }

    #[must_use]
    pub fn latest_sequence(&self) -> u64 {
        self.issued
    }

    /// `true` when the shown content answers an older request than the latest.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.displayed.is_some_and(|sequence| sequence < self.issued)
    }
}
