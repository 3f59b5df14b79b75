//! Last-issued-wins bookkeeping for requests made by one fetch hook.

/// Identifies one issued request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    id: u64,
    url: String,
}

impl RequestTicket {
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Tracks which request is allowed to write state.
///
/// Opening a new request supersedes whatever was in flight; only the ticket
/// of the most recently opened request is admitted when its response lands.
#[derive(Debug, Default)]
pub struct RequestGate {
    issued: u64,
    in_flight: Option<RequestTicket>,
}

impl RequestGate {
    pub fn open(&mut self, url: &str) -> RequestTicket {
        self.issued += 1;
        let ticket = RequestTicket {
            id: self.issued,
            url: url.to_string(),
        };
        if let Some(stale) = self.in_flight.replace(ticket.clone()) {
            tracing::debug!("superseding request for {}", stale.url);
        }
        ticket
    }

    /// Whether a response for `ticket` may still be applied.
    pub fn admits(&self, ticket: &RequestTicket) -> bool {
        self.in_flight.as_ref() == Some(ticket)
    }

    /// Marks `ticket` settled. Returns false if it was already superseded.
    pub fn finish(&mut self, ticket: &RequestTicket) -> bool {
        if self.admits(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Drops the in-flight request, if any, so its response is ignored.
    pub fn abandon(&mut self) -> Option<RequestTicket> {
        self.in_flight.take()
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight.is_none()
    }
}
