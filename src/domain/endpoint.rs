use serde::{Deserialize, Serialize};

/// A candidate gateway base address with its failover metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayEndpoint {
    pub base_url: String,
    /// Lower priorities are tried first.
    pub priority: u16,
    /// Attempts allowed against this endpoint before failing over.
    pub retries: u32,
}

/// An ordered, weighted set of gateway entry points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GatewayEndpointList {
    entries: Vec<GatewayEndpoint>,
}

impl GatewayEndpointList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, base_url: impl Into<String>, priority: u16, retries: u32) {
        self.entries.push(GatewayEndpoint {
            base_url: base_url.into(),
            priority,
            retries,
        });
    }

    /// Endpoints in ascending priority order. Equal priorities keep their
    /// declaration order.
    pub fn ordered(&self) -> Vec<GatewayEndpoint> {
        let mut ordered = self.entries.clone();
        ordered.sort_by_key(|e| e.priority);
        ordered
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The production entry points, primary first.
    pub fn cardsave_production() -> Self {
        let mut list = Self::new();
        list.add("https://gw1.cardsaveonlinepayments.com:4430", 100, 2);
        list.add("https://gw2.cardsaveonlinepayments.com:4430", 200, 2);
        list.add("https://gw3.cardsaveonlinepayments.com:4430", 300, 2);
        list
    }
}
