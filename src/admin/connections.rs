//! Inert connection map for the fake administration client.

use crate::admin::AdminConnections;
use crate::error::Result;

/// Connection map that holds nothing and accepts every request.
#[derive(Debug, Default)]
pub struct FakeConnections;

impl FakeConnections {
    pub fn new() -> Self {
        Self
    }
}

impl AdminConnections for FakeConnections {
    fn add(&self, _addr: &str) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _addr: &str) {}

    fn reconnect(&self, _addr: &str) -> Result<()> {
        Ok(())
    }

    fn add_all(&self, _addrs: &[String]) {}

    fn replace_all(&self, _addrs: &[String]) {}

    fn reset(&self) {}

    fn clear_all(&self) {}

    fn addrs(&self) -> Vec<String> {
        Vec::new()
    }

    fn close(&self) {}
}

// ── Tests ──────────────────────────────────────────────────────────
