//! Administration client options and fake construction settings.

use crate::admin::registry::LookupMode;
use crate::error::{AdminError, Result};
use crate::types::{Slot, DEFAULT_HASH_MAX_SLOT};

/// Default Redis port.
pub const DEFAULT_PORT: u16 = 6379;
/// Default connect timeout in milliseconds.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 2000;
/// Default read timeout in milliseconds.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 30_000;

/// Options used when (re)building the per-node connection map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminOptions {
    /// Connect timeout in milliseconds.
    pub connect_timeout_ms: u64,
    /// Read/response timeout in milliseconds (0 = no timeout).
    pub read_timeout_ms: u64,
    /// Name announced with `CLIENT SETNAME`.
    pub client_name: Option<String>,
}

impl Default for AdminOptions {
    fn default() -> Self {
        Self {
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            client_name: None,
        }
    }
}

impl AdminOptions {
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self
    }
}

/// Construction-time settings of [`FakeAdmin`](crate::admin::fake::FakeAdmin).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeAdminConfig {
    /// Value reported as the highest slot index.
    pub hash_max_slot: Slot,
    /// What a keyed lookup does when no outcome was configured.
    pub lookup_mode: LookupMode,
}

impl Default for FakeAdminConfig {
    fn default() -> Self {
        Self {
            hash_max_slot: DEFAULT_HASH_MAX_SLOT,
            lookup_mode: LookupMode::Lenient,
        }
    }
}

impl FakeAdminConfig {
    /// Default settings with strict lookups.
    pub fn strict() -> Self {
        Self {
            lookup_mode: LookupMode::Strict,
            ..Self::default()
        }
    }
}

// ── Address parsing ───────────────────────────────────────────────

/// Split `host[:port]` or `[ipv6]:port` into host and port.
///
/// A missing port falls back to [`DEFAULT_PORT`].
pub fn split_addr(s: &str) -> Result<(String, u16)> {
    let (host, port) = if let Some(rest) = s.strip_prefix('[') {
        let close = rest
            .find(']')
            .ok_or_else(|| AdminError::Node(format!("unclosed IPv6 bracket: {s}")))?;
        let host = &rest[..close];
        let port = match rest[close + 1..].strip_prefix(':') {
            Some(p) => parse_port(p)?,
            None => DEFAULT_PORT,
        };
        (host.to_string(), port)
    } else if let Some((h, p)) = s.rsplit_once(':') {
        match p.parse::<u16>() {
            Ok(port) => (h.to_string(), port),
            // Bare IPv6 without brackets
            Err(_) if h.contains(':') => (s.to_string(), DEFAULT_PORT),
            Err(_) => return Err(AdminError::Node(format!("invalid port: {p}"))),
        }
    } else {
        (s.to_string(), DEFAULT_PORT)
    };

    if host.is_empty() {
        return Err(AdminError::Node(format!("missing host in address: {s:?}")));
    }
    Ok((host, port))
}

fn parse_port(p: &str) -> Result<u16> {
    p.parse()
        .map_err(|_| AdminError::Node(format!("invalid port: {p}")))
}

// ── Tests ──────────────────────────────────────────────────────────
