use std::fmt;

/// Structured Redis error kinds for programmatic matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedisErrorKind {
    /// Generic ERR
    Err,
    /// MOVED slot host:port
    Moved { slot: u16, addr: String },
    /// ASK slot host:port
    Ask { slot: u16, addr: String },
    /// CLUSTERDOWN
    ClusterDown,
    /// LOADING Redis is loading the dataset in memory
    Loading,
    /// READONLY You can't write against a read only replica
    ReadOnly,
    /// BUSY Redis is busy running a script
    Busy,
    /// TRYAGAIN
    TryAgain,
    /// Any other Redis error prefix
    Other(String),
}

impl RedisErrorKind {
    /// Parse from a Redis error message string (e.g. "CLUSTERDOWN Hash slot not served").
    pub fn from_error_msg(msg: &str) -> (Self, String) {
        if let Some(rest) = msg.strip_prefix("MOVED ") {
            return match parse_redirect(rest) {
                Some((slot, addr)) => (Self::Moved { slot, addr }, msg.to_string()),
                None => (Self::Other("MOVED".to_string()), msg.to_string()),
            };
        }
        if let Some(rest) = msg.strip_prefix("ASK ") {
            return match parse_redirect(rest) {
                Some((slot, addr)) => (Self::Ask { slot, addr }, msg.to_string()),
                None => (Self::Other("ASK".to_string()), msg.to_string()),
            };
        }

        let prefix = msg.split_whitespace().next().unwrap_or("UNKNOWN");
        let kind = match prefix {
            "ERR" => Self::Err,
            "CLUSTERDOWN" => Self::ClusterDown,
            "LOADING" => Self::Loading,
            "READONLY" => Self::ReadOnly,
            "BUSY" => Self::Busy,
            "TRYAGAIN" => Self::TryAgain,
            other => Self::Other(other.to_string()),
        };
        (kind, msg.to_string())
    }
}

/// Parse the `slot host:port` tail of a MOVED / ASK reply.
fn parse_redirect(rest: &str) -> Option<(u16, String)> {
    let (slot_str, addr) = rest.split_once(' ')?;
    let slot = slot_str.parse::<u16>().ok()?;
    Some((slot, addr.to_string()))
}

/// All error variants an administration client can report.
///
/// Errors are `Clone` so that a fake can hand back the same configured
/// failure on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    /// TCP / IO level errors (refused, reset, unreachable)
    Connection(String),
    /// Redis returned an error string with structured kind
    Redis {
        kind: RedisErrorKind,
        message: String,
    },
    /// Operation timed out
    Timeout(String),
    /// Cluster topology errors (inconsistent view, slot not covered, etc.)
    Cluster(String),
    /// Node-level errors (unknown node id, node not a primary, etc.)
    Node(String),
    /// A strict fake was asked about a key nobody configured.
    Unconfigured {
        operation: &'static str,
        key: String,
    },
}

impl AdminError {
    /// Create a Redis error from a raw error message, auto-parsing the kind.
    pub fn redis(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        let (kind, message) = RedisErrorKind::from_error_msg(&msg);
        Self::Redis { kind, message }
    }

    /// The Redis error kind, if this error came from a server reply.
    pub fn redis_kind(&self) -> Option<&RedisErrorKind> {
        match self {
            Self::Redis { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// True when a strict fake rejected an unconfigured key.
    pub fn is_unconfigured(&self) -> bool {
        matches!(self, Self::Unconfigured { .. })
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection(msg) => write!(f, "connection error: {msg}"),
            Self::Redis { message, .. } => write!(f, "redis error: {message}"),
            Self::Timeout(msg) => write!(f, "timeout: {msg}"),
            Self::Cluster(msg) => write!(f, "cluster error: {msg}"),
            Self::Node(msg) => write!(f, "node error: {msg}"),
            Self::Unconfigured { operation, key } => {
                write!(f, "no outcome configured for {operation} on {key:?}")
            }
        }
    }
}

impl std::error::Error for AdminError {}

pub type Result<T> = std::result::Result<T, AdminError>;

// ── Tests ──────────────────────────────────────────────────────────
