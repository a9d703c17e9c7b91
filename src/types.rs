//! Cluster value types carried across the administration contract.
//!
//! These describe the topology a cluster node reports about itself and its
//! peers: nodes, their roles, the hash slots they own, and an aggregated
//! per-node view of the whole cluster.

use crate::config::split_addr;
use crate::error::Result;

use std::collections::HashMap;
use std::fmt;

/// A hash slot index.
pub type Slot = u16;

/// A list of hash slots, in no particular order.
pub type SlotSlice = Vec<Slot>;

/// Number of hash slots in a Redis Cluster.
pub const SLOT_COUNT: u16 = 16384;

/// Highest slot index (slots are numbered `0..=16383`).
pub const DEFAULT_HASH_MAX_SLOT: Slot = SLOT_COUNT - 1;

// ── Roles and actions ─────────────────────────────────────────────

/// Role of a node as reported by `CLUSTER NODES`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NodeRole {
    #[default]
    Unset,
    Primary,
    Replica,
    Handshake,
}

/// Sub-command of `CLUSTER SETSLOT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetSlotAction {
    Importing,
    Migrating,
    Stable,
    Node,
}

impl SetSlotAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Importing => "IMPORTING",
            Self::Migrating => "MIGRATING",
            Self::Stable => "STABLE",
            Self::Node => "NODE",
        }
    }
}

impl fmt::Display for SetSlotAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mode of `CLUSTER RESET`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResetMode {
    #[default]
    Soft,
    Hard,
}

impl ResetMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Soft => "SOFT",
            Self::Hard => "HARD",
        }
    }
}

impl fmt::Display for ResetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Node ──────────────────────────────────────────────────────────

/// A single cluster member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// 40-character cluster node id.
    pub id: String,
    pub ip: String,
    pub port: u16,
    pub role: NodeRole,
    /// Id of the primary this node replicates, if it is a replica.
    pub primary_referent: Option<String>,
    /// Slots served by this node.
    pub slots: SlotSlice,
    /// Slots being migrated away, mapped to the destination node id.
    pub migrating_slots: HashMap<Slot, String>,
    /// Slots being imported, mapped to the source node id.
    pub importing_slots: HashMap<Slot, String>,
}

impl Node {
    /// Create a node with no role and no slots.
    pub fn new(id: impl Into<String>, ip: impl Into<String>, port: u16) -> Self {
        Self {
            id: id.into(),
            ip: ip.into(),
            port,
            ..Self::default()
        }
    }

    /// Create a node from a `host:port` address.
    pub fn from_addr(id: impl Into<String>, addr: &str) -> Result<Self> {
        let (ip, port) = split_addr(addr)?;
        Ok(Self::new(id, ip, port))
    }

    /// Set the role (builder style).
    pub fn with_role(mut self, role: NodeRole) -> Self {
        self.role = role;
        self
    }

    /// Set the served slots (builder style).
    pub fn with_slots(mut self, slots: impl IntoIterator<Item = Slot>) -> Self {
        self.slots = slots.into_iter().collect();
        self
    }

    /// Mark this node as a replica of `primary_id` (builder style).
    pub fn replica_of(mut self, primary_id: impl Into<String>) -> Self {
        self.role = NodeRole::Replica;
        self.primary_referent = Some(primary_id.into());
        self
    }

    /// Return the address as "host:port", bracketing IPv6 hosts.
    pub fn addr(&self) -> String {
        if self.ip.contains(':') {
            format!("[{}]:{}", self.ip, self.port)
        } else {
            format!("{}:{}", self.ip, self.port)
        }
    }

    pub fn is_replica(&self) -> bool {
        self.role == NodeRole::Replica
    }
}

// ── Nodes ─────────────────────────────────────────────────────────

/// An ordered collection of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nodes(pub Vec<Node>);

impl Nodes {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.0.iter()
    }
}

impl FromIterator<Node> for Nodes {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Nodes {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ── Cluster view ──────────────────────────────────────────────────

/// What one node reports: itself plus the peers it knows about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeInfos {
    pub node: Node,
    pub friends: Nodes,
}

/// Agreement level between the per-node views of a [`ClusterInfos`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClusterInfosStatus {
    /// Nothing collected yet.
    #[default]
    Unset,
    /// Some nodes could not be queried.
    Partial,
    /// All nodes answered but disagree.
    Inconsistent,
    /// All nodes answered and agree.
    Consistent,
}

/// Topology snapshot: the view of every queried node, keyed by "host:port".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterInfos {
    pub infos: HashMap<String, NodeInfos>,
    pub status: ClusterInfosStatus,
}

impl ClusterInfos {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the view reported by the node at `addr`.
    pub fn insert(&mut self, addr: impl Into<String>, infos: NodeInfos) {
        self.infos.insert(addr.into(), infos);
    }

    pub fn get(&self, addr: &str) -> Option<&NodeInfos> {
        self.infos.get(addr)
    }
}

// ── Tests ──────────────────────────────────────────────────────────
