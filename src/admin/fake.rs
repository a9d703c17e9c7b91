//! Fake administration client.
//!
//! [`FakeAdmin`] implements [`ClusterAdmin`] without touching the network.
//! Every keyed operation resolves its answer from a public [`RetTable`]
//! filled in by the test before the code under test runs:
//!
//! ```
//! use redis_cluster_admin::admin::{ClusterAdmin, FakeAdmin};
//! use redis_cluster_admin::error::AdminError;
//!
//! let mut admin = FakeAdmin::new();
//! admin
//!     .attach_node_to_cluster_ret
//!     .set_err("10.0.0.1:6379", AdminError::Connection("refused".into()));
//! admin.count_keys_in_slot_ret.set_ok("10.0.0.1:6379", 42);
//! assert_eq!(admin.hash_max_slot(), 16383);
//! ```
//!
//! Keys with no entry resolve to a zero-effect success unless the fake was
//! built with [`LookupMode::Strict`]. Arguments other than the lookup key
//! (slots, batch sizes, timeouts, flags) never influence the answer.

use crate::admin::connections::FakeConnections;
use crate::admin::registry::{LookupMode, RetTable};
use crate::admin::ClusterAdmin;
use crate::config::{AdminOptions, FakeAdminConfig};
use crate::error::Result;
use crate::types::{ClusterInfos, Node, ResetMode, SetSlotAction, Slot};

use std::time::Duration;
use tracing::debug;

/// Test double for a cluster administration client.
///
/// Each `*_ret` table is keyed by node address, except
/// `attach_replica_to_primary_ret` (keyed by the primary's id) and
/// `detach_replica_ret` (keyed by the replica's id).
#[derive(Debug)]
pub struct FakeAdmin {
    /// Value returned by `hash_max_slot`.
    pub hash_max_slot: Slot,
    /// Behavior for keys with no configured outcome.
    pub lookup_mode: LookupMode,
    pub init_cluster_ret: RetTable<()>,
    /// Returned by `get_cluster_infos` for every caller.
    pub cluster_infos_ret: Result<ClusterInfos>,
    /// Returned by `get_cluster_infos_selected` for every caller.
    pub cluster_infos_selected_ret: Result<ClusterInfos>,
    pub attach_node_to_cluster_ret: RetTable<()>,
    pub start_failover_ret: RetTable<()>,
    /// Shared by `forget_node` and `forget_node_by_addr`.
    pub forget_node_ret: RetTable<()>,
    pub set_slots_ret: RetTable<()>,
    pub add_slots_ret: RetTable<()>,
    pub del_slots_ret: RetTable<()>,
    pub get_keys_in_slot_ret: RetTable<Vec<String>>,
    pub count_keys_in_slot_ret: RetTable<i64>,
    pub migrate_keys_ret: RetTable<usize>,
    pub attach_replica_to_primary_ret: RetTable<()>,
    pub detach_replica_ret: RetTable<()>,
    pub flush_and_reset_ret: RetTable<()>,
    cnx: FakeConnections,
}

impl FakeAdmin {
    /// Create a fake with empty tables, lenient lookups and 16383 as max slot.
    pub fn new() -> Self {
        Self::with_config(FakeAdminConfig::default())
    }

    /// Create a fake with empty tables and the given settings.
    pub fn with_config(config: FakeAdminConfig) -> Self {
        Self {
            hash_max_slot: config.hash_max_slot,
            lookup_mode: config.lookup_mode,
            init_cluster_ret: RetTable::new("init_cluster"),
            cluster_infos_ret: Ok(ClusterInfos::default()),
            cluster_infos_selected_ret: Ok(ClusterInfos::default()),
            attach_node_to_cluster_ret: RetTable::new("attach_node_to_cluster"),
            start_failover_ret: RetTable::new("start_failover"),
            forget_node_ret: RetTable::new("forget_node"),
            set_slots_ret: RetTable::new("set_slots"),
            add_slots_ret: RetTable::new("add_slots"),
            del_slots_ret: RetTable::new("del_slots"),
            get_keys_in_slot_ret: RetTable::new("get_keys_in_slot"),
            count_keys_in_slot_ret: RetTable::new("count_keys_in_slot"),
            migrate_keys_ret: RetTable::new("migrate_keys"),
            attach_replica_to_primary_ret: RetTable::new("attach_replica_to_primary"),
            detach_replica_ret: RetTable::new("detach_replica"),
            flush_and_reset_ret: RetTable::new("flush_and_reset"),
            cnx: FakeConnections::new(),
        }
    }
}

impl Default for FakeAdmin {
    fn default() -> Self {
        Self::new()
    }
}

impl ClusterAdmin for FakeAdmin {
    type Connections = FakeConnections;

    fn close(&self) {
        debug!("fake admin closed");
    }

    fn connections(&self) -> &FakeConnections {
        &self.cnx
    }

    fn hash_max_slot(&self) -> Slot {
        self.hash_max_slot
    }

    async fn attach_node_to_cluster(&self, addr: &str) -> Result<()> {
        self.attach_node_to_cluster_ret.lookup(addr, self.lookup_mode)
    }

    async fn init_cluster(&self, addr: &str) -> Result<()> {
        self.init_cluster_ret.lookup(addr, self.lookup_mode)
    }

    async fn get_cluster_infos(&self) -> Result<ClusterInfos> {
        self.cluster_infos_ret.clone()
    }

    async fn get_cluster_infos_selected(&self, _addrs: &[String]) -> Result<ClusterInfos> {
        self.cluster_infos_selected_ret.clone()
    }

    async fn start_failover(&self, addr: &str) -> Result<()> {
        self.start_failover_ret.lookup(addr, self.lookup_mode)
    }

    async fn forget_node(&self, id: &str) -> Result<()> {
        self.forget_node_ret.lookup(id, self.lookup_mode)
    }

    async fn forget_node_by_addr(&self, addr: &str) -> Result<()> {
        self.forget_node_ret.lookup(addr, self.lookup_mode)
    }

    async fn set_slots(
        &self,
        addr: &str,
        _action: SetSlotAction,
        _slots: &[Slot],
        _node_id: &str,
    ) -> Result<()> {
        self.set_slots_ret.lookup(addr, self.lookup_mode)
    }

    async fn add_slots(&self, addr: &str, _slots: &[Slot]) -> Result<()> {
        self.add_slots_ret.lookup(addr, self.lookup_mode)
    }

    async fn del_slots(&self, addr: &str, _slots: &[Slot]) -> Result<()> {
        self.del_slots_ret.lookup(addr, self.lookup_mode)
    }

    async fn get_keys_in_slot(
        &self,
        addr: &str,
        _slot: Slot,
        _batch: usize,
        _limit: bool,
    ) -> Result<Vec<String>> {
        self.get_keys_in_slot_ret.lookup(addr, self.lookup_mode)
    }

    async fn count_keys_in_slot(&self, addr: &str, _slot: Slot) -> Result<i64> {
        self.count_keys_in_slot_ret.lookup(addr, self.lookup_mode)
    }

    async fn migrate_keys(
        &self,
        addr: &str,
        _dest: &Node,
        _slots: &[Slot],
        _batch: usize,
        _timeout: Duration,
        _replace: bool,
    ) -> Result<usize> {
        self.migrate_keys_ret.lookup(addr, self.lookup_mode)
    }

    async fn attach_replica_to_primary(&self, _replica: &Node, primary: &Node) -> Result<()> {
        self.attach_replica_to_primary_ret
            .lookup(&primary.id, self.lookup_mode)
    }

    async fn detach_replica(&self, replica: &Node) -> Result<()> {
        self.detach_replica_ret.lookup(&replica.id, self.lookup_mode)
    }

    async fn flush_and_reset(&self, addr: &str, _mode: ResetMode) -> Result<()> {
        self.flush_and_reset_ret.lookup(addr, self.lookup_mode)
    }

    async fn flush_all(&self) {
        debug!("fake admin flush_all");
    }

    async fn rebuild_connection_map(&self, addrs: &[String], _options: &AdminOptions) {
        debug!(nodes = addrs.len(), "fake admin rebuild_connection_map");
    }
}

// ── Tests ──────────────────────────────────────────────────────────
