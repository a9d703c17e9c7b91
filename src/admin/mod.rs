pub mod connections;
pub mod fake;
pub mod registry;

pub use connections::FakeConnections;
pub use fake::FakeAdmin;
pub use registry::{LookupMode, RetTable};

use crate::config::AdminOptions;
use crate::error::Result;
use crate::types::{ClusterInfos, Node, ResetMode, SetSlotAction, Slot};

use std::future::Future;
use std::time::Duration;

/// Administrative interface to a Redis Cluster.
///
/// Implementations issue cluster-management commands to individual nodes,
/// addressed by "host:port" or, for replication changes, by [`Node`].
/// Operator and reconciliation code should depend on this trait so that
/// [`FakeAdmin`] can stand in for a live cluster.
pub trait ClusterAdmin: Send + Sync {
    /// Per-node connection management.
    type Connections: AdminConnections;

    /// Release every resource held by the client.
    fn close(&self);

    /// The connection map used by this client.
    fn connections(&self) -> &Self::Connections;

    /// Highest valid hash slot index.
    fn hash_max_slot(&self) -> Slot;

    /// `CLUSTER MEET` the node at `addr` into the cluster.
    fn attach_node_to_cluster(&self, addr: &str) -> impl Future<Output = Result<()>> + Send;

    /// Turn the node at `addr` into a single-node cluster owning every slot.
    fn init_cluster(&self, addr: &str) -> impl Future<Output = Result<()>> + Send;

    /// Collect the topology view of every known node.
    fn get_cluster_infos(&self) -> impl Future<Output = Result<ClusterInfos>> + Send;

    /// Collect the topology view of the nodes at `addrs` only.
    fn get_cluster_infos_selected(
        &self,
        addrs: &[String],
    ) -> impl Future<Output = Result<ClusterInfos>> + Send;

    /// `CLUSTER FAILOVER` on the replica at `addr`.
    fn start_failover(&self, addr: &str) -> impl Future<Output = Result<()>> + Send;

    /// Make every node forget the node with id `id`.
    fn forget_node(&self, id: &str) -> impl Future<Output = Result<()>> + Send;

    /// Make every node forget the node listening on `addr`.
    fn forget_node_by_addr(&self, addr: &str) -> impl Future<Output = Result<()>> + Send;

    /// `CLUSTER SETSLOT <slot> <action> <node_id>` for each of `slots` on `addr`.
    fn set_slots(
        &self,
        addr: &str,
        action: SetSlotAction,
        slots: &[Slot],
        node_id: &str,
    ) -> impl Future<Output = Result<()>> + Send;

    /// `CLUSTER ADDSLOTS` on `addr`.
    fn add_slots(&self, addr: &str, slots: &[Slot]) -> impl Future<Output = Result<()>> + Send;

    /// `CLUSTER DELSLOTS` on `addr`.
    fn del_slots(&self, addr: &str, slots: &[Slot]) -> impl Future<Output = Result<()>> + Send;

    /// Keys stored in `slot` on `addr`, fetched `batch` at a time.
    ///
    /// With `limit` set, only the first batch is returned.
    fn get_keys_in_slot(
        &self,
        addr: &str,
        slot: Slot,
        batch: usize,
        limit: bool,
    ) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// `CLUSTER COUNTKEYSINSLOT` on `addr`.
    fn count_keys_in_slot(&self, addr: &str, slot: Slot)
        -> impl Future<Output = Result<i64>> + Send;

    /// `MIGRATE` the keys of `slots` from `addr` to `dest`.
    ///
    /// Returns the number of keys moved.
    fn migrate_keys(
        &self,
        addr: &str,
        dest: &Node,
        slots: &[Slot],
        batch: usize,
        timeout: Duration,
        replace: bool,
    ) -> impl Future<Output = Result<usize>> + Send;

    /// `CLUSTER REPLICATE` `replica` onto `primary`.
    fn attach_replica_to_primary(
        &self,
        replica: &Node,
        primary: &Node,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Detach `replica` from its primary, turning it into an empty primary.
    fn detach_replica(&self, replica: &Node) -> impl Future<Output = Result<()>> + Send;

    /// `FLUSHALL` followed by `CLUSTER RESET <mode>` on `addr`.
    fn flush_and_reset(&self, addr: &str, mode: ResetMode)
        -> impl Future<Output = Result<()>> + Send;

    /// `FLUSHALL` on every primary.
    fn flush_all(&self) -> impl Future<Output = ()> + Send;

    /// Replace the connection map with connections to `addrs`.
    fn rebuild_connection_map(
        &self,
        addrs: &[String],
        options: &AdminOptions,
    ) -> impl Future<Output = ()> + Send;
}

/// Map of open connections, one per cluster node.
pub trait AdminConnections: Send + Sync {
    /// Connect to `addr` and keep the connection.
    fn add(&self, addr: &str) -> Result<()>;

    /// Drop the connection to `addr`.
    fn remove(&self, addr: &str);

    /// Re-establish the connection to `addr`.
    fn reconnect(&self, addr: &str) -> Result<()>;

    /// Connect to every address in `addrs`.
    fn add_all(&self, addrs: &[String]);

    /// Drop every connection not in `addrs` and connect to the rest.
    fn replace_all(&self, addrs: &[String]);

    /// Close and re-open every connection.
    fn reset(&self);

    /// Drop every connection.
    fn clear_all(&self);

    /// Addresses of the currently held connections.
    fn addrs(&self) -> Vec<String>;

    /// Close every held connection.
    fn close(&self);
}
