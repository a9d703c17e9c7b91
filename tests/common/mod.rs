//! Shared helpers for integration tests.
//!
//! The helpers are written against [`ClusterAdmin`] only, the way operator
//! code is, so each test exercises the fake through the same contract a live
//! client would serve.

#![allow(dead_code)]

use redis_cluster_admin::admin::ClusterAdmin;
use redis_cluster_admin::error::Result;
use redis_cluster_admin::types::{
    ClusterInfos, ClusterInfosStatus, Node, NodeInfos, NodeRole, Nodes, ResetMode, SetSlotAction,
    Slot,
};

use std::time::Duration;

pub const BATCH: usize = 100;
pub const MIGRATE_TIMEOUT: Duration = Duration::from_secs(5);

pub fn primary(id: &str, ip: &str, slots: std::ops::RangeInclusive<Slot>) -> Node {
    Node::new(id, ip, 6379)
        .with_role(NodeRole::Primary)
        .with_slots(slots)
}

pub fn replica(id: &str, ip: &str, primary_id: &str) -> Node {
    Node::new(id, ip, 6379).replica_of(primary_id)
}

/// A consistent snapshot in which every node reports the others as friends.
pub fn snapshot(nodes: &[Node]) -> ClusterInfos {
    let mut infos = ClusterInfos::new();
    for node in nodes {
        let friends: Nodes = nodes.iter().filter(|n| n.id != node.id).cloned().collect();
        infos.insert(
            node.addr(),
            NodeInfos {
                node: node.clone(),
                friends,
            },
        );
    }
    infos.status = ClusterInfosStatus::Consistent;
    infos
}

/// Attach every address in `desired` that the cluster does not know yet.
///
/// Returns the addresses that were attached.
pub async fn join_missing_nodes<A: ClusterAdmin>(
    admin: &A,
    desired: &[String],
) -> Result<Vec<String>> {
    let infos = admin.get_cluster_infos().await?;
    let mut attached = Vec::new();
    for addr in desired {
        if infos.get(addr).is_some() {
            continue;
        }
        admin.attach_node_to_cluster(addr).await?;
        attached.push(addr.clone());
    }
    Ok(attached)
}

/// Move `slot` from `src` to `dest`, returning the number of keys migrated.
pub async fn migrate_slot<A: ClusterAdmin>(
    admin: &A,
    src: &Node,
    dest: &Node,
    slot: Slot,
) -> Result<usize> {
    let src_addr = src.addr();
    let dest_addr = dest.addr();
    admin
        .set_slots(&dest_addr, SetSlotAction::Importing, &[slot], &src.id)
        .await?;
    admin
        .set_slots(&src_addr, SetSlotAction::Migrating, &[slot], &dest.id)
        .await?;

    let pending = admin.count_keys_in_slot(&src_addr, slot).await?;
    let moved = if pending > 0 {
        admin
            .migrate_keys(&src_addr, dest, &[slot], BATCH, MIGRATE_TIMEOUT, false)
            .await?
    } else {
        0
    };

    admin
        .set_slots(&src_addr, SetSlotAction::Node, &[slot], &dest.id)
        .await?;
    admin
        .set_slots(&dest_addr, SetSlotAction::Node, &[slot], &dest.id)
        .await?;
    Ok(moved)
}

/// Promote `replica` and drop the failed `primary` from the cluster.
pub async fn replace_failed_primary<A: ClusterAdmin>(
    admin: &A,
    replica: &Node,
    primary: &Node,
) -> Result<()> {
    admin.start_failover(&replica.addr()).await?;
    admin.forget_node(&primary.id).await
}

/// Remove a node: detach it if it replicates, then reset it and forget it.
pub async fn remove_node<A: ClusterAdmin>(admin: &A, node: &Node) -> Result<()> {
    if node.is_replica() {
        admin.detach_replica(node).await?;
    }
    admin
        .flush_and_reset(&node.addr(), ResetMode::Hard)
        .await?;
    admin.forget_node_by_addr(&node.addr()).await
}

/// Every slot index from 0 through the client's max slot.
pub fn all_slots<A: ClusterAdmin>(admin: &A) -> Vec<Slot> {
    (0..=admin.hash_max_slot()).collect()
}
