//! Administration contract for a Redis Cluster and a configurable fake.
//!
//! Control-plane code (operators, reconciliation loops) talks to the cluster
//! through [`admin::ClusterAdmin`]. [`admin::FakeAdmin`] implements the same
//! trait from per-operation outcome tables so that code can be exercised
//! without a live cluster.

pub mod admin;
pub mod config;
pub mod error;
pub mod types;
