//! Outbound adapters connecting domain ports to external systems.

pub mod persistence;
