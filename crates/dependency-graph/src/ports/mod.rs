//! Ports module for dependency graph resolution
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::DependencyGraphApi;
pub use outbound::{EntityMetadata, InsertOrderProvider};
