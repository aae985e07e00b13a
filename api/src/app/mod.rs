//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports; the transfer fee is
//! a pure calculation with no port access.

pub mod roster_service;
pub mod transfer_engine;
pub mod transfer_fee;

pub use roster_service::RosterService;
pub use transfer_engine::{TransferEngine, TransferOutcome};
