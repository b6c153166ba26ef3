//! Task management slice.
//!
//! A task always belongs to exactly one project; its existence is
//! contingent on that project. The service validates fields in a fixed
//! order, then verifies the owning project exists before any mutation.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Validation and mapping services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
