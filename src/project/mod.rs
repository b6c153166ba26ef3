//! Project management slice.
//!
//! A project is the owning side of the project/task relationship: it has a
//! case-insensitively unique name, a description, and an optional date
//! range. Deleting a project removes its tasks through the storage layer's
//! cascade contract. The module follows hexagonal architecture:
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
