//! Chantier: project and task tracking backend.
//!
//! This crate provides the core logic for a small project/task tracker:
//! validated creation and full-replace updates of projects and their tasks,
//! lookup, and deletion, with entity-to-DTO mapping at the service boundary.
//!
//! # Architecture
//!
//! Chantier follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! HTTP routing and request dispatch are left to the embedding
//! application; services expose wire-shaped request/response types and a
//! status-mappable [`error::ErrorKind`] so a transport layer stays thin.
//!
//! # Modules
//!
//! - [`project`]: Project CRUD with name uniqueness and date-range rules
//! - [`task`]: Task CRUD, owned by a project, with due-date and status rules

pub mod error;
pub mod project;
pub mod task;
