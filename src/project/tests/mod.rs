//! Unit tests for the project slice.
