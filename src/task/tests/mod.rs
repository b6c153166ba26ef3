//! Unit tests for the task slice.
