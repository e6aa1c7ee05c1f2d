//! Unit tests for task lifecycle management.
