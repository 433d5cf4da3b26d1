//! Integration tests with mock HTTP server

pub mod mock_server;
pub mod resolution;
pub mod tasks;
pub mod error_handling;
