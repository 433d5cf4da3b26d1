//! Integration tests running the real reqwest transport against a local mock server.

mod integration;
