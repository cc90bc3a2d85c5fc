//! Integration tests for the catalog HTTP API.
//!
//! The router is exercised end to end over in-memory stores, so no
//! database is required.


mod services_test;
mod validation_test;
mod versions_test;
