//! Integration test modules.

mod backup_roundtrip_test;
mod program_flow_test;
