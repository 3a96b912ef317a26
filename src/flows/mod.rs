//! Flows - end-to-end workflows built from the core and backends
//!
//! - pipeline: collect, confirm, render, dispatch

pub mod pipeline;
