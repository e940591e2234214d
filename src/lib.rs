//! Layout Sessions - persistence service for named site-layout sessions
//!
//! Each session wraps an opaque JSON configuration blob. The crate exposes
//! create/list/get/delete over HTTP and stores sessions in SQLite.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
