//! tinyhttpd - Minimal HTTP/1.1 Server
//!
//! Core library for request parsing, method dispatch and response framing.

pub mod config;
pub mod content;
pub mod http;
pub mod server;
