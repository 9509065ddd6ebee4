//! HTTP protocol implementation.
//!
//! This module implements a deliberately small subset of HTTP/1.1: one
//! request per connection, request line only, no `Content-Length`, and the
//! connection is closed after the response.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: Per-connection state machine (receive, dispatch, respond, close)
//! - **`parser`**: Parses the request line out of the received bytes
//! - **`request`**: HTTP request representation
//! - **`dispatcher`**: Maps the method token to a handler; unknown methods get 501
//! - **`handlers`**: GET, OPTIONS and Not Implemented handlers
//! - **`response`**: Status catalog, base header table and response builder
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │  Receiving  │ ← Single read of at most `read_buffer_size` bytes
//!        └──────┬──────┘
//!               │ Bytes received
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Parse request line, run handler
//!        └──────┬───────────┘
//!               ├─ Unparsable → Closed (nothing written)
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │   Responding     │ ← Send response; write errors are logged
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tinyhttpd::content::FsResolver;
//! use tinyhttpd::http::connection::Connection;
//! use tinyhttpd::http::dispatcher::Dispatcher;
//! use tinyhttpd::http::response::HeaderTable;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8888").await?;
//!     let dispatcher = Arc::new(Dispatcher::new(
//!         HeaderTable::default(),
//!         Arc::new(FsResolver::new("public")),
//!         "index.html",
//!     ));
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let mut conn = Connection::new(socket, dispatcher.clone());
//!         if let Err(e) = conn.run().await {
//!             eprintln!("Connection error: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod connection;
pub mod dispatcher;
pub mod handlers;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
