//! HTTP transport to the remote completion provider.

pub mod http;

pub use http::{HttpTransport, TransportError};
