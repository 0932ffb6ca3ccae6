//! HTTP transport used by model drivers.

pub mod http;

pub use http::{HttpTransport, TransportError};
