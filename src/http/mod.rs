//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, ConnectInfo<SocketAddr>)
//!     → request.rs (PeerAddr seeded from ConnectInfo)
//!     → middleware (resolve + propagate client address)
//!     → echo handler (JSON response)
//! ```

pub mod request;
pub mod server;

pub use request::PeerAddr;
pub use server::{EchoResponse, HttpServer};
