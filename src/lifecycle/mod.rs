//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Apply CLI flags → Init logging → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C → Shutdown::trigger → server drains and exits
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
