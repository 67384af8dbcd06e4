//! Top-level facade crate for weblab.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use weblab_core::*;
}

pub mod server {
    pub use weblab_server::*;
}
