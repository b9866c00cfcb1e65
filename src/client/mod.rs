//! Session client facade for the Head Start inference service.
//!
//! Keep the public surface small and predictable. Implementation details are
//! split into submodules under `src/client/`.

pub mod builder;
pub mod core;

pub use builder::HeadStartClientBuilder;
pub use core::{BatchReceipt, HeadStartClient};
