pub mod advisory;
#[cfg(feature = "api")]
pub mod client;
pub mod error;
pub mod fallback;
pub mod location;
pub mod selector;
pub mod sequence;
pub mod session;
pub mod wire;
pub mod zone;
