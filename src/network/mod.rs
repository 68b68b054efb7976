pub mod network;
pub mod spec;

pub use network::Network;
pub use spec::{Example, NetworkSpec};
