pub mod sigmoid;

pub use sigmoid::{derivative_from_output, sigmoid};
