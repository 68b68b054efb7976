pub mod error;
pub mod examples;
pub mod props;

pub use error::LoadError;
pub use examples::{load_examples, parse_examples};
pub use props::{load_spec, parse_props};
