pub mod evaluate;

pub use evaluate::{evaluate, round_to_digits, Evaluation, EvaluationReport};
