//! Labeled-example files.
//!
//! Format: non-blank lines alternate between an input line and its expected
//! output line, each a whitespace-separated list of reals.
//!
//! ```text
//! 0 1
//! 1
//! 1 1
//! 0
//! ```
use log::info;

use crate::loader::error::{read_file, LoadError};
use crate::network::spec::Example;

/// Parses example text into `(input, expected)` pairs, in file order.
pub fn parse_examples(text: &str) -> Result<Vec<Example>, LoadError> {
    let mut examples = Vec::new();
    let mut pending: Option<Vec<f64>> = None;
    let mut last_line = 0;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        last_line = line_no;

        let values = parse_reals(line, line_no)?;
        match pending.take() {
            None => pending = Some(values),
            Some(input) => examples.push(Example::new(input, values)),
        }
    }

    if pending.is_some() {
        return Err(LoadError::parse(
            last_line,
            "input line has no expected-output line after it",
        ));
    }

    Ok(examples)
}

/// Reads and parses an example file.
pub fn load_examples(path: &str) -> Result<Vec<Example>, LoadError> {
    let examples = parse_examples(&read_file(path)?).map_err(|e| e.in_file(path))?;
    info!("loaded {} examples from {path}", examples.len());
    Ok(examples)
}

/// Whitespace-separated reals.
pub(crate) fn parse_reals(text: &str, line: usize) -> Result<Vec<f64>, LoadError> {
    text.split_whitespace()
        .map(|tok| {
            tok.parse::<f64>()
                .map_err(|_| LoadError::parse(line, format!("`{tok}` is not a number")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_alternating_lines() {
        let examples = parse_examples("0 1\n1\n\n1 1\n0\n").unwrap();

        assert_eq!(
            examples,
            vec![
                Example::new(vec![0.0, 1.0], vec![1.0]),
                Example::new(vec![1.0, 1.0], vec![0.0]),
            ]
        );
    }

    #[test]
    fn tolerates_repeated_spaces_and_decimals() {
        let examples = parse_examples("  0.25   -1e-1 \n0.5\n").unwrap();
        assert_eq!(examples[0].input, vec![0.25, -0.1]);
    }

    #[test]
    fn rejects_dangling_input_line() {
        let err = parse_examples("0 1\n1\n1 1\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 3, .. }));
    }

    #[test]
    fn reports_line_of_bad_number() {
        let err = parse_examples("0 1\nx\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: `x` is not a number");
    }

    #[test]
    fn file_errors_name_the_file() {
        let path =
            std::env::temp_dir().join(format!("momentum-mlp-bad-{}.txt", std::process::id()));
        let path = path.to_str().unwrap().to_string();
        std::fs::write(&path, "0 1\n1\n0 x\n").unwrap();

        let err = load_examples(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(err.to_string(), format!("{path}:3: `x` is not a number"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_examples("/nonexistent/momentum-mlp/data.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
