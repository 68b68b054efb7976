// Trains a network from a props configuration and a data file, then checks it
// against the training set and a held-out exam set.
//
//   momentum-mlp [conf.props] [data.txt] [exam.txt] [model.json]
//
// A `.json` configuration is read as a serialized spec instead; its data file
// is only consulted when the spec carries no training set. The optional fourth
// argument saves the trained network as JSON.
use std::env;

use anyhow::Context;
use log::info;

use momentum_mlp::{evaluate, load_examples, load_spec, EvaluationReport, Network, NetworkSpec};

const DEFAULT_CONFIG: &str = "./conf.props";
const DEFAULT_DATA: &str = "./data.txt";
const DEFAULT_EXAM: &str = "./exam.txt";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config_path = arg_or(&args, 0, DEFAULT_CONFIG);
    let data_path = arg_or(&args, 1, DEFAULT_DATA);
    let exam_path = arg_or(&args, 2, DEFAULT_EXAM);

    info!("network initialization from {config_path} and {data_path}");
    let spec = if config_path.ends_with(".json") {
        let mut spec = NetworkSpec::load_json(config_path)
            .with_context(|| format!("loading {config_path}"))?;
        if spec.training_set.is_empty() {
            spec.training_set =
                load_examples(data_path).with_context(|| format!("loading {data_path}"))?;
        }
        spec
    } else {
        load_spec(config_path, data_path)
            .with_context(|| format!("loading {config_path} / {data_path}"))?
    };
    let exam = load_examples(exam_path).with_context(|| format!("loading {exam_path}"))?;

    let mut network = Network::new(spec).context("building network")?;

    info!("learning...");
    let outcome = network.learn(true)?;
    if !outcome.converged() {
        info!(
            "stopped after {} epochs with {} errors left",
            outcome.epochs, outcome.errors
        );
    }

    info!("testing...");
    let training_set = network.spec().training_set.clone();
    let report = evaluate(&mut network, &training_set)?;
    print_report(&report);

    info!("examing...");
    let report = evaluate(&mut network, &exam)?;
    print_report(&report);

    if let Some(model_path) = args.get(3) {
        network
            .save_json(model_path)
            .with_context(|| format!("saving model to {model_path}"))?;
        info!("model saved to {model_path}");
    }

    info!("done.");
    Ok(())
}

fn arg_or<'a>(args: &'a [String], index: usize, default: &'a str) -> &'a str {
    args.get(index).map(String::as_str).unwrap_or(default)
}

fn print_report(report: &EvaluationReport) {
    for result in &report.results {
        println!(
            "Actual: {} Expected: {}",
            result.actual_digits, result.expected_digits
        );
        println!(" {}", if result.passed { "PASSED" } else { "FAILED" });
    }
    println!("{}/{} passed", report.passed(), report.total());
}
