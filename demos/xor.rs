use anyhow::Context;
use momentum_mlp::{evaluate, load_examples, load_spec, Network};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/xor");
    let spec = load_spec(&format!("{dir}/conf.props"), &format!("{dir}/data.txt"))
        .context("loading xor configuration")?;
    let exam = load_examples(&format!("{dir}/exam.txt"))?;

    let mut network = Network::new(spec)?;
    let outcome = network.learn(false)?;
    println!("Finished: {} errors after {} epochs", outcome.errors, outcome.epochs);

    for example in &network.spec().training_set.clone() {
        let output = network.execute(&example.input)?;
        println!("Input: {:?} -> Output: {:.4}", example.input, output[0]);
    }

    let report = evaluate(&mut network, &exam)?;
    println!("Exam: {}/{} passed", report.passed(), report.total());
    Ok(())
}
