use rand::rngs::StdRng;
use rand::SeedableRng;
use xornet::{evaluate, ActivationFunction, Dataset, Network};

fn main() -> xornet::Result<()> {
    tracing_subscriber::fmt::init();

    let mut network = Network::build(&[2, 3, 1])?;
    let data = Dataset::xor();

    // All-zero parameters: every row yields soft_step(0) = 0.5.
    network.initialize_zeros();
    let report = evaluate(&network, &data, &ActivationFunction::SoftStep)?;
    println!("zero init: mean MSE = {:.6}", report.mean_loss);

    for seed in [1, 2, 3] {
        network.initialize(&mut StdRng::seed_from_u64(seed));
        let report = evaluate(&network, &data, &ActivationFunction::SoftStep)?;
        println!("seed {seed}: mean MSE = {:.6}", report.mean_loss);
        for sample in &report.samples {
            println!("  Input: {:?} -> Output: {:.4}", sample.input, sample.output[0]);
        }
    }

    Ok(())
}
