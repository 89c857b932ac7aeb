use tracing::{debug, info};

use crate::activation::activation::Activation;
use crate::error::{NetError, Result};
use crate::eval::dataset::Dataset;
use crate::eval::eval_config::EvalConfig;
use crate::eval::eval_report::{EvalReport, SampleResult};
use crate::network::network::Network;

/// Runs every sample of `dataset` through `network` and scores each output
/// against its target with MSE.
///
/// Fails on the first sample whose input or target length does not fit the
/// network; no partial report is returned.
pub fn evaluate<A: Activation + ?Sized>(
    network: &Network,
    dataset: &Dataset,
    activation: &A,
) -> Result<EvalReport> {
    if dataset.is_empty() {
        return Err(NetError::InvalidDimension { what: "dataset samples", value: 0 });
    }

    let mut samples = Vec::with_capacity(dataset.len());
    for (i, sample) in dataset.iter().enumerate() {
        let output = network.forward(&sample.input, activation)?;
        let loss = network.loss(&output, &sample.target)?;
        debug!(sample = i, ?output, loss, "evaluated");
        samples.push(SampleResult {
            input: sample.input.clone(),
            target: sample.target.clone(),
            output,
            loss,
        });
    }

    Ok(EvalReport::from_samples(samples))
}

/// Builds and initializes the configured network, then evaluates it on the
/// configured dataset.
pub fn run(config: &EvalConfig) -> Result<EvalReport> {
    let network = config.network.build_network()?;
    let report = evaluate(&network, &config.dataset, &config.network.activation)?;
    info!(
        network = %config.network.name,
        samples = report.samples.len(),
        mean_loss = report.mean_loss,
        "evaluation complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::{soft_step, ActivationFunction};
    use crate::eval::dataset::Sample;

    #[test]
    fn zero_network_scores_quarter_on_xor() {
        let mut net = Network::build(&[2, 3, 1]).unwrap();
        net.initialize_zeros();
        let report = evaluate(&net, &Dataset::xor(), &soft_step).unwrap();
        assert!(report.samples.iter().all(|s| s.output == vec![0.5]));
        assert!(report.samples.iter().all(|s| s.loss == 0.25));
        assert_eq!(report.mean_loss, 0.25);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let mut net = Network::build(&[2, 1]).unwrap();
        net.initialize_zeros();
        assert!(matches!(
            evaluate(&net, &Dataset::default(), &soft_step),
            Err(NetError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn mismatched_target_is_rejected() {
        let mut net = Network::build(&[2, 1]).unwrap();
        net.initialize_zeros();
        let data = Dataset { samples: vec![Sample::new(vec![0.0, 1.0], vec![1.0, 0.0])] };
        assert_eq!(
            evaluate(&net, &data, &ActivationFunction::SoftStep).unwrap_err(),
            NetError::DimensionMismatch { expected: 1, got: 2 }
        );
    }

    #[test]
    fn seeded_run_is_reproducible() {
        let mut cfg = EvalConfig::xor();
        cfg.network.seed = Some(2024);
        let a = run(&cfg).unwrap();
        let b = run(&cfg).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.samples.len(), 4);
        assert!(a.mean_loss > 0.0 && a.mean_loss < 1.0);
    }
}
