pub mod dataset;
pub mod eval_config;
pub mod eval_report;
pub mod evaluator;

pub use dataset::{Dataset, Sample};
pub use eval_config::EvalConfig;
pub use eval_report::{EvalReport, SampleResult};
pub use evaluator::{evaluate, run};
