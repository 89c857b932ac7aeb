pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod eval;

// Convenience re-exports
pub use error::{NetError, Result};
pub use math::matrix::Matrix;
pub use activation::activation::{Activation, ActivationFunction, soft_plus, soft_step};
pub use layers::dense::Layer;
pub use network::network::{Network, NetworkState};
pub use network::spec::NetworkSpec;
pub use loss::mse::MseLoss;
pub use eval::{evaluate, Dataset, EvalConfig, EvalReport};
