pub mod activation;

pub use activation::{
    Activation, ActivationFunction, apply_in_place, soft_plus, soft_plus_vec, soft_step,
    soft_step_vec, tabulate,
};
