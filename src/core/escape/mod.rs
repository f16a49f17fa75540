pub mod algorithm;
pub mod classic;
pub mod errors;
pub mod factory;
pub mod kinds;
pub mod smooth;

pub use algorithm::EscapeAlgorithm;
pub use errors::EscapeAlgorithmError;
pub use factory::escape_algorithm_factory;
pub use kinds::EscapeKinds;
