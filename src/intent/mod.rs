pub mod classifier;
pub mod processor;
pub mod slots;
