pub mod envelope;
pub mod sample;
