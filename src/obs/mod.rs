pub mod metrics;
pub mod tracingx;
pub mod wrap;
