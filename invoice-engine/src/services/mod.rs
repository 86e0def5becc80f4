//! Engine services: classification, money math, pagination, assembly.

pub mod assembler;
pub mod calculator;
pub mod classifier;
pub mod metrics;
pub mod paginator;

pub use assembler::assemble;
pub use metrics::{get_metrics, init_metrics};
