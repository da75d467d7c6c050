pub mod metrics;
pub mod series;

pub use metrics::*;
pub use series::*;
