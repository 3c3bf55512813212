pub mod stats;

pub use stats::RequestStats;
