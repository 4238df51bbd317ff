//! Training loop and supporting adapters

pub mod observers;
pub mod providers;
pub mod training;

pub use observers::{MetricsObserver, MetricsSummary, ProgressObserver};
pub use providers::RandomProvider;
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};
