mod estimator_metrics;

pub use estimator_metrics::EstimatorMetrics;
