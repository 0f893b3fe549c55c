//! GPA engine: weighting policies, aggregation, and status bands

pub mod engine;
pub mod policy;
pub mod status;

pub use engine::{compute, compute_aggregates, AggregateResult};
pub use policy::{base_points, WeightingPolicy, UNWEIGHTED_SCALE_MAX};
pub use status::{classify_absolute, classify_status, BandingScheme, QualitativeBand};
