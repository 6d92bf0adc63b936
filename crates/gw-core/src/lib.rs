//! Symbolic GW path-curvature engine.
//!
//! Resources (density profile, symbolic field) are built once and passed
//! by reference; every sampler is a pure read over immutable data.

pub mod compare;
pub mod dynamo;
pub mod field;
pub mod prem;
pub mod report;
pub mod sampler;
pub mod sky;
pub mod tracer;
