//! Traffic flow handling: predicted volume samples and their conversion
//! into per-edge travel times.

pub mod samples;
pub mod travel_time;

pub use samples::{FlowSample, FlowTable, SAMPLES_PER_HOUR, interval_of};
pub use travel_time::{EdgeTime, FlowParams, time_seconds};
