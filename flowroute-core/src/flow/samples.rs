//! Predicted volume samples keyed by directed edge and 15-minute interval

use chrono::{NaiveDateTime, Timelike};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{IntervalId, NodeId};

/// Number of 15-minute samples per hour; used to scale interval counts to
/// the hourly volumes the flow-speed calibration expects.
pub const SAMPLES_PER_HOUR: f64 = 4.0;

/// 15-minute slot index within a day: 00:00 maps to 0, 23:45 to 95.
/// Mirrors the V00..V95 column layout of the source traffic counts.
pub fn interval_of(timestamp: NaiveDateTime) -> IntervalId {
    timestamp.hour() * 4 + timestamp.minute() / 15
}

/// One predicted traffic count: vehicles per 15 minutes on a directed
/// edge during one interval. Produced by the forecasting layer and
/// consumed once per weighted build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowSample {
    pub from: NodeId,
    pub to: NodeId,
    pub interval: IntervalId,
    pub volume: f64,
}

/// Lookup table of predicted volumes. A later sample for the same edge and
/// interval replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct FlowTable {
    volumes: HashMap<(NodeId, NodeId, IntervalId), f64>,
}

impl FlowTable {
    pub fn new() -> Self {
        FlowTable::default()
    }

    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = FlowSample>,
    {
        let mut table = FlowTable::new();
        for sample in samples {
            table.insert(sample);
        }
        table
    }

    pub fn insert(&mut self, sample: FlowSample) {
        self.volumes
            .insert((sample.from, sample.to, sample.interval), sample.volume);
    }

    pub fn volume(&self, from: NodeId, to: NodeId, interval: IntervalId) -> Option<f64> {
        self.volumes.get(&(from, to, interval)).copied()
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2006, 10, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn interval_indices_cover_the_day() {
        assert_eq!(interval_of(at(0, 0)), 0);
        assert_eq!(interval_of(at(0, 14)), 0);
        assert_eq!(interval_of(at(0, 15)), 1);
        assert_eq!(interval_of(at(8, 30)), 34);
        assert_eq!(interval_of(at(23, 45)), 95);
    }

    #[test]
    fn later_sample_replaces_earlier() {
        let table = FlowTable::from_samples(vec![
            FlowSample {
                from: 1,
                to: 2,
                interval: 3,
                volume: 80.0,
            },
            FlowSample {
                from: 1,
                to: 2,
                interval: 3,
                volume: 95.0,
            },
        ]);
        assert_eq!(table.volume(1, 2, 3), Some(95.0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn missing_edge_or_interval_is_none() {
        let table = FlowTable::from_samples(vec![FlowSample {
            from: 1,
            to: 2,
            interval: 3,
            volume: 80.0,
        }]);
        assert_eq!(table.volume(2, 1, 3), None);
        assert_eq!(table.volume(1, 2, 4), None);
    }
}
