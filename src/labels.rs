use std::collections::BTreeMap;

use chrono::Timelike;

use crate::types::{HourLabel, OffsetDirection, SampleSeries, SolarSample};

/// One label per hour-of-day present in `series`, anchored at that hour's
/// highest sample and ordered by hour.
///
/// Single pass over the series with one running candidate per hour. On equal
/// elevations the chronologically first sample is kept.
pub fn hour_labels(series: &SampleSeries) -> Vec<HourLabel> {
    let mut best: BTreeMap<u32, &SolarSample> = BTreeMap::new();
    for sample in series.iter() {
        best.entry(sample.timestamp.hour())
            .and_modify(|current| {
                if outranks(sample, *current) {
                    *current = sample;
                }
            })
            .or_insert(sample);
    }
    best.into_iter()
        .map(|(hour, sample)| HourLabel {
            hour,
            anchor_azimuth: sample.azimuth,
            anchor_elevation: sample.elevation,
            offset_direction: OffsetDirection::for_azimuth(sample.azimuth),
        })
        .collect()
}

fn outranks(candidate: &SolarSample, current: &SolarSample) -> bool {
    candidate.elevation > current.elevation
}
