use crate::types::SampleSeries;

/// Keep samples with the sun strictly above the horizon, preserving order.
pub fn daylight_filter(series: &SampleSeries) -> SampleSeries {
    let samples = series.iter().filter(|s| s.is_daylight()).copied().collect();
    SampleSeries::new(series.latitude, series.longitude, samples)
}
