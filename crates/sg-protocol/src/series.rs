use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::metrics::{Category, Metric};

/// One (timestamp, value) point of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: NaiveDateTime, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Everything parsed from one sar file, bucketed under its calendar day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySeries {
    /// Normalized `yy-mm-dd` date of the log.
    pub date: String,
    /// Host the log was recorded on.
    pub hostname: String,
    /// CPU count label such as `"4 CPU"`; empty when the header has none.
    #[serde(default)]
    pub cpu_count: String,
    /// Samples per metric, in row order.
    #[serde(default)]
    pub series: BTreeMap<Metric, Vec<Sample>>,
    /// Timestamps of `LINUX RESTART` markers.
    #[serde(default)]
    pub restarts: Vec<NaiveDateTime>,
}

impl DaySeries {
    pub fn new(
        date: impl Into<String>,
        hostname: impl Into<String>,
        cpu_count: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            hostname: hostname.into(),
            cpu_count: cpu_count.into(),
            ..Default::default()
        }
    }

    pub fn push(&mut self, metric: Metric, sample: Sample) {
        self.series.entry(metric).or_default().push(sample);
    }

    /// Samples for `metric`; empty when the log never carried it.
    pub fn samples(&self, metric: Metric) -> &[Sample] {
        self.series.get(&metric).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Metrics of `category` that have at least one sample.
    pub fn metrics_in(&self, category: Category) -> Vec<Metric> {
        Metric::in_category(category)
            .filter(|m| !self.samples(*m).is_empty())
            .collect()
    }

    pub fn sample_count(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }

    /// True when the file parsed but no section contributed any sample.
    pub fn is_empty(&self) -> bool {
        self.sample_count() == 0 && self.restarts.is_empty()
    }
}

/// Date-sorted collection of day series merged from one or more files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    days: BTreeMap<String, DaySeries>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a day, returning the series it replaced if the date was already present.
    pub fn insert(&mut self, day: DaySeries) -> Option<DaySeries> {
        self.days.insert(day.date.clone(), day)
    }

    pub fn get(&self, date: &str) -> Option<&DaySeries> {
        self.days.get(date)
    }

    /// Days in ascending date order.
    pub fn days(&self) -> impl Iterator<Item = &DaySeries> {
        self.days.values()
    }

    pub fn dates(&self) -> Vec<&str> {
        self.days.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Hostname of the latest day; sar files in one batch normally share it.
    pub fn hostname(&self) -> &str {
        self.days
            .values()
            .next_back()
            .map(|d| d.hostname.as_str())
            .unwrap_or_default()
    }

    pub fn cpu_count(&self) -> &str {
        self.days
            .values()
            .next_back()
            .map(|d| d.cpu_count.as_str())
            .unwrap_or_default()
    }

    /// One contiguous run of samples per day that carries `metric`.
    ///
    /// Consecutive segments are separated by a gap: a renderer must not draw
    /// a line from the last sample of one segment to the first of the next.
    pub fn segments(&self, metric: Metric) -> Vec<&[Sample]> {
        self.days
            .values()
            .map(|d| d.samples(metric))
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// All samples of `metric` across days, oldest first.
    pub fn flatten(&self, metric: Metric) -> Vec<Sample> {
        self.segments(metric).concat()
    }

    pub fn restarts(&self) -> Vec<NaiveDateTime> {
        self.days
            .values()
            .flat_map(|d| d.restarts.iter().copied())
            .collect()
    }

    /// Output naming stem: `host__21-03-04` or `host__21-03-04_to_21-03-06`.
    pub fn label(&self) -> Option<String> {
        let first = self.days.keys().next()?;
        let last = self.days.keys().next_back()?;
        let span = if first == last {
            first.clone()
        } else {
            format!("{first}_to_{last}")
        };
        Some(format!("{}__{span}", self.hostname()))
    }
}
