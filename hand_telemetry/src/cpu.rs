//! CPU load computed from consecutive `/proc/stat` samples.

use serde::{Deserialize, Serialize};

use crate::{read_file, ProcPaths, TelemetryError, UNAVAILABLE};

/// Aggregate CPU tick counters from the `cpu` line of `/proc/stat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CpuSample {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
    pub steal: u64,
    pub guest: u64,
    pub guest_nice: u64,
}

impl CpuSample {
    /// Parses the aggregate `cpu` line out of `/proc/stat` contents.
    ///
    /// At least seven counters are required; older kernels omit the trailing
    /// ones, which then read as zero.
    pub fn parse(stat: &str) -> Result<Self, TelemetryError> {
        let line = stat
            .lines()
            .find(|l| l.split_whitespace().next() == Some("cpu"))
            .ok_or_else(|| TelemetryError::Malformed {
                what: "/proc/stat",
                detail: "no aggregate cpu line".into(),
            })?;
        let mut values = Vec::with_capacity(10);
        for field in line.split_whitespace().skip(1).take(10) {
            let v = field.parse::<u64>().map_err(|e| TelemetryError::Malformed {
                what: "/proc/stat",
                detail: format!("counter {:?}: {}", field, e),
            })?;
            values.push(v);
        }
        if values.len() < 7 {
            return Err(TelemetryError::Malformed {
                what: "/proc/stat",
                detail: format!("expected at least 7 counters, found {}", values.len()),
            });
        }
        values.resize(10, 0);
        Ok(Self {
            user: values[0],
            nice: values[1],
            system: values[2],
            idle: values[3],
            iowait: values[4],
            irq: values[5],
            softirq: values[6],
            steal: values[7],
            guest: values[8],
            guest_nice: values[9],
        })
    }

    /// Ticks spent waiting, including I/O wait.
    pub fn idle_ticks(&self) -> u64 {
        self.idle + self.iowait
    }

    /// Ticks spent doing work. Guest time is already part of `user`.
    pub fn busy_ticks(&self) -> u64 {
        self.user + self.nice + self.system + self.irq + self.softirq + self.steal
    }

    pub fn total_ticks(&self) -> u64 {
        self.idle_ticks() + self.busy_ticks()
    }
}

/// Counters remembered from the previous poll. Starts zeroed, so the first
/// reading reports the average load since boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviousSample(pub CpuSample);

/// Tracks CPU usage between polls. Each monitor owns its own history.
#[derive(Debug, Clone, Default)]
pub struct CpuMonitor {
    paths: ProcPaths,
    previous: PreviousSample,
}

impl CpuMonitor {
    pub fn new(paths: ProcPaths) -> Self {
        Self {
            paths,
            previous: PreviousSample::default(),
        }
    }

    /// Resumes from a known previous sample.
    pub fn with_previous(paths: ProcPaths, previous: PreviousSample) -> Self {
        Self { paths, previous }
    }

    pub fn previous(&self) -> PreviousSample {
        self.previous
    }

    /// Usage in percent since the previous sample, then remembers `sample`.
    ///
    /// Returns `0.0` when no ticks elapsed.
    pub fn usage_from(&mut self, sample: CpuSample) -> f64 {
        let prev = self.previous.0;
        let total = sample.total_ticks().saturating_sub(prev.total_ticks());
        let idle = sample.idle_ticks().saturating_sub(prev.idle_ticks());
        self.previous = PreviousSample(sample);
        if total == 0 {
            return 0.0;
        }
        (total.saturating_sub(idle) as f64 / total as f64) * 100.0
    }

    /// Reads `/proc/stat` and returns the usage since the last poll.
    pub fn try_poll(&mut self) -> Result<f64, TelemetryError> {
        let text = read_file(&self.paths.stat)?;
        let sample = CpuSample::parse(&text)?;
        Ok(self.usage_from(sample))
    }

    /// Same as [`CpuMonitor::try_poll`] but yields [`UNAVAILABLE`] on failure.
    /// A failed poll leaves the previous sample untouched.
    pub fn poll(&mut self) -> f64 {
        self.try_poll().unwrap_or_else(|e| {
            log::warn!("cpu usage unavailable: {}", e);
            UNAVAILABLE
        })
    }
}
