//! Best-effort CPU and memory readings taken alongside gesture processing.
//!
//! Readers never fail loudly: an unreadable counter becomes the `-1.0`
//! sentinel (or a zeroed [`MemoryInfo`]) so a monitoring loop can treat it
//! as "unavailable this cycle". The typed [`TelemetryError`] is still
//! available through the `try_*` functions.

use std::path::PathBuf;

use thiserror::Error;

pub mod cpu;
pub use cpu::{CpuMonitor, CpuSample, PreviousSample};

pub mod memory;
pub use memory::{
    available_memory_mb, memory_info, memory_usage_percent, total_memory_mb, MemoryInfo,
    MemorySnapshot,
};

/// Value reported when a reading is unavailable.
pub const UNAVAILABLE: f64 = -1.0;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed {what}: {detail}")]
    Malformed { what: &'static str, detail: String },
}

/// Locations of the kernel files the readers consult.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcPaths {
    pub stat: PathBuf,
    pub meminfo: PathBuf,
    pub thermal: PathBuf,
}

impl Default for ProcPaths {
    fn default() -> Self {
        Self {
            stat: PathBuf::from("/proc/stat"),
            meminfo: PathBuf::from("/proc/meminfo"),
            thermal: PathBuf::from("/sys/class/thermal/thermal_zone0/temp"),
        }
    }
}

pub(crate) fn read_file(path: &std::path::Path) -> Result<String, TelemetryError> {
    std::fs::read_to_string(path).map_err(|source| TelemetryError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the first thermal zone in degrees Celsius.
pub fn try_cpu_temperature(paths: &ProcPaths) -> Result<f64, TelemetryError> {
    let text = read_file(&paths.thermal)?;
    let millis: i64 = text
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| TelemetryError::Malformed {
            what: "thermal zone",
            detail: e.to_string(),
        })?;
    Ok(millis as f64 / 1000.0)
}

/// CPU temperature in degrees Celsius, or [`UNAVAILABLE`].
pub fn cpu_temperature(paths: &ProcPaths) -> f64 {
    try_cpu_temperature(paths).unwrap_or_else(|e| {
        log::warn!("cpu temperature unavailable: {}", e);
        UNAVAILABLE
    })
}
