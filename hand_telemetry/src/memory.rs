//! Memory totals read from `/proc/meminfo`.

use serde::{Deserialize, Serialize};

use crate::{read_file, ProcPaths, TelemetryError, UNAVAILABLE};

/// Memory figures in kilobytes. All zero when `/proc/meminfo` is unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemoryInfo {
    pub total: u64,
    pub free: u64,
    pub available: u64,
    pub buffers: u64,
    pub cached: u64,
}

impl MemoryInfo {
    /// Picks the known fields out of `/proc/meminfo` contents. Unknown keys
    /// are ignored and missing ones stay zero.
    pub fn parse(meminfo: &str) -> Result<Self, TelemetryError> {
        let mut info = MemoryInfo::default();
        for line in meminfo.lines() {
            let Some((key, rest)) = line.split_once(':') else {
                continue;
            };
            let slot = match key.trim() {
                "MemTotal" => &mut info.total,
                "MemFree" => &mut info.free,
                "MemAvailable" => &mut info.available,
                "Buffers" => &mut info.buffers,
                "Cached" => &mut info.cached,
                _ => continue,
            };
            let value = rest.split_whitespace().next().unwrap_or_default();
            *slot = value.parse().map_err(|e| TelemetryError::Malformed {
                what: "/proc/meminfo",
                detail: format!("{}: {}", key.trim(), e),
            })?;
        }
        Ok(info)
    }

    /// Share of memory in use, in percent, or `None` when the total is zero.
    pub fn usage_percent(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let used = self.total.saturating_sub(self.available);
        Some(used as f64 / self.total as f64 * 100.0)
    }

    pub fn total_mb(&self) -> u64 {
        self.total / 1024
    }

    pub fn available_mb(&self) -> u64 {
        self.available / 1024
    }
}

pub fn try_memory_info(paths: &ProcPaths) -> Result<MemoryInfo, TelemetryError> {
    let text = read_file(&paths.meminfo)?;
    MemoryInfo::parse(&text)
}

/// Current memory figures, zeroed when unreadable.
pub fn memory_info(paths: &ProcPaths) -> MemoryInfo {
    try_memory_info(paths).unwrap_or_else(|e| {
        log::warn!("memory info unavailable: {}", e);
        MemoryInfo::default()
    })
}

/// Percentage of memory in use, or [`UNAVAILABLE`].
pub fn memory_usage_percent(paths: &ProcPaths) -> f64 {
    memory_info(paths).usage_percent().unwrap_or(UNAVAILABLE)
}

pub fn total_memory_mb(paths: &ProcPaths) -> u64 {
    memory_info(paths).total_mb()
}

pub fn available_memory_mb(paths: &ProcPaths) -> u64 {
    memory_info(paths).available_mb()
}

/// One reading of every memory figure, taken from a single file read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemorySnapshot {
    pub info: MemoryInfo,
    pub usage_percent: f64,
}

impl MemorySnapshot {
    pub fn take(paths: &ProcPaths) -> Self {
        let info = memory_info(paths);
        Self {
            info,
            usage_percent: info.usage_percent().unwrap_or(UNAVAILABLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMINFO: &str = "MemTotal:       16384000 kB
MemFree:         2048000 kB
MemAvailable:    8192000 kB
Buffers:          512000 kB
Cached:          4096000 kB
SwapCached:            0 kB
";

    #[test]
    fn parse_known_fields() {
        let info = MemoryInfo::parse(MEMINFO).unwrap();
        assert_eq!(info.total, 16_384_000);
        assert_eq!(info.free, 2_048_000);
        assert_eq!(info.available, 8_192_000);
        assert_eq!(info.buffers, 512_000);
        // SwapCached must not overwrite Cached
        assert_eq!(info.cached, 4_096_000);
        assert_eq!(info.total_mb(), 16_000);
        assert_eq!(info.available_mb(), 8_000);
        assert!((info.usage_percent().unwrap() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn unreadable_file_is_zeroed() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ProcPaths {
            meminfo: dir.path().join("missing"),
            ..ProcPaths::default()
        };
        assert_eq!(memory_info(&paths), MemoryInfo::default());
        assert_eq!(memory_usage_percent(&paths), UNAVAILABLE);
        assert_eq!(total_memory_mb(&paths), 0);
        assert_eq!(available_memory_mb(&paths), 0);
    }

    #[test]
    fn snapshot_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ProcPaths {
            meminfo: dir.path().join("meminfo"),
            ..ProcPaths::default()
        };
        std::fs::write(&paths.meminfo, MEMINFO).unwrap();
        let snap = MemorySnapshot::take(&paths);
        assert_eq!(snap.info.total, 16_384_000);
        assert!((snap.usage_percent - 50.0).abs() < 1e-9);
    }
}
