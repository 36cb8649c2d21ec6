// src/stats.rs
use std::fmt;

use crate::storage::memory::ServerStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Healthy,
    Overload,
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "Healthy"),
            Self::Overload => write!(f, "Overload"),
        }
    }
}

/// Fleet-wide numbers. `mean_cpu` and `health` are absent for an empty fleet.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetStats {
    pub count: usize,
    pub mean_cpu: Option<f64>,
    pub total_uptime: u64,
    pub health: Option<Health>,
}

pub fn compute_stats(store: &ServerStore, overload_threshold: f64) -> FleetStats {
    let count = store.len();
    let total_uptime = store.iter().map(|s| s.uptime_secs).fold(0u64, u64::saturating_add);

    let mean_cpu = if count == 0 {
        None
    } else {
        Some(store.iter().map(|s| s.cpu_load).sum::<f64>() / count as f64)
    };

    let health = mean_cpu.map(|mean| {
        if mean > overload_threshold {
            Health::Overload
        } else {
            Health::Healthy
        }
    });

    FleetStats {
        count,
        mean_cpu,
        total_uptime,
        health,
    }
}
