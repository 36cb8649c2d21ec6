// src/models/server.rs
use serde::{Deserialize, Serialize};

pub const STATUS_ACTIVE: &str = "Active";
pub const STATUS_CRASHED: &str = "Crashed";

/// One simulated server. Serialized keys match the existing data files (`nama`, `lokasi`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerRecord {
    pub id: String,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "lokasi")]
    pub location: String,
    pub status: String,
    #[serde(rename = "uptime")]
    pub uptime_secs: u64,
    #[serde(rename = "penggunaan_cpu")]
    pub cpu_load: f64,
    #[serde(rename = "penggunaan_memori")]
    pub memory_load: f64,
}

impl ServerRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        cpu_load: f64,
        memory_load: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            status: STATUS_ACTIVE.to_string(),
            uptime_secs: 0,
            cpu_load,
            memory_load,
        }
    }

    /// Only records labelled exactly `Active` take part in simulation.
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    pub fn matches_query(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.location.to_lowercase().contains(needle_lower)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    CpuDesc,
    NameAsc,
    UptimeDesc,
}

impl SortKey {
    /// Maps the sort menu choice (`1`, `2`, `3`) to a key.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::CpuDesc),
            "2" => Some(Self::NameAsc),
            "3" => Some(Self::UptimeDesc),
            _ => None,
        }
    }
}
