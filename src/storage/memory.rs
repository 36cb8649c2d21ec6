// src/storage/memory.rs
use log::debug;
use rand::Rng;

use crate::models::server::{ServerRecord, SortKey};

/// Ordered in-memory fleet. Every mutating operation consumes the store and hands it back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerStore {
    servers: Vec<ServerRecord>,
}

impl ServerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(servers: Vec<ServerRecord>) -> Self {
        Self { servers }
    }

    pub fn records(&self) -> &[ServerRecord] {
        &self.servers
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServerRecord> {
        self.servers.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut ServerRecord> {
        self.servers.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// Appends a fresh `Active` server with randomized starting load.
    /// Ids are not checked for uniqueness.
    pub fn create<R: Rng + ?Sized>(mut self, id: &str, name: &str, location: &str, rng: &mut R) -> Self {
        let cpu = rng.gen_range(10.0..=30.0);
        let memory = rng.gen_range(10.0..=20.0);
        debug!("Deploying server {} ({}) at {}", id, name, location);
        self.servers.push(ServerRecord::new(id, name, location, cpu, memory));
        self
    }

    /// Reconfigures the first server with a matching id. Empty replacements keep the old value.
    pub fn update(mut self, id: &str, new_name: &str, new_status: &str) -> (Self, bool) {
        let found = match self.servers.iter_mut().find(|s| s.id == id) {
            Some(server) => {
                if !new_name.is_empty() {
                    server.name = new_name.to_string();
                }
                if !new_status.is_empty() {
                    server.status = new_status.to_string();
                }
                true
            }
            None => false,
        };
        debug!("Update of server {} found={}", id, found);
        (self, found)
    }

    /// Removes every server with a matching id and returns how many went away.
    pub fn delete(mut self, id: &str) -> (Self, usize) {
        let before = self.servers.len();
        self.servers.retain(|s| s.id != id);
        let removed = before - self.servers.len();
        debug!("Removed {} server(s) with id {}", removed, id);
        (self, removed)
    }

    pub fn search(&self, query: &str) -> Vec<&ServerRecord> {
        let needle = query.to_lowercase();
        self.servers
            .iter()
            .filter(|s| s.matches_query(&needle))
            .collect()
    }

    /// Stable sort; servers comparing equal keep their relative order.
    pub fn sort(mut self, key: SortKey) -> Self {
        match key {
            SortKey::CpuDesc => self.servers.sort_by(|a, b| b.cpu_load.total_cmp(&a.cpu_load)),
            SortKey::NameAsc => self.servers.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::UptimeDesc => self.servers.sort_by(|a, b| b.uptime_secs.cmp(&a.uptime_secs)),
        }
        self
    }
}

impl<'a> IntoIterator for &'a ServerStore {
    type Item = &'a ServerRecord;
    type IntoIter = std::slice::Iter<'a, ServerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.servers.iter()
    }
}
