// src/simulation.rs
use log::{debug, info};
use rand::Rng;

use crate::models::server::STATUS_CRASHED;
use crate::storage::memory::ServerStore;

pub const CPU_JITTER: f64 = 5.0;
pub const MEMORY_JITTER: f64 = 2.0;

/// Advances every `Active` server by one step: uptime, a bounded random walk on
/// both loads, then the crash roll. Anything not `Active` is left alone.
pub fn tick<R: Rng + ?Sized>(mut store: ServerStore, rng: &mut R, crash_probability: f64) -> ServerStore {
    let crash_probability = crash_probability.clamp(0.0, 1.0);
    let mut advanced = 0usize;

    for server in store.iter_mut().filter(|s| s.is_active()) {
        server.uptime_secs = server.uptime_secs.saturating_add(1);

        let cpu_change = rng.gen_range(-CPU_JITTER..=CPU_JITTER);
        server.cpu_load = (server.cpu_load + cpu_change).clamp(0.0, 100.0);

        let memory_change = rng.gen_range(-MEMORY_JITTER..=MEMORY_JITTER);
        server.memory_load = (server.memory_load + memory_change).clamp(0.0, 100.0);

        if rng.gen_bool(crash_probability) {
            server.status = STATUS_CRASHED.to_string();
            server.cpu_load = 0.0;
            info!("Server {} ({}) crashed", server.id, server.name);
        }
        advanced += 1;
    }

    debug!("Tick advanced {} of {} server(s)", advanced, store.len());
    store
}
