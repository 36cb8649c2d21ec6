use std::io::{self, BufRead, Write};

use log::debug;

use crate::console::Console;
use crate::stats::{compute_stats, Health};
use crate::storage::memory::ServerStore;
use crate::utils::{failure, heading, success};

/// Prints fleet analytics. Nothing is shown for an empty fleet.
pub fn show_analytics<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &ServerStore,
    overload_threshold: f64,
) -> io::Result<()> {
    let stats = compute_stats(store, overload_threshold);
    let (Some(mean_cpu), Some(health)) = (stats.mean_cpu, stats.health) else {
        debug!("Analytics skipped for empty fleet");
        return Ok(());
    };

    console.say(&heading("\n--- 📊 CLUSTER ANALYTICS ---"))?;
    console.say(&format!("Total servers : {}", stats.count))?;
    console.say(&format!("Average CPU   : {:.2}%", mean_cpu))?;
    console.say(&format!("Total uptime  : {} seconds", stats.total_uptime))?;

    match health {
        Health::Overload => console.say(&failure("WARNING: Cluster overload! Deploy more servers."))?,
        Health::Healthy => console.say(&success("Cluster status: Healthy"))?,
    }
    console.wait_for_enter()
}
