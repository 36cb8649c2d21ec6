use std::io::{self, BufRead, Write};

use log::debug;

use crate::console::Console;
use crate::models::server::SortKey;
use crate::storage::memory::ServerStore;

/// Unrecognised choices leave the order as it was.
pub fn sort_servers<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: ServerStore,
) -> io::Result<ServerStore> {
    console.say("\nSort by: [1] CPU Load  [2] Name  [3] Uptime")?;
    let choice = console.prompt("Choice: ")?;

    Ok(match SortKey::from_choice(&choice) {
        Some(key) => {
            debug!("Sorting fleet by {:?}", key);
            store.sort(key)
        }
        None => store,
    })
}
