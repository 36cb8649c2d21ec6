// src/handlers/servers.rs
use std::io::{self, BufRead, Write};

use log::{debug, error};
use rand::Rng;

use crate::console::Console;
use crate::storage::memory::ServerStore;
use crate::utils::{accent, failure, highlight, success, warning};

pub fn deploy_server<R, W, G>(
    console: &mut Console<R, W>,
    store: ServerStore,
    rng: &mut G,
) -> io::Result<ServerStore>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    console.say(&accent("\n--- ➕ DEPLOY NEW SERVER ---"))?;
    let id = console.prompt("Server ID (unique)  : ")?;
    let name = console.prompt("Server name         : ")?;
    let location = console.prompt("Datacenter location : ")?;

    if console.is_closed() {
        debug!("Input closed during deploy, nothing created");
        return Ok(store);
    }

    let store = store.create(&id, &name, &location, rng);
    console.say(&success("Server deployed successfully!"))?;
    console.pause()?;
    Ok(store)
}

pub fn configure_server<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: ServerStore,
) -> io::Result<ServerStore> {
    let target = console.prompt(&highlight("\nEnter the ID of the server to configure: "))?;

    let current = store
        .iter()
        .find(|s| s.id == target)
        .map(|s| (s.name.clone(), s.status.clone()));

    let Some((name, status)) = current else {
        error!("Configure requested for unknown server {}", target);
        console.say(&failure("Server ID not found."))?;
        console.pause()?;
        return Ok(store);
    };

    console.say(&format!("Editing {}... (press Enter to keep a value)", name))?;
    let new_name = console.prompt(&format!("New name [{}]: ", name))?;
    let new_status = console.prompt(&format!("Status (Active/Maintenance/Off) [{}]: ", status))?;

    let (store, found) = store.update(&target, &new_name, &new_status);
    debug!("Configured server {} (found={})", target, found);
    console.say(&success("Configuration updated."))?;
    Ok(store)
}

pub fn terminate_server<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: ServerStore,
) -> io::Result<ServerStore> {
    let target = console.prompt(&failure("\nEnter the ID of the server to TERMINATE: "))?;

    let (store, removed) = store.delete(&target);
    if removed > 0 {
        console.say(&warning("Server removed from the cluster."))?;
    } else {
        error!("Terminate requested for unknown server {}", target);
        console.say("Server not found.")?;
    }
    console.pause()?;
    Ok(store)
}
