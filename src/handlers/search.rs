use std::io::{self, BufRead, Write};

use log::debug;

use crate::console::Console;
use crate::storage::memory::ServerStore;
use crate::utils::{heading, highlight};

pub fn search_servers<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &ServerStore) -> io::Result<()> {
    let query = console.prompt(&highlight("\n🔍 Search (name/location): "))?;
    let found = store.search(&query);
    debug!("Search {:?} matched {} server(s)", query, found.len());

    console.say(&heading("\n--- SEARCH RESULTS ---"))?;
    for s in found {
        console.say(&format!("ID: {} | Name: {} | Location: {}", s.id, s.name, s.location))?;
    }
    console.wait_for_enter()
}
