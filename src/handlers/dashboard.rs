use std::io::{self, BufRead, Write};

use crate::console::Console;
use crate::storage::memory::ServerStore;
use crate::utils::{accent, banner, failure, heading, highlight, rule, success, table_header, table_row, warning};

pub fn render_dashboard<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &ServerStore) -> io::Result<()> {
    console.clear()?;
    console.say(&banner())?;

    if store.is_empty() {
        console.say(&warning("\nNo servers running yet. Deploy a new server to get started."))?;
        return Ok(());
    }

    console.say(&table_header())?;
    for server in store {
        console.say(&table_row(server))?;
    }
    console.say(&rule())
}

pub fn render_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.say(&heading("\nCOMMAND CENTER:"))?;
    console.say(&format!(
        "[1] {}   [2] {}   [3] {}",
        success("Deploy Server"),
        highlight("Config Server"),
        failure("Terminate Server")
    ))?;
    console.say("[4] Search          [5] Analytics       [6] Sort")?;
    console.say(&format!("[7] {}     [Enter] Refresh", warning("Save & Exit")))
}

pub fn command_prompt() -> String {
    accent("\nroot@cloud-manager:~$ ")
}
