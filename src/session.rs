// src/session.rs
use std::io::{self, BufRead, Write};

use log::{debug, error, info};
use rand::Rng;

use crate::config::Config;
use crate::console::Console;
use crate::handlers::analytics::show_analytics;
use crate::handlers::dashboard::{command_prompt, render_dashboard, render_menu};
use crate::handlers::search::search_servers;
use crate::handlers::servers::{configure_server, deploy_server, terminate_server};
use crate::handlers::sort::sort_servers;
use crate::handlers::Command;
use crate::simulation;
use crate::storage::file;
use crate::storage::memory::ServerStore;
use crate::utils::success;

/// Runs the interactive loop until the user saves and exits (or input ends),
/// then writes the fleet to the configured data file.
pub fn run<R, W, G>(
    console: &mut Console<R, W>,
    mut store: ServerStore,
    config: &Config,
    rng: &mut G,
) -> io::Result<ServerStore>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    loop {
        store = simulation::tick(store, rng, config.crash_probability);

        render_dashboard(console, &store)?;
        render_menu(console)?;

        let input = console.prompt(&command_prompt())?;
        let command = if console.is_closed() {
            info!("Input closed, saving and exiting");
            Command::SaveAndExit
        } else {
            Command::parse(&input)
        };
        debug!("Dispatching {:?}", command);

        store = match command {
            Command::Deploy => deploy_server(console, store, rng)?,
            Command::Configure => configure_server(console, store)?,
            Command::Terminate => terminate_server(console, store)?,
            Command::Search => {
                search_servers(console, &store)?;
                store
            }
            Command::Analytics => {
                show_analytics(console, &store, config.overload_threshold)?;
                store
            }
            Command::Sort => sort_servers(console, store)?,
            Command::SaveAndExit => {
                if let Err(e) = file::save(&config.data_file, &store) {
                    error!("Failed to save {}: {}", config.data_file.display(), e);
                    return Err(e.into());
                }
                console.say(&success("\n✅ Data saved."))?;
                console.pause()?;
                console.say("Shutting down system...")?;
                return Ok(store);
            }
            Command::Refresh => store,
            Command::Unknown(other) => {
                debug!("Unknown command {:?}", other);
                console.say("Command unknown.")?;
                console.short_pause()?;
                store
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::scripted;
    use crate::models::server::ServerRecord;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::Path;

    fn config_for(path: &Path) -> Config {
        Config {
            data_file: path.to_path_buf(),
            crash_probability: 0.0,
            message_pause_ms: 0,
            ..Config::default()
        }
    }

    #[test]
    fn deploy_then_exit_saves_fleet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fleet.json");
        let config = config_for(&path);
        let mut rng = StdRng::seed_from_u64(21);

        let mut console = scripted("1\nsrv1\nweb\nJakarta\n\n7\n");
        let store = run(&mut console, ServerStore::new(), &config, &mut rng).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].uptime_secs, 2);

        let saved = file::load(&path);
        assert_eq!(saved, store);
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("Data saved."));
        assert!(out.contains("Shutting down system..."));
    }

    #[test]
    fn every_iteration_ticks_before_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&dir.path().join("fleet.json"));
        let mut rng = StdRng::seed_from_u64(4);
        let start = ServerStore::from_records(vec![ServerRecord::new("a", "n", "l", 50.0, 50.0)]);

        let mut console = scripted("\n\n\n7\n");
        let store = run(&mut console, start, &config, &mut rng).unwrap();
        assert_eq!(store.records()[0].uptime_secs, 4);
    }

    #[test]
    fn unknown_command_is_reported_and_loop_continues() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&dir.path().join("fleet.json"));
        let mut rng = StdRng::seed_from_u64(4);

        let mut console = scripted("x\n7\n");
        run(&mut console, ServerStore::new(), &config, &mut rng).unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("Command unknown."));
        assert!(out.contains("Data saved."));
    }

    #[test]
    fn closed_input_saves_and_exits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fleet.json");
        let config = config_for(&path);
        let mut rng = StdRng::seed_from_u64(8);
        let start = ServerStore::from_records(vec![ServerRecord::new("a", "n", "l", 50.0, 50.0)]);

        let mut console = scripted("3\nzz\n");
        let store = run(&mut console, start, &config, &mut rng).unwrap();
        assert_eq!(store.len(), 1);
        assert!(path.exists());
    }

    #[test]
    fn delete_and_sort_through_menu() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&dir.path().join("fleet.json"));
        let mut rng = StdRng::seed_from_u64(8);
        let start = ServerStore::from_records(vec![
            ServerRecord::new("x1", "charlie", "l", 50.0, 50.0),
            ServerRecord::new("y", "alpha", "l", 50.0, 50.0),
            ServerRecord::new("x1", "bravo", "l", 50.0, 50.0),
            ServerRecord::new("z", "delta", "l", 50.0, 50.0),
        ]);

        let mut console = scripted("3\nx1\n6\n2\n7\n");
        let store = run(&mut console, start, &config, &mut rng).unwrap();
        let names: Vec<&str> = store.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "delta"]);
    }

    #[test]
    fn save_failure_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&dir.path().join("missing/dir/fleet.json"));
        let mut rng = StdRng::seed_from_u64(8);

        let mut console = scripted("7\n");
        assert!(run(&mut console, ServerStore::new(), &config, &mut rng).is_err());
    }
}
