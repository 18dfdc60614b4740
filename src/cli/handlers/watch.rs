use std::time::Duration;

use tracing::{info, warn};

use crate::cli::commands::WatchArgs;
use crate::cli::output::{format_view, view_to_json};
use crate::io::list_io;
use crate::io::state;
use crate::io::watcher::ListWatcher;
use crate::model::config::Config;
use crate::view::{CollectingHost, ListReconciler};

use super::open_list;

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Render the list, then reconcile and re-render on every change to the file.
/// Runs until interrupted.
pub fn cmd_watch(
    args: WatchArgs,
    config: &Config,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = open_list(&args.list, config)?;
    let watcher = ListWatcher::start(&args.list)?;
    render(&view, config, json)?;

    loop {
        if watcher.wait(POLL_INTERVAL).is_none() {
            continue;
        }
        let list = match list_io::read_list(&args.list) {
            Ok(list) => list,
            Err(e) => {
                // Usually a half-written file; the next event will retry.
                warn!("skipping refresh: {}", e);
                continue;
            }
        };
        let report = view.reconcile(list);
        view.set_collapsed(state::read_view_state(&args.list).collapsed);
        info!(
            added = report.added.len(),
            dropped = report.dropped.len(),
            reinitialized = report.reinitialized,
            "list refreshed"
        );
        if !json {
            println!();
            println!(
                "-- refreshed: +{} -{}",
                report.added.len(),
                report.dropped.len()
            );
        }
        render(&view, config, json)?;
    }
}

fn render(
    view: &ListReconciler<CollectingHost>,
    config: &Config,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let display = view.display_view();
    if json {
        let out = view_to_json(view.snapshot().week_id.as_deref(), &display);
        println!("{}", serde_json::to_string(&out)?);
    } else {
        println!("{}", format_view(&display, &config.display));
    }
    Ok(())
}
