mod watch;
pub use watch::cmd_watch;

use std::path::Path;

use serde::Serialize;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::list_io::{self, ListError};
use crate::io::state::{self, ViewState};
use crate::model::category::Category;
use crate::model::config::Config;
use crate::view::{CollectingHost, ListReconciler};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Show(args) => cmd_show(args, &config, json),
        Commands::Toggle(args) => cmd_toggle(args, &config, json),
        Commands::Reorder(args) => cmd_reorder(args, &config, json),
        Commands::Collapse(args) => cmd_set_collapsed(args, &config, true, json),
        Commands::Expand(args) => cmd_set_collapsed(args, &config, false, json),
        Commands::Categories => cmd_categories(json),
        Commands::Watch(args) => cmd_watch(args, &config, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a snapshot and wrap it in a view whose host hides pantry items.
fn open_list(path: &Path, config: &Config) -> Result<ListReconciler<CollectingHost>, ListError> {
    let list = list_io::read_list(path)?;
    let host = CollectingHost::with_hidden(config.pantry.items.iter().cloned());
    let mut view = ListReconciler::new(list, host);
    view.set_collapsed(state::read_view_state(path).collapsed);
    Ok(view)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_category(tag: &str) -> Result<Category, String> {
    Category::parse(tag).ok_or_else(|| {
        let known: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        format!(
            "unknown category '{}' (expected one of: {})",
            tag,
            known.join(", ")
        )
    })
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_show(args: ShowArgs, config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let view = open_list(&args.list, config)?;
    let week = view.snapshot().week_id.as_deref();

    if args.flat {
        let items = view.display_items();
        if json {
            return print_json(&items_to_json(week, &items));
        }
        if items.is_empty() {
            println!("(list is empty)");
        } else {
            println!("{}", format_flat(&items, &config.display, false));
        }
        return Ok(());
    }

    let display = view.display_view();
    if json {
        return print_json(&view_to_json(week, &display));
    }
    let text = format_view(&display, &config.display);
    if text.is_empty() {
        println!("(list is empty)");
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn cmd_categories(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        #[derive(Serialize)]
        struct CategoryJson {
            tag: Category,
            label: &'static str,
        }
        let all: Vec<CategoryJson> = Category::ALL
            .iter()
            .map(|c| CategoryJson {
                tag: *c,
                label: c.label(),
            })
            .collect();
        return print_json(&all);
    }
    for c in Category::ALL {
        println!("{:<10} {}", c.as_str(), c.label());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_toggle(
    args: ToggleArgs,
    config: &Config,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = open_list(&args.list, config)?;

    let results: Vec<ToggleJson> = args
        .names
        .iter()
        .map(|name| ToggleJson {
            name: name.clone(),
            checked: view.toggle(name),
        })
        .collect();

    let toggles = std::mem::take(&mut view.host_mut().toggles);
    if !toggles.is_empty() {
        let mut list = view.snapshot().clone();
        list_io::apply_toggles(&mut list, &toggles);
        list_io::write_list(&args.list, &list)?;
    }

    if json {
        return print_json(&results);
    }
    for r in &results {
        match r.checked {
            Some(true) => println!("checked {}", r.name),
            Some(false) => println!("unchecked {}", r.name),
            None => eprintln!("skipped {}: not on the list", r.name),
        }
    }
    Ok(())
}

fn cmd_reorder(
    args: ReorderArgs,
    config: &Config,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = open_list(&args.list, config)?;
    view.begin_reorder();

    for (from, to) in &args.moves {
        if !view.move_item(*from, *to) {
            eprintln!(
                "ignored move {}:{} (list has {} items)",
                from,
                to,
                view.display_items().len()
            );
        }
    }

    let order = view.display_items();
    if args.dry_run {
        view.cancel_reorder();
    } else if view.commit_reorder()
        && let Some(committed) = view.host_mut().reorders.pop()
    {
        let mut list = view.snapshot().clone();
        list_io::apply_order(&mut list, &committed);
        list_io::write_list(&args.list, &list)?;
    }

    let week = view.snapshot().week_id.as_deref();
    if json {
        return print_json(&items_to_json(week, &order));
    }
    if order.is_empty() {
        println!("(list is empty)");
    } else {
        println!("{}", format_flat(&order, &config.display, true));
    }
    Ok(())
}

fn cmd_set_collapsed(
    args: CategoryArgs,
    config: &Config,
    collapse: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let category = parse_category(&args.category)?;
    let mut view = open_list(&args.list, config)?;

    if view.collapsed().contains(&category) != collapse {
        view.toggle_collapsed(category);
        let state = ViewState {
            collapsed: view.collapsed().clone(),
        };
        state::write_view_state(&args.list, &state)?;
    }

    if json {
        return print_json(&state::read_view_state(&args.list));
    }
    let verb = if collapse { "collapsed" } else { "expanded" };
    println!("{} {}", verb, category.label());
    Ok(())
}
