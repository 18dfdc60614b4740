use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "grocer", about = concat!("grocer v", env!("CARGO_PKG_VERSION"), " - grocery lists from your meal plan"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./grocer.toml if present)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a grocery list, grouped by category
    Show(ShowArgs),
    /// Check or uncheck items
    Toggle(ToggleArgs),
    /// Reorder items by index
    Reorder(ReorderArgs),
    /// Collapse a category section
    Collapse(CategoryArgs),
    /// Expand a collapsed category section
    Expand(CategoryArgs),
    /// List categories in display order
    Categories,
    /// Re-render the list whenever the file changes
    Watch(WatchArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Grocery list JSON file
    pub list: PathBuf,
    /// One flat list instead of category sections
    #[arg(long)]
    pub flat: bool,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Grocery list JSON file
    pub list: PathBuf,
    /// Item names (exact, case-sensitive)
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Args)]
pub struct ReorderArgs {
    /// Grocery list JSON file
    pub list: PathBuf,
    /// Move the item at FROM to TO, e.g. `--move 0:2` (repeatable, applied in order).
    /// Positions count through the sectioned view from the top, as `show` lists it
    #[arg(long = "move", value_name = "FROM:TO", value_parser = parse_move, required = true)]
    pub moves: Vec<(usize, usize)>,
    /// Print the resulting order without saving it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct CategoryArgs {
    /// Grocery list JSON file
    pub list: PathBuf,
    /// Category tag (see `grocer categories`)
    pub category: String,
}

#[derive(Args)]
pub struct WatchArgs {
    /// Grocery list JSON file
    pub list: PathBuf,
}

/// Parse `FROM:TO` into a pair of indices
pub fn parse_move(s: &str) -> Result<(usize, usize), String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got '{}'", s))?;
    let from = from
        .trim()
        .parse()
        .map_err(|_| format!("invalid FROM index '{}'", from))?;
    let to = to
        .trim()
        .parse()
        .map_err(|_| format!("invalid TO index '{}'", to))?;
    Ok((from, to))
}
