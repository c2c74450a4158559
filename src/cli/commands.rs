use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lx", about = concat!("lectio v", env!("CARGO_PKG_VERSION"), " - Ethiopian Bible reading planner"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a lectio directory here
    Init(InitArgs),
    /// List the thirteen months of the calendar plan
    Months,
    /// List readings for a plan
    List(ListArgs),
    /// Show one reading
    Show(IdArg),
    /// Toggle a reading's completion mark
    Toggle(IdArg),
    /// Set, show, or clear the note on a reading
    Note(NoteArgs),
    /// Show study details for a reading
    Details(IdArg),
    /// Search readings by regex
    Search(SearchArgs),
    /// Show overall progress
    Progress,
    /// Show today's reading (Ethiopian calendar)
    Today,
}

#[derive(Args)]
pub struct InitArgs {
    /// Reinitialize even if lectio/ already exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Plan to list: calendar (default), chronological, nt90
    pub plan: Option<String>,
    /// Month slug for the calendar plan (default: all months)
    #[arg(long)]
    pub month: Option<String>,
}

#[derive(Args)]
pub struct IdArg {
    /// Reading identifier, e.g. meskerem-3, chrono-12, nt90-45
    pub id: String,
}

#[derive(Args)]
pub struct NoteArgs {
    /// Reading identifier
    pub id: String,
    /// Note text (omit to show the current note; empty string clears it)
    pub text: Option<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Regex pattern to search for
    pub pattern: String,
    /// Limit search to one plan
    #[arg(long)]
    pub plan: Option<String>,
}
