use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use kawal_blt::{report, visible_recipients, Region, RecipientStore, SortDirection, SortField, SortSpec, ViewState};

#[derive(Parser, Debug)]
#[command(name = "kawal-blt")]
#[command(about = "Daftar penerima BLT Kesra Desa Komis dengan validasi Nomor KK mandiri.", version)]
struct Cli {
    /// Recipient list to use instead of the bundled one (.csv or .json)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Append logs to this file (the interactive UI logs nowhere else)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive browser (default)
    Tui,
    /// Print the recipient list with masked KK numbers
    #[command(alias = "ls")]
    List {
        /// komis, totongan, duko, malakah, or the full "DSN. ..." label
        #[arg(long)]
        region: Option<Region>,

        /// Case-insensitive match on name or region
        #[arg(long)]
        search: Option<String>,

        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
    },
    /// Recipient count per dusun
    Stats,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortArg {
    Name,
    Region,
}

impl From<SortArg> for SortField {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortField::FullName,
            SortArg::Region => SortField::Region,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui);
    let interactive = matches!(command, Command::Tui);

    init_logging(cli.log_file.as_deref(), interactive)?;
    let store = load_store(cli.data.as_deref())?;

    match command {
        Command::Tui => run_ui_mode(store)?,
        Command::List {
            region,
            search,
            sort,
            desc,
        } => {
            let state = list_view_state(region, search, sort, desc);
            let rows = visible_recipients(store.all(), &state);
            for line in report::listing_lines(&rows) {
                println!("{}", line);
            }
        }
        Command::Stats => {
            for line in report::stats_lines(&store) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// Same view state the interactive list would reach with these choices.
fn list_view_state(region: Option<Region>, search: Option<String>, sort: Option<SortArg>, desc: bool) -> ViewState {
    let mut state = ViewState::new();
    if let Some(region) = region {
        state.select_region(region);
    }
    if let Some(term) = search {
        state.set_search_term(term);
    }
    state.set_sort(sort.map(|field| SortSpec {
        field: field.into(),
        direction: if desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        },
    }));
    state
}

/// File sink when `--log-file` is given; otherwise stderr for one-shot commands only,
/// since the interactive UI owns the terminal.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if !interactive => {
            let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

fn load_store(data: Option<&Path>) -> Result<RecipientStore> {
    match data {
        Some(path) => RecipientStore::from_path(path)
            .with_context(|| format!("Failed to load recipients from {}", path.display())),
        None => RecipientStore::bundled().context("Bundled recipient data is invalid"),
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode(store: RecipientStore) -> Result<()> {
    println!("🖥️  Loading Kawal BLT UI... ({} penerima)\n", store.len());

    let mut app = kawal_blt::ui::App::new(store);
    kawal_blt::ui::run_ui(&mut app)?;

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_store: RecipientStore) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use: kawal-blt list / kawal-blt stats");
    std::process::exit(1);
}
