//! `eventhub` - browse EventHub events and clubs from the terminal.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use eventhub::config::LOG_VAR;
use eventhub::output::{render_detail, render_facets, render_listing, serialize_structured, Card, ClubDetail};
use eventhub::{
    Club, Config, Event, Facets, FeatureFlags, FileSource, FilterChange, Fixture, FixtureSource,
    ListingPage, OutputMode, Pipeline, RecordStore, Selector, TextMode,
};

#[derive(Parser)]
#[command(name = "eventhub", version)]
#[command(about = "Filter, sort and search EventHub events and clubs")]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputMode>,

    /// Directory holding clubs.{json,yaml,yml} and events.{json,yaml,yml}
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Treat the viewer as signed in
    #[arg(long, global = true)]
    authenticated: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List events
    Events(EventArgs),
    /// List clubs
    Clubs(ClubArgs),
    /// Show one event
    Event { id: u32 },
    /// Show one club and its events
    Club { id: u32 },
    /// Show the selector options for a listing
    Facets {
        #[arg(value_enum)]
        listing: ListingKind,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ListingKind {
    Events,
    Clubs,
}

#[derive(Args)]
struct FilterArgs {
    /// Case-insensitive text search
    #[arg(short, long)]
    search: Option<String>,

    /// Category, or "all"
    #[arg(short, long)]
    category: Option<String>,

    /// Location substring, or "all"
    #[arg(short, long)]
    location: Option<String>,

    /// Sort key (see `eventhub facets`)
    #[arg(long)]
    sort: Option<String>,
}

#[derive(Args)]
struct EventArgs {
    #[command(flatten)]
    filters: FilterArgs,

    /// upcoming, ongoing, completed or all
    #[arg(long)]
    status: Option<String>,
}

#[derive(Args)]
struct ClubArgs {
    #[command(flatten)]
    filters: FilterArgs,

    /// Only clubs you have joined (needs --authenticated)
    #[arg(long)]
    joined: bool,
}

impl FilterArgs {
    fn changes(self) -> Vec<FilterChange> {
        let mut changes = Vec::new();
        if let Some(text) = self.search {
            changes.push(FilterChange::Search(text));
        }
        if let Some(category) = self.category {
            changes.push(FilterChange::Category(Selector::parse(&category)));
        }
        if let Some(location) = self.location {
            changes.push(FilterChange::Location(Selector::parse(&location)));
        }
        if self.sort.is_some() {
            changes.push(FilterChange::Sort(self.sort));
        }
        changes
    }
}

impl EventArgs {
    fn changes(self) -> Vec<FilterChange> {
        let mut changes = self.filters.changes();
        if let Some(status) = self.status {
            changes.push(FilterChange::Bucket(Selector::parse(&status)));
        }
        changes
    }
}

impl ClubArgs {
    fn changes(self, flags: FeatureFlags) -> Vec<FilterChange> {
        let mut changes = self.filters.changes();
        if self.joined {
            if !flags.authenticated {
                tracing::warn!("--joined has no effect without --authenticated");
            }
            changes.push(FilterChange::JoinedOnly(true));
        }
        changes
    }
}

impl Cli {
    /// Command-line flags override the environment.
    fn configure(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.authenticated {
            config.flags.authenticated = true;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.configure(Config::from_env());
    println!("{}", run(cli.command, &config)?);
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Command, config: &Config) -> anyhow::Result<String> {
    match command {
        Command::Events(args) => list::<Event>(config, args.changes()),
        Command::Clubs(args) => list::<Club>(config, args.changes(config.flags)),
        Command::Event { id } => {
            let events = load::<Event>(config)?;
            let Some(event) = events.get(id) else {
                bail!("no event with id {id}");
            };
            emit(config, event, |mode| render_detail(event, &[], mode, config.flags))
        }
        Command::Club { id } => {
            let clubs = load::<Club>(config)?;
            let events = load::<Event>(config)?;
            let Some(club) = clubs.get(id) else {
                bail!("no club with id {id}");
            };
            let detail = ClubDetail {
                club,
                events: events.for_club(id),
            };
            emit(config, &detail, |mode| detail.render(mode, config.flags))
        }
        Command::Facets { listing } => match listing {
            ListingKind::Events => facets::<Event>(config),
            ListingKind::Clubs => facets::<Club>(config),
        },
    }
}

fn load<R>(config: &Config) -> anyhow::Result<RecordStore<R>>
where
    R: Card + Fixture + DeserializeOwned,
{
    let listing = format!("{}s", R::KIND);
    let store = match config.data_file(&listing)? {
        Some(path) => RecordStore::load(&FileSource::new(&path))
            .with_context(|| format!("loading {listing} from {}", path.display()))?,
        None => RecordStore::load(&FixtureSource)?,
    };
    Ok(store)
}

fn list<R>(config: &Config, changes: Vec<FilterChange>) -> anyhow::Result<String>
where
    R: Card + Fixture + DeserializeOwned + Serialize,
{
    let mut page = ListingPage::new(Pipeline::new(load::<R>(config)?).with_flags(config.flags));
    for change in changes {
        page.apply(change);
    }
    let view = page.view();
    emit(config, &view, |mode| render_listing(&view, mode, config.flags))
}

fn facets<R>(config: &Config) -> anyhow::Result<String>
where
    R: Card + Fixture + DeserializeOwned,
{
    let store = load::<R>(config)?;
    let facets = Facets::collect(&store, &R::profile());
    emit(config, &facets, |mode| render_facets(&facets, mode))
}

fn emit<T: Serialize>(
    config: &Config,
    data: &T,
    text: impl FnOnce(TextMode) -> String,
) -> anyhow::Result<String> {
    match config.output.to_text_mode() {
        Some(mode) => Ok(text(mode)),
        None => Ok(serialize_structured(data, config.output)?),
    }
}
