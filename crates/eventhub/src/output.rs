//! Output modes and text rendering.
//!
//! [`OutputMode`] is the user-facing `--output` choice. Structured modes
//! serialize views directly; text modes render record cards, styled with
//! `console` when the mode is [`TextMode::Styled`].

use console::Style;
use serde::Serialize;

use crate::config::FeatureFlags;
use crate::error::{EventHubError, Result};
use crate::facets::Facets;
use crate::model::{Club, Event};
use crate::pipeline::ListingView;
use crate::profile::Listing;

/// Controls how output is rendered.
///
/// - `Auto` - Detect terminal (TTY → Term, pipe → Text)
/// - `Term` - Always apply terminal styling
/// - `Text` - Never apply styling
/// - `Json`, `Yaml` - Serialize data directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    #[default]
    Auto,
    Term,
    Text,
    Json,
    Yaml,
}

impl OutputMode {
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json | OutputMode::Yaml)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::Json => "json",
            OutputMode::Yaml => "yaml",
        }
    }

    /// Resolves Auto to Term or Text based on whether a user is attending
    /// the terminal. Other modes are returned unchanged.
    pub fn resolve_auto(&self) -> OutputMode {
        match self {
            OutputMode::Auto if console::user_attended() => OutputMode::Term,
            OutputMode::Auto => OutputMode::Text,
            other => *other,
        }
    }

    /// `None` for structured modes.
    pub fn to_text_mode(&self) -> Option<TextMode> {
        match self.resolve_auto() {
            OutputMode::Term => Some(TextMode::Styled),
            OutputMode::Text | OutputMode::Auto => Some(TextMode::Plain),
            OutputMode::Json | OutputMode::Yaml => None,
        }
    }
}

/// Whether text output carries ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    Styled,
    Plain,
}

/// Serializes data in a structured output mode.
pub fn serialize_structured<T: Serialize>(data: &T, mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputMode::Yaml => Ok(serde_yaml::to_string(data)?),
        other => Err(EventHubError::NotStructured(other.as_str())),
    }
}

/// Applies named styles, or nothing in plain mode.
#[derive(Debug, Clone)]
pub struct Styler {
    mode: TextMode,
}

impl Styler {
    pub fn new(mode: TextMode) -> Self {
        Styler { mode }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        match self.mode {
            TextMode::Styled => style.force_styling(true).apply_to(text).to_string(),
            TextMode::Plain => text.to_string(),
        }
    }

    pub fn title(&self, text: &str) -> String {
        self.paint(text, Style::new().bold())
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, Style::new().dim())
    }

    pub fn good(&self, text: &str) -> String {
        self.paint(text, Style::new().green())
    }

    pub fn bad(&self, text: &str) -> String {
        self.paint(text, Style::new().red().bold())
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(text, Style::new().cyan())
    }
}

/// Text rendering of one record.
pub trait Card: Listing {
    /// Summary lines, as shown in a listing.
    fn card(&self, s: &Styler, flags: FeatureFlags) -> Vec<String>;

    fn description(&self) -> Option<&str>;
}

const SEP: &str = " · ";

impl Card for Club {
    fn card(&self, s: &Styler, flags: FeatureFlags) -> Vec<String> {
        let mut heading = s.title(&self.name);
        if self.verified {
            heading.push(' ');
            heading.push_str(&s.good("[verified]"));
        }

        let mut place = vec![self.category.clone()];
        place.extend(self.location.clone());

        let rating = match self.rating {
            Some(r) => format!("rated {r:.1}"),
            None => "unrated".to_string(),
        };

        let mut lines = vec![
            heading,
            format!("  {}", place.join(SEP)),
            format!(
                "  {} members{SEP}{} upcoming events{SEP}{rating}",
                self.members, self.upcoming_events
            ),
        ];
        if !self.tags.is_empty() {
            lines.push(format!("  {}", s.muted(&format!("tags: {}", self.tags.join(", ")))));
        }
        if flags.authenticated {
            if let Some(joined_at) = &self.joined_at {
                lines.push(format!("  {}", s.accent(&format!("joined {joined_at}"))));
            }
        }
        lines
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Card for Event {
    fn card(&self, s: &Styler, _flags: FeatureFlags) -> Vec<String> {
        let heading = format!("{} {}", s.title(&self.title), s.muted(&format!("({})", self.status)));

        let attendance = match self.max_attendees {
            Some(capacity) if self.is_full() => {
                format!("{}/{capacity} attending{SEP}{}", self.attendees, s.bad("FULL"))
            }
            Some(capacity) => format!(
                "{}/{capacity} attending{SEP}{} spots left",
                self.attendees,
                capacity - self.attendees
            ),
            None => format!("{} attending", self.attendees),
        };

        let price = match self.price {
            Some(_) if self.is_free() => s.good("Free"),
            Some(p) => format!("${p:.2}"),
            None => "price TBA".to_string(),
        };

        let mut lines = vec![
            heading,
            format!("  {}{SEP}{} at {}", self.club.name, self.date, self.time),
            format!("  {}", self.location),
            format!("  {attendance}{SEP}{price}"),
        ];
        if !self.tags.is_empty() {
            lines.push(format!("  {}", s.muted(&format!("tags: {}", self.tags.join(", ")))));
        }
        lines
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Renders a listing view as text.
pub fn render_listing<R: Card>(view: &ListingView<'_, R>, mode: TextMode, flags: FeatureFlags) -> String {
    let s = Styler::new(mode);
    let plural = format!("{}s", R::KIND);
    let chips = view
        .chips
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(SEP);
    let mut out = Vec::new();

    if view.is_empty() {
        if view.total == 0 {
            out.push(s.muted(&format!("No {plural} to show.")));
        } else {
            out.push(s.muted(&format!("No {plural} match the current filters.")));
        }
        if !chips.is_empty() {
            out.push(format!("Try clearing: {chips}"));
        }
        return out.join("\n");
    }

    out.push(format!(
        "Showing {} of {} {plural}",
        view.result_count, view.total
    ));
    if !chips.is_empty() {
        out.push(format!("Filters: {chips}"));
    }
    for record in &view.records {
        out.push(String::new());
        out.extend(record.card(&s, flags));
    }
    out.join("\n")
}

/// Renders one record with its description, plus extra trailing lines.
pub fn render_detail<R: Card>(record: &R, extra: &[String], mode: TextMode, flags: FeatureFlags) -> String {
    let s = Styler::new(mode);
    let mut out = record.card(&s, flags);
    if let Some(description) = record.description() {
        out.push(String::new());
        out.push(description.to_string());
    }
    if !extra.is_empty() {
        out.push(String::new());
        out.extend(extra.iter().cloned());
    }
    out.join("\n")
}

/// A club with the events it runs.
#[derive(Debug, Serialize)]
pub struct ClubDetail<'a> {
    pub club: &'a Club,
    pub events: Vec<&'a Event>,
}

impl ClubDetail<'_> {
    pub fn render(&self, mode: TextMode, flags: FeatureFlags) -> String {
        let s = Styler::new(mode);
        let mut extra = vec![s.title("Events")];
        if self.events.is_empty() {
            extra.push(s.muted("  none scheduled"));
        }
        extra.extend(
            self.events
                .iter()
                .map(|e| format!("  #{} {}{SEP}{}{SEP}{}", e.id, e.title, e.date, e.status)),
        );
        render_detail(self.club, &extra, mode, flags)
    }
}

pub fn render_facets(facets: &Facets, mode: TextMode) -> String {
    let s = Styler::new(mode);
    let mut out = vec![
        format!("{} {}", s.title("categories:"), facets.categories.join(", ")),
        format!("{} {}", s.title("locations:"), facets.locations.join(", ")),
    ];
    if !facets.buckets.is_empty() {
        out.push(format!("{} {}", s.title("status:"), facets.buckets.join(", ")));
    }
    out.push(format!("{} {}", s.title("sort:"), facets.sort_keys.join(", ")));
    out.join("\n")
}
