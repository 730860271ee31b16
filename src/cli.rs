use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Event delivered to the controller for this invocation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Event {
    /// Page load: apply the preferred theme once.
    Load,
    /// Toggle-control activation: flip the theme and persist the choice.
    Toggle,
    /// OS color-scheme change notification.
    SystemChange,
}

/// Where the OS color-scheme preference comes from.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SystemSource {
    /// Query the operating system.
    Detect,
    /// Behave as if the OS prefers light.
    Light,
    /// Behave as if the OS prefers dark.
    Dark,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Input HTML page. Must carry the contract elements (`#theme-toggler`,
    /// `#header`, `#navbar` with its icon/logo data attributes, `#logo`,
    /// `#footer`).
    #[arg(long, conflicts_with = "builtin_page")]
    pub input: Option<PathBuf>,

    /// Use the bundled sample page instead of reading --input.
    #[arg(long)]
    pub builtin_page: bool,

    /// Output HTML path. Writes to stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Preference store file (JSON, single `theme` key). Created on the
    /// first explicit choice.
    #[arg(long, default_value = "theme-prefs.json")]
    pub store: PathBuf,

    /// Event to deliver: `load`, `toggle`, or `system-change`.
    #[arg(long, value_enum, default_value = "load")]
    pub event: Event,

    /// OS color-scheme source: `detect`, or force `light`/`dark`.
    #[arg(long, value_enum, default_value = "detect")]
    pub system: SystemSource,
}
