mod builtin;
mod cli;
mod controller;
mod page;
mod store;
mod system;
mod theme;

use anyhow::Context as _;
use kuchiki::traits::TendrilSink as _;

pub use builtin::{sample_page, BUILTIN_CSS};
pub use cli::{Args as CliArgs, Event, SystemSource};
pub use controller::ThemeController;
pub use page::{NavbarAssets, PageElements};
pub use store::{FilePrefs, MemoryPrefs, PreferenceStore};
pub use system::{FixedScheme, OsScheme, SystemScheme};
pub use theme::{ColorMode, Theme};

pub fn run(args: cli::Args) -> anyhow::Result<()> {
    let html = if args.builtin_page {
        builtin::sample_page()
    } else {
        let path = args
            .input
            .as_ref()
            .context("either --input or --builtin-page is required")?;
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
    };

    let document = kuchiki::parse_html().one(html);
    let mut store = store::FilePrefs::open(&args.store)?;
    let system: Box<dyn SystemScheme> = match args.system {
        SystemSource::Detect => Box::new(system::OsScheme),
        SystemSource::Light => Box::new(system::FixedScheme(ColorMode::Light)),
        SystemSource::Dark => Box::new(system::FixedScheme(ColorMode::Dark)),
    };

    let mut controller = ThemeController::new(&document, &mut store, system.as_ref())?;
    match args.event {
        Event::Load => controller.apply_preferred(),
        Event::Toggle => controller.on_toggle()?,
        Event::SystemChange => controller.on_system_change(),
    }

    let mut out = Vec::new();
    document.serialize(&mut out).context("serialize page")?;
    let html = String::from_utf8(out).context("page not utf-8")?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, html).with_context(|| format!("write {}", path.display()))?;
            tracing::info!(out = %path.display(), "wrote themed page");
        }
        None => {
            use std::io::Write as _;
            std::io::stdout()
                .write_all(html.as_bytes())
                .context("write stdout")?;
        }
    }
    Ok(())
}
