use kuchiki::traits::TendrilSink as _;
use kuchiki::{ElementData, NodeDataRef, NodeRef};
use maud::html;

use crate::page::{
    add_class, has_class, remove_class, replace_class, set_attr, set_class, NavbarAssets,
    PageElements,
};
use crate::store::PreferenceStore;
use crate::system::SystemScheme;
use crate::theme::Theme;

/// Header classes marking a pricing-tier page. When one is present the
/// theme only toggles the background and border utilities around it.
const HEADER_MARKERS: [&str; 3] = [
    "header-starter-container",
    "header-plus-container",
    "header-pro-container",
];

/// Applies a theme to the page and reacts to toggle and OS events.
///
/// The applied visual state is always a pure function of the stored
/// preference (when present) or the OS preference, recomputed from scratch
/// on every apply.
pub struct ThemeController<'a> {
    elements: PageElements,
    assets: NavbarAssets,
    store: &'a mut dyn PreferenceStore,
    system: &'a dyn SystemScheme,
}

impl<'a> ThemeController<'a> {
    pub fn new(
        document: &NodeRef,
        store: &'a mut dyn PreferenceStore,
        system: &'a dyn SystemScheme,
    ) -> anyhow::Result<Self> {
        let elements = PageElements::resolve(document)?;
        let assets = elements.navbar_assets()?;
        Ok(Self {
            elements,
            assets,
            store,
            system,
        })
    }

    /// The stored preference verbatim when one exists, else the OS mode.
    ///
    /// Stored values are not validated: an unrecognized string is returned
    /// unchanged. An empty string counts as no preference.
    pub fn preferred_theme(&self) -> Theme {
        match self.store.get() {
            Some(raw) if !raw.is_empty() => Theme::from_stored(&raw),
            _ => self.system.color_mode().into(),
        }
    }

    /// The startup sequence: apply the preferred theme exactly once before
    /// any event is delivered.
    pub fn apply_preferred(&self) {
        self.set_theme(self.preferred_theme());
    }

    /// Applies `theme` to the page. `auto` is collapsed to the OS mode
    /// first; the resolved value is used for the page only, never persisted.
    pub fn set_theme(&self, theme: Theme) {
        let theme = theme.resolve(self.system.color_mode());
        set_attr(&self.elements.root, "data-theme", theme.as_str());

        if theme.is_dark() {
            self.apply_dark();
        } else {
            self.apply_light();
        }
        tracing::info!(theme = %theme, "applied theme");
    }

    /// Toggle-control activation: anything not explicitly dark switches to
    /// dark. The new choice is persisted before it is applied, so the store
    /// always ends up explicitly set.
    pub fn on_toggle(&mut self) -> anyhow::Result<()> {
        let next = self.preferred_theme().toggled();
        self.store.set(next.as_str())?;
        self.set_theme(next);
        Ok(())
    }

    /// OS preference change: only relevant while the user has never made an
    /// explicit choice; a stored preference always wins.
    pub fn on_system_change(&self) {
        if self.has_explicit_preference() {
            tracing::debug!("explicit preference set; ignoring system change");
            return;
        }
        self.apply_preferred();
    }

    fn has_explicit_preference(&self) -> bool {
        self.store.get().is_some_and(|raw| !raw.is_empty())
    }

    fn apply_dark(&self) {
        // Dark state shows the light-mode icon, inviting the switch back.
        set_toggle_icon(&self.elements.toggle, &self.assets.light_mode_img, "sun");
        set_class(&self.elements.toggle, "btn bg-light text-dark");
        set_attr(&self.elements.root, "data-bs-theme", "dark");

        let header = &self.elements.header;
        if has_header_marker(header) {
            remove_class(header, "bg-light");
            add_class(header, "border-bottom");
        } else {
            set_class(header, "mb-5 header-container border-bottom");
        }

        set_attr(&self.elements.logo, "src", &self.assets.logo_dark);
        remove_class(&self.elements.footer, "bg-light");

        if let Some(word) = &self.elements.word_of_the_day {
            remove_class(word, "bg-light");
            add_class(word, "border");
        }
        for (container, plan) in self.plan_containers() {
            replace_class(
                container,
                &format!("{plan}-container-light"),
                &format!("{plan}-container-dark"),
            );
        }
    }

    fn apply_light(&self) {
        set_toggle_icon(&self.elements.toggle, &self.assets.dark_mode_img, "moon");
        set_class(&self.elements.toggle, "btn bg-dark text-light");
        // Light resolution writes "auto", not "light". Literal source
        // behavior, kept as-is.
        set_attr(&self.elements.root, "data-bs-theme", "auto");

        let header = &self.elements.header;
        if has_header_marker(header) {
            add_class(header, "bg-light");
            remove_class(header, "border-bottom");
        } else {
            set_class(header, "bg-light mb-5 header-container");
        }

        set_attr(&self.elements.logo, "src", &self.assets.logo_light);
        add_class(&self.elements.footer, "bg-light");

        if let Some(word) = &self.elements.word_of_the_day {
            add_class(word, "bg-light");
            remove_class(word, "border");
        }
        for (container, plan) in self.plan_containers() {
            replace_class(
                container,
                &format!("{plan}-container-dark"),
                &format!("{plan}-container-light"),
            );
        }
    }

    fn plan_containers(&self) -> impl Iterator<Item = (&NodeDataRef<ElementData>, &'static str)> {
        [
            (self.elements.starter.as_ref(), "starter"),
            (self.elements.plus.as_ref(), "plus"),
            (self.elements.pro.as_ref(), "pro"),
        ]
        .into_iter()
        .filter_map(|(container, plan)| container.map(|c| (c, plan)))
    }
}

fn has_header_marker(header: &NodeDataRef<ElementData>) -> bool {
    HEADER_MARKERS.iter().any(|marker| has_class(header, marker))
}

/// Rewrites the toggle control's content to a single themed icon image.
fn set_toggle_icon(toggle: &NodeDataRef<ElementData>, src: &str, alt: &str) {
    let markup = html! { img src=(src) alt=(alt) class="theme-img"; };
    let fragment = kuchiki::parse_html().one(markup.into_string());
    let img = fragment.select_first("img").unwrap().as_node().clone();

    let node = toggle.as_node();
    while let Some(child) = node.first_child() {
        child.detach();
    }
    node.append(img);
}
