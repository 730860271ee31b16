use anyhow::Context as _;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

/// Element ids the page contract requires.
const TOGGLE_ID: &str = "theme-toggler";
const HEADER_ID: &str = "header";
const NAVBAR_ID: &str = "navbar";
const LOGO_ID: &str = "logo";
const FOOTER_ID: &str = "footer";

/// Optional region ids, each independently present-or-absent.
const WORD_OF_THE_DAY_ID: &str = "word-of-the-day-data-container";
const STARTER_ID: &str = "div-starter-container";
const PLUS_ID: &str = "div-plus-container";
const PRO_ID: &str = "div-pro-container";

/// Handles to the page regions the theme touches, resolved once at startup.
///
/// A missing required element is a fatal integration bug and fails fast;
/// the optional regions are silently skipped when absent.
#[derive(Debug)]
pub struct PageElements {
    pub root: NodeDataRef<ElementData>,
    pub toggle: NodeDataRef<ElementData>,
    pub header: NodeDataRef<ElementData>,
    pub navbar: NodeDataRef<ElementData>,
    pub logo: NodeDataRef<ElementData>,
    pub footer: NodeDataRef<ElementData>,
    pub word_of_the_day: Option<NodeDataRef<ElementData>>,
    pub starter: Option<NodeDataRef<ElementData>>,
    pub plus: Option<NodeDataRef<ElementData>>,
    pub pro: Option<NodeDataRef<ElementData>>,
}

/// Icon and logo URLs carried as data attributes on the navbar.
#[derive(Debug)]
pub struct NavbarAssets {
    pub light_mode_img: String,
    pub dark_mode_img: String,
    pub logo_dark: String,
    pub logo_light: String,
}

impl PageElements {
    pub fn resolve(document: &NodeRef) -> anyhow::Result<Self> {
        Ok(Self {
            root: document
                .select_first("html")
                .ok()
                .context("document has no root html element")?,
            toggle: required(document, TOGGLE_ID)?,
            header: required(document, HEADER_ID)?,
            navbar: required(document, NAVBAR_ID)?,
            logo: required(document, LOGO_ID)?,
            footer: required(document, FOOTER_ID)?,
            word_of_the_day: optional(document, WORD_OF_THE_DAY_ID),
            starter: optional(document, STARTER_ID),
            plus: optional(document, PLUS_ID),
            pro: optional(document, PRO_ID),
        })
    }

    pub fn navbar_assets(&self) -> anyhow::Result<NavbarAssets> {
        let attrs = self.navbar.attributes.borrow();
        Ok(NavbarAssets {
            light_mode_img: data_attr(&attrs, "data-light-mode-img")?,
            dark_mode_img: data_attr(&attrs, "data-dark-mode-img")?,
            logo_dark: data_attr(&attrs, "data-img-logo-dark")?,
            logo_light: data_attr(&attrs, "data-img-logo-light")?,
        })
    }
}

fn required(document: &NodeRef, id: &str) -> anyhow::Result<NodeDataRef<ElementData>> {
    document
        .select_first(&format!("#{id}"))
        .ok()
        .with_context(|| format!("required element #{id} missing from page"))
}

fn optional(document: &NodeRef, id: &str) -> Option<NodeDataRef<ElementData>> {
    document.select_first(&format!("#{id}")).ok()
}

fn data_attr(attrs: &kuchiki::Attributes, name: &str) -> anyhow::Result<String> {
    attrs
        .get(name)
        .map(str::to_string)
        .with_context(|| format!("navbar is missing the {name} attribute"))
}

pub fn set_attr(el: &NodeDataRef<ElementData>, name: &str, value: &str) {
    el.attributes.borrow_mut().insert(name, value.to_string());
}

pub fn has_class(el: &NodeDataRef<ElementData>, name: &str) -> bool {
    el.attributes
        .borrow()
        .get("class")
        .map(|classes| classes.split_whitespace().any(|token| token == name))
        .unwrap_or(false)
}

pub fn add_class(el: &NodeDataRef<ElementData>, name: &str) {
    if has_class(el, name) {
        return;
    }
    let mut attrs = el.attributes.borrow_mut();
    let current = attrs.get("class").unwrap_or("").trim().to_string();
    let updated = if current.is_empty() {
        name.to_string()
    } else {
        format!("{current} {name}")
    };
    attrs.insert("class", updated);
}

pub fn remove_class(el: &NodeDataRef<ElementData>, name: &str) {
    let mut attrs = el.attributes.borrow_mut();
    let Some(current) = attrs.get("class").map(str::to_string) else {
        return;
    };
    let updated = current
        .split_whitespace()
        .filter(|token| *token != name)
        .collect::<Vec<_>>()
        .join(" ");
    attrs.insert("class", updated);
}

/// Swaps one class token for another, like `classList.replace`: a no-op
/// when the old token is not present.
pub fn replace_class(el: &NodeDataRef<ElementData>, from: &str, to: &str) {
    if !has_class(el, from) {
        return;
    }
    let mut attrs = el.attributes.borrow_mut();
    let current = attrs.get("class").unwrap_or("").to_string();
    let updated = current
        .split_whitespace()
        .map(|token| if token == from { to } else { token })
        .collect::<Vec<_>>()
        .join(" ");
    attrs.insert("class", updated);
}

/// Replaces the element's entire class list wholesale.
pub fn set_class(el: &NodeDataRef<ElementData>, value: &str) {
    el.attributes.borrow_mut().insert("class", value.to_string());
}
