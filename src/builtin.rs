use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const BUILTIN_CSS: &str = include_str!("builtin.css");

/// A bundled dictionary-style page carrying every element the theme
/// contract touches, so the tool is usable without external HTML.
pub fn sample_page() -> String {
    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Wordsmith" }
                style { (PreEscaped(BUILTIN_CSS)) }
            }
            body {
                header id="header" class="bg-light mb-5 header-container" {
                    nav id="navbar" class="navbar"
                        data-light-mode-img="/static/img/sun.svg"
                        data-dark-mode-img="/static/img/moon.svg"
                        data-img-logo-dark="/static/img/logo-dark.svg"
                        data-img-logo-light="/static/img/logo-light.svg" {
                        img id="logo" src="/static/img/logo-light.svg" alt="Wordsmith";
                        button id="theme-toggler" type="button" class="btn bg-dark text-light" {
                            img src="/static/img/moon.svg" alt="moon" class="theme-img";
                        }
                    }
                }
                main {
                    section id="word-of-the-day-data-container" class="bg-light" {
                        h2 { "Word of the day" }
                        p { "petrichor — the earthy scent after rain" }
                    }
                    section class="pricing" {
                        div id="div-starter-container" class="starter-container-light" {
                            h3 { "Starter" }
                            p { "Look up words and save favourites." }
                        }
                        div id="div-plus-container" class="plus-container-light" {
                            h3 { "Plus" }
                            p { "Adds word games and history." }
                        }
                        div id="div-pro-container" class="pro-container-light" {
                            h3 { "Pro" }
                            p { "Everything, plus the full API." }
                        }
                    }
                }
                footer id="footer" class="bg-light" {
                    p { "Wordsmith — a small dictionary" }
                }
            }
        }
    };
    markup.into_string()
}
