//! Dioxus front end for the vitrine presentation engine.
//!
//! Compiled to WASM. Each section component mounts its surfaces on the
//! shared engine and renders from the page view the bridge keeps current.

mod bridge;
mod sections;
mod style;

use dioxus::prelude::*;
use vitrine::engine::PageView;

use crate::bridge::Page;

fn main() {
    vitrine::web::init_logging(log::Level::Info);
    launch(app);
}

fn app() -> Element {
    let view = use_signal(PageView::new);
    let page = use_hook(move || {
        Page::start(view).map_err(|e| {
            log::error!("failed to start page: {e}");
            e.to_string()
        })
    });

    match page {
        Ok(page) => rsx! { Portfolio { page } },
        Err(msg) => rsx! {
            div {
                style: "padding: 16px; color: #585b70;",
                "Interactive sections unavailable: {msg}"
            }
        },
    }
}

#[component]
fn Portfolio(page: Page) -> Element {
    let _ = use_context_provider(|| page);

    rsx! {
        main { class: "portfolio",
            sections::Hero {
                phrases: vec![
                    "Software Engineer".to_owned(),
                    "Systems Programmer".to_owned(),
                    "Open Source Contributor".to_owned(),
                ],
            }
            sections::About {}
            sections::Projects {
                titles: vec![
                    "Terminal Dashboard".to_owned(),
                    "Packet Inspector".to_owned(),
                    "Static Site Builder".to_owned(),
                ],
            }
            sections::Services {}
        }
    }
}
