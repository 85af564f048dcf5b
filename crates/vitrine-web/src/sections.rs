//! Page sections. Each mounts its surfaces through the bridge and renders
//! from the shared page view.

// `rsx!` expands event attributes into paths the lint flags as redundant.
#![allow(unused_qualifications)]

use dioxus::prelude::*;
use vitrine::catalog::{Catalog, Category, IconSlot};
use vitrine::engine::{SurfaceSpec, SurfaceView};
use vitrine::reveal::RevealEvent;
use vitrine::scenery::Scenery;
use vitrine::showcase::AssetHandle;
use vitrine::tabs::{PanelKey, PanelSet};

use crate::bridge::{bind_on_mount, use_surface, Page};
use crate::style;

// ── Hero ─────────────────────────────────────────────────────────────────

const STAR_COUNT: usize = 80;

/// Headline typewriter next to the 3D showcase.
#[component]
pub fn Hero(phrases: Vec<String>) -> Element {
    let page = use_context::<Page>();
    let headline = use_surface(move || SurfaceSpec::Typewriter { phrases });
    let showcase = use_surface(|| SurfaceSpec::Showcase {
        asset: AssetHandle("models/desk.glb".to_owned()),
    });
    let on_showcase_mounted = bind_on_mount(showcase);
    let stars = use_hook(|| Scenery::from_entropy().stars(STAR_COUNT));

    let view = page.view();
    let view = view.read();
    let text = view.text(headline).unwrap_or_default().to_owned();
    let caption = view.scene(showcase).map_or_else(String::new, |scene| {
        format!(
            "{} at {:.2}x, eye ({:.1}, {:.1}, {:.1})",
            scene.asset.0,
            scene.placement.scale,
            scene.eye.x,
            scene.eye.y,
            scene.eye.z,
        )
    });

    rsx! {
        section { class: "hero",
            div { class: "stars",
                for star in stars.iter() {
                    span { class: "star", style: "{style::star(star)}" }
                }
            }
            h1 { class: "headline",
                span { "{text}" }
                span { class: "cursor", "|" }
            }
            div {
                class: "showcase",
                onmounted: on_showcase_mounted,
                canvas { class: "showcase-canvas" }
                p { class: "showcase-caption", "{caption}" }
            }
        }
    }
}

// ── About ────────────────────────────────────────────────────────────────

const RESUME_HREF: &str = "/resume.pdf";

/// Biography tabs, the résumé download and the skill orbit.
#[component]
pub fn About() -> Element {
    let page = use_context::<Page>();
    let catalog = use_hook(Catalog::builtin);
    let tabs = use_surface(|| SurfaceSpec::Tabs);
    let download = use_surface(|| SurfaceSpec::Notice);
    let orbit = use_surface({
        let items = catalog.len();
        move || SurfaceSpec::SkillOrbit { items }
    });

    let view = page.view();
    let view = view.read();
    let active = view.active_panel(tabs).unwrap_or_default();
    let slots = view
        .orbit(orbit)
        .map(|(_, slots)| slots.clone())
        .unwrap_or_default();
    let downloaded = view.is_notice_visible(download);
    let fade =
        style::transition("opacity", &page.options().interaction.panel_fade());

    rsx! {
        section { class: "about",
            nav { class: "tabs",
                for key in PanelKey::ALL.iter().copied() {
                    button {
                        class: if key == active { "tab active" } else { "tab" },
                        onclick: {
                            let page = page.clone();
                            move |_| page.select(tabs, key.as_str())
                        },
                        "{key}"
                    }
                }
            }
            div { class: "panel", style: "{fade}",
                match active {
                    PanelKey::Bio => rsx! { p { "Building fast, dependable software for the web and the terminal." } },
                    PanelKey::Skills => rsx! { p { "Systems programming, web front ends, tooling and automation." } },
                    PanelKey::Education => rsx! { p { "Computer science, with a focus on distributed systems." } },
                }
            }
            a {
                class: "download",
                href: RESUME_HREF,
                download: "resume.pdf",
                onclick: {
                    let page = page.clone();
                    move |_| page.notify(download)
                },
                "Download résumé"
            }
            if downloaded {
                p { class: "notice", "Download started." }
            }
            div { class: "orbit",
                for (slot, record) in slots.iter().zip(&catalog.records) {
                    div { class: "bubble", style: "{style::orbit_bubble(slot)}",
                        match record.icon_slot() {
                            IconSlot::Icon(icon) => rsx! { img { src: "{icon.0}", alt: "{record.name}" } },
                            IconSlot::Placeholder => rsx! { span { class: "placeholder" } },
                        }
                        span { class: "bubble-label", "{record.name}" }
                    }
                }
            }
        }
    }
}

// ── Projects ─────────────────────────────────────────────────────────────

/// A revealed grid of tilt cards under a pointer spotlight.
#[component]
pub fn Projects(titles: Vec<String>) -> Element {
    let page = use_context::<Page>();
    let light = use_surface(|| SurfaceSpec::Spotlight);
    let on_mounted = bind_on_mount(light);
    let spotlight = page.view().read().spotlight(light).map(style::spotlight);
    let count = titles.len();

    rsx! {
        div { class: "projects", onmounted: on_mounted,
            if let Some(glow) = spotlight {
                div { class: "spotlight", style: "{glow}" }
            }
            RevealSection { items: count,
                for title in titles {
                    TiltCard { title }
                }
            }
        }
    }
}

/// A card that tilts toward the pointer.
#[component]
pub fn TiltCard(title: String) -> Element {
    let page = use_context::<Page>();
    let card = use_surface(|| SurfaceSpec::Tilt);
    let on_mounted = bind_on_mount(card);
    let perspective = page.options().tilt.perspective;

    let view = page.view();
    let transform = style::tilt(view.read().tilt(card), perspective);

    rsx! {
        article { class: "card", style: "{transform}", onmounted: on_mounted,
            h3 { "{title}" }
        }
    }
}

/// Section whose children enter with a staggered fade once scrolled into
/// view.
#[component]
pub fn RevealSection(items: usize, children: Element) -> Element {
    let page = use_context::<Page>();
    let section = use_surface(move || SurfaceSpec::Reveal {
        items,
        policy: None,
    });
    let on_mounted = bind_on_mount(section);

    let view = page.view();
    let style = match view.read().get(section) {
        Some(SurfaceView::Reveal {
            last: Some(RevealEvent::Play(sequence)),
            ..
        }) => format!(
            "opacity: 1; transform: none; {}",
            style::transition("opacity, transform", &sequence.transition)
        ),
        Some(SurfaceView::Reveal {
            last: Some(RevealEvent::Reverse(sequence)),
            ..
        }) => format!(
            "opacity: 0; transform: translateY(24px); {}",
            style::transition("opacity, transform", &sequence.transition)
        ),
        _ => "opacity: 0; transform: translateY(24px);".to_owned(),
    };

    rsx! {
        section { class: "reveal", style: "{style}", onmounted: on_mounted,
            {children}
        }
    }
}

// ── Services ─────────────────────────────────────────────────────────────

/// Service cards that show details on hover, held briefly after a tap.
#[component]
pub fn Services() -> Element {
    let catalog = use_hook(Catalog::builtin);
    let services: Vec<String> = catalog
        .by_category(Category::Service)
        .map(|record| record.name.clone())
        .collect();
    let names = if services.is_empty() {
        vec!["Consulting".to_owned(), "Code review".to_owned()]
    } else {
        services
    };

    rsx! {
        section { class: "services",
            for name in names {
                ServiceCard { name }
            }
        }
    }
}

#[component]
fn ServiceCard(name: String) -> Element {
    let page = use_context::<Page>();
    let card = use_surface(|| SurfaceSpec::Hover);
    let on_mounted = bind_on_mount(card);
    let hovered = page.view().read().is_hovered(card);

    rsx! {
        div {
            class: if hovered { "service hovered" } else { "service" },
            onmounted: on_mounted,
            h4 { "{name}" }
            if hovered {
                p { class: "service-detail", "Get in touch to discuss {name}." }
            }
        }
    }
}
