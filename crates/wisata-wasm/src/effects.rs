// crates/wisata-wasm/src/effects.rs

//! Cosmetic effects wired to the page. The arithmetic lives in
//! `wisata_core::effects`; this module only reads rectangles and writes
//! styles.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use wisata_core::config::{EffectsConfig, Selectors};
use wisata_core::effects::{
    closest_to_center, parallax_offset, parallax_transform, particle_batch, pointer_glow,
    ripple_origin, scroll_background_position, GLOW_REST, RIPPLE_KEYFRAMES,
};
use wisata_core::EnhancerConfig;

use crate::dom;

/// Marks a card whose interaction handlers are already attached.
const HANDLED_ATTR: &str = "data-wisata-fx";
const RIPPLE_STYLE_ID: &str = "ripple-style";
const HINT_CLASS: &str = "scroll-hint";
const HINT_CSS: &str = "position:fixed;bottom:40px;left:50%;transform:translateX(-50%);\
background:linear-gradient(135deg,#d4af37,#f0c674);color:#333;padding:12px 24px;\
border-radius:50px;font-weight:700;z-index:100;box-shadow:0 6px 16px rgba(212,175,55,0.5);\
animation:float 2.5s ease-in-out infinite;pointer-events:none;font-size:0.95rem;";

type RevealCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Reveal-on-scroll observer. Disconnects on drop.
struct Reveal {
    observer: IntersectionObserver,
    _callback: RevealCallback,
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Every live effect. Dropping it detaches listeners and stops timers;
/// particles already on screen finish their own removal timers.
#[derive(Default)]
pub(crate) struct Effects {
    listeners: Vec<EventListener>,
    _particles: Option<Interval>,
    _reveal: Option<Reveal>,
    _hint: Option<Timeout>,
}

impl Effects {
    pub(crate) fn start(doc: &Document, config: &EnhancerConfig) -> Self {
        let mut fx = Effects::default();
        let effects = &config.effects;
        let selectors = &config.selectors;

        if let Some(header) = dom::query(doc, &selectors.header) {
            fx.header(doc, &header, selectors, effects);
            fx._particles = Some(particles(doc, &header, effects));
        }
        fx.attach_cards(doc, selectors, effects);
        fx._reveal = reveal(doc, selectors, effects.reveal_threshold);
        fx.scroll_feedback(doc, selectors, effects);
        fx._hint = scroll_hint(doc, &config.messages.scroll_hint, effects.scroll_hint_ms);
        fx
    }

    fn header(
        &mut self,
        doc: &Document,
        header: &Element,
        selectors: &Selectors,
        effects: &EffectsConfig,
    ) {
        let Some(video) = dom::query(doc, &selectors.header_video) else {
            return;
        };
        let parallax = effects.parallax.clone();

        let (h, v, cfg) = (header.clone(), video.clone(), parallax.clone());
        self.listeners
            .push(EventListener::new(header, "mousemove", move |event| {
                if let Some(p) = dom::pointer(event) {
                    let offset = parallax_offset(p, dom::rect(&h), cfg.pointer_factor);
                    dom::set_style(&v, "transform", &parallax_transform(&cfg, Some(offset)));
                }
            }));

        let (v, cfg) = (video, parallax.clone());
        self.listeners
            .push(EventListener::new(header, "mouseleave", move |_| {
                dom::set_style(&v, "transform", &parallax_transform(&cfg, None));
            }));

        if let Ok(window) = dom::window() {
            let h = header.clone();
            let w = window.clone();
            self.listeners
                .push(EventListener::new(&window, "scroll", move |_| {
                    let y = w.scroll_y().unwrap_or(0.0);
                    let pos = scroll_background_position(y, parallax.scroll_factor);
                    dom::set_style(&h, "background-position", &pos);
                }));
        }
    }

    /// Ripple, hover glow and pointer-tracking background, at most once per
    /// card.
    fn attach_cards(
        &mut self,
        doc: &Document,
        selectors: &Selectors,
        effects: &EffectsConfig,
    ) {
        inject_ripple_style(doc);

        for card in dom::query_all(doc, &selectors.card) {
            if card.has_attribute(HANDLED_ATTR) {
                continue;
            }
            let _ = card.set_attribute(HANDLED_ATTR, "1");
            if dom::style_value(&card, "position").is_empty() {
                dom::set_style(&card, "position", "relative");
            }

            let (c, d, ripple) = (card.clone(), doc.clone(), effects.ripple.clone());
            self.listeners.push(EventListener::new(&card, "click", move |event| {
                let Some(p) = dom::pointer(event) else {
                    return;
                };
                let Ok(dot) = dom::create(&d, "span", "card-ripple") else {
                    return;
                };
                let origin = ripple_origin(p, dom::rect(&c), ripple.size_px);
                let size = format!("{}px", ripple.size_px);
                let left = format!("{}px", origin.x);
                let top = format!("{}px", origin.y);
                for (prop, value) in [
                    ("position", "absolute"),
                    ("width", size.as_str()),
                    ("height", size.as_str()),
                    ("background", ripple.color.as_str()),
                    ("border-radius", "50%"),
                    ("pointer-events", "none"),
                    ("animation", ripple.animation.as_str()),
                    ("left", left.as_str()),
                    ("top", top.as_str()),
                ] {
                    dom::set_style(&dot, prop, value);
                }
                if c.append_child(&dot).is_ok() {
                    Timeout::new(ripple.lifetime_ms, move || dot.remove()).forget();
                }
            }));

            let (c, glow) = (card.clone(), effects.glow_animation.clone());
            self.listeners
                .push(EventListener::new(&card, "mouseenter", move |_| {
                    dom::set_style(&c, "animation", &glow);
                }));

            let c = card.clone();
            self.listeners
                .push(EventListener::new(&card, "mousemove", move |event| {
                    if let Some(p) = dom::pointer(event) {
                        let (x, y) = pointer_glow(p, dom::rect(&c));
                        dom::set_style(&c, "--mx", &format!("{x}%"));
                        dom::set_style(&c, "--my", &format!("{y}%"));
                    }
                }));

            let c = card.clone();
            self.listeners
                .push(EventListener::new(&card, "mouseleave", move |_| {
                    dom::set_style(&c, "animation", "none");
                    dom::set_style(&c, "--mx", &format!("{}%", GLOW_REST.0));
                    dom::set_style(&c, "--my", &format!("{}%", GLOW_REST.1));
                }));
        }
    }

    /// Emphasizes the card nearest the viewport centre while scrolling.
    fn scroll_feedback(&mut self, doc: &Document, selectors: &Selectors, effects: &EffectsConfig) {
        let Some(container) = dom::query(doc, &selectors.container) else {
            return;
        };
        let Ok(window) = dom::window() else {
            return;
        };
        let card = selectors.card.clone();
        let dim = effects.scroll_dim_opacity.to_string();
        let w = window.clone();
        self.listeners
            .push(EventListener::new(&window, "scroll", move |_| {
                let cards = dom::query_all_in(&container, &card);
                let height = w
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                let closest = closest_to_center(cards.iter().map(|c| dom::rect(c).top), height);
                for (i, c) in cards.iter().enumerate() {
                    let opacity = if Some(i) == closest { "1" } else { dim.as_str() };
                    dom::set_style(c, "opacity", opacity);
                }
            }));
    }
}

/// Spawns a batch now and another every `respawn_ms`.
fn particles(doc: &Document, header: &Element, effects: &EffectsConfig) -> Interval {
    let rng = Rc::new(RefCell::new(SmallRng::seed_from_u64(
        js_sys::Date::now().to_bits(),
    )));
    let spawn = {
        let (doc, header, cfg) = (doc.clone(), header.clone(), effects.particles.clone());
        move || {
            let batch = particle_batch(&mut *rng.borrow_mut(), &cfg);
            for spec in batch {
                let Ok(node) = dom::create(&doc, "div", "particle") else {
                    continue;
                };
                for (prop, value) in spec.style() {
                    dom::set_style(&node, prop, &value);
                }
                if header.append_child(&node).is_ok() {
                    Timeout::new(spec.lifetime_ms, move || node.remove()).forget();
                }
            }
        }
    };
    spawn();
    Interval::new(effects.particles.respawn_ms, spawn)
}

fn reveal(doc: &Document, selectors: &Selectors, threshold: f64) -> Option<Reveal> {
    let callback: RevealCallback = Closure::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::set_style(&target, "opacity", "1");
                    dom::set_style(&target, "transform", "translateY(0)");
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                tracing::warn!(?err, "IntersectionObserver unavailable; cards shown as-is");
                return None;
            }
        };
    for card in dom::query_all(doc, &selectors.card) {
        observer.observe(&card);
    }
    Some(Reveal {
        observer,
        _callback: callback,
    })
}

fn inject_ripple_style(doc: &Document) {
    if doc.get_element_by_id(RIPPLE_STYLE_ID).is_some() {
        return;
    }
    let (Ok(style), Some(head)) = (doc.create_element("style"), doc.head()) else {
        return;
    };
    style.set_id(RIPPLE_STYLE_ID);
    style.set_text_content(Some(RIPPLE_KEYFRAMES));
    let _ = head.append_child(&style);
}

/// Creates the floating hint once and fades it out after `fade_ms`.
fn scroll_hint(doc: &Document, text: &str, fade_ms: u32) -> Option<Timeout> {
    if dom::query(doc, &format!(".{HINT_CLASS}")).is_some() {
        return None;
    }
    let body = doc.body()?;
    let hint = dom::create(doc, "div", HINT_CLASS).ok()?;
    hint.set_text_content(Some(text));
    if let Some(html) = hint.dyn_ref::<web_sys::HtmlElement>() {
        html.style().set_css_text(HINT_CSS);
    }
    body.append_child(&hint).ok()?;
    Some(Timeout::new(fade_ms, move || {
        dom::set_style(&hint, "opacity", "0");
        dom::set_style(&hint, "transition", "opacity 0.6s ease");
    }))
}
