// crates/wisata-wasm/src/music.rs

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlAudioElement};
use wisata_core::config::Messages;
use wisata_core::music::{MusicCommand, MusicToggle};
use wisata_core::{EnhancerConfig, Result, WisataError};

use crate::dom;

const PLAYING: &str = "playing";

struct MusicPlayer {
    toggle: Element,
    status: Option<Element>,
    messages: Messages,
    state: RefCell<MusicToggle>,
}

impl MusicPlayer {
    fn render(&self) {
        let state = self.state.borrow();
        let view = state.view(&self.messages);
        let _ = self
            .toggle
            .class_list()
            .toggle_with_force(PLAYING, view.playing);
        let _ = self.toggle.set_attribute("title", view.button_title);
        if let Some(status) = &self.status {
            status.set_text_content(Some(view.status));
        }
    }

    fn rejected(&self, reason: &str) {
        let changed = self.state.borrow_mut().play_rejected(reason);
        if changed {
            self.render();
        }
    }
}

/// Wires the background-music toggle. Without both the toggle and the audio
/// element the feature is off.
pub(crate) fn wire(doc: &Document, config: &EnhancerConfig) -> Result<Vec<EventListener>> {
    let selectors = &config.selectors;
    let toggle = dom::require(doc, &selectors.music_toggle)?;
    let audio = dom::require(doc, &selectors.music_audio)?
        .dyn_into::<HtmlAudioElement>()
        .map_err(|_| WisataError::MissingElement(selectors.music_audio.clone()))?;

    let player = Rc::new(MusicPlayer {
        toggle: toggle.clone(),
        status: dom::query(doc, &selectors.music_status),
        messages: config.messages.clone(),
        state: RefCell::new(MusicToggle::default()),
    });

    let mut listeners = Vec::new();

    let (p, a) = (player.clone(), audio.clone());
    listeners.push(EventListener::new(&toggle, "click", move |event| {
        event.prevent_default();
        let command = p.state.borrow_mut().toggle();
        p.render();
        match command {
            MusicCommand::Play => match a.play() {
                Ok(promise) => {
                    let p = p.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        if let Err(err) = JsFuture::from(promise).await {
                            p.rejected(&format!("{err:?}"));
                        }
                    });
                }
                Err(err) => p.rejected(&format!("{err:?}")),
            },
            MusicCommand::Pause => {
                let _ = a.pause();
            }
        }
    }));

    let p = player.clone();
    listeners.push(EventListener::new(&audio, "ended", move |_| {
        p.state.borrow_mut().ended();
        p.render();
    }));

    player.render();
    Ok(listeners)
}
