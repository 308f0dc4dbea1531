// crates/wisata-core/src/music.rs

//! Background-music toggle.
//!
//! The audio element itself is an opaque play/pause device. This module
//! only tracks what the toggle should look like and what to ask the device
//! to do; a rejected play request (autoplay policies) flips it back.

use crate::config::Messages;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MusicState {
    Stopped,
    Playing,
    /// Stopped because the last play request was rejected.
    Failed,
}

/// What the host should do with the audio element after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicCommand {
    Play,
    Pause,
}

/// How the toggle button and status line should read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicView<'a> {
    pub playing: bool,
    pub status: &'a str,
    pub button_title: &'a str,
}

#[derive(Debug, Clone)]
pub struct MusicToggle {
    state: MusicState,
}

impl Default for MusicToggle {
    fn default() -> Self {
        Self {
            state: MusicState::Stopped,
        }
    }
}

impl MusicToggle {
    pub fn state(&self) -> MusicState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == MusicState::Playing
    }

    /// Flips the toggle. The returned command is what the audio element
    /// should be told.
    pub fn toggle(&mut self) -> MusicCommand {
        if self.is_playing() {
            self.state = MusicState::Stopped;
            MusicCommand::Pause
        } else {
            self.state = MusicState::Playing;
            MusicCommand::Play
        }
    }

    /// The device refused to play.
    ///
    /// The rejection arrives asynchronously; if the user already toggled
    /// back off it is stale and ignored. Returns whether the state changed.
    pub fn play_rejected(&mut self, reason: &str) -> bool {
        tracing::warn!(reason, "audio play failed");
        if self.state != MusicState::Playing {
            return false;
        }
        self.state = MusicState::Failed;
        true
    }

    /// Playback reached the end of the track.
    pub fn ended(&mut self) {
        self.state = MusicState::Stopped;
    }

    pub fn view<'a>(&self, messages: &'a Messages) -> MusicView<'a> {
        match self.state {
            MusicState::Playing => MusicView {
                playing: true,
                status: &messages.music_playing,
                button_title: &messages.music_stop_title,
            },
            MusicState::Stopped => MusicView {
                playing: false,
                status: &messages.music_idle,
                button_title: &messages.music_play_title,
            },
            MusicState::Failed => MusicView {
                playing: false,
                status: &messages.music_failed,
                button_title: &messages.music_play_title,
            },
        }
    }
}
