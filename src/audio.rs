//! Sound cues.
//!
//! The simulation only records which sounds a frame wants played. Hosts
//! forward them to an [`AudioSink`], which must never block the frame loop.

use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    Jump,
    Hit,
    Score,
    Confetti,
}

impl SoundId {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Jump => "jump",
            Self::Hit => "hit",
            Self::Score => "score",
            Self::Confetti => "confetti",
        }
    }
}

/// Sounds requested during the current frame, in emission order.
#[derive(Debug, Clone, Default)]
pub struct SoundQueue {
    pending: Vec<SoundId>,
}

impl SoundQueue {
    pub fn push(&mut self, sound: SoundId) {
        log::debug!("sound cue: {}", sound.name());
        self.pending.push(sound);
    }

    pub fn drain(&mut self) -> Vec<SoundId> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[SoundId] {
        &self.pending
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Fire-and-forget playback. Implementations must return immediately.
pub trait AudioSink {
    fn play(&self, sound: SoundId);
}

/// Forwards cues over a channel to a dedicated playback thread.
pub struct ChannelAudio {
    tx: Sender<SoundId>,
}

impl ChannelAudio {
    /// Spawn the playback thread. It exits once every sender is dropped.
    pub fn spawn<F>(mut player: F) -> (Self, JoinHandle<()>)
    where
        F: FnMut(SoundId) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            for sound in rx {
                player(sound);
            }
        });
        (Self { tx }, handle)
    }
}

impl AudioSink for ChannelAudio {
    fn play(&self, sound: SoundId) {
        // A closed channel means the playback thread is gone; the game keeps running.
        let _ = self.tx.send(sound);
    }
}
