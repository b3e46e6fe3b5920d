//! Audio notification bus
//!
//! The simulation emits fire-and-forget cues synchronously during a tick.
//! Sound adapters subscribe with a callback and get a `Subscription` token
//! back; handing the token to `unsubscribe` removes the listener. Delivery is
//! at most once per occurrence with no queueing or acknowledgment.

use std::fmt;

/// Sound cue tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// Pellet eaten
    Pellet,
    /// Power pellet eaten
    PowerUp,
    /// Frightened ghost captured
    GhostEat,
    /// Scatter/chase switch or speed multiplier change
    PhaseShift,
    /// Fruit collected
    Fruit,
    /// Round lost (caught or time up)
    GameOver,
}

impl AudioCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioCue::Pellet => "pellet",
            AudioCue::PowerUp => "powerUp",
            AudioCue::GhostEat => "ghostEat",
            AudioCue::PhaseShift => "phaseShift",
            AudioCue::Fruit => "fruit",
            AudioCue::GameOver => "gameOver",
        }
    }
}

/// Token returned by `AudioBus::subscribe`
#[derive(Debug, PartialEq, Eq, Hash)]
#[must_use = "dropping the token makes the listener impossible to remove"]
pub struct Subscription(u64);

type Listener = Box<dyn FnMut(AudioCue)>;

/// Observer registry for audio cues
#[derive(Default)]
pub struct AudioBus {
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

impl AudioBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it sees every cue emitted from now on
    pub fn subscribe(&mut self, listener: impl FnMut(AudioCue) + 'static) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        Subscription(id)
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription.0);
        self.listeners.len() != before
    }

    /// Deliver a cue to every current listener, in subscription order
    pub fn emit(&mut self, cue: AudioCue) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(cue);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for AudioBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Bus with a single listener that records every cue
#[cfg(test)]
pub(crate) fn recording_bus() -> (AudioBus, std::rc::Rc<std::cell::RefCell<Vec<AudioCue>>>) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let cues = Rc::new(RefCell::new(Vec::new()));
    let mut bus = AudioBus::new();
    let sink = Rc::clone(&cues);
    let _subscription = bus.subscribe(move |cue| sink.borrow_mut().push(cue));
    (bus, cues)
}
