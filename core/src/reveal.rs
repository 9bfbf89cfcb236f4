#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// Visibility-triggered entrance, independent of whatever drives the actual motion.
pub trait Reveal {
    /// Called when the observed element intersects the viewport. Returns `true` only on the
    /// transition out of `Hidden`.
    fn on_enter_viewport(&mut self) -> bool;
    fn reset(&mut self);
    fn state(&self) -> RevealState;

    fn is_revealed(&self) -> bool {
        self.state() == RevealState::Revealed
    }
}

/// One-shot reveal: once revealed it stays revealed until [`Reveal::reset`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts in the final state; used when no motion is possible.
    pub fn revealed() -> Self {
        Self {
            state: RevealState::Revealed,
        }
    }
}

impl Reveal for RevealLatch {
    fn on_enter_viewport(&mut self) -> bool {
        if self.state == RevealState::Revealed {
            return false;
        }
        self.state = RevealState::Revealed;
        true
    }

    fn reset(&mut self) {
        self.state = RevealState::Hidden;
    }

    fn state(&self) -> RevealState {
        self.state
    }
}
