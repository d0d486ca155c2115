/// Observable coordinator state, published after every change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoordinatorState {
    /// Index of the active slide; always within the slide set
    pub current_index: usize,
    /// True only between the start and completion of a transition
    pub is_transitioning: bool,
    /// Autoplay mode is on (its timer may be paused during a transition)
    pub is_autoplaying: bool,
}

impl CoordinatorState {
    /// Settled on `index` with no transition running
    pub fn is_at(&self, index: usize) -> bool {
        self.current_index == index && !self.is_transitioning
    }
}
