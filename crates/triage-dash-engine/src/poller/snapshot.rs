use std::sync::Arc;

use triage_dash_core::models::PollState;

/// Last-known-good data of a source together with its poll bookkeeping.
///
/// `data` is replaced wholesale on success and left untouched on failure,
/// so a stale value stays visible next to the error that followed it.
#[derive(Debug)]
pub struct SourceSnapshot<T> {
    pub data: Option<Arc<T>>,
    pub poll: PollState,
}

impl<T> SourceSnapshot<T> {
    pub fn is_stale(&self) -> bool {
        self.data.is_some() && self.poll.has_error()
    }
}

impl<T> Default for SourceSnapshot<T> {
    fn default() -> Self {
        Self {
            data: None,
            poll: PollState::default(),
        }
    }
}

// Manual impl: cloning only bumps the Arc, `T` need not be `Clone`.
impl<T> Clone for SourceSnapshot<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            poll: self.poll.clone(),
        }
    }
}
