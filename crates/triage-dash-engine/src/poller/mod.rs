//! SourcePoller: one independent refresh loop per data source.

mod snapshot;
mod source_poller;

pub use snapshot::SourceSnapshot;
pub use source_poller::SourcePoller;
