//! Surface-derivation tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect
//! derivation semantics.

///
/// SurfaceTraceSink
///

pub trait SurfaceTraceSink: Send + Sync {
    fn on_event(&self, event: SurfaceTraceEvent);
}

///
/// SurfaceTraceEvent
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SurfaceTraceEvent {
    /// An options-based sub-element degraded to the plain-text path because
    /// its option set was missing or empty.
    OptionsFallback { key: &'static str },

    /// The option-set registry reported a failure for this sub-element.
    OptionsLookupFailed { key: &'static str, message: String },
}
