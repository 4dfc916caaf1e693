use crate::context::HostContext;

/// Observable state of an embedding session.
///
/// Produced by the session driver and pushed to the frontend whenever any
/// field changes. The presentation layer uses it to pick a layout (embedded
/// versus standalone) and to gate rendering until the session settles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    /// Whether the application runs embedded inside a recognized host.
    /// Classified once at mount; a recognized frame message may still flip it
    /// to `true` later.
    pub embedded: bool,
    /// Whether the session settled enough for the presentation layer to show
    /// itself. Becomes `true` when classification finishes for standalone
    /// runs, when the host context was adopted, or when the bounded wait for
    /// a missing host elapsed.
    pub ready: bool,
    /// Context supplied by the host, when one attached and responded.
    pub context: Option<HostContext>,
}
