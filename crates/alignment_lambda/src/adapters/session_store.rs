use crate::runtime::contract::AlignmentSession;

/// Storage seam shared by both handlers: one table of alignment sessions
/// keyed by `alignmentId`. `put_session` has overwrite-if-exists semantics;
/// key uniqueness is delegated to the storage layer.
pub trait SessionStore {
    fn scan_sessions(&self, technician_id: Option<&str>) -> Result<Vec<AlignmentSession>, String>;

    fn put_session(&self, session: &AlignmentSession) -> Result<(), String>;
}
