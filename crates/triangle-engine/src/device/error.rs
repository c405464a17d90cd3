/// What happened after a failed surface acquisition.
///
/// Either way the current frame is dropped; rendering resumes on the next one.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured.
    Reconfigured,
    /// Nothing to fix (timeout, out of memory, other).
    SkipFrame,
}
