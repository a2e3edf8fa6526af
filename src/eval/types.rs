//! Evaluator Types
//!
//! Error taxonomy and loop counters for the work-stack engine. Errors carry
//! human-readable messages; callers that need to branch can match on the
//! variant alone.

use std::fmt;

/// Default bound on work-stack depth.
/// The deepest finite scenario that completes in practice, A(4, 1), peaks
/// below 2^17 pending frames. 2^20 leaves ample headroom while turning
/// unbounded growth (A(4, 2) and beyond) into a reported error instead of
/// an OOM kill.
pub const MAX_STACK_DEPTH: usize = 1 << 20;

/// Error type for evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A precondition violation: m or n was negative.
    /// Detected before any work-stack allocation or mutation.
    InvalidArgument(String),

    /// The accumulator left the u64 range, or the work stack outgrew its
    /// configured bound.
    ResourceExhausted(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            EvalError::ResourceExhausted(msg) => write!(f, "Resource exhausted: {}", msg),
        }
    }
}

impl std::error::Error for EvalError {}

/// Counters maintained by the evaluation loop.
/// `iterations` counts pops; on successful completion every pushed frame has
/// been popped, so `iterations == pushes` and the stack is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalStats {
    /// Frames popped, one per loop iteration
    pub iterations: u64,
    /// Frames pushed, including the initial m
    pub pushes: u64,
    /// High-water mark of work-stack depth
    pub max_depth: usize,
}
