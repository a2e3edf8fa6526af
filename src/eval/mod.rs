// Stack evaluator for the Ackermann-Peter function
//
// A(0, n) = n + 1
// A(m, 0) = A(m - 1, 1)
// A(m, n) = A(m - 1, A(m, n - 1))
//
// The recursion is encoded as an explicit work stack of pending first
// arguments threaded through a single accumulator register; see the engine
// module for the iteration rules and the termination argument.

mod engine;
pub mod types;

use tracing::debug;

use engine::Machine;

pub use types::{EvalError, EvalStats, MAX_STACK_DEPTH};

/// Evaluate A(m, n) with the default work-stack bound.
///
/// Fails with [`EvalError::InvalidArgument`] if either argument is negative,
/// or with [`EvalError::ResourceExhausted`] if the computation outgrows the
/// `u64` accumulator or [`MAX_STACK_DEPTH`] pending frames.
pub fn evaluate(m: i64, n: i64) -> Result<u64, EvalError> {
    evaluate_with_limit(m, n, MAX_STACK_DEPTH)
}

/// Evaluate A(m, n) with a caller-chosen bound on work-stack depth.
pub fn evaluate_with_limit(m: i64, n: i64, max_depth: usize) -> Result<u64, EvalError> {
    let (value, _) = evaluate_with_stats(m, n, max_depth)?;
    Ok(value)
}

/// Evaluate A(m, n) and report the loop counters alongside the result.
pub fn evaluate_with_stats(
    m: i64,
    n: i64,
    max_depth: usize,
) -> Result<(u64, EvalStats), EvalError> {
    debug!(target: "ackeval::eval", m, n, max_depth, "evaluate");
    Machine::new(m, n, max_depth)?.run()
}
