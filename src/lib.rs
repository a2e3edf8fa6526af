/// ackeval - Explicit-Stack Ackermann-Peter Evaluator
///
/// This library computes the Ackermann-Peter function A(m, n), a deeply,
/// mutually self-referential two-argument recursion whose call depth grows
/// too fast to fit any native call stack (m = 4 already exceeds what a
/// recursive rendering could survive). The call/return discipline of the
/// recursive definition is encoded manually into a heap-resident work stack
/// of pending first arguments plus a single accumulator register.
///
/// # Architecture
///
/// Everything lives in the `eval` module:
///
/// 1. **Entry points** (`eval`)
///    - `evaluate` - default work-stack bound
///    - `evaluate_with_limit` - caller-chosen bound
///    - `evaluate_with_stats` - result plus loop counters
///
/// 2. **Engine** (`eval::engine`, private)
///    - Pops a pending frame per iteration and rewrites it according to the
///      three defining cases of the recursion
///    - Threads every completed sub-result through the accumulator
///
/// # Example
///
/// ```rust
/// use ackeval::evaluate;
///
/// let result = evaluate(3, 3).unwrap();
/// assert_eq!(result, 61);
/// ```
///
/// # Arithmetic policy
///
/// All arithmetic is fixed-width `u64` and checked: an accumulator that
/// would leave the `u64` range surfaces as `EvalError::ResourceExhausted`,
/// never a silent wrap. Negative inputs are rejected as
/// `EvalError::InvalidArgument` before any stack is touched. Growth past
/// the configured stack bound is reported the same way; growth past what
/// the host can allocate below that bound remains a host-level kill, which
/// is the expected outcome for inputs like A(4, 2) whose value does not fit
/// in any fixed-width register anyway.

pub mod eval;

pub use eval::{
    evaluate, evaluate_with_limit, evaluate_with_stats,
    types::{EvalError, EvalStats, MAX_STACK_DEPTH},
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_base_case() {
        let result = evaluate(0, 7);
        assert_eq!(result, Ok(8));
    }

    #[test]
    fn test_evaluate_concrete_scenario() {
        let result = evaluate(2, 3).unwrap();
        assert_eq!(result, 9);
    }

    #[test]
    fn test_negative_argument_rejected() {
        let result = evaluate(-1, 0);
        assert!(matches!(result, Err(EvalError::InvalidArgument(_))));
    }

    #[test]
    fn test_stats_report_peak_depth() {
        let (value, stats) = evaluate_with_stats(2, 3, MAX_STACK_DEPTH).unwrap();
        assert_eq!(value, 9);
        assert!(stats.max_depth >= 2);
        assert_eq!(stats.iterations, stats.pushes);
    }

    #[test]
    fn test_limit_surfaces_as_resource_exhausted() {
        let result = evaluate_with_limit(3, 3, 4);
        assert!(matches!(result, Err(EvalError::ResourceExhausted(_))));
    }
}
