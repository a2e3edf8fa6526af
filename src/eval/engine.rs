//! Work-Stack Engine - Iterative Evaluation
//!
//! This module contains the `Machine` state machine that evaluates the
//! Ackermann-Peter function iteratively, using an explicit heap-allocated
//! work stack instead of recursive function calls. The recursion depth of
//! A(m, n) is unbounded and input-dependent, so a recursive rendering would
//! overflow any native call stack; the work stack moves that growth to the
//! heap where it can be bounded and reported.
//!
//! Each stack entry is a pending first argument. The current second argument
//! lives in a single accumulator register, which is also the only channel
//! through which a completed sub-result reaches the frame that depends on
//! it. One iteration pops a frame and rewrites it:
//!
//! - `A(0, n) = n + 1` - bump the accumulator, push nothing (unwind)
//! - `A(m, 0) = A(m - 1, 1)` - set the accumulator to 1, push `m - 1`
//! - `A(m, n) = A(m - 1, A(m, n - 1))` - decrement the accumulator, push
//!   `m - 1` (outer call, consumed later) then `m` (inner call, consumed
//!   next)
//!
//! The loop terminates because every iteration strictly decreases the
//! lexicographic measure on the popped `(m, n)` pair: each case either
//! reduces `m` or holds `m` fixed while reducing `n`, and `m == 0` always
//! pops without pushing. This is the same well-founded measure that proves
//! the recursive definition total.

use tracing::trace;

use super::types::{EvalError, EvalStats};

/// One in-flight evaluation: the work stack of pending first arguments, the
/// accumulator holding the current second argument, the depth bound, and the
/// loop counters. Created fresh per evaluation and consumed by `run`; never
/// shared across calls or threads.
pub(crate) struct Machine {
    /// Pending first arguments, last-in-first-out
    stack: Vec<u64>,
    /// Current second argument; carries sub-results between frames
    acc: u64,
    /// The stack may not grow past this many entries
    max_depth: usize,
    stats: EvalStats,
}

impl Machine {
    /// Validate the precondition and set up the initial frame.
    /// Negative arguments are rejected here, before the work stack exists.
    pub(crate) fn new(m: i64, n: i64, max_depth: usize) -> Result<Self, EvalError> {
        if m < 0 {
            return Err(EvalError::InvalidArgument(format!(
                "m must be non-negative, got {}",
                m
            )));
        }
        if n < 0 {
            return Err(EvalError::InvalidArgument(format!(
                "n must be non-negative, got {}",
                n
            )));
        }

        let mut machine = Machine {
            stack: Vec::new(),
            acc: n as u64,
            max_depth,
            stats: EvalStats::default(),
        };
        machine.push(m as u64)?;
        Ok(machine)
    }

    fn push(&mut self, m: u64) -> Result<(), EvalError> {
        if self.stack.len() >= self.max_depth {
            return Err(EvalError::ResourceExhausted(format!(
                "work stack exceeded {} entries",
                self.max_depth
            )));
        }
        self.stack.push(m);
        self.stats.pushes += 1;
        if self.stack.len() > self.stats.max_depth {
            self.stats.max_depth = self.stack.len();
        }
        Ok(())
    }

    /// Pop one pending frame and rewrite it. A no-op once the stack is
    /// empty; `run` is the usual driver, tests call this directly to watch
    /// the stack discipline.
    pub(crate) fn step(&mut self) -> Result<(), EvalError> {
        let m = match self.stack.pop() {
            Some(m) => m,
            None => return Ok(()),
        };
        self.stats.iterations += 1;
        trace!(
            target: "ackeval::eval::engine",
            m,
            n = self.acc,
            depth = self.stack.len(),
            "step"
        );

        if m == 0 {
            // A(0, n) = n + 1
            self.acc = self.acc.checked_add(1).ok_or_else(|| {
                EvalError::ResourceExhausted(format!(
                    "Integer overflow: {} + 1 does not fit in u64",
                    self.acc
                ))
            })?;
        } else if self.acc == 0 {
            // A(m, 0) = A(m - 1, 1)
            self.acc = 1;
            self.push(m - 1)?;
        } else {
            // A(m, n) = A(m - 1, A(m, n - 1))
            // The inner call must finish before the outer one can start, so
            // the outer frame goes on first and the inner frame lands on top.
            self.acc -= 1;
            self.push(m - 1)?;
            self.push(m)?;
        }

        Ok(())
    }

    pub(crate) fn is_done(&self) -> bool {
        self.stack.is_empty()
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Drive the machine until the stack empties and return the accumulator
    /// together with the loop counters.
    pub(crate) fn run(mut self) -> Result<(u64, EvalStats), EvalError> {
        // Progress reporting controlled by environment variable
        let debug_eval = std::env::var("ACKEVAL_DEBUG_EVAL").is_ok();

        while !self.is_done() {
            self.step()?;

            if debug_eval && self.stats.iterations % 10_000_000 == 0 {
                eprintln!(
                    "[EVAL#{}] stack={} acc={}",
                    self.stats.iterations,
                    self.stack.len(),
                    self.acc
                );
            }
        }

        Ok((self.acc, self.stats))
    }
}
