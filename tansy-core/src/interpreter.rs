//! The interpreter handle: per-instance state plus the host-facing API.
//!
//! Each `Interpreter` owns its data stack, the single-slot register, the
//! output buffer, the dictionary, and (while stepping) a continuation
//! over the remaining tokens. Nothing is shared between instances and
//! every operation runs to completion synchronously.

use std::collections::VecDeque;

use crate::builtins;
use crate::dictionary::Dictionary;
use crate::evaluator;
use crate::tokenizer::{self, Token};
use crate::value::{RuntimeError, Value};

/// Result of a single `step` call. `output` is only what this step wrote;
/// `position`/`total` count tokens of the session (branch splices grow
/// `total` so the pair stays monotone).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub output: String,
    pub position: usize,
    pub total: usize,
    pub has_more: bool,
}

#[derive(Debug)]
pub(crate) struct StepSession {
    queue: VecDeque<Token>,
    total: usize,
}

#[derive(Debug)]
pub struct Interpreter {
    pub stack: Vec<Value>,
    pub(crate) register: Option<Value>,
    pub(crate) dictionary: Dictionary,
    pub(crate) output: String,
    words_dirty: bool,
    session: Option<StepSession>,
}

impl Interpreter {
    pub fn new() -> Self {
        let mut dictionary = Dictionary::new();
        builtins::register_builtins(&mut dictionary);
        Interpreter {
            stack: Vec::new(),
            register: None,
            dictionary,
            output: String::new(),
            words_dirty: false,
            session: None,
        }
    }

    // --- execution ------------------------------------------------------

    /// Runs `source` to completion or to its first error. The output
    /// buffer is cleared at the start and keeps whatever was written
    /// before a failure; effects of primitives that completed earlier in
    /// the session stay in place.
    pub fn execute(&mut self, source: &str) -> Result<(), RuntimeError> {
        self.session = None;
        self.output.clear();
        let mut queue: VecDeque<Token> = tokenizer::tokenize(source)?.into();
        while !queue.is_empty() {
            evaluator::advance(self, &mut queue, true)?;
        }
        Ok(())
    }

    /// Prepares a step continuation over `source`, replacing any previous
    /// session and clearing the output buffer.
    pub fn init_step(&mut self, source: &str) -> Result<(), RuntimeError> {
        self.output.clear();
        let tokens = tokenizer::tokenize(source)?;
        let total = tokens.len();
        self.session = Some(StepSession {
            queue: tokens.into(),
            total,
        });
        Ok(())
    }

    /// Advances the current session by one user-visible action. An error
    /// consumes the session, as does the final step.
    pub fn step(&mut self) -> Result<StepOutcome, RuntimeError> {
        let mut session = self
            .session
            .take()
            .ok_or_else(|| RuntimeError::ParseError("no step session".to_string()))?;

        let output_mark = self.output.len();
        if !session.queue.is_empty() {
            let spliced = evaluator::advance(self, &mut session.queue, true)?;
            session.total += spliced;
        }

        let has_more = !session.queue.is_empty();
        let outcome = StepOutcome {
            output: self.output[output_mark..].to_string(),
            position: session.total - session.queue.len(),
            total: session.total,
            has_more,
        };
        if has_more {
            self.session = Some(session);
        }
        Ok(outcome)
    }

    // --- state helpers for primitives and the evaluator ------------------

    pub(crate) fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    pub(crate) fn pop(&mut self) -> Result<Value, RuntimeError> {
        self.stack.pop().ok_or(RuntimeError::StackUnderflow)
    }

    /// Borrows the value `depth` items below the top (0 = top) without
    /// popping. Primitives validate through this before mutating, so a
    /// failing invocation leaves the stack exactly as it found it.
    pub(crate) fn peek(&self, depth: usize) -> Result<&Value, RuntimeError> {
        let len = self.stack.len();
        if depth >= len {
            return Err(RuntimeError::StackUnderflow);
        }
        Ok(&self.stack[len - 1 - depth])
    }

    /// Drops the top `n` values. Only called after validation succeeded.
    pub(crate) fn discard(&mut self, n: usize) {
        let len = self.stack.len();
        self.stack.truncate(len - n);
    }

    /// Falsy: `false`, zero, `nil`, the empty string, the empty vector.
    pub(crate) fn is_truthy(&self, value: &Value) -> bool {
        match value {
            Value::Boolean(b) => *b,
            Value::Number(n) => !n.is_zero(),
            Value::Nil => false,
            Value::String(s) => !s.is_empty(),
            Value::Vector(items) => !items.is_empty(),
            Value::Symbol(_) | Value::QuotedSymbol(_) => true,
        }
    }

    pub(crate) fn write_str(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub(crate) fn mark_words_dirty(&mut self) {
        self.words_dirty = true;
    }

    // --- host introspection ----------------------------------------------

    /// The output accumulated since the last `execute`/`init_step`.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// The data stack, bottom to top.
    pub fn get_stack(&self) -> &[Value] {
        &self.stack
    }

    pub fn get_register(&self) -> Option<&Value> {
        self.register.as_ref()
    }

    /// User word names, sorted case-insensitively.
    pub fn get_custom_words(&self) -> Vec<String> {
        self.dictionary
            .list_user()
            .into_iter()
            .map(|(name, _, _)| name)
            .collect()
    }

    /// `(name, description, protected)` per user word, sorted
    /// case-insensitively.
    pub fn get_custom_words_info(&self) -> Vec<(String, Option<String>, bool)> {
        self.dictionary.list_user()
    }

    /// Poll-and-clear flag: true when the set of user words changed since
    /// the last call, so hosts know when to re-read the dictionary.
    pub fn take_words_dirty(&mut self) -> bool {
        std::mem::take(&mut self.words_dirty)
    }

    /// Clears stack, register, output buffer, any step session, and all
    /// user words. Builtins survive.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.register = None;
        self.output.clear();
        self.session = None;
        self.dictionary.clear_user();
        self.words_dirty = true;
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::Rational;

    #[test]
    fn execute_accumulates_output_per_session() {
        let mut interp = Interpreter::new();
        interp.execute("1 . CR").unwrap();
        assert_eq!(interp.output(), "1\n");

        // A new session clears the buffer.
        interp.execute("2 .").unwrap();
        assert_eq!(interp.output(), "2");
    }

    #[test]
    fn output_written_before_an_error_is_retained() {
        let mut interp = Interpreter::new();
        let err = interp.execute("\"partial\" . DROP").unwrap_err();
        assert_eq!(err, RuntimeError::StackUnderflow);
        assert_eq!(interp.output(), "partial");
    }

    #[test]
    fn step_session_counts_and_finishes() {
        let mut interp = Interpreter::new();
        interp.init_step("1 2 +").unwrap();

        let s1 = interp.step().unwrap();
        assert_eq!((s1.position, s1.total, s1.has_more), (1, 3, true));
        let s2 = interp.step().unwrap();
        assert_eq!((s2.position, s2.total, s2.has_more), (2, 3, true));
        let s3 = interp.step().unwrap();
        assert_eq!((s3.position, s3.total, s3.has_more), (3, 3, false));

        assert_eq!(interp.stack, vec![Value::Number(Rational::integer(3))]);
        assert!(interp.step().is_err(), "session must be consumed");
    }

    #[test]
    fn step_reports_output_deltas() {
        let mut interp = Interpreter::new();
        interp.init_step("1 . 2 .").unwrap();
        assert_eq!(interp.step().unwrap().output, "");
        assert_eq!(interp.step().unwrap().output, "1");
        assert_eq!(interp.step().unwrap().output, "");
        assert_eq!(interp.step().unwrap().output, "2");
    }

    #[test]
    fn error_consumes_the_session() {
        let mut interp = Interpreter::new();
        interp.init_step("DROP 1").unwrap();
        assert_eq!(interp.step().unwrap_err(), RuntimeError::StackUnderflow);
        assert!(interp.step().is_err());
    }

    #[test]
    fn words_dirty_flag_polls_and_clears() {
        let mut interp = Interpreter::new();
        assert!(!interp.take_words_dirty());
        interp.execute("[ DUP ] DEF TWICE").unwrap();
        assert!(interp.take_words_dirty());
        assert!(!interp.take_words_dirty());
    }

    #[test]
    fn reset_clears_everything_but_builtins_and_is_idempotent() {
        let mut interp = Interpreter::new();
        interp
            .execute("[ DUP + ] DEF DOUBLE 3 >R 1 2 \"x\" .")
            .unwrap();
        interp.reset();

        assert!(interp.get_stack().is_empty());
        assert!(interp.get_register().is_none());
        assert!(interp.output().is_empty());
        assert!(interp.get_custom_words().is_empty());
        // Builtins still work after reset.
        interp.execute("2 3 +").unwrap();
        assert_eq!(interp.stack, vec![Value::Number(Rational::integer(5))]);

        interp.reset();
        interp.reset();
        assert!(interp.get_stack().is_empty());
        assert!(interp.get_custom_words().is_empty());
    }
}
