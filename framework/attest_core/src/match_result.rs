use smallvec::SmallVec;

use attest_render::{expand, ArgValue, Prettifier};

/// Argument vector for one message variant.
///
/// Two inline slots: nearly every matcher message mentions the actual
/// value and one expected operand.
pub type ArgVec = SmallVec<[ArgValue; 2]>;

/// Selects one of the four message variants of a [`MatchResult`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageVariant {
    /// Shown when the match failed.
    Failure,
    /// Shown when a negated match failed (the matcher succeeded under `not`).
    NegatedFailure,
    /// Failure phrasing for splicing into the middle of a sentence.
    MidSentenceFailure,
    /// Negated-failure phrasing for mid-sentence splicing.
    MidSentenceNegatedFailure,
}

/// The outcome of applying a matcher to a value.
///
/// Carries a boolean outcome plus four raw message templates and their
/// captured argument vectors. Message construction is pure and deferred:
/// applying a matcher allocates no message text, and nothing is
/// formatted until one of the `*_message` accessors runs. A passing
/// assertion discards its result without ever paying for formatting.
///
/// The mid-sentence variants exist for composition: "3 was even, but 3
/// was not greater than 5" needs the right-hand clause phrased for the
/// middle of a sentence. Matchers whose messages start with a capital
/// letter or an article supply distinct mid-sentence templates; for
/// most, the plain and mid-sentence templates coincide.
#[derive(Clone, Debug)]
#[must_use = "a MatchResult carries the assertion outcome and should be checked"]
pub struct MatchResult {
    /// Whether the matcher accepted the value.
    pub matches: bool,
    raw_failure: String,
    raw_negated_failure: String,
    raw_mid_failure: String,
    raw_mid_negated_failure: String,
    failure_args: ArgVec,
    negated_failure_args: ArgVec,
    mid_failure_args: ArgVec,
    mid_negated_failure_args: ArgVec,
}

impl MatchResult {
    /// Create a result whose mid-sentence templates equal the plain ones.
    ///
    /// All four argument vectors start empty; add them with the
    /// `with_*_args` builders or [`MatchResult::with_args`].
    pub fn new(
        matches: bool,
        raw_failure: impl Into<String>,
        raw_negated_failure: impl Into<String>,
    ) -> Self {
        let raw_failure = raw_failure.into();
        let raw_negated_failure = raw_negated_failure.into();
        MatchResult {
            matches,
            raw_mid_failure: raw_failure.clone(),
            raw_mid_negated_failure: raw_negated_failure.clone(),
            raw_failure,
            raw_negated_failure,
            failure_args: ArgVec::new(),
            negated_failure_args: ArgVec::new(),
            mid_failure_args: ArgVec::new(),
            mid_negated_failure_args: ArgVec::new(),
        }
    }

    /// Create a result with all four templates given explicitly.
    pub fn with_messages(
        matches: bool,
        raw_failure: impl Into<String>,
        raw_negated_failure: impl Into<String>,
        raw_mid_failure: impl Into<String>,
        raw_mid_negated_failure: impl Into<String>,
    ) -> Self {
        MatchResult {
            matches,
            raw_failure: raw_failure.into(),
            raw_negated_failure: raw_negated_failure.into(),
            raw_mid_failure: raw_mid_failure.into(),
            raw_mid_negated_failure: raw_mid_negated_failure.into(),
            failure_args: ArgVec::new(),
            negated_failure_args: ArgVec::new(),
            mid_failure_args: ArgVec::new(),
            mid_negated_failure_args: ArgVec::new(),
        }
    }

    /// Use the same arguments for all four message variants.
    ///
    /// The common case: a matcher's four templates mention the same
    /// operands in the same order.
    pub fn with_args(mut self, args: impl IntoIterator<Item = ArgValue>) -> Self {
        let args: ArgVec = args.into_iter().collect();
        self.failure_args = args.clone();
        self.negated_failure_args = args.clone();
        self.mid_failure_args = args.clone();
        self.mid_negated_failure_args = args;
        self
    }

    /// Set the failure-message arguments.
    pub fn with_failure_args(mut self, args: impl IntoIterator<Item = ArgValue>) -> Self {
        self.failure_args = args.into_iter().collect();
        self
    }

    /// Set the negated-failure-message arguments.
    pub fn with_negated_args(mut self, args: impl IntoIterator<Item = ArgValue>) -> Self {
        self.negated_failure_args = args.into_iter().collect();
        self
    }

    /// Set the mid-sentence failure-message arguments.
    pub fn with_mid_failure_args(mut self, args: impl IntoIterator<Item = ArgValue>) -> Self {
        self.mid_failure_args = args.into_iter().collect();
        self
    }

    /// Set the mid-sentence negated-failure-message arguments.
    pub fn with_mid_negated_args(mut self, args: impl IntoIterator<Item = ArgValue>) -> Self {
        self.mid_negated_failure_args = args.into_iter().collect();
        self
    }

    /// Message explaining why the match failed.
    pub fn failure_message(&self, prettifier: &Prettifier) -> String {
        expand(&self.raw_failure, &self.failure_args, prettifier)
    }

    /// Message explaining why a negated match failed.
    pub fn negated_failure_message(&self, prettifier: &Prettifier) -> String {
        expand(
            &self.raw_negated_failure,
            &self.negated_failure_args,
            prettifier,
        )
    }

    /// Failure message phrased for the middle of a sentence.
    pub fn mid_sentence_failure_message(&self, prettifier: &Prettifier) -> String {
        expand(&self.raw_mid_failure, &self.mid_failure_args, prettifier)
    }

    /// Negated-failure message phrased for the middle of a sentence.
    pub fn mid_sentence_negated_failure_message(&self, prettifier: &Prettifier) -> String {
        expand(
            &self.raw_mid_negated_failure,
            &self.mid_negated_failure_args,
            prettifier,
        )
    }

    /// Render the selected message variant.
    pub fn message(&self, variant: MessageVariant, prettifier: &Prettifier) -> String {
        match variant {
            MessageVariant::Failure => self.failure_message(prettifier),
            MessageVariant::NegatedFailure => self.negated_failure_message(prettifier),
            MessageVariant::MidSentenceFailure => self.mid_sentence_failure_message(prettifier),
            MessageVariant::MidSentenceNegatedFailure => {
                self.mid_sentence_negated_failure_message(prettifier)
            }
        }
    }

    /// The raw (unexpanded) template for the selected variant.
    pub fn raw_message(&self, variant: MessageVariant) -> &str {
        match variant {
            MessageVariant::Failure => &self.raw_failure,
            MessageVariant::NegatedFailure => &self.raw_negated_failure,
            MessageVariant::MidSentenceFailure => &self.raw_mid_failure,
            MessageVariant::MidSentenceNegatedFailure => &self.raw_mid_negated_failure,
        }
    }

    /// The captured arguments for the selected variant.
    pub fn message_args(&self, variant: MessageVariant) -> &[ArgValue] {
        match variant {
            MessageVariant::Failure => &self.failure_args,
            MessageVariant::NegatedFailure => &self.negated_failure_args,
            MessageVariant::MidSentenceFailure => &self.mid_failure_args,
            MessageVariant::MidSentenceNegatedFailure => &self.mid_negated_failure_args,
        }
    }

    /// The logically inverted result.
    ///
    /// Flips the outcome and swaps the failure/negated-failure template
    /// and argument pairs (plain and mid-sentence alike), so the
    /// messages of `not(m)` read correctly without re-evaluating `m`.
    pub fn negated(self) -> Self {
        MatchResult {
            matches: !self.matches,
            raw_failure: self.raw_negated_failure,
            raw_negated_failure: self.raw_failure,
            raw_mid_failure: self.raw_mid_negated_failure,
            raw_mid_negated_failure: self.raw_mid_failure,
            failure_args: self.negated_failure_args,
            negated_failure_args: self.failure_args,
            mid_failure_args: self.mid_negated_failure_args,
            mid_negated_failure_args: self.mid_failure_args,
        }
    }
}
