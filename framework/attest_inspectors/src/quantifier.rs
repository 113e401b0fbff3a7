use std::fmt;

/// The counting rule of an inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// Every element passes; first failure reported.
    All,
    /// Every element passes; all failures reported.
    Every,
    /// At least this many elements pass.
    AtLeast(usize),
    /// At most this many elements pass.
    AtMost(usize),
    /// Exactly this many elements pass.
    Exactly(usize),
    /// The pass count falls in this inclusive range.
    Between(usize, usize),
}

impl Quantifier {
    /// Reject bounds that make the inspection meaningless.
    ///
    /// "At least zero" and "exactly zero in any direction below" can
    /// never fail or never succeed respectively in the intended sense;
    /// both almost certainly indicate a typo'd bound at the call site.
    pub(crate) fn validate(self) -> Result<(), String> {
        match self {
            Quantifier::AtLeast(0) => {
                Err("for_at_least requires n >= 1, but n was 0".to_string())
            }
            Quantifier::Exactly(0) => {
                Err("for_exactly requires n >= 1, but n was 0".to_string())
            }
            Quantifier::Between(from, upto) if from > upto => Err(format!(
                "for_between requires from <= upto, but from was {from} and upto was {upto}"
            )),
            _ => Ok(()),
        }
    }

    /// Whether `passed` satisfies this rule once iteration is complete.
    pub(crate) fn satisfied_by(self, passed: usize, failed: usize) -> bool {
        match self {
            Quantifier::All | Quantifier::Every => failed == 0,
            Quantifier::AtLeast(n) => passed >= n,
            Quantifier::AtMost(n) => passed <= n,
            Quantifier::Exactly(n) => passed == n,
            Quantifier::Between(from, upto) => passed >= from && passed <= upto,
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::All => write!(f, "for_all"),
            Quantifier::Every => write!(f, "for_every"),
            Quantifier::AtLeast(n) => write!(f, "for_at_least({n})"),
            Quantifier::AtMost(n) => write!(f, "for_at_most({n})"),
            Quantifier::Exactly(n) => write!(f, "for_exactly({n})"),
            Quantifier::Between(from, upto) => write!(f, "for_between({from}, {upto})"),
        }
    }
}
