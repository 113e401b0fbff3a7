use std::fmt;

use crate::Quantifier;

/// One element that failed its assertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementFailure {
    /// 0-based position in iteration order.
    pub index: usize,
    /// The element's failure message.
    pub message: String,
}

/// Counters for one inspection run.
///
/// `examined == passed + failed` always holds; an early exit stops
/// examining but never mis-counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InspectionStats {
    /// Elements whose assertion ran.
    pub examined: usize,
    /// Elements that passed.
    pub passed: usize,
    /// Elements that failed.
    pub failed: usize,
}

/// A failed inspection.
#[derive(Clone, Debug)]
pub enum InspectionError {
    /// The quantifier's counting rule was not satisfied.
    Unsatisfied(Unsatisfied),
    /// The caller passed a bound that makes the inspection meaningless.
    BadArgument(String),
}

/// Details of an unsatisfied inspection.
#[derive(Clone, Debug)]
pub struct Unsatisfied {
    /// The counting rule that was violated.
    pub quantifier: Quantifier,
    /// Counters at the point the verdict was reached.
    pub stats: InspectionStats,
    /// Failing elements, in iteration order.
    ///
    /// For `for_all` this holds exactly the first failure; for
    /// shortfall verdicts it holds every failure examined.
    pub failures: Vec<ElementFailure>,
    /// Indexes of passing elements, for surplus verdicts.
    pub passing: Vec<usize>,
    /// Rendering of the inspected collection.
    pub collection: String,
}

impl Unsatisfied {
    /// Whether more elements passed than the rule allows (as opposed
    /// to too few).
    fn is_surplus(&self) -> bool {
        match self.quantifier {
            Quantifier::All | Quantifier::Every | Quantifier::AtLeast(_) => false,
            Quantifier::AtMost(n) => self.stats.passed > n,
            Quantifier::Exactly(n) => self.stats.passed > n,
            Quantifier::Between(_, upto) => self.stats.passed > upto,
        }
    }

    fn write_failure_lines(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for failure in &self.failures {
            writeln!(f, "  at index {}, {}", failure.index, failure.message)?;
        }
        Ok(())
    }

    fn write_passing_indexes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for index in &self.passing {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Display for Unsatisfied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_surplus() {
            write!(
                f,
                "{} failed, because {} elements satisfied the assertion, at indexes ",
                self.quantifier, self.stats.passed
            )?;
            self.write_passing_indexes(f)?;
            return write!(f, ", in {}", self.collection);
        }
        match self.quantifier {
            Quantifier::All | Quantifier::Every => {
                writeln!(f, "{} failed, because:", self.quantifier)?;
                self.write_failure_lines(f)?;
                write!(f, "in {}", self.collection)
            }
            _ => {
                writeln!(
                    f,
                    "{} failed, because only {} of the {} examined elements satisfied the assertion:",
                    self.quantifier, self.stats.passed, self.stats.examined
                )?;
                self.write_failure_lines(f)?;
                write!(f, "in {}", self.collection)
            }
        }
    }
}

impl fmt::Display for InspectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectionError::Unsatisfied(unsatisfied) => unsatisfied.fmt(f),
            InspectionError::BadArgument(message) => message.fmt(f),
        }
    }
}

impl std::error::Error for InspectionError {}
