use lazyq::Sequence;

#[derive(Debug, PartialEq)]
pub(crate) enum Outcome {
    /// The sample gave the expected answer.
    Passed,
    Failed {
        expected: u64,
        actual: u64,
    },
    /// A full-size answer, with nothing to compare it to.
    Solved(u64),
    Error(lazyq::Error),
}

impl Outcome {
    pub(crate) fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::Error(..))
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Outcome::Passed => "PASS",
            Outcome::Failed { .. } => "FAIL",
            Outcome::Solved(_) => "SOLVED",
            Outcome::Error(_) => "ERROR",
        }
    }

    /// What follows the label, with its leading space.
    pub(crate) fn details(&self) -> String {
        match self {
            Outcome::Passed => String::new(),
            Outcome::Failed { expected, actual } => format!(" expected {expected}, got {actual}"),
            Outcome::Solved(answer) => format!(" {answer}"),
            Outcome::Error(error) => format!(" {error}"),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.label(), self.details())
    }
}

/// The outcomes of a run, in the order the problems ran.
#[derive(Debug, Default)]
pub(crate) struct Outcomes {
    pub(crate) outcomes: Vec<(&'static str, Outcome)>,
}

impl Outcomes {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_outcome(&mut self, name: &'static str, outcome: Outcome) {
        self.outcomes.push((name, outcome));
    }

    pub(crate) fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub(crate) fn failed(&self) -> usize {
        Sequence::new(&self.outcomes).count_where(|(_, outcome)| outcome.is_failure())
    }

    pub(crate) fn failing_names(&self) -> Vec<&'static str> {
        Sequence::new(&self.outcomes)
            .where_(|(_, outcome)| outcome.is_failure())
            .select(|(name, _)| *name)
            .to_list()
    }
}

impl std::fmt::Display for Outcomes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let failed = self.failed();
        let total = self.total();
        write!(f, "ok: {}/{total}; failed: {failed}/{total}", total - failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcomes() -> Outcomes {
        let mut outcomes = Outcomes::new();
        outcomes.add_outcome("euler_001", Outcome::Passed);
        outcomes.add_outcome(
            "euler_002",
            Outcome::Failed {
                expected: 44,
                actual: 10,
            },
        );
        outcomes.add_outcome("euler_003", Outcome::Solved(29));
        outcomes.add_outcome("euler_004", Outcome::Error(lazyq::Error::EmptySequence));
        outcomes
    }

    #[test]
    fn test_counts() {
        let outcomes = outcomes();
        assert_eq!(outcomes.total(), 4);
        assert_eq!(outcomes.failed(), 2);
        assert_eq!(outcomes.failing_names(), vec!["euler_002", "euler_004"]);
    }

    #[test]
    fn test_is_failure() {
        assert!(!Outcome::Passed.is_failure());
        assert!(!Outcome::Solved(1).is_failure());
        assert!(Outcome::Error(lazyq::Error::MultipleMatches).is_failure());
    }

    #[test]
    fn test_display() {
        let outcomes = outcomes();
        let lines = Sequence::new(&outcomes.outcomes)
            .select(|(name, outcome)| format!("{name} {outcome}"))
            .to_list();
        assert_eq!(
            lines,
            vec![
                "euler_001 PASS",
                "euler_002 FAIL expected 44, got 10",
                "euler_003 SOLVED 29",
                "euler_004 ERROR sequence contains no matching items",
            ]
        );
        assert_eq!(outcomes.to_string(), "ok: 2/4; failed: 2/4");
    }
}
