use std::io::Stdout;
use std::time::Instant;

use lazyq::Sequence;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::filter::NameFilter;
use crate::outcome::{Outcome, Outcomes};
use crate::problems::Problem;
use crate::renderer::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Run the worked examples and compare with their answers.
    Check,
    /// Run the problems at full size.
    Solve,
}

impl Problem {
    /// Whether running in `mode` has anything to do.
    pub(crate) fn runs_in(&self, mode: Mode) -> bool {
        match mode {
            Mode::Check => self.sample.is_some(),
            Mode::Solve => true,
        }
    }

    /// Run this problem in `mode`. A problem without a worked example has
    /// nothing to check.
    pub(crate) fn run(&self, mode: Mode) -> Option<Outcome> {
        let input = match mode {
            Mode::Check => self.sample?.input,
            Mode::Solve => self.input,
        };
        let start = Instant::now();
        let result = (self.solve)(input);
        debug!(problem = self.name, input, elapsed = ?start.elapsed(), "ran");
        let outcome = match (result, mode) {
            (Err(error), _) => Outcome::Error(error),
            (Ok(answer), Mode::Solve) => Outcome::Solved(answer),
            (Ok(actual), Mode::Check) => match self.sample {
                Some(sample) if sample.expected == actual => Outcome::Passed,
                Some(sample) => Outcome::Failed {
                    expected: sample.expected,
                    actual,
                },
                None => return None,
            },
        };
        Some(outcome)
    }
}

/// The problems the filter lets through that have something to run in
/// `mode`.
fn select(
    problems: &'static [Problem],
    filter: &NameFilter,
    mode: Mode,
) -> Result<Vec<&'static Problem>> {
    let selected = Sequence::new(problems)
        .where_(|problem| filter.is_included(problem) && problem.runs_in(mode))
        .to_list();
    if selected.is_empty() {
        return Err(Error::NoProblemsMatched(filter.describe().to_string()));
    }
    Ok(selected)
}

pub(crate) fn run(
    problems: &'static [Problem],
    filter: &NameFilter,
    mode: Mode,
    out: &mut Stdout,
    renderer: &dyn Renderer,
) -> Result<Outcomes> {
    let selected = select(problems, filter, mode)?;
    info!(problems = selected.len(), ?mode, "running");
    let mut outcomes = Outcomes::new();
    for problem in selected {
        let Some(outcome) = problem.run(mode) else {
            debug!(problem = problem.name, "nothing to run, skipped");
            continue;
        };
        renderer.render_problem(out, problem)?;
        renderer.render_outcome(out, &outcome)?;
        outcomes.add_outcome(problem.name, outcome);
    }
    renderer.render_summary(out, &outcomes)?;
    Ok(outcomes)
}
