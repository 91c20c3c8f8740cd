use std::io::{self, Stdout, Write};

use crossterm::style::{Color, Stylize};

use crate::outcome::{Outcome, Outcomes};
use crate::problems::Problem;

pub(crate) trait Renderer {
    fn render_problem(&self, out: &mut Stdout, problem: &Problem) -> io::Result<()>;
    fn render_outcome(&self, out: &mut Stdout, outcome: &Outcome) -> io::Result<()>;
    fn render_summary(&self, out: &mut Stdout, outcomes: &Outcomes) -> io::Result<()>;
}

/// `text` in `color`, or as is when colouring is off. Plain text carries
/// no escape sequences at all, not even resets.
fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

fn outcome_color(outcome: &Outcome) -> Color {
    if outcome.is_failure() {
        Color::Red
    } else {
        Color::Green
    }
}

fn outcome_line(outcome: &Outcome, color: bool) -> String {
    let label = paint(outcome.label(), outcome_color(outcome), color);
    format!("{label}{}", outcome.details())
}

fn summary_line(outcomes: &Outcomes, color: bool) -> String {
    let summary_color = if outcomes.failed() == 0 {
        Color::Green
    } else {
        Color::Red
    };
    paint(&outcomes.to_string(), summary_color, color)
}

/// One character per problem, details of the failures at the end.
pub(crate) struct CharacterRenderer {
    color: bool,
}

impl CharacterRenderer {
    pub(crate) fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Renderer for CharacterRenderer {
    fn render_problem(&self, _out: &mut Stdout, _problem: &Problem) -> io::Result<()> {
        Ok(())
    }

    fn render_outcome(&self, out: &mut Stdout, outcome: &Outcome) -> io::Result<()> {
        let mark = match outcome {
            Outcome::Passed | Outcome::Solved(_) => ".",
            Outcome::Failed { .. } => "F",
            Outcome::Error(_) => "E",
        };
        write!(out, "{}", paint(mark, outcome_color(outcome), self.color))?;
        out.flush()
    }

    fn render_summary(&self, out: &mut Stdout, outcomes: &Outcomes) -> io::Result<()> {
        writeln!(out)?;
        for (name, outcome) in &outcomes.outcomes {
            if matches!(outcome, Outcome::Solved(_)) || outcome.is_failure() {
                writeln!(out, "{name} {}", outcome_line(outcome, self.color))?;
            }
        }
        writeln!(out, "{}", summary_line(outcomes, self.color))
    }
}

/// One line per problem.
pub(crate) struct VerboseRenderer {
    color: bool,
}

impl VerboseRenderer {
    pub(crate) fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Renderer for VerboseRenderer {
    fn render_problem(&self, out: &mut Stdout, problem: &Problem) -> io::Result<()> {
        write!(out, "{} ({}) ... ", problem.name, problem.description)
    }

    fn render_outcome(&self, out: &mut Stdout, outcome: &Outcome) -> io::Result<()> {
        writeln!(out, "{}", outcome_line(outcome, self.color))
    }

    fn render_summary(&self, out: &mut Stdout, outcomes: &Outcomes) -> io::Result<()> {
        writeln!(out, "{}", summary_line(outcomes, self.color))
    }
}

pub(crate) fn renderer(verbose: bool, color: bool) -> Box<dyn Renderer> {
    if verbose {
        Box::new(VerboseRenderer::new(color))
    } else {
        Box::new(CharacterRenderer::new(color))
    }
}
