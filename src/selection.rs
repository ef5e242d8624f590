//! Interactive curve selection.

use tracing::{debug, warn};

use crate::kernel::CurveId;

/// Prompt shown when asking for the loop curves.
pub const LOOP_PROMPT: &str = "Select 4 connectors forming a closed loop";

/// Raw outcome of a selection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The user picked these curves.
    Picked(Vec<CurveId>),
    /// The user dismissed the request.
    Cancelled,
}

/// A blocking picker that restricts the user to curves.
pub trait SelectionService {
    /// Blocks until the user picks curves or cancels.
    fn select_curves(&mut self, prompt: &str) -> Selection;
}

/// Outcome of asking the user for the four loop curves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopSelection {
    /// Exactly four distinct curves, in pick order.
    Curves([CurveId; 4]),
    /// The user cancelled; nothing should change.
    Cancelled,
    /// The user picked this many distinct curves instead of four.
    WrongCount(usize),
}

/// Asks `service` once for the loop curves.
///
/// Repeated picks of the same curve count once.
pub fn request_loop_curves<S: SelectionService + ?Sized>(service: &mut S) -> LoopSelection {
    let picked = match service.select_curves(LOOP_PROMPT) {
        Selection::Picked(curves) => curves,
        Selection::Cancelled => {
            debug!("curve selection cancelled");
            return LoopSelection::Cancelled;
        }
    };

    match distinct_four(&picked) {
        Ok(curves) => LoopSelection::Curves(curves),
        Err(found) => {
            warn!(found, "expected 4 curves");
            LoopSelection::WrongCount(found)
        }
    }
}

/// Drops repeated curves, keeping first-pick order, and expects four left.
///
/// # Errors
///
/// Returns the number of distinct curves when it is not four.
pub fn distinct_four(curves: &[CurveId]) -> Result<[CurveId; 4], usize> {
    let mut distinct: Vec<CurveId> = Vec::with_capacity(curves.len());
    for &curve in curves {
        if !distinct.contains(&curve) {
            distinct.push(curve);
        }
    }
    <[CurveId; 4]>::try_from(distinct).map_err(|rest| rest.len())
}

/// A [`SelectionService`] that replays canned answers, oldest first.
///
/// Once the script runs out it answers [`Selection::Cancelled`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedSelection {
    answers: Vec<Selection>,
    prompts: Vec<String>,
}

impl ScriptedSelection {
    /// Creates a picker that will answer with `answers` in order.
    #[must_use]
    pub fn new(answers: Vec<Selection>) -> Self {
        let mut answers = answers;
        answers.reverse();
        Self {
            answers,
            prompts: Vec::new(),
        }
    }

    /// Prompts received so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl SelectionService for ScriptedSelection {
    fn select_curves(&mut self, prompt: &str) -> Selection {
        self.prompts.push(prompt.to_owned());
        self.answers.pop().unwrap_or(Selection::Cancelled)
    }
}
