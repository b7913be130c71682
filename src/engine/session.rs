//! Session state machine.
//!
//! `Menu --start--> Play --(per decision)--> Play | Results | GameOver`;
//! `Results --restart--> Menu`; `GameOver --restart--> Menu`.
//!
//! A session owns its snapshot (metrics, characters, index, history) and
//! replaces it wholesale on each decision; the dataset is shared read-only
//! via `Arc` and never re-queried mid-session. Persistent `im` structures
//! make the per-decision snapshot swap cheap.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::feedback::DecisionFeedback;
use super::resolve::{apply_option, evaluate_progress, Outcome};
use crate::core::{Character, Choice, EventId, FailureReason, GameEvent, Metrics};
use crate::data::Dataset;

/// Coarse session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Menu,
    Play,
    Results,
    GameOver,
}

/// Misuse of the session API.
///
/// These are caller errors, not game outcomes - defeat is [`Outcome::GameOver`],
/// never an `Err`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot {action} while in {phase:?}")]
    WrongPhase {
        action: &'static str,
        phase: Phase,
    },
    #[error("no feedback pending acknowledgement")]
    NoPendingFeedback,
    #[error("previous decision's feedback not yet acknowledged")]
    FeedbackPending,
}

/// One resolved decision, recorded in session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub event_id: EventId,
    pub event_index: usize,
    pub choice: Choice,
}

/// One playthrough from menu to a terminal screen.
///
/// ## Feedback gate
///
/// With the gate disabled (default), [`Session::choose`] applies the
/// progression outcome immediately. With it enabled, the outcome is
/// computed at decision time but held until [`Session::acknowledge`] - the
/// feedback-screen edition, where the player reads the deltas before the
/// game moves on. The gate only defers when the outcome takes effect,
/// never what it is.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use cardswipe::core::Choice;
/// use cardswipe::data::default_dataset;
/// use cardswipe::engine::{Outcome, Phase, Session};
///
/// let mut session = Session::new(Arc::new(default_dataset()));
/// session.start().unwrap();
/// assert_eq!(session.phase(), Phase::Play);
///
/// let feedback = session.choose(Choice::A).unwrap();
/// if let Outcome::Continue { next_index } = feedback.outcome {
///     assert_eq!(session.event_index(), next_index);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    dataset: Arc<Dataset>,
    phase: Phase,
    event_index: usize,
    metrics: Metrics,
    characters: Vector<Character>,
    history: Vector<DecisionRecord>,
    /// Outcome held back by the feedback gate until acknowledged.
    pending: Option<Outcome>,
    feedback_gate: bool,
}

impl Session {
    /// Create a session in the menu phase.
    #[must_use]
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let characters = dataset.fresh_roster();
        Self {
            dataset,
            phase: Phase::Menu,
            event_index: 0,
            metrics: Metrics::new(),
            characters,
            history: Vector::new(),
            pending: None,
            feedback_gate: false,
        }
    }

    /// Enable the feedback gate: outcomes are deferred until
    /// [`Session::acknowledge`].
    #[must_use]
    pub fn with_feedback_gate(mut self) -> Self {
        self.feedback_gate = true;
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current 0-based event index.
    #[must_use]
    pub fn event_index(&self) -> usize {
        self.event_index
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    #[must_use]
    pub fn characters(&self) -> &Vector<Character> {
        &self.characters
    }

    #[must_use]
    pub fn history(&self) -> &Vector<DecisionRecord> {
        &self.history
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The event currently on the card, while playing.
    #[must_use]
    pub fn current_event(&self) -> Option<&GameEvent> {
        if self.phase == Phase::Play {
            self.dataset.event_at(self.event_index)
        } else {
            None
        }
    }

    /// Decisions resolved so far ("you survived N of M events").
    #[must_use]
    pub fn events_survived(&self) -> usize {
        self.history.len()
    }

    /// Why the session was lost, once in the game-over phase.
    #[must_use]
    pub fn failure_reason(&self) -> Option<FailureReason> {
        if self.phase != Phase::GameOver {
            return None;
        }
        self.metrics.first_collapsed().map(FailureReason::for_metric)
    }

    /// The outcome the feedback gate is holding, if any.
    #[must_use]
    pub fn pending_outcome(&self) -> Option<Outcome> {
        self.pending
    }

    // === Transitions ===

    /// `Menu -> Play`. Resets metrics to 50, all support to 0, the event
    /// index to 0, and clears history.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Menu {
            return Err(SessionError::WrongPhase {
                action: "start",
                phase: self.phase,
            });
        }

        self.phase = Phase::Play;
        self.event_index = 0;
        self.metrics = Metrics::new();
        self.characters = self.dataset.fresh_roster();
        self.history = Vector::new();
        self.pending = None;

        info!(events = self.dataset.event_count(), "session started");
        Ok(())
    }

    /// Resolve the current event with a choice.
    ///
    /// Applies the chosen option, records the decision, and either acts on
    /// the progression outcome immediately or, with the feedback gate on,
    /// holds it until [`Session::acknowledge`].
    pub fn choose(&mut self, choice: Choice) -> Result<DecisionFeedback, SessionError> {
        if self.phase != Phase::Play {
            return Err(SessionError::WrongPhase {
                action: "choose",
                phase: self.phase,
            });
        }
        if self.pending.is_some() {
            return Err(SessionError::FeedbackPending);
        }

        // Invariant: while in Play the index always addresses an event;
        // Continue only ever advances to an in-range index.
        let event = self
            .dataset
            .event_at(self.event_index)
            .expect("event index within deck while playing")
            .clone();
        let option = event.option(choice);

        let (new_metrics, new_characters) =
            apply_option(&self.metrics, &self.characters, option);
        let outcome =
            evaluate_progress(&new_metrics, self.event_index, self.dataset.event_count());
        let feedback = DecisionFeedback::build(
            choice,
            &event,
            option,
            &self.metrics,
            &new_metrics,
            &self.characters,
            &new_characters,
            outcome,
        );

        self.metrics = new_metrics;
        self.characters = new_characters;
        self.history.push_back(DecisionRecord {
            event_id: event.id,
            event_index: self.event_index,
            choice,
        });

        debug!(event = %event.id, %choice, ?outcome, "decision resolved");

        if self.feedback_gate {
            self.pending = Some(outcome);
        } else {
            self.take_outcome(outcome);
        }

        Ok(feedback)
    }

    /// Act on the outcome held by the feedback gate.
    pub fn acknowledge(&mut self) -> Result<Outcome, SessionError> {
        if self.phase != Phase::Play {
            return Err(SessionError::WrongPhase {
                action: "acknowledge",
                phase: self.phase,
            });
        }
        let outcome = self.pending.take().ok_or(SessionError::NoPendingFeedback)?;
        self.take_outcome(outcome);
        Ok(outcome)
    }

    /// `Results | GameOver -> Menu`. The played-out snapshot stays
    /// readable until the next [`Session::start`] resets it.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Results | Phase::GameOver => {
                self.phase = Phase::Menu;
                Ok(())
            }
            phase => Err(SessionError::WrongPhase {
                action: "restart",
                phase,
            }),
        }
    }

    fn take_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Continue { next_index } => self.event_index = next_index,
            Outcome::Results => {
                self.phase = Phase::Results;
                info!(survived = self.events_survived(), "session won");
            }
            Outcome::GameOver(reason) => {
                self.phase = Phase::GameOver;
                info!(reason = reason.title(), survived = self.events_survived(), "session lost");
            }
        }
    }
}
