use derive_more::Display;

use crate::error::FetchError;
use crate::model::{AnalysisResult, ModelType, PredictionResponse};

/// Counter bumped by every submit and by `go_back`. A completion only lands
/// if it carries the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Display)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Form,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Form,
    Loading,
    Result,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub generation: Generation,
    pub model_type: ModelType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    in_flight: bool,
    last_error: Option<String>,
    classification: Option<AnalysisResult>,
    detection: Option<AnalysisResult>,
    view: ViewMode,
    generation: Generation,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight {
            Phase::Loading
        } else if self.view == ViewMode::Result {
            Phase::Result
        } else if self.last_error.is_some() {
            Phase::Error
        } else {
            Phase::Form
        }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn result_for(&self, model_type: ModelType) -> Option<&AnalysisResult> {
        match model_type {
            ModelType::Classification => self.classification.as_ref(),
            ModelType::Detection => self.detection.as_ref(),
        }
    }

    fn slot_mut(&mut self, model_type: ModelType) -> &mut Option<AnalysisResult> {
        match model_type {
            ModelType::Classification => &mut self.classification,
            ModelType::Detection => &mut self.detection,
        }
    }

    /// Enters loading for `model_type`. The other model's stored result is
    /// dropped; the caller must issue exactly one request with the ticket.
    pub fn begin_submit(&mut self, model_type: ModelType) -> RequestTicket {
        self.generation = self.generation.next();
        self.in_flight = true;
        self.last_error = None;
        *self.slot_mut(model_type.opposite()) = None;

        RequestTicket {
            generation: self.generation,
            model_type,
        }
    }

    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<PredictionResponse, FetchError>,
    ) -> Completion {
        if ticket.generation != self.generation {
            log::warn!(
                "Dropping {} response from generation {} (current {})",
                ticket.model_type,
                ticket.generation,
                self.generation
            );
            return Completion::Stale;
        }

        self.in_flight = false;
        match outcome {
            Ok(response) => {
                let result = response.into_result(ticket.model_type);
                log::info!(
                    "{} result stored, processing time {:.2}s",
                    ticket.model_type,
                    result.processing_time
                );
                *self.slot_mut(ticket.model_type) = Some(result);
                self.last_error = None;
                self.view = ViewMode::Result;
            }
            Err(err) => {
                log::error!("{} request failed: {}", ticket.model_type, err);
                self.last_error = Some(err.user_message());
                self.view = ViewMode::Form;
            }
        }

        Completion::Applied
    }

    pub fn go_back(&mut self) {
        self.classification = None;
        self.detection = None;
        self.view = ViewMode::Form;
        self.in_flight = false;
        self.generation = self.generation.next();
    }
}
