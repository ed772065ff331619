//! Test-only filters and answer services used by unit and behaviour tests.

use std::cell::RefCell;

use crate::{
    AnswerError, AnswerRequest, AnswerService, Dataset, FacilityFilter, FacilityRecord, Hit,
    Selection,
};

/// Filter selecting rows whose lowercased name contains the trimmed query.
///
/// Every match gets a relevance of one.
#[derive(Debug, Default, Copy, Clone)]
pub struct NameFilter;

impl FacilityFilter for NameFilter {
    fn select<'a>(&self, dataset: &'a Dataset, query: &str) -> Selection<'a> {
        let needle = query.trim().to_lowercase();
        if dataset.is_empty() || needle.is_empty() {
            return Selection::blank();
        }
        let hits: Vec<Hit<'a>> = dataset
            .iter()
            .enumerate()
            .filter(|(_, record)| record.name.to_lowercase().contains(&needle))
            .map(|(index, facility)| Hit {
                index,
                facility,
                relevance: Some(1),
            })
            .collect();
        if hits.is_empty() {
            Selection::no_matches()
        } else {
            Selection::ranked(hits)
        }
    }
}

/// Answer service returning the same reply for every request.
#[derive(Debug, Clone)]
pub struct FixedAnswer {
    reply: String,
}

impl FixedAnswer {
    /// Build a service that always answers `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl AnswerService for FixedAnswer {
    fn answer(&self, _request: &AnswerRequest<'_>) -> Result<String, AnswerError> {
        Ok(self.reply.clone())
    }
}

/// Answer service that is never reachable.
#[derive(Debug, Default, Copy, Clone)]
pub struct FailingAnswer;

impl AnswerService for FailingAnswer {
    fn answer(&self, _request: &AnswerRequest<'_>) -> Result<String, AnswerError> {
        Err(AnswerError::Unavailable {
            message: "connection refused".to_owned(),
        })
    }
}

/// Answer service that remembers every context it receives.
#[derive(Debug, Default)]
pub struct RecordingAnswer {
    contexts: RefCell<Vec<String>>,
}

impl RecordingAnswer {
    /// Contexts received so far, oldest first.
    pub fn contexts(&self) -> Vec<String> {
        self.contexts.borrow().clone()
    }
}

impl AnswerService for RecordingAnswer {
    fn answer(&self, request: &AnswerRequest<'_>) -> Result<String, AnswerError> {
        self.contexts.borrow_mut().push(request.context.to_owned());
        Ok(format!("{} rows considered", request.context.lines().count()))
    }
}

/// Build a facility with the columns the scoring heuristics read.
pub fn facility(capacity: &str, specialties: &str, equipment: &str) -> FacilityRecord {
    FacilityRecord::new("Facility")
        .with_capacity(capacity)
        .with_specialties(specialties)
        .with_equipment(equipment)
}
