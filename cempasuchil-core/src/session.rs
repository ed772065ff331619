//! Interactive chat sessions over a facility dataset.
//!
//! A [`Session`] owns the master dataset, the rows currently shown on the
//! map and the chat log. Each question narrows the active rows through a
//! [`FacilityFilter`] and forwards the selected rows, rendered as a text
//! table, to an [`AnswerService`].

use log::{debug, warn};
use thiserror::Error;

use crate::{COLUMNS, Dataset, FacilityFilter, FacilityRecord, Selection};

/// Instruction sent with every question.
pub const SYSTEM_PROMPT: &str =
    "You are the Cempasuchil Agent. Use the CONTEXT to answer. Be concise.";
/// Context sent when the filter selected nothing.
pub const NO_MATCH_CONTEXT: &str = "No specific facilities matched.";
/// Assistant reply recorded when the answer service fails.
pub const ANSWER_FAILURE_REPLY: &str = "Error";

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The analyst.
    User,
    /// The language model.
    Assistant,
}

impl Role {
    /// Return the role as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One entry of the chat log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Who wrote the message.
    pub role: Role,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Payload handed to an [`AnswerService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRequest<'a> {
    /// System instruction.
    pub system: &'a str,
    /// The analyst's question.
    pub question: &'a str,
    /// Rendered facility context.
    pub context: &'a str,
}

impl AnswerRequest<'_> {
    /// User turn combining context and question.
    ///
    /// # Examples
    /// ```
    /// use cempasuchil_core::AnswerRequest;
    ///
    /// let request = AnswerRequest { system: "s", question: "q?", context: "rows" };
    /// assert_eq!(request.user_content(), "CTX:rows\nQ:q?");
    /// ```
    #[must_use]
    pub fn user_content(&self) -> String {
        format!("CTX:{}\nQ:{}", self.context, self.question)
    }
}

/// Errors reported by an [`AnswerService`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnswerError {
    /// The service could not be reached.
    #[error("answer service unavailable: {message}")]
    Unavailable {
        /// Transport-level description.
        message: String,
    },
    /// The service answered with a non-success status.
    #[error("answer service returned status {status}")]
    Status {
        /// Status code reported by the service.
        status: u16,
    },
    /// The response did not contain an answer.
    #[error("answer service response was malformed: {message}")]
    Malformed {
        /// What was missing or wrong.
        message: String,
    },
}

/// Language-model backend answering questions about selected facilities.
pub trait AnswerService {
    /// Produce an answer for `request`.
    ///
    /// # Errors
    /// Returns [`AnswerError`] when the backend fails or replies with an
    /// unusable payload.
    fn answer(&self, request: &AnswerRequest<'_>) -> Result<String, AnswerError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ActiveView {
    All,
    Subset(Vec<usize>),
}

/// Explicit state for one analyst session.
///
/// # Examples
/// ```
/// use cempasuchil_core::{
///     AnswerError, AnswerRequest, AnswerService, Dataset, FacilityFilter, FacilityRecord, Hit,
///     Selection, Session,
/// };
///
/// struct FirstRow;
///
/// impl FacilityFilter for FirstRow {
///     fn select<'a>(&self, dataset: &'a Dataset, _query: &str) -> Selection<'a> {
///         dataset.get(0).map_or_else(Selection::no_matches, |facility| {
///             Selection::ranked(vec![Hit { index: 0, facility, relevance: Some(1) }])
///         })
///     }
/// }
///
/// struct Canned;
///
/// impl AnswerService for Canned {
///     fn answer(&self, _request: &AnswerRequest<'_>) -> Result<String, AnswerError> {
///         Ok("One site.".to_owned())
///     }
/// }
///
/// let mut session = Session::new(FirstRow, Canned);
/// session.load(Dataset::new(vec![
///     FacilityRecord::new("Tamale Teaching"),
///     FacilityRecord::new("Ho Municipal"),
/// ]));
/// assert_eq!(session.ask("tamale"), Ok("One site.".to_owned()));
/// assert_eq!(session.active().count(), 1);
/// session.reset();
/// assert_eq!(session.active().count(), 2);
/// ```
#[derive(Debug)]
pub struct Session<F, A> {
    filter: F,
    answers: A,
    master: Dataset,
    active: ActiveView,
    history: Vec<ChatMessage>,
}

impl<F, A> Session<F, A>
where
    F: FacilityFilter,
    A: AnswerService,
{
    /// Start a session with no data and an empty chat log.
    pub fn new(filter: F, answers: A) -> Self {
        Self {
            filter,
            answers,
            master: Dataset::default(),
            active: ActiveView::All,
            history: Vec::new(),
        }
    }

    /// Replace the master dataset and show all of it.
    pub fn load(&mut self, dataset: Dataset) {
        self.master = dataset;
        self.active = ActiveView::All;
    }

    /// The full dataset loaded into the session.
    pub const fn master(&self) -> &Dataset {
        &self.master
    }

    /// Rows currently shown, with their master indices.
    pub fn active(&self) -> Box<dyn Iterator<Item = (usize, &FacilityRecord)> + '_> {
        match &self.active {
            ActiveView::All => Box::new(self.master.iter().enumerate()),
            ActiveView::Subset(indices) => Box::new(
                indices
                    .iter()
                    .filter_map(|&index| self.master.get(index).map(|record| (index, record))),
            ),
        }
    }

    /// Chat log, oldest first.
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Show the whole master dataset again.
    pub fn reset(&mut self) {
        self.active = ActiveView::All;
    }

    /// Ask a question about the loaded facilities.
    ///
    /// The active rows are narrowed to the filter's selection when it is
    /// non-empty and left untouched otherwise.
    ///
    /// # Errors
    /// Propagates the [`AnswerError`] from the answer service after recording
    /// [`ANSWER_FAILURE_REPLY`] in the chat log.
    pub fn ask(&mut self, prompt: &str) -> Result<String, AnswerError> {
        self.history.push(ChatMessage::new(Role::User, prompt));

        let selection = self.filter.select(&self.master, prompt);
        debug!(
            "query selected {} rows ({})",
            selection.len(),
            selection.mode()
        );
        let context = if selection.is_empty() {
            NO_MATCH_CONTEXT.to_owned()
        } else {
            self.active = ActiveView::Subset(selection.indices().collect());
            render_context(&selection)
        };

        let request = AnswerRequest {
            system: SYSTEM_PROMPT,
            question: prompt,
            context: &context,
        };
        match self.answers.answer(&request) {
            Ok(reply) => {
                self.history
                    .push(ChatMessage::new(Role::Assistant, reply.as_str()));
                Ok(reply)
            }
            Err(err) => {
                warn!("answer service failed: {err}");
                self.history
                    .push(ChatMessage::new(Role::Assistant, ANSWER_FAILURE_REPLY));
                Err(err)
            }
        }
    }
}

/// Render selected rows as a pipe-separated table with a header.
fn render_context(selection: &Selection<'_>) -> String {
    let header = COLUMNS
        .iter()
        .copied()
        .chain(std::iter::once("relevance"))
        .collect::<Vec<_>>()
        .join(" | ");
    let rows = selection.hits().iter().map(|hit| {
        let relevance = hit
            .relevance
            .map_or_else(String::new, |value| value.to_string());
        let mut cells = hit.facility.column_values().to_vec();
        cells.push(relevance.as_str());
        cells.join(" | ")
    });
    std::iter::once(header)
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}
