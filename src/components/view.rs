use smartedu_core::{ApiError, Paginated};
use smartedu_models::{ChapterContents, ClassResources, TopicMaterials};

use crate::query::QueryState;

/// Whether successful data has nothing to show.
pub trait Emptiable {
    fn has_no_items(&self) -> bool;
}

impl<T> Emptiable for Vec<T> {
    fn has_no_items(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiable for Paginated<T> {
    fn has_no_items(&self) -> bool {
        self.data.is_empty()
    }
}

impl Emptiable for TopicMaterials {
    fn has_no_items(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiable for ClassResources {
    fn has_no_items(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiable for ChapterContents {
    fn has_no_items(&self) -> bool {
        self.topics.is_empty()
    }
}

/// What a page shows for a query.
#[derive(Debug, Clone, PartialEq)]
pub enum View<T> {
    /// Waiting on a precondition, such as a selection.
    Idle,
    /// Placeholder while loading.
    Skeleton,
    /// Error text for the user.
    Message(String),
    /// Successful but nothing to show. Distinct from an error.
    Empty(String),
    Content(T),
}

impl<T: Emptiable> View<T> {
    /// Renders `state`, using [`ApiError::user_message`] for errors.
    pub fn from_state(state: QueryState<T>, empty_text: &str) -> Self {
        Self::error_with(state, empty_text, ApiError::user_message)
    }

    /// Renders `state` with a page-specific error message.
    pub fn error_with<M>(state: QueryState<T>, empty_text: &str, message: M) -> Self
    where
        M: FnOnce(&ApiError) -> String,
    {
        match state {
            QueryState::Disabled => View::Idle,
            QueryState::Loading => View::Skeleton,
            QueryState::Error(error) => View::Message(message(&error)),
            QueryState::Success(data) if data.has_no_items() => View::Empty(empty_text.to_string()),
            QueryState::Success(data) => View::Content(data),
        }
    }
}

impl<T> View<T> {
    /// Renders a single record, which is never empty.
    pub fn from_record(state: QueryState<T>) -> Self {
        match state {
            QueryState::Disabled => View::Idle,
            QueryState::Loading => View::Skeleton,
            QueryState::Error(error) => View::Message(error.user_message()),
            QueryState::Success(data) => View::Content(data),
        }
    }

    pub fn content(&self) -> Option<&T> {
        match self {
            View::Content(data) => Some(data),
            _ => None,
        }
    }

    /// Plain-text rendering, with `render` for content.
    pub fn to_text<F>(&self, render: F) -> String
    where
        F: FnOnce(&T) -> String,
    {
        match self {
            View::Idle => "Make a selection to continue.".to_string(),
            View::Skeleton => "Loading...".to_string(),
            View::Message(message) | View::Empty(message) => message.clone(),
            View::Content(data) => render(data),
        }
    }
}
