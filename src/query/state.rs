use smartedu_core::ApiError;

/// What a page renders for one query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// A precondition (usually a parent id) is missing. No request was made.
    Disabled,
    Loading,
    Error(ApiError),
    Success(T),
}

impl<T> QueryState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn map<U, F>(self, f: F) -> QueryState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Disabled => QueryState::Disabled,
            Self::Loading => QueryState::Loading,
            Self::Error(error) => QueryState::Error(error),
            Self::Success(data) => QueryState::Success(f(data)),
        }
    }

    /// Converts to a `Result`, treating `Disabled` and `Loading` as `None`.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        match self {
            Self::Success(data) => Ok(Some(data)),
            Self::Error(error) => Err(error),
            Self::Disabled | Self::Loading => Ok(None),
        }
    }
}

impl<T> From<Result<T, ApiError>> for QueryState<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(error) => Self::Error(error),
        }
    }
}
