use smartedu_api::ApiClient;
use smartedu_core::{ApiError, ApiErrorKind};
use smartedu_models::academic_sessions::AcademicSession;
use tracing::{debug, instrument};

const SESSIONS_PATH: &str = "/director/dashboard/academic-sessions";

pub struct AcademicSessionService;

impl AcademicSessionService {
    #[instrument(skip(api))]
    pub async fn list_sessions(api: &ApiClient) -> Result<Vec<AcademicSession>, ApiError> {
        api.get_data(SESSIONS_PATH).await
    }

    /// The current session, or `None` when the school has not set one.
    ///
    /// A missing session answers either an empty envelope or 404; both mean `None`.
    #[instrument(skip(api))]
    pub async fn current_session(api: &ApiClient) -> Result<Option<AcademicSession>, ApiError> {
        match api.get(&format!("{SESSIONS_PATH}/current")).await {
            Ok(envelope) => Ok(envelope.data),
            Err(e) if e.kind == ApiErrorKind::NotFound => {
                debug!("No current academic session");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
