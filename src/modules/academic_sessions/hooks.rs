use smartedu_cache::keys;
use smartedu_models::academic_sessions::AcademicSession;

use super::AcademicSessionService;
use crate::query::Query;

pub fn list() -> Query<Vec<AcademicSession>> {
    Query::new(keys::academic_sessions::list(), |api| async move {
        AcademicSessionService::list_sessions(&api).await
    })
}

/// Feeds the date bounds of every date picker. Sessions change once a term.
pub fn current() -> Query<Option<AcademicSession>> {
    Query::new(keys::academic_sessions::current(), |api| async move {
        AcademicSessionService::current_session(&api).await
    })
    .without_event_refetch()
}
