use smartedu_cache::keys;
use smartedu_models::classes::SchoolClass;

use super::ClassService;
use crate::query::Query;

pub fn list() -> Query<Vec<SchoolClass>> {
    Query::new(keys::classes::list(), |api| async move {
        ClassService::list_classes(&api).await
    })
}
