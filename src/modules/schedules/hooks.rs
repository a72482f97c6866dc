use smartedu_cache::{QueryKey, keys};
use smartedu_models::ids::ClassId;
use smartedu_models::schedules::ScheduleEntry;

use super::ScheduleService;
use crate::query::Query;

pub fn teacher() -> Query<Vec<ScheduleEntry>> {
    Query::new(keys::schedules::teacher(), |api| async move {
        ScheduleService::teacher_timetable(&api).await
    })
}

pub fn class(class_id: Option<ClassId>) -> Query<Vec<ScheduleEntry>> {
    Query::when(QueryKey::new(["teacher", "schedules", "class"]), class_id, |id| {
        Query::new(keys::schedules::class(id), move |api| async move {
            ScheduleService::class_timetable(&api, id).await
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_timetable_needs_a_class() {
        let disabled = class(None);
        assert!(!disabled.is_enabled());
        assert_ne!(disabled.key(), teacher().key());
        assert!(class(Some(ClassId::from_u128(9))).is_enabled());
    }
}
