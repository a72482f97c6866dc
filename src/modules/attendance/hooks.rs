use chrono::NaiveDate;
use smartedu_cache::keys;
use smartedu_models::attendance::{AttendanceRegister, SubmitAttendanceDto};
use smartedu_models::ids::ClassId;

use super::AttendanceService;
use crate::query::{Mutation, Query};

/// The register of `class_id` on `date`. Disabled until a class is picked.
pub fn register(class_id: Option<ClassId>, date: NaiveDate) -> Query<AttendanceRegister> {
    Query::when(keys::attendance::all(), class_id, move |id| {
        Query::new(keys::attendance::register(id, date), move |api| async move {
            AttendanceService::get_register(&api, id, date).await
        })
    })
}

pub fn submit(class_id: ClassId) -> Mutation<SubmitAttendanceDto, ()> {
    Mutation::new("submit_attendance", |api, dto| async move {
        AttendanceService::submit(&api, dto).await
    })
    .invalidates([
        keys::attendance::for_class(class_id),
        keys::dashboard::teacher(),
        keys::dashboard::director(),
    ])
}
