use smartedu_api::FileUpload;
use smartedu_cache::{QueryKey, keys};
use smartedu_models::ids::SubjectId;
use smartedu_models::subjects::{CreateSubjectDto, Subject};

use super::SubjectService;
use crate::query::{Mutation, Query};

pub fn list() -> Query<Vec<Subject>> {
    Query::new(keys::subjects::list(), |api| async move {
        SubjectService::list_subjects(&api).await
    })
}

fn invalidated() -> [QueryKey; 3] {
    [
        keys::subjects::all(),
        keys::dashboard::director(),
        keys::explore::catalogue(),
    ]
}

pub fn create() -> Mutation<(CreateSubjectDto, Option<FileUpload>), Subject> {
    Mutation::new("create_subject", |api, (dto, thumbnail)| async move {
        SubjectService::create_subject(&api, dto, thumbnail).await
    })
    .invalidates(invalidated())
}

pub fn delete() -> Mutation<SubjectId, ()> {
    Mutation::new("delete_subject", |api, id| async move {
        SubjectService::delete_subject(&api, id).await
    })
    .invalidates(invalidated())
}
