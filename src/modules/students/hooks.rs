use smartedu_cache::{QueryKey, hash_filters, keys};
use smartedu_core::Paginated;
use smartedu_models::ids::{ClassId, StudentId};
use smartedu_models::students::{
    CreateStudentDto, Student, StudentFilterParams, UpdateStudentDto,
};

use super::StudentService;
use crate::components::ListFilters;
use crate::query::{Mutation, Query};

/// Query parameters for the student list page.
pub fn filter_params(filters: &ListFilters<ClassId>) -> StudentFilterParams {
    StudentFilterParams::default()
        .with_search(filters.search().unwrap_or_default())
        .with_class(filters.filter().copied())
        .with_page(filters.page())
}

pub fn list(filters: StudentFilterParams) -> Query<Paginated<Student>> {
    let key = keys::students::list(&hash_filters(&filters));
    Query::new(key, move |api| {
        let filters = filters.clone();
        async move { StudentService::list_students(&api, &filters).await }
    })
}

pub fn by_id(student_id: Option<StudentId>) -> Query<Student> {
    Query::when(keys::students::all(), student_id, |id| {
        Query::new(keys::students::by_id(id), move |api| async move {
            StudentService::get_student(&api, id).await
        })
    })
}

fn invalidated() -> [QueryKey; 2] {
    [keys::students::all(), keys::dashboard::director()]
}

pub fn create() -> Mutation<CreateStudentDto, Student> {
    Mutation::new("create_student", |api, dto| async move {
        StudentService::create_student(&api, dto).await
    })
    .invalidates(invalidated())
}

pub fn update() -> Mutation<(StudentId, UpdateStudentDto), Student> {
    Mutation::new("update_student", |api, (id, dto)| async move {
        StudentService::update_student(&api, id, dto).await
    })
    .invalidates(invalidated())
}

pub fn delete() -> Mutation<StudentId, ()> {
    Mutation::new("delete_student", |api, id| async move {
        StudentService::delete_student(&api, id).await
    })
    .invalidates(invalidated())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_id_without_id_is_disabled() {
        assert!(!by_id(None).is_enabled());
        assert!(by_id(Some(StudentId::from_u128(1))).is_enabled());
    }

    #[test]
    fn test_list_key_follows_filters() {
        let first = list(StudentFilterParams::default());
        let second = list(StudentFilterParams::default().with_search("ada"));
        assert_ne!(first.key(), second.key());
        assert!(first.key().starts_with(&keys::students::all()));
    }

    #[test]
    fn test_filter_params_from_page_state() {
        let mut filters = ListFilters::new("class_id");
        filters.set_search("  ada ");
        filters.set_filter(Some(ClassId::from_u128(3)));
        filters.set_page(2);

        let params = filter_params(&filters);
        assert_eq!(params.search.as_deref(), Some("ada"));
        assert_eq!(params.class_id, Some(ClassId::from_u128(3)));
        assert_eq!(params.pagination.page(), 2);
    }

    #[test]
    fn test_writes_invalidate_list_and_dashboard() {
        let invalidated = delete().invalidated_keys().to_vec();
        assert_eq!(invalidated, vec![keys::students::all(), keys::dashboard::director()]);
    }
}
