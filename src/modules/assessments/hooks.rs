//! Assessment declarations. Writes are scoped to the subject whose list is on
//! screen, so the mutation constructors take that subject.

use smartedu_cache::{QueryKey, keys};
use smartedu_models::assessments::{Assessment, CreateAssessmentDto};
use smartedu_models::ids::{AssessmentId, SubjectId};

use super::AssessmentService;
use crate::query::{Mutation, Query};

pub fn for_subject(subject_id: Option<SubjectId>) -> Query<Vec<Assessment>> {
    Query::when(keys::assessments::all(), subject_id, |id| {
        Query::new(keys::assessments::for_subject(id), move |api| async move {
            AssessmentService::list_for_subject(&api, id).await
        })
    })
}

fn invalidated(subject_id: SubjectId) -> [QueryKey; 2] {
    [
        keys::assessments::for_subject(subject_id),
        keys::dashboard::teacher(),
    ]
}

pub fn create(subject_id: SubjectId) -> Mutation<CreateAssessmentDto, Assessment> {
    Mutation::new("create_assessment", |api, dto| async move {
        AssessmentService::create_assessment(&api, dto).await
    })
    .invalidates(invalidated(subject_id))
}

pub fn publish(subject_id: SubjectId) -> Mutation<AssessmentId, Assessment> {
    Mutation::new("publish_assessment", |api, id| async move {
        AssessmentService::publish_assessment(&api, id).await
    })
    .invalidates(invalidated(subject_id))
}

pub fn delete(subject_id: SubjectId) -> Mutation<AssessmentId, ()> {
    Mutation::new("delete_assessment", |api, id| async move {
        AssessmentService::delete_assessment(&api, id).await
    })
    .invalidates(invalidated(subject_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_needs_a_subject() {
        assert!(!for_subject(None).is_enabled());
        assert!(for_subject(Some(SubjectId::from_u128(4))).is_enabled());
    }

    #[test]
    fn test_publish_invalidates_only_its_subject() {
        let subject = SubjectId::from_u128(4);
        let mutation = publish(subject);
        assert!(mutation.invalidated_keys().contains(&keys::assessments::for_subject(subject)));
        assert!(!mutation.invalidated_keys().contains(&keys::assessments::for_subject(SubjectId::from_u128(5))));
    }
}
