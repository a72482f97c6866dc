use smartedu_cache::keys;
use smartedu_models::explore::{CatalogueSubject, ClassResources};
use smartedu_models::ids::ClassId;

use super::ExploreService;
use crate::query::Query;

pub fn class_resources(class_id: Option<ClassId>) -> Query<ClassResources> {
    Query::when(keys::explore::all_class_resources(), class_id, |id| {
        Query::new(keys::explore::class_resources(id), move |api| async move {
            ExploreService::class_resources(&api, id).await
        })
        .without_event_refetch()
    })
}

pub fn catalogue() -> Query<Vec<CatalogueSubject>> {
    Query::new(keys::explore::catalogue(), |api| async move {
        ExploreService::catalogue(&api).await
    })
    .without_event_refetch()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryOptions;

    #[test]
    fn test_class_resources_need_a_class() {
        assert!(!class_resources(None).is_enabled());
        assert!(class_resources(Some(ClassId::from_u128(2))).is_enabled());
    }

    #[test]
    fn test_explore_reads_skip_event_refetch() {
        for options in [
            catalogue().resolved_options(QueryOptions::default()),
            class_resources(Some(ClassId::from_u128(2))).resolved_options(QueryOptions::default()),
        ] {
            assert!(!options.refetch_on_window_focus);
            assert!(!options.refetch_on_reconnect);
        }
    }
}
