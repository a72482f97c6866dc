use smartedu_api::FileUpload;
use smartedu_cache::{QueryKey, keys};
use smartedu_models::ids::{ChapterId, LinkId, MaterialId, SubjectId, TopicId, VideoId};
use smartedu_models::library::{
    Chapter, ChapterContents, CreateLinkDto, CreateMaterialDto, CreateVideoDto, Link, Material,
    TopicMaterials, Video,
};

use super::LibraryService;
use crate::query::{Mutation, Query};

pub fn chapters(subject_id: Option<SubjectId>) -> Query<Vec<Chapter>> {
    Query::when(keys::library::all_chapters(), subject_id, |id| {
        Query::new(keys::library::chapters(id), move |api| async move {
            LibraryService::list_chapters(&api, id).await
        })
        .without_event_refetch()
    })
}

pub fn chapter_contents(chapter_id: Option<ChapterId>) -> Query<ChapterContents> {
    Query::when(keys::library::all_chapter_contents(), chapter_id, |id| {
        Query::new(keys::library::chapter_contents(id), move |api| async move {
            LibraryService::chapter_contents(&api, id).await
        })
        .without_event_refetch()
    })
}

pub fn topic_materials(topic_id: Option<TopicId>) -> Query<TopicMaterials> {
    Query::when(keys::library::all_topic_materials(), topic_id, |id| {
        Query::new(keys::library::topic_materials(id), move |api| async move {
            LibraryService::topic_materials(&api, id).await
        })
        .without_event_refetch()
    })
}

/// Content writes change the topic lists, the chapter counts and what students see.
fn invalidated() -> [QueryKey; 3] {
    [
        keys::library::all_topic_materials(),
        keys::library::all_chapter_contents(),
        keys::explore::all_class_resources(),
    ]
}

pub fn upload_video() -> Mutation<(CreateVideoDto, Option<FileUpload>), Video> {
    Mutation::new("upload_video", |api, (dto, file)| async move {
        LibraryService::upload_video(&api, dto, file).await
    })
    .invalidates(invalidated())
}

pub fn delete_video() -> Mutation<VideoId, ()> {
    Mutation::new("delete_video", |api, id| async move {
        LibraryService::delete_video(&api, id).await
    })
    .invalidates(invalidated())
}

pub fn upload_material() -> Mutation<(CreateMaterialDto, FileUpload), Material> {
    Mutation::new("upload_material", |api, (dto, file)| async move {
        LibraryService::upload_material(&api, dto, file).await
    })
    .invalidates(invalidated())
}

pub fn delete_material() -> Mutation<MaterialId, ()> {
    Mutation::new("delete_material", |api, id| async move {
        LibraryService::delete_material(&api, id).await
    })
    .invalidates(invalidated())
}

pub fn add_link() -> Mutation<CreateLinkDto, Link> {
    Mutation::new("add_link", |api, dto| async move {
        LibraryService::add_link(&api, dto).await
    })
    .invalidates(invalidated())
}

pub fn delete_link() -> Mutation<LinkId, ()> {
    Mutation::new("delete_link", |api, id| async move {
        LibraryService::delete_link(&api, id).await
    })
    .invalidates(invalidated())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryOptions;

    #[test]
    fn test_queries_need_their_parent() {
        assert!(!chapters(None).is_enabled());
        assert!(!chapter_contents(None).is_enabled());
        assert!(!topic_materials(None).is_enabled());
        assert!(topic_materials(Some(TopicId::from_u128(1))).is_enabled());
    }

    #[test]
    fn test_every_write_reaches_student_resources() {
        let sets = [
            upload_video().invalidated_keys().to_vec(),
            delete_video().invalidated_keys().to_vec(),
            upload_material().invalidated_keys().to_vec(),
            delete_material().invalidated_keys().to_vec(),
            add_link().invalidated_keys().to_vec(),
            delete_link().invalidated_keys().to_vec(),
        ];
        for set in sets {
            assert_eq!(set, invalidated().to_vec());
        }
    }

    #[test]
    fn test_topic_materials_key_is_under_prefix() {
        let query = topic_materials(Some(TopicId::from_u128(1)));
        assert!(query.key().starts_with(&keys::library::all_topic_materials()));
    }

    #[test]
    fn test_reads_skip_focus_and_reconnect_refetch() {
        let query = chapters(Some(SubjectId::from_u128(1)));
        let options = query.resolved_options(QueryOptions::default());
        assert!(!options.refetch_on_window_focus);
        assert!(!options.refetch_on_reconnect);
        assert!(options.enabled);
    }
}
