//! Cache key builders.
//!
//! Provides consistent cache keys for every resource. Each module also exposes an
//! `all()` prefix (or narrower prefixes) that mutations list in their
//! invalidation sets.

use crate::QueryKey;

fn key(parts: &[&str]) -> QueryKey {
    QueryKey::new(parts.iter().copied())
}

/// Cache keys for students on the director dashboard.
pub mod students {
    use super::*;
    use smartedu_models::ids::StudentId;

    /// Key for a filtered, paginated student list.
    pub fn list(filters_hash: &str) -> QueryKey {
        key(&["director", "students", "list"]).push(filters_hash)
    }

    /// Key for a single student by ID.
    pub fn by_id(student_id: StudentId) -> QueryKey {
        key(&["director", "students", "detail"]).param("id", student_id)
    }

    /// Prefix covering every student key.
    pub fn all() -> QueryKey {
        key(&["director", "students"])
    }
}

/// Cache keys for subjects.
pub mod subjects {
    use super::*;

    pub fn list() -> QueryKey {
        key(&["director", "subjects", "list"])
    }

    pub fn all() -> QueryKey {
        key(&["director", "subjects"])
    }
}

/// Cache keys for classes.
pub mod classes {
    use super::*;

    pub fn list() -> QueryKey {
        key(&["director", "classes", "list"])
    }

    pub fn all() -> QueryKey {
        key(&["director", "classes"])
    }
}

/// Cache keys for academic sessions.
pub mod academic_sessions {
    use super::*;

    pub fn list() -> QueryKey {
        key(&["director", "academic-sessions", "list"])
    }

    /// Key for the current session, which bounds every date picker.
    pub fn current() -> QueryKey {
        key(&["director", "academic-sessions", "current"])
    }

    pub fn all() -> QueryKey {
        key(&["director", "academic-sessions"])
    }
}

/// Cache keys for teacher assessments.
pub mod assessments {
    use super::*;
    use smartedu_models::ids::SubjectId;

    pub fn for_subject(subject_id: SubjectId) -> QueryKey {
        key(&["teacher", "assessments"]).param("subject", subject_id)
    }

    pub fn all() -> QueryKey {
        key(&["teacher", "assessments"])
    }
}

/// Cache keys for attendance registers.
pub mod attendance {
    use super::*;
    use chrono::NaiveDate;
    use smartedu_models::ids::ClassId;

    pub fn register(class_id: ClassId, date: NaiveDate) -> QueryKey {
        for_class(class_id).param("date", date.format("%Y-%m-%d"))
    }

    /// Prefix covering every register of a class.
    pub fn for_class(class_id: ClassId) -> QueryKey {
        key(&["teacher", "attendance"]).param("class", class_id)
    }

    pub fn all() -> QueryKey {
        key(&["teacher", "attendance"])
    }
}

/// Cache keys for timetables.
pub mod schedules {
    use super::*;
    use smartedu_models::ids::ClassId;

    /// The signed-in teacher's own timetable.
    pub fn teacher() -> QueryKey {
        key(&["teacher", "schedules", "mine"])
    }

    pub fn class(class_id: ClassId) -> QueryKey {
        key(&["teacher", "schedules", "class"]).param("class", class_id)
    }
}

/// Cache keys for library content.
pub mod library {
    use super::*;
    use smartedu_models::ids::{ChapterId, SubjectId, TopicId};

    pub fn chapters(subject_id: SubjectId) -> QueryKey {
        key(&["library", "chapters"]).param("subject", subject_id)
    }

    pub fn chapter_contents(chapter_id: ChapterId) -> QueryKey {
        all_chapter_contents().param("chapter", chapter_id)
    }

    /// Prefix covering the contents of every chapter.
    pub fn all_chapter_contents() -> QueryKey {
        key(&["library", "chapter-contents"])
    }

    pub fn topic_materials(topic_id: TopicId) -> QueryKey {
        all_topic_materials().param("topic", topic_id)
    }

    /// Prefix covering the materials of every topic.
    pub fn all_topic_materials() -> QueryKey {
        key(&["library", "topic-materials"])
    }

    /// Prefix covering chapter lists of every subject.
    pub fn all_chapters() -> QueryKey {
        key(&["library", "chapters"])
    }
}

/// Cache keys for video playback.
pub mod videos {
    use super::*;
    use smartedu_models::ids::VideoId;

    pub fn playback(video_id: VideoId) -> QueryKey {
        all().param("id", video_id)
    }

    pub fn all() -> QueryKey {
        key(&["video", "playback"])
    }
}

/// Cache keys for student-facing discovery.
pub mod explore {
    use super::*;
    use smartedu_models::ids::ClassId;

    pub fn class_resources(class_id: ClassId) -> QueryKey {
        all_class_resources().param("class", class_id)
    }

    /// Prefix covering resources of every class.
    pub fn all_class_resources() -> QueryKey {
        key(&["explore", "class-resources"])
    }

    pub fn catalogue() -> QueryKey {
        key(&["explore", "subjects"])
    }
}

/// Cache keys for dashboard summaries.
pub mod dashboard {
    use super::*;

    pub fn director() -> QueryKey {
        key(&["director", "dashboard", "summary"])
    }

    pub fn teacher() -> QueryKey {
        key(&["teacher", "dashboard", "summary"])
    }
}

/// Generates a hash from filter parameters for cache key uniqueness.
///
/// Uses a simple hash to create a short, consistent key component from
/// arbitrary filter parameters.
pub fn hash_filters<T: std::hash::Hash>(filters: &T) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;

    let mut hasher = DefaultHasher::new();
    filters.hash(&mut hasher);
    format!("{:x}", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartedu_models::ids::{ClassId, StudentId, TopicId};

    #[test]
    fn test_student_keys_share_prefix() {
        let list = students::list("abc");
        let detail = students::by_id(StudentId::from_u128(1));
        assert!(list.starts_with(&students::all()));
        assert!(detail.starts_with(&students::all()));
        assert!(!list.starts_with(&subjects::all()));
    }

    #[test]
    fn test_topic_materials_key() {
        let key = library::topic_materials(TopicId::from_u128(3));
        assert!(key.starts_with(&library::all_topic_materials()));
        assert!(key.to_string().starts_with("library:topic-materials:topic="));
    }

    #[test]
    fn test_attendance_register_under_class_prefix() {
        let class_id = ClassId::from_u128(9);
        let date = chrono::NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
        let key = attendance::register(class_id, date);
        assert!(key.starts_with(&attendance::for_class(class_id)));
        assert!(key.to_string().ends_with("date=2024-10-15"));
        assert!(!key.starts_with(&attendance::for_class(ClassId::from_u128(10))));
    }

    #[test]
    fn test_hash_filters_consistency() {
        let filters = ("test", 123, true);
        let hash1 = hash_filters(&filters);
        let hash2 = hash_filters(&filters);
        assert_eq!(hash1, hash2);
        assert_ne!(hash1, hash_filters(&("test", 124, true)));
    }
}
