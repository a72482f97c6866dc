//! # SmartEdu Models
//!
//! Backend entities and request DTOs used by the SmartEdu client.
//!
//! Entities are server snapshots: the client caches them and never mutates them
//! in place. Every change goes through an API call.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed entity IDs
//! - [`students`]: Students and their list filters
//! - [`subjects`]: Subjects taught in a school
//! - [`classes`]: School classes
//! - [`academic_sessions`]: Academic sessions and their term dates
//! - [`assessments`]: Teacher assessments
//! - [`attendance`]: Attendance registers
//! - [`schedules`]: Timetable entries
//! - [`library`]: Library content (chapters, topics, videos, materials, links)
//! - [`explore`]: Student-facing content discovery
//! - [`dashboard`]: Dashboard summaries
//!
//! # Example
//!
//! ```ignore
//! use smartedu_models::students::{Student, StudentFilterParams};
//!
//! let filters = StudentFilterParams::default().with_search("ada");
//! ```

pub mod academic_sessions;
pub mod assessments;
pub mod attendance;
pub mod classes;
pub mod dashboard;
pub mod explore;
pub mod ids;
pub mod library;
pub mod schedules;
pub mod students;
pub mod subjects;

// Re-export commonly used types at crate root for convenience
pub use academic_sessions::AcademicSession;
pub use assessments::{Assessment, AssessmentStatus, CreateAssessmentDto};
pub use attendance::{
    AttendanceEntry, AttendanceRecord, AttendanceRegister, AttendanceStatus, SubmitAttendanceDto,
};
pub use classes::SchoolClass;
pub use dashboard::{DirectorDashboard, TeacherDashboard};
pub use explore::{CatalogueSubject, ClassResources, SubjectResources};
pub use library::{
    Chapter, ChapterContents, CreateLinkDto, CreateMaterialDto, CreateVideoDto, Link, Material,
    Topic, TopicMaterials, TopicSummary, Video, VideoPlayback,
};
pub use schedules::{ScheduleEntry, Weekday};
pub use students::{CreateStudentDto, Student, StudentFilterParams, UpdateStudentDto};
pub use subjects::{CreateSubjectDto, Subject};
