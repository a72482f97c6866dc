//! Backend resources.
//!
//! Each resource has a `service` with the typed API calls and `hooks` with the
//! query and mutation declarations built on them.

pub mod academic_sessions;
pub mod assessments;
pub mod attendance;
pub mod classes;
pub mod dashboard;
pub mod explore;
pub mod library;
pub mod schedules;
pub mod students;
pub mod subjects;
pub mod videos;

pub use academic_sessions::AcademicSessionService;
pub use assessments::AssessmentService;
pub use attendance::AttendanceService;
pub use classes::ClassService;
pub use dashboard::DashboardService;
pub use explore::ExploreService;
pub use library::LibraryService;
pub use schedules::ScheduleService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use videos::VideoService;
