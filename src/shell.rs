//! Shell selection.
//!
//! A shell is the role-specific chrome (title and navigation) wrapping a page.
//! Selection is a pure function of the requested path and the session, and is
//! recomputed on every call.

use std::fmt;

use smartedu_auth::{Role, Session, UserType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shell {
    Admin,
    Teacher,
    Student,
    LibraryOwner,
}

/// One navigation entry of a shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const fn nav(label: &'static str, path: &'static str) -> NavItem {
    NavItem { label, path }
}

const ADMIN_NAV: &[NavItem] = &[
    nav("Dashboard", "/admin"),
    nav("Students", "/admin/students"),
    nav("Subjects", "/admin/subjects"),
    nav("Classes", "/admin/classes"),
    nav("Academic Sessions", "/admin/academic-sessions"),
];

const TEACHER_NAV: &[NavItem] = &[
    nav("Dashboard", "/teacher"),
    nav("Assessments", "/teacher/assessments"),
    nav("Attendance", "/teacher/attendance"),
    nav("Schedule", "/teacher/schedule"),
    nav("Library", "/teacher/library"),
];

const STUDENT_NAV: &[NavItem] = &[
    nav("Explore", "/student"),
    nav("My Subjects", "/student/subjects"),
    nav("Schedule", "/student/schedule"),
];

const LIBRARY_OWNER_NAV: &[NavItem] = &[
    nav("Library", "/library-owner"),
    nav("Subjects", "/library-owner/subjects"),
    nav("Uploads", "/library-owner/uploads"),
];

impl Shell {
    pub const ALL: [Shell; 4] = [
        Shell::Admin,
        Shell::Teacher,
        Shell::Student,
        Shell::LibraryOwner,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Shell::Admin => "School Administration",
            Shell::Teacher => "Teacher Workspace",
            Shell::Student => "Student Portal",
            Shell::LibraryOwner => "Library Management",
        }
    }

    pub fn navigation(&self) -> &'static [NavItem] {
        match self {
            Shell::Admin => ADMIN_NAV,
            Shell::Teacher => TEACHER_NAV,
            Shell::Student => STUDENT_NAV,
            Shell::LibraryOwner => LIBRARY_OWNER_NAV,
        }
    }

    /// Path prefix owned by this shell.
    pub fn prefix(&self) -> &'static str {
        match self {
            Shell::Admin => "/admin",
            Shell::Teacher => "/teacher",
            Shell::Student => "/student",
            Shell::LibraryOwner => "/library-owner",
        }
    }

    /// The shell a role lands in.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Teacher => Shell::Teacher,
            Role::SchoolDirector => Shell::Admin,
            Role::Student => Shell::Student,
            Role::LibraryOwner => Shell::LibraryOwner,
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Whether `path` is `prefix` or lies below it. `/teachers` is not under `/teacher`.
fn under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
        None => false,
    }
}

/// Picks the shell for `path`. First match wins:
///
/// 1. `/library-owner`, a library resource owner user type, or the library owner role
/// 2. `/teacher` or the teacher role
/// 3. `/admin` or the school director role
/// 4. `/student` or the student role
/// 5. the role alone
/// 6. [`Shell::Teacher`]
pub fn select_shell(path: &str, session: Option<&Session>) -> Shell {
    let role = session.map(|s| s.role);
    let user_type = session.map(|s| s.user_type);

    if under(path, "/library-owner")
        || user_type == Some(UserType::LibraryResourceOwner)
        || role == Some(Role::LibraryOwner)
    {
        return Shell::LibraryOwner;
    }
    if under(path, "/teacher") || role == Some(Role::Teacher) {
        return Shell::Teacher;
    }
    if under(path, "/admin") || role == Some(Role::SchoolDirector) {
        return Shell::Admin;
    }
    if under(path, "/student") || role == Some(Role::Student) {
        return Shell::Student;
    }

    select_playback_shell(session)
}

/// Picks the shell for the video playback page, which every role can reach.
/// Resolution uses the session alone.
pub fn select_playback_shell(session: Option<&Session>) -> Shell {
    match session {
        Some(session) if session.user_type == UserType::LibraryResourceOwner => {
            Shell::LibraryOwner
        }
        Some(session) => Shell::for_role(session.role),
        None => Shell::Teacher,
    }
}
