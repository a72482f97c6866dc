//! Plain-text rendering of loaded data for the terminal.

use std::fmt::Write;

use smartedu_core::Paginated;
use smartedu_models::attendance::AttendanceStatus;
use smartedu_models::{
    AcademicSession, Assessment, AttendanceRegister, CatalogueSubject, Chapter, ChapterContents,
    ClassResources, DirectorDashboard, ScheduleEntry, SchoolClass, Student, Subject,
    TeacherDashboard, TopicMaterials, VideoPlayback,
};

use crate::components::{DateBounds, PageControl, Pagination};
use crate::shell::Shell;

pub fn shell(shell: Shell) -> String {
    let mut out = format!("{}\n", shell.title());
    for item in shell.navigation() {
        let _ = writeln!(out, "  {:<20} {}", item.label, item.path);
    }
    out
}

pub fn page_controls(controls: &[PageControl]) -> String {
    controls
        .iter()
        .map(|control| match control {
            PageControl::Page {
                number,
                current: true,
            } => format!("[{number}]"),
            PageControl::Page { number, .. } => number.to_string(),
            PageControl::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn students(page: &Paginated<Student>) -> String {
    let mut out = String::new();
    for student in &page.data {
        let _ = writeln!(
            out,
            "{:<28} {:<12} {}",
            student.full_name(),
            student.admission_number.as_deref().unwrap_or("-"),
            student.class_name.as_deref().unwrap_or("Unassigned"),
        );
    }
    let pagination = Pagination::new(page.meta.clone());
    let _ = writeln!(out, "{}", pagination.summary());
    let _ = write!(out, "{}", page_controls(&pagination.controls(1)));
    out
}

pub fn subjects(subjects: &[Subject]) -> String {
    subjects
        .iter()
        .map(|subject| match &subject.code {
            Some(code) => format!("{} ({code})", subject.name),
            None => subject.name.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn classes(classes: &[SchoolClass]) -> String {
    classes
        .iter()
        .map(|class| format!("{:<20} {} students", class.name, class.student_count))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn sessions(sessions: &[AcademicSession]) -> String {
    sessions
        .iter()
        .map(|session| {
            format!(
                "{}{} {} ({} to {})",
                if session.is_current { "* " } else { "  " },
                session.academic_year,
                session.term,
                session.term_start_date,
                session.term_end_date,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn date_bounds(bounds: &DateBounds) -> String {
    format!(
        "Selectable dates: {} to {} ({:?})",
        bounds.min_attr(),
        bounds.max_attr(),
        bounds.source()
    )
}

pub fn assessments(assessments: &[Assessment]) -> String {
    assessments
        .iter()
        .map(|a| {
            format!(
                "{:<30} {:<10} {:>4} marks  {:?}",
                a.title, a.assessment_type, a.total_marks, a.status
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn register(register: &AttendanceRegister) -> String {
    let mut out = format!(
        "Register for {}{}\n",
        register.date,
        if register.is_submitted {
            " (submitted)"
        } else {
            ""
        }
    );
    for record in &register.records {
        let status = record
            .status
            .map_or_else(|| "-".to_string(), |s| format!("{s:?}"));
        let _ = writeln!(out, "  {:<28} {}", record.student_name, status);
    }
    let _ = write!(
        out,
        "Present {} / Absent {} / Late {} / Excused {}",
        register.count(AttendanceStatus::Present),
        register.count(AttendanceStatus::Absent),
        register.count(AttendanceStatus::Late),
        register.count(AttendanceStatus::Excused),
    );
    out
}

pub fn timetable(entries: &[ScheduleEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{:<10} {}-{}  {:<20} {}{}",
                format!("{:?}", entry.day),
                entry.start_time.format("%H:%M"),
                entry.end_time.format("%H:%M"),
                entry.subject_name,
                entry.class_name,
                entry
                    .room
                    .as_deref()
                    .map(|room| format!(" ({room})"))
                    .unwrap_or_default(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn chapters(chapters: &[Chapter]) -> String {
    chapters
        .iter()
        .map(|c| format!("{:>3}. {} ({} topics)  {}", c.order, c.title, c.topic_count, c.id))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn chapter_contents(contents: &ChapterContents) -> String {
    let mut out = format!("{}\n", contents.chapter.title);
    for summary in &contents.topics {
        let _ = writeln!(
            out,
            "  {:<30} {} videos, {} materials, {} links  {}",
            summary.topic.title,
            summary.video_count,
            summary.material_count,
            summary.link_count,
            summary.topic.id,
        );
    }
    out.trim_end().to_string()
}

pub fn topic_materials(materials: &TopicMaterials) -> String {
    let mut out = String::new();
    for video in &materials.videos {
        let _ = writeln!(out, "video     {}  {}", video.title, video.id);
    }
    for material in &materials.materials {
        let _ = writeln!(out, "material  {}  {}", material.title, material.file_url);
    }
    for link in &materials.links {
        let _ = writeln!(out, "link      {}  {}", link.title, link.url);
    }
    out.trim_end().to_string()
}

pub fn class_resources(resources: &ClassResources) -> String {
    resources
        .subjects
        .iter()
        .filter(|subject| !subject.is_empty())
        .map(|subject| {
            format!(
                "{}: {} videos, {} materials, {} links",
                subject.subject_name,
                subject.videos.len(),
                subject.materials.len(),
                subject.links.len()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn catalogue(subjects: &[CatalogueSubject]) -> String {
    subjects
        .iter()
        .map(|s| format!("{:<24} {} chapters, {} videos", s.name, s.chapter_count, s.video_count))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn director_dashboard(summary: &DirectorDashboard) -> String {
    let mut out = format!(
        "Students {}  Teachers {}  Classes {}  Subjects {}",
        summary.total_students, summary.total_teachers, summary.total_classes, summary.total_subjects
    );
    if let Some(rate) = summary.attendance_rate {
        let _ = write!(out, "\nAttendance rate {:.1}%", rate * 100.0);
    }
    if let Some(session) = &summary.current_session {
        let _ = write!(out, "\nCurrent session {} {}", session.academic_year, session.term);
    }
    out
}

pub fn teacher_dashboard(summary: &TeacherDashboard) -> String {
    let mut out = format!(
        "{} classes, {} upcoming assessments",
        summary.classes.len(),
        summary.upcoming_assessments.len()
    );
    if !summary.today_schedule.is_empty() {
        let _ = write!(out, "\nToday:\n{}", timetable(&summary.today_schedule));
    }
    out
}

pub fn playback(playback: &VideoPlayback) -> String {
    let mut out = format!("{}\n{}", playback.video.title, playback.playable_url());
    if !playback.related.is_empty() {
        out.push_str("\nRelated:");
        for video in &playback.related {
            let _ = write!(out, "\n  {}  {}", video.title, video.id);
        }
    }
    out
}
