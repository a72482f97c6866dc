//! Command handlers behind the `smartedu` binary.
//!
//! Every handler loads its data through the query layer, renders it with
//! [`View`] and returns the text to print. Failed loads are forwarded to the
//! log endpoint when one is configured.

pub mod render;

use std::path::Path;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use dialoguer::Select;
use serde_json::json;
use smartedu_api::ApiClient;
use smartedu_auth::{EnvSessionProvider, FileSessionProvider, Role, SessionContext};
use smartedu_config::{ApiConfig, QueryConfig};
use smartedu_core::Paginated;
use smartedu_models::Student;
use smartedu_models::ids::{ChapterId, ClassId, SubjectId, TopicId, VideoId};
use smartedu_observability::LogForwarder;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::components::{DateBounds, Emptiable, ListFilters, Pagination, View};
use crate::modules::{
    academic_sessions, assessments, attendance, classes, dashboard, explore, library, schedules,
    students, subjects, videos,
};
use crate::query::{Query, QueryClient, QueryState};
use crate::shell::{Shell, select_playback_shell, select_shell};

/// Everything a command needs for one run.
pub struct App {
    session: SessionContext,
    queries: QueryClient,
    forwarder: LogForwarder,
    background: Vec<JoinHandle<()>>,
}

impl App {
    /// Resolves the session (from `session_file`, or `SMARTEDU_*` variables) and
    /// builds the API and query clients from the environment.
    pub fn bootstrap(session_file: Option<&Path>) -> anyhow::Result<Self> {
        let session = match session_file {
            Some(path) => SessionContext::resolve(&FileSessionProvider::new(path)),
            None => SessionContext::resolve(&EnvSessionProvider),
        }
        .context("Failed to resolve session")?;

        let api_config = ApiConfig::from_env();
        let forwarder = LogForwarder::new(api_config.log_endpoint.clone());
        let api = ApiClient::for_session(api_config, &session);
        let queries = QueryClient::new(api, &QueryConfig::from_env());

        Ok(Self::new(session, queries, forwarder))
    }

    pub fn new(session: SessionContext, queries: QueryClient, forwarder: LogForwarder) -> Self {
        Self {
            session,
            queries,
            forwarder,
            background: Vec::new(),
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn queries(&self) -> &QueryClient {
        &self.queries
    }

    /// Waits for detached work: forwarded log entries and recorded views.
    pub async fn flush(&mut self) {
        for handle in self.background.drain(..) {
            let _ = handle.await;
        }
    }

    /// Fetches `query`, forwarding a failure under `command`.
    async fn load<T>(&mut self, command: &'static str, query: &Query<T>) -> QueryState<T>
    where
        T: serde::Serialize + serde::de::DeserializeOwned + Send + 'static,
    {
        let state = self.queries.fetch(query).await;
        if let QueryState::Error(error) = &state {
            let data = json!({
                "command": command,
                "key": query.key().to_string(),
                "status": error.status,
            });
            if let Some(handle) = self.forwarder.error(error.message.clone(), Some(data)) {
                self.background.push(handle);
            }
        }
        state
    }

    async fn list_text<T, F>(
        &mut self,
        command: &'static str,
        query: &Query<T>,
        empty_text: &str,
        render: F,
    ) -> String
    where
        T: Emptiable + serde::Serialize + serde::de::DeserializeOwned + Send + 'static,
        F: FnOnce(&T) -> String,
    {
        let state = self.load(command, query).await;
        View::from_state(state, empty_text).to_text(render)
    }

    async fn record_text<T, F>(
        &mut self,
        command: &'static str,
        query: &Query<T>,
        render: F,
    ) -> String
    where
        T: serde::Serialize + serde::de::DeserializeOwned + Send + 'static,
        F: FnOnce(&T) -> String,
    {
        let state = self.load(command, query).await;
        View::from_record(state).to_text(render)
    }

    pub fn shell(&self, path: &str) -> String {
        render::shell(select_shell(path, self.session.session()))
    }

    pub async fn students(&mut self, filters: &ListFilters<ClassId>) -> String {
        let query = students::hooks::list(students::hooks::filter_params(filters));
        let empty = if filters.is_filtered() {
            "No students match your filters"
        } else {
            "No students found"
        };
        self.list_text("students", &query, empty, render::students)
            .await
    }

    /// Pages through students with a prompt until the user quits.
    pub async fn students_interactive(
        &mut self,
        mut filters: ListFilters<ClassId>,
    ) -> anyhow::Result<()> {
        loop {
            println!("{}", self.students(&filters).await);

            let query = students::hooks::list(students::hooks::filter_params(&filters));
            let Some(page) = self.queries.get_cached::<Paginated<Student>>(query.key()) else {
                return Ok(());
            };
            let pagination = Pagination::new(page.meta);

            let choice = Select::new()
                .with_prompt("Navigate")
                .items(&["Next page", "Previous page", "Quit"])
                .default(0)
                .interact()
                .context("Failed to read selection")?;

            let mut target = None;
            let moved = match choice {
                0 => pagination.next(|page| target = Some(page)),
                1 => pagination.previous(|page| target = Some(page)),
                _ => return Ok(()),
            };
            match target.filter(|_| moved) {
                Some(page) => filters.set_page(page),
                None => println!("No more pages in that direction."),
            }
        }
    }

    pub async fn subjects(&mut self) -> String {
        self.list_text("subjects", &subjects::hooks::list(), "No subjects yet", |s| {
            render::subjects(s)
        })
        .await
    }

    pub async fn classes(&mut self) -> String {
        self.list_text("classes", &classes::hooks::list(), "No classes yet", |c| {
            render::classes(c)
        })
        .await
    }

    /// Sessions plus the date range pickers are limited to.
    pub async fn sessions(&mut self, today: NaiveDate) -> String {
        let list = self
            .list_text(
                "sessions",
                &academic_sessions::hooks::list(),
                "No academic sessions yet",
                |s| render::sessions(s),
            )
            .await;
        let bounds = self.date_bounds(today).await;
        format!("{list}\n{}", render::date_bounds(&bounds))
    }

    /// Date picker bounds from the current session. A failed load falls back
    /// to the calendar year.
    pub async fn date_bounds(&mut self, today: NaiveDate) -> DateBounds {
        let current = self
            .load("sessions", &academic_sessions::hooks::current())
            .await
            .into_data()
            .flatten();
        DateBounds::for_session(current.as_ref(), today)
    }

    pub async fn assessments(&mut self, subject_id: Option<SubjectId>) -> String {
        self.list_text(
            "assessments",
            &assessments::hooks::for_subject(subject_id),
            "No assessments for this subject",
            |a| render::assessments(a),
        )
        .await
    }

    /// The register for `date`. Dates outside the current session, or outside
    /// the year of `today` when there is none, are rejected.
    pub async fn attendance(
        &mut self,
        class_id: Option<ClassId>,
        date: NaiveDate,
        today: NaiveDate,
    ) -> String {
        let bounds = self.date_bounds(today).await;
        if !bounds.accepts(date) {
            return format!(
                "{date} is outside the selectable range {} to {}",
                bounds.min_attr(),
                bounds.max_attr()
            );
        }
        self.record_text(
            "attendance",
            &attendance::hooks::register(class_id, date),
            render::register,
        )
        .await
    }

    pub async fn schedule(&mut self, class_id: Option<ClassId>) -> String {
        let query = match class_id {
            Some(_) => schedules::hooks::class(class_id),
            None => schedules::hooks::teacher(),
        };
        self.list_text("schedule", &query, "Nothing scheduled", |e| {
            render::timetable(e)
        })
        .await
    }

    /// Drills down from a subject to a chapter to a topic; the deepest id wins.
    pub async fn library(
        &mut self,
        subject_id: Option<SubjectId>,
        chapter_id: Option<ChapterId>,
        topic_id: Option<TopicId>,
    ) -> String {
        if topic_id.is_some() {
            return self
                .list_text(
                    "library",
                    &library::hooks::topic_materials(topic_id),
                    "No materials for this topic",
                    render::topic_materials,
                )
                .await;
        }
        if chapter_id.is_some() {
            return self
                .list_text(
                    "library",
                    &library::hooks::chapter_contents(chapter_id),
                    "This chapter has no topics yet",
                    render::chapter_contents,
                )
                .await;
        }
        self.list_text(
            "library",
            &library::hooks::chapters(subject_id),
            "No chapters for this subject",
            |c| render::chapters(c),
        )
        .await
    }

    pub async fn explore(&mut self, class_id: Option<ClassId>) -> String {
        match class_id {
            Some(_) => {
                self.list_text(
                    "explore",
                    &explore::hooks::class_resources(class_id),
                    "No resources for this class yet",
                    render::class_resources,
                )
                .await
            }
            None => {
                self.list_text(
                    "explore",
                    &explore::hooks::catalogue(),
                    "No subjects to explore yet",
                    |s| render::catalogue(s),
                )
                .await
            }
        }
    }

    /// The summary of the signed-in user's shell. Directors see the school
    /// summary; everyone else the teacher summary.
    pub async fn dashboard(&mut self) -> String {
        match self.session.role() {
            Some(Role::SchoolDirector) => {
                self.record_text(
                    "dashboard",
                    &dashboard::hooks::director(),
                    render::director_dashboard,
                )
                .await
            }
            _ => {
                self.record_text(
                    "dashboard",
                    &dashboard::hooks::teacher(),
                    render::teacher_dashboard,
                )
                .await
            }
        }
    }

    /// Playback page: shell from the session alone, then the video. Once
    /// playback loads, a view is recorded in a detached task.
    pub async fn play(&mut self, video_id: Option<VideoId>) -> String {
        let shell: Shell = select_playback_shell(self.session.session());
        let state = self.load("play", &videos::hooks::playback(video_id)).await;
        let loaded = state.is_success();
        let text = View::from_record(state).to_text(render::playback);

        if let (true, Some(id)) = (loaded, video_id) {
            let queries = self.queries.clone();
            self.background.push(tokio::spawn(async move {
                if let Err(e) = queries.mutate(&videos::hooks::record_view(), id).await {
                    debug!(error = %e, "Failed to record video view");
                }
            }));
            info!(video_id = %id, "Playback started");
        }

        format!("{}\n\n{text}", shell.title())
    }
}

/// Today in local time, the reference for date pickers.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
