use smartedu_cache::keys;
use smartedu_models::dashboard::{DirectorDashboard, TeacherDashboard};

use super::DashboardService;
use crate::query::Query;

pub fn director() -> Query<DirectorDashboard> {
    Query::new(keys::dashboard::director(), |api| async move {
        DashboardService::director_summary(&api).await
    })
}

pub fn teacher() -> Query<TeacherDashboard> {
    Query::new(keys::dashboard::teacher(), |api| async move {
        DashboardService::teacher_summary(&api).await
    })
}
