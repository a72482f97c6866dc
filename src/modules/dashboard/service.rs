use smartedu_api::ApiClient;
use smartedu_core::ApiError;
use smartedu_models::dashboard::{DirectorDashboard, TeacherDashboard};
use tracing::instrument;

pub struct DashboardService;

impl DashboardService {
    #[instrument(skip(api))]
    pub async fn director_summary(api: &ApiClient) -> Result<DirectorDashboard, ApiError> {
        api.get_data("/director/dashboard").await
    }

    #[instrument(skip(api))]
    pub async fn teacher_summary(api: &ApiClient) -> Result<TeacherDashboard, ApiError> {
        api.get_data("/teacher/dashboard").await
    }
}
