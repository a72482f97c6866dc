use smartedu_api::ApiClient;
use smartedu_core::ApiError;
use smartedu_models::classes::SchoolClass;
use tracing::instrument;

pub struct ClassService;

impl ClassService {
    #[instrument(skip(api))]
    pub async fn list_classes(api: &ApiClient) -> Result<Vec<SchoolClass>, ApiError> {
        api.get_data("/director/dashboard/classes").await
    }
}
