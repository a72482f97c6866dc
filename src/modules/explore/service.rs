use smartedu_api::ApiClient;
use smartedu_core::ApiError;
use smartedu_models::explore::{CatalogueSubject, ClassResources};
use smartedu_models::ids::ClassId;
use tracing::instrument;

pub struct ExploreService;

impl ExploreService {
    #[instrument(skip(api))]
    pub async fn class_resources(
        api: &ApiClient,
        class_id: ClassId,
    ) -> Result<ClassResources, ApiError> {
        api.get_data(&format!("/explore/classes/{class_id}/resources"))
            .await
    }

    #[instrument(skip(api))]
    pub async fn catalogue(api: &ApiClient) -> Result<Vec<CatalogueSubject>, ApiError> {
        api.get_data("/explore/subjects").await
    }
}
