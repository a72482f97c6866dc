use smartedu_api::{ApiClient, require_data};
use smartedu_core::ApiError;
use smartedu_models::assessments::{Assessment, CreateAssessmentDto};
use smartedu_models::ids::{AssessmentId, SubjectId};
use tracing::instrument;

const ASSESSMENTS_PATH: &str = "/teacher/assessments";

pub struct AssessmentService;

impl AssessmentService {
    #[instrument(skip(api))]
    pub async fn list_for_subject(
        api: &ApiClient,
        subject_id: SubjectId,
    ) -> Result<Vec<Assessment>, ApiError> {
        api.get_data_with_query(ASSESSMENTS_PATH, &[("subject_id", subject_id.to_string())])
            .await
    }

    #[instrument(skip(api))]
    pub async fn create_assessment(
        api: &ApiClient,
        dto: CreateAssessmentDto,
    ) -> Result<Assessment, ApiError> {
        require_data(api.post(ASSESSMENTS_PATH, &dto).await?)
    }

    #[instrument(skip(api))]
    pub async fn publish_assessment(
        api: &ApiClient,
        assessment_id: AssessmentId,
    ) -> Result<Assessment, ApiError> {
        require_data(
            api.patch(
                &format!("{ASSESSMENTS_PATH}/{assessment_id}/publish"),
                &serde_json::json!({}),
            )
            .await?,
        )
    }

    #[instrument(skip(api))]
    pub async fn delete_assessment(
        api: &ApiClient,
        assessment_id: AssessmentId,
    ) -> Result<(), ApiError> {
        api.delete::<serde_json::Value>(&format!("{ASSESSMENTS_PATH}/{assessment_id}"))
            .await?;
        Ok(())
    }
}
