use smartedu_api::{ApiClient, FileUpload, MultipartBody, require_data};
use smartedu_core::ApiError;
use smartedu_models::ids::SubjectId;
use smartedu_models::subjects::{CreateSubjectDto, Subject};
use tracing::instrument;

const SUBJECTS_PATH: &str = "/director/dashboard/subjects";

pub struct SubjectService;

impl SubjectService {
    #[instrument(skip(api))]
    pub async fn list_subjects(api: &ApiClient) -> Result<Vec<Subject>, ApiError> {
        api.get_data(SUBJECTS_PATH).await
    }

    /// Creates a subject. The thumbnail, when given, is sent as the `thumbnail` file part.
    #[instrument(skip(api))]
    pub async fn create_subject(
        api: &ApiClient,
        dto: CreateSubjectDto,
        thumbnail: Option<FileUpload>,
    ) -> Result<Subject, ApiError> {
        let body = MultipartBody::from_fields(dto.form_fields()).attach("thumbnail", thumbnail);
        require_data(api.post_multipart(SUBJECTS_PATH, body).await?)
    }

    #[instrument(skip(api))]
    pub async fn delete_subject(api: &ApiClient, subject_id: SubjectId) -> Result<(), ApiError> {
        api.delete::<serde_json::Value>(&format!("{SUBJECTS_PATH}/{subject_id}"))
            .await?;
        Ok(())
    }
}
