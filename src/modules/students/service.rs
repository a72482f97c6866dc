use smartedu_api::{ApiClient, require_data};
use smartedu_core::{ApiError, Paginated};
use smartedu_models::ids::StudentId;
use smartedu_models::students::{
    CreateStudentDto, Student, StudentFilterParams, UpdateStudentDto,
};
use tracing::instrument;

const STUDENTS_PATH: &str = "/director/dashboard/students";

pub struct StudentService;

impl StudentService {
    #[instrument(skip(api))]
    pub async fn list_students(
        api: &ApiClient,
        filters: &StudentFilterParams,
    ) -> Result<Paginated<Student>, ApiError> {
        api.get_data_with_query(STUDENTS_PATH, &filters.to_query())
            .await
    }

    #[instrument(skip(api))]
    pub async fn get_student(api: &ApiClient, student_id: StudentId) -> Result<Student, ApiError> {
        api.get_data(&format!("{STUDENTS_PATH}/{student_id}")).await
    }

    #[instrument(skip(api))]
    pub async fn create_student(
        api: &ApiClient,
        dto: CreateStudentDto,
    ) -> Result<Student, ApiError> {
        require_data(api.post(STUDENTS_PATH, &dto).await?)
    }

    #[instrument(skip(api))]
    pub async fn update_student(
        api: &ApiClient,
        student_id: StudentId,
        dto: UpdateStudentDto,
    ) -> Result<Student, ApiError> {
        require_data(
            api.patch(&format!("{STUDENTS_PATH}/{student_id}"), &dto)
                .await?,
        )
    }

    #[instrument(skip(api))]
    pub async fn delete_student(api: &ApiClient, student_id: StudentId) -> Result<(), ApiError> {
        api.delete::<serde_json::Value>(&format!("{STUDENTS_PATH}/{student_id}"))
            .await?;
        Ok(())
    }
}
