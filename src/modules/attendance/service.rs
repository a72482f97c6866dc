use chrono::NaiveDate;
use smartedu_api::ApiClient;
use smartedu_core::ApiError;
use smartedu_models::attendance::{AttendanceRegister, SubmitAttendanceDto};
use smartedu_models::ids::ClassId;
use tracing::instrument;

const ATTENDANCE_PATH: &str = "/teacher/attendance";

pub struct AttendanceService;

impl AttendanceService {
    #[instrument(skip(api))]
    pub async fn get_register(
        api: &ApiClient,
        class_id: ClassId,
        date: NaiveDate,
    ) -> Result<AttendanceRegister, ApiError> {
        api.get_data_with_query(
            ATTENDANCE_PATH,
            &[
                ("class_id", class_id.to_string()),
                ("date", date.format("%Y-%m-%d").to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(api, dto), fields(class_id = %dto.class_id, date = %dto.date, records = dto.records.len()))]
    pub async fn submit(api: &ApiClient, dto: SubmitAttendanceDto) -> Result<(), ApiError> {
        api.post::<_, serde_json::Value>(ATTENDANCE_PATH, &dto)
            .await?;
        Ok(())
    }
}
