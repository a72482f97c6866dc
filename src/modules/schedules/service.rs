use smartedu_api::ApiClient;
use smartedu_core::ApiError;
use smartedu_models::ids::ClassId;
use smartedu_models::schedules::{ScheduleEntry, sort_timetable};
use tracing::instrument;

pub struct ScheduleService;

impl ScheduleService {
    /// The signed-in teacher's week, in timetable order.
    #[instrument(skip(api))]
    pub async fn teacher_timetable(api: &ApiClient) -> Result<Vec<ScheduleEntry>, ApiError> {
        let mut entries: Vec<ScheduleEntry> = api.get_data("/teacher/schedules").await?;
        sort_timetable(&mut entries);
        Ok(entries)
    }

    #[instrument(skip(api))]
    pub async fn class_timetable(
        api: &ApiClient,
        class_id: ClassId,
    ) -> Result<Vec<ScheduleEntry>, ApiError> {
        let mut entries: Vec<ScheduleEntry> = api
            .get_data(&format!("/teacher/schedules/classes/{class_id}"))
            .await?;
        sort_timetable(&mut entries);
        Ok(entries)
    }
}
