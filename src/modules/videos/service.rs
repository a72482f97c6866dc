use metrics::counter;
use smartedu_api::ApiClient;
use smartedu_core::ApiError;
use smartedu_models::ids::VideoId;
use smartedu_models::library::VideoPlayback;
use tracing::{debug, instrument};

pub struct VideoService;

impl VideoService {
    #[instrument(skip(api))]
    pub async fn playback(api: &ApiClient, video_id: VideoId) -> Result<VideoPlayback, ApiError> {
        api.get_data(&format!("/video/{video_id}/play")).await
    }

    /// Counts a view. Failures are logged and dropped; playback never waits on them.
    #[instrument(skip(api))]
    pub async fn record_view(api: &ApiClient, video_id: VideoId) {
        match api
            .post_empty::<serde_json::Value>(&format!("/video/{video_id}/view"))
            .await
        {
            Ok(_) => counter!("video_views_recorded_total", "status" => "success").increment(1),
            Err(e) => {
                counter!("video_views_recorded_total", "status" => "failure").increment(1);
                debug!(error = %e, "Failed to record video view");
            }
        }
    }
}
