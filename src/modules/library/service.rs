use smartedu_api::{ApiClient, FileUpload, MultipartBody, require_data};
use smartedu_core::ApiError;
use smartedu_models::ids::{ChapterId, LinkId, MaterialId, SubjectId, TopicId, VideoId};
use smartedu_models::library::{
    Chapter, ChapterContents, CreateLinkDto, CreateMaterialDto, CreateVideoDto, Link, Material,
    TopicMaterials, Video,
};
use tracing::instrument;

pub struct LibraryService;

impl LibraryService {
    #[instrument(skip(api))]
    pub async fn list_chapters(
        api: &ApiClient,
        subject_id: SubjectId,
    ) -> Result<Vec<Chapter>, ApiError> {
        let mut chapters: Vec<Chapter> = api
            .get_data(&format!("/library/subjects/{subject_id}/chapters"))
            .await?;
        chapters.sort_by_key(|chapter| chapter.order);
        Ok(chapters)
    }

    #[instrument(skip(api))]
    pub async fn chapter_contents(
        api: &ApiClient,
        chapter_id: ChapterId,
    ) -> Result<ChapterContents, ApiError> {
        api.get_data(&format!("/library/chapters/{chapter_id}/contents"))
            .await
    }

    #[instrument(skip(api))]
    pub async fn topic_materials(
        api: &ApiClient,
        topic_id: TopicId,
    ) -> Result<TopicMaterials, ApiError> {
        api.get_data(&format!("/library/topics/{topic_id}/materials"))
            .await
    }

    /// Uploads a video. `file` is omitted when the video is an external URL.
    #[instrument(skip(api))]
    pub async fn upload_video(
        api: &ApiClient,
        dto: CreateVideoDto,
        file: Option<FileUpload>,
    ) -> Result<Video, ApiError> {
        let body = MultipartBody::from_fields(dto.form_fields()).attach("video", file);
        require_data(api.post_multipart("/library/videos", body).await?)
    }

    #[instrument(skip(api))]
    pub async fn delete_video(api: &ApiClient, video_id: VideoId) -> Result<(), ApiError> {
        api.delete::<serde_json::Value>(&format!("/library/videos/{video_id}"))
            .await?;
        Ok(())
    }

    #[instrument(skip(api))]
    pub async fn upload_material(
        api: &ApiClient,
        dto: CreateMaterialDto,
        file: FileUpload,
    ) -> Result<Material, ApiError> {
        let body = MultipartBody::from_fields(dto.form_fields()).attach("file", Some(file));
        require_data(api.post_multipart("/library/materials", body).await?)
    }

    #[instrument(skip(api))]
    pub async fn delete_material(api: &ApiClient, material_id: MaterialId) -> Result<(), ApiError> {
        api.delete::<serde_json::Value>(&format!("/library/materials/{material_id}"))
            .await?;
        Ok(())
    }

    #[instrument(skip(api))]
    pub async fn add_link(api: &ApiClient, dto: CreateLinkDto) -> Result<Link, ApiError> {
        require_data(api.post("/library/links", &dto).await?)
    }

    #[instrument(skip(api))]
    pub async fn delete_link(api: &ApiClient, link_id: LinkId) -> Result<(), ApiError> {
        api.delete::<serde_json::Value>(&format!("/library/links/{link_id}"))
            .await?;
        Ok(())
    }
}
