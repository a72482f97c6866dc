//! Library content: subjects are split into chapters, chapters into topics, and
//! topics carry videos, materials (documents) and links.
//!
//! Library owners manage this content under `/library/...`; students watch it
//! through `/video/...` and discover it through `/explore/...`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ChapterId, LinkId, MaterialId, PlatformId, SubjectId, TopicId, VideoId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: ChapterId,
    pub subject_id: SubjectId,
    pub title: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub topic_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub chapter_id: ChapterId,
    pub title: String,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    pub topic_id: TopicId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub platform_id: Option<PlatformId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An uploaded document (PDF, slides, worksheet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub topic_id: TopicId,
    pub title: String,
    pub file_url: String,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub size_bytes: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    pub topic_id: TopicId,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Everything attached to one topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicMaterials {
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl TopicMaterials {
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty() && self.materials.is_empty() && self.links.is_empty()
    }

    pub fn len(&self) -> usize {
        self.videos.len() + self.materials.len() + self.links.len()
    }
}

/// A chapter with its topics and their content counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterContents {
    pub chapter: Chapter,
    pub topics: Vec<TopicSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub topic: Topic,
    #[serde(default)]
    pub video_count: u32,
    #[serde(default)]
    pub material_count: u32,
    #[serde(default)]
    pub link_count: u32,
}

/// What the playback page needs: the video plus its neighbours in the topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoPlayback {
    pub video: Video,
    #[serde(default)]
    pub stream_url: Option<String>,
    #[serde(default)]
    pub related: Vec<Video>,
}

impl VideoPlayback {
    /// The URL to play: the signed stream URL when the backend issued one.
    pub fn playable_url(&self) -> &str {
        self.stream_url.as_deref().unwrap_or(&self.video.url)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateVideoDto {
    pub topic_id: TopicId,
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateVideoDto {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("topic_id", self.topic_id.to_string()),
            ("title", self.title.clone()),
            ("url", self.url.clone()),
        ];
        if let Some(description) = &self.description {
            fields.push(("description", description.clone()));
        }
        fields
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateMaterialDto {
    pub topic_id: TopicId,
    pub title: String,
}

impl CreateMaterialDto {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("topic_id", self.topic_id.to_string()),
            ("title", self.title.clone()),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateLinkDto {
    pub topic_id: TopicId,
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn video_json() -> serde_json::Value {
        json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "topic_id": "00000000-0000-0000-0000-000000000002",
            "title": "Fractions",
            "url": "https://cdn.example.com/v/1.mp4",
            "created_at": "2024-09-01T08:00:00Z",
            "updated_at": "2024-09-01T08:00:00Z"
        })
    }

    #[test]
    fn test_topic_materials_defaults_to_empty() {
        let materials: TopicMaterials = serde_json::from_str("{}").unwrap();
        assert!(materials.is_empty());
        assert_eq!(materials.len(), 0);
    }

    #[test]
    fn test_playable_url_prefers_stream() {
        let mut playback = VideoPlayback {
            video: serde_json::from_value(video_json()).unwrap(),
            stream_url: None,
            related: vec![],
        };
        assert_eq!(playback.playable_url(), "https://cdn.example.com/v/1.mp4");

        playback.stream_url = Some("https://stream.example.com/signed".into());
        assert_eq!(playback.playable_url(), "https://stream.example.com/signed");
    }

    #[test]
    fn test_video_form_fields() {
        let dto = CreateVideoDto {
            topic_id: TopicId::from_u128(2),
            title: "Fractions".into(),
            url: "https://youtu.be/x".into(),
            description: None,
        };
        let fields = dto.form_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].1, TopicId::from_u128(2).to_string());
    }
}
