//! Student-facing discovery of library content.

use serde::{Deserialize, Serialize};

use crate::ids::{ClassId, SubjectId};
use crate::library::{Link, Material, Video};

/// Content available to one class, grouped by subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassResources {
    pub class_id: ClassId,
    #[serde(default)]
    pub subjects: Vec<SubjectResources>,
}

impl ClassResources {
    pub fn is_empty(&self) -> bool {
        self.subjects.iter().all(SubjectResources::is_empty)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectResources {
    pub subject_id: SubjectId,
    pub subject_name: String,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl SubjectResources {
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty() && self.materials.is_empty() && self.links.is_empty()
    }
}

/// A subject in the public library catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueSubject {
    pub id: SubjectId,
    pub name: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub chapter_count: u32,
    #[serde(default)]
    pub video_count: u32,
}
