use crate::date::VideoDate;
use crate::resolution::Resolution;
use serde::Serialize;
use std::fmt::Display;
use typed_builder::TypedBuilder;

/// An opaque identifier assigned by the store when a video is created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored video record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    /// `None` when the field was never supplied; `Some("")` is a legal value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: VideoDate,
    pub available_resolutions: Vec<Resolution>,
}

/// The fields of a video about to be created. The store assigns the id.
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct NewVideo {
    #[builder(setter(into))]
    pub title: String,
    #[builder(default, setter(strip_option, into))]
    pub description: Option<String>,
    pub date: VideoDate,
    #[builder(default)]
    pub available_resolutions: Vec<Resolution>,
}

impl NewVideo {
    pub fn into_video(self, id: VideoId) -> Video {
        Video {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            available_resolutions: self.available_resolutions,
        }
    }
}

/// A partial update. Each `Some` field overwrites the stored value; each
/// `None` field leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<VideoDate>,
    pub available_resolutions: Option<Vec<Resolution>>,
}

impl VideoPatch {
    /// Applies the present fields to `video` in place. The id is never touched.
    pub fn apply(self, video: &mut Video) {
        if let Some(title) = self.title {
            video.title = title;
        }
        if let Some(description) = self.description {
            video.description = Some(description);
        }
        if let Some(date) = self.date {
            video.date = date;
        }
        if let Some(resolutions) = self.available_resolutions {
            video.available_resolutions = resolutions;
        }
    }
}
