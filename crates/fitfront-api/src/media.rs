//! Latest-video lookups for the read-only media embeds.

use serde::Deserialize;
use std::fmt;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Which media surface to fetch the latest video for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoKind {
    Youtube,
    /// YouTube short-form video.
    Short,
    Tiktok,
}

impl VideoKind {
    /// API path for this kind.
    pub fn path(&self) -> &'static str {
        match self {
            VideoKind::Youtube => "/api/latest/youtube",
            VideoKind::Short => "/api/latest/short",
            VideoKind::Tiktok => "/api/latest/tiktok",
        }
    }
}

impl fmt::Display for VideoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoKind::Youtube => write!(f, "youtube"),
            VideoKind::Short => write!(f, "short"),
            VideoKind::Tiktok => write!(f, "tiktok"),
        }
    }
}

/// Response of `GET /api/latest/{youtube|short|tiktok}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LatestVideo {
    /// Platform video identifier for the embed.
    pub video_id: String,
}

impl ApiClient {
    /// Fetch the latest video id for a media surface. Errors are the
    /// caller's cue to render a "video not available" placeholder.
    pub async fn latest_video(&self, kind: VideoKind) -> Result<LatestVideo, ApiError> {
        self.get_json(kind.path()).await
    }
}
