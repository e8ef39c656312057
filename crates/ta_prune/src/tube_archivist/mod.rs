use anyhow::{Result, bail};
pub use catalog::VideoCatalog;
use chrono::serde::ts_seconds;
use chrono::{DateTime, Utc};
pub use client::{Client, TaClient};
pub use error::TaError;
pub use video::Video;

mod catalog;
mod client;
mod error;
mod video;

pub(crate) trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output>;
}

// TubeArchivist 的列表接口没有业务错误码，载荷合法的标志就是带有 data 数组
impl Validate for serde_json::Value {
    type Output = serde_json::Value;

    fn validate(self) -> Result<Self::Output> {
        if !self["data"].is_array() {
            bail!(TaError::InvalidResponse(self.to_string()));
        }
        Ok(self)
    }
}

/// 从视频列表接口获取的视频信息
#[derive(Debug, serde::Deserialize)]
pub struct VideoInfo {
    pub youtube_id: String,
    pub player: PlayerInfo,
    #[serde(with = "ts_seconds")]
    pub date_downloaded: DateTime<Utc>,
}

/// 远端自己维护的播放状态
#[derive(Debug, serde::Deserialize)]
pub struct PlayerInfo {
    #[serde(default)]
    pub watched: bool,
}
