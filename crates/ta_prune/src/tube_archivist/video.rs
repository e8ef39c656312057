use anyhow::Result;
use reqwest::Method;
use serde_json::json;

use crate::tube_archivist::TaClient;

pub struct Video<'a> {
    client: &'a TaClient,
    pub youtube_id: String,
}

impl<'a> Video<'a> {
    pub fn new(client: &'a TaClient, youtube_id: String) -> Self {
        Self { client, youtube_id }
    }

    /// 从媒体库中删除该视频
    pub async fn delete(&self) -> Result<()> {
        self.client
            .request(Method::DELETE, &format!("/api/video/{}/", self.youtube_id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// 将视频标记为 ignore-force，远端之后不会再下载它
    pub async fn ignore(&self) -> Result<()> {
        self.client
            .request(Method::POST, &format!("/api/download/{}/", self.youtube_id))
            .json(&json!({"status": "ignore-force"}))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
