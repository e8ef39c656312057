use anyhow::{Result, ensure};
use async_stream::try_stream;
use futures::Stream;
use serde_json::Value;

use crate::tube_archivist::{TaClient, TaError, Validate, VideoInfo};

/// 分页超过该上限视为远端行为异常，终止本轮而不是无限翻页
const MAX_PAGES: u32 = 1000;

pub struct VideoCatalog<'a> {
    client: &'a TaClient,
}

impl<'a> VideoCatalog<'a> {
    pub fn new(client: &'a TaClient) -> Self {
        Self { client }
    }

    async fn get_videos(&self, page: u32) -> Result<Vec<Value>> {
        ensure!(page <= MAX_PAGES, TaError::TooManyPages(MAX_PAGES));
        let mut res = self
            .client
            .request(reqwest::Method::GET, "/api/video/")
            .query(&[("page", page.to_string().as_str())])
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?
            .validate()?;
        Ok(serde_json::from_value(res["data"].take())?)
    }

    // 返回整个视频库的分页流，任何一页失败都会让流以 Err 终止
    pub fn into_video_stream(self) -> impl Stream<Item = Result<VideoInfo>> + 'a {
        try_stream! {
            let mut page = 1;
            loop {
                info!("fetching page {} from tube archivist", page);
                let medias = self.get_videos(page).await?;
                if medias.is_empty() {
                    break;
                }
                for media in medias {
                    match serde_json::from_value::<VideoInfo>(media) {
                        Ok(video) => yield video,
                        Err(e) => warn!("failed to parse video record on page {}: {}", page, e),
                    }
                }
                page += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;
    use httpmock::Method::GET;
    use httpmock::MockServer;
    use serde_json::json;

    use super::*;

    fn video_record(id: &str) -> Value {
        json!({
            "youtube_id": id,
            "player": {"watched": true},
            "date_downloaded": 1722902400,
        })
    }

    #[tokio::test]
    async fn test_video_stream_concatenates_pages_in_order() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/video/").query_param("page", "1");
                then.status(200)
                    .json_body(json!({"data": [video_record("one"), video_record("two")]}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/video/").query_param("page", "2");
                then.status(200).json_body(json!({"data": [video_record("three")]}));
            })
            .await;
        let empty_page = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/video/").query_param("page", "3");
                then.status(200).json_body(json!({"data": []}));
            })
            .await;
        let ta_client = TaClient::new(server.base_url(), "secret");
        let videos: Vec<VideoInfo> = VideoCatalog::new(&ta_client)
            .into_video_stream()
            .try_collect()
            .await
            .expect("all pages are well-formed");
        assert_eq!(
            videos.iter().map(|v| v.youtube_id.as_str()).collect::<Vec<_>>(),
            ["one", "two", "three"]
        );
        empty_page.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_video_stream_sends_token_header() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/video/")
                    .header("authorization", "Token secret");
                then.status(200).json_body(json!({"data": []}));
            })
            .await;
        let ta_client = TaClient::new(server.base_url(), "secret");
        let videos: Vec<VideoInfo> = VideoCatalog::new(&ta_client)
            .into_video_stream()
            .try_collect()
            .await
            .expect("mock only matches when the token header is present");
        assert!(videos.is_empty());
    }

    #[tokio::test]
    async fn test_video_stream_fails_on_non_200_page() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/video/").query_param("page", "1");
                then.status(200).json_body(json!({"data": [video_record("one")]}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/video/").query_param("page", "2");
                then.status(500);
            })
            .await;
        let ta_client = TaClient::new(server.base_url(), "secret");
        let res: Result<Vec<VideoInfo>> = VideoCatalog::new(&ta_client).into_video_stream().try_collect().await;
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn test_video_stream_fails_on_invalid_envelope() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/video/");
                then.status(200).json_body(json!({"detail": "Invalid token."}));
            })
            .await;
        let ta_client = TaClient::new(server.base_url(), "secret");
        let res: Result<Vec<VideoInfo>> = VideoCatalog::new(&ta_client).into_video_stream().try_collect().await;
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn test_video_stream_skips_malformed_records() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/video/").query_param("page", "1");
                then.status(200).json_body(json!({"data": [
                    {"player": {"watched": true}, "date_downloaded": 1722902400},
                    video_record("kept"),
                ]}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/video/").query_param("page", "2");
                then.status(200).json_body(json!({"data": []}));
            })
            .await;
        let ta_client = TaClient::new(server.base_url(), "secret");
        let videos: Vec<VideoInfo> = VideoCatalog::new(&ta_client)
            .into_video_stream()
            .try_collect()
            .await
            .expect("malformed records are skipped, not fatal");
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].youtube_id, "kept");
    }
}
