use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use futures::TryStreamExt;

use crate::tube_archivist::{TaClient, Video, VideoCatalog, VideoInfo};

/// 执行一轮完整的清理：拉取全量视频列表，过滤出候选视频，逐个删除并标记忽略
pub async fn prune_videos(ta_client: &TaClient, min_watched_age: i64, ignore_watch_status: bool) -> Result<()> {
    // 截止时间以本轮开始时刻为准，过滤时不再重新取当前时间
    let cutoff = Utc::now() - Duration::days(min_watched_age);
    let mut videos: Vec<VideoInfo> = VideoCatalog::new(ta_client).into_video_stream().try_collect().await?;
    info!("获取到 {} 个视频，开始过滤观看状态与下载时间", videos.len());
    if !ignore_watch_status {
        videos = filter_watched(videos);
    }
    let candidates = filter_downloaded_before(videos, cutoff);
    info!("过滤后剩余 {} 个待清理视频", candidates.len());
    for info in candidates {
        let video = Video::new(ta_client, info.youtube_id);
        info!("deleting video {}", video.youtube_id);
        if let Err(e) = video.delete().await {
            error!("failed to delete video {}: {:#}", video.youtube_id, e);
        }
        // 删除失败也继续标记忽略，两个动作互不影响
        info!("ignoring video {}", video.youtube_id);
        if let Err(e) = video.ignore().await {
            error!("failed to ignore video {}: {:#}", video.youtube_id, e);
        }
    }
    Ok(())
}

fn filter_watched(videos: Vec<VideoInfo>) -> Vec<VideoInfo> {
    videos.into_iter().filter(|video| video.player.watched).collect()
}

fn filter_downloaded_before(videos: Vec<VideoInfo>, cutoff: DateTime<Utc>) -> Vec<VideoInfo> {
    videos
        .into_iter()
        .filter(|video| video.date_downloaded < cutoff)
        .collect()
}
