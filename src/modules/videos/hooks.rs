use smartedu_cache::keys;
use smartedu_models::ids::VideoId;
use smartedu_models::library::VideoPlayback;

use super::VideoService;
use crate::query::{Mutation, Query};

pub fn playback(video_id: Option<VideoId>) -> Query<VideoPlayback> {
    Query::when(keys::videos::all(), video_id, |id| {
        Query::new(keys::videos::playback(id), move |api| async move {
            VideoService::playback(&api, id).await
        })
        .without_event_refetch()
    })
}

/// Records a view. Never fails and invalidates nothing.
pub fn record_view() -> Mutation<VideoId, ()> {
    Mutation::new("record_video_view", |api, id| async move {
        VideoService::record_view(&api, id).await;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryOptions;

    #[test]
    fn test_playback_needs_an_id() {
        assert!(!playback(None).is_enabled());
        assert!(playback(Some(VideoId::from_u128(7))).is_enabled());
    }

    #[test]
    fn test_playback_is_not_refetched_on_focus() {
        let query = playback(Some(VideoId::from_u128(7)));
        let options = query.resolved_options(QueryOptions::default());
        assert!(!options.refetch_on_window_focus);
        assert!(!options.refetch_on_reconnect);
    }

    #[test]
    fn test_record_view_invalidates_nothing() {
        assert!(record_view().invalidated_keys().is_empty());
    }
}
