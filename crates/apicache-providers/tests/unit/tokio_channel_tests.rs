//! In-process refresh channel tests

use apicache_domain::ports::infrastructure::RefreshChannel;
use apicache_domain::value_objects::{RefreshEnvelope, RefreshMessage, RefreshPayload};
use apicache_providers::channel::TokioRefreshChannel;

#[tokio::test]
async fn test_publish_then_receive() {
    let channel = TokioRefreshChannel::new();

    channel.publish(&RefreshMessage::new("/a")).await.unwrap();
    channel.publish(&RefreshMessage::new("/b")).await.unwrap();

    let first = channel.receive().await.unwrap().unwrap();
    let second = channel.receive().await.unwrap().unwrap();
    assert!(first.is_refresh());
    assert_eq!(first.into_message(), Some(RefreshMessage::new("/a")));
    assert_eq!(second.into_message(), Some(RefreshMessage::new("/b")));
}

#[tokio::test]
async fn test_close_drains_then_ends() {
    let channel = TokioRefreshChannel::new();
    channel.publish(&RefreshMessage::new("/a")).await.unwrap();

    channel.close();

    assert!(channel.is_closed());
    assert!(channel.receive().await.unwrap().is_some());
    assert!(channel.receive().await.unwrap().is_none());
}

#[tokio::test]
async fn test_publish_after_close_fails() {
    let channel = TokioRefreshChannel::new();
    channel.close();

    assert!(channel.publish(&RefreshMessage::new("/a")).await.is_err());
}

#[tokio::test]
async fn test_foreign_envelopes_pass_through() {
    let channel = TokioRefreshChannel::new();
    channel
        .publish_envelope(RefreshEnvelope {
            message_type: "something-else".to_string(),
            payload: RefreshPayload::default(),
        })
        .unwrap();

    let envelope = channel.receive().await.unwrap().unwrap();
    assert!(!envelope.is_refresh());
    assert_eq!(channel.channel_name(), "tokio");
}
