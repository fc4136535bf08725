use crate::e2e::helpers;

use gtts_speech::{NoopPlayer, SpeechError};
use helpers::{
    mock_audio_bytes, refused_endpoint, speech_for, FakeProvider, TestContext, TruncatingProvider,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_create_folder_and_download_speech_file(ctx: &TestContext) {
    let speech = ctx.speech("en");
    assert!(!ctx.audio_folder().exists());

    let path = speech.create_speech_file("hello", "test").await.unwrap();

    assert_eq!(path, ctx.audio_folder().join("test.mp3"));
    assert!(ctx.audio_folder().is_dir());
    assert_eq!(std::fs::read(&path).unwrap(), mock_audio_bytes());
    assert_eq!(ctx.provider.hits(), 1);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(ctx.audio_folder())
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_send_the_provider_query(ctx: &TestContext) {
    let speech = ctx.speech("es");

    speech
        .create_speech_file("hola mundo & más", "greeting")
        .await
        .unwrap();

    let query = ctx.provider.last_query().unwrap();
    assert_eq!(query.get("ie").map(String::as_str), Some("UTF-8"));
    assert_eq!(query.get("total").map(String::as_str), Some("1"));
    assert_eq!(query.get("idx").map(String::as_str), Some("0"));
    assert_eq!(query.get("textlen").map(String::as_str), Some("32"));
    assert_eq!(query.get("client").map(String::as_str), Some("tw-ob"));
    assert_eq!(query.get("q").map(String::as_str), Some("hola mundo & más"));
    assert_eq!(query.get("tl").map(String::as_str), Some("es"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_fetch_twice_for_the_same_file(ctx: &TestContext) {
    let speech = ctx.speech("en");

    let first = speech.create_speech_file("hello", "test").await.unwrap();
    let second = speech.create_speech_file("hello", "test").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(ctx.provider.hits(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reuse_a_file_name_regardless_of_text(ctx: &TestContext) {
    let speech = ctx.speech("en");

    speech.create_speech_file("hello", "test").await.unwrap();
    speech.create_speech_file("goodbye", "test").await.unwrap();

    assert_eq!(ctx.provider.hits(), 1);
}

#[tokio::test]
async fn it_should_report_network_error_when_connection_is_refused() {
    let tmp = tempfile::tempdir().unwrap();
    let folder = tmp.path().join("audio");
    let endpoint = refused_endpoint().await.unwrap();
    let speech = speech_for(&endpoint, &folder, "en", Arc::new(NoopPlayer));

    let err = speech.create_speech_file("hello", "test").await.unwrap_err();

    assert!(matches!(err, SpeechError::Network(_)), "unexpected error: {err:?}");
    assert!(!folder.join("test.mp3").exists());
}

#[tokio::test]
async fn it_should_cache_error_bodies_without_status_validation() {
    let provider = FakeProvider::start_with(
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        b"<html>error</html>".to_vec(),
    )
    .await
    .unwrap();
    let tmp = tempfile::tempdir().unwrap();
    let speech = speech_for(provider.endpoint(), tmp.path(), "en", Arc::new(NoopPlayer));

    let path = speech.create_speech_file("hello", "test").await.unwrap();

    assert_eq!(std::fs::read(path).unwrap(), b"<html>error</html>");
}

#[tokio::test]
async fn it_should_reject_error_status_when_validation_is_enabled() {
    use gtts_speech::{GoogleTtsRepository, Speech, SpeechConfig};

    let provider = FakeProvider::start_with(
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        b"<html>error</html>".to_vec(),
    )
    .await
    .unwrap();
    let tmp = tempfile::tempdir().unwrap();
    let repo = GoogleTtsRepository::with_endpoint(provider.endpoint()).validate_status(true);
    let speech = Speech::new(
        SpeechConfig::new(tmp.path(), "en").with_player(Arc::new(NoopPlayer)),
        Arc::new(repo),
    );

    let err = speech.create_speech_file("hello", "test").await.unwrap_err();

    assert!(matches!(err, SpeechError::UnexpectedStatus { status: 500 }));
    assert!(!tmp.path().join("test.mp3").exists());
}

#[tokio::test]
async fn it_should_keep_a_truncated_download_as_cached() {
    let provider = TruncatingProvider::start(1024, mock_audio_bytes()).await.unwrap();
    let tmp = tempfile::tempdir().unwrap();
    let speech = speech_for(provider.endpoint(), tmp.path(), "en", Arc::new(NoopPlayer));

    let err = speech.create_speech_file("hello", "test").await.unwrap_err();

    assert!(matches!(err, SpeechError::Network(_)), "unexpected error: {err:?}");
    let partial = tmp.path().join("test.mp3");
    assert!(partial.is_file());
    let written = std::fs::read(&partial).unwrap();
    assert!(written.len() < 1024);
    assert!(mock_audio_bytes().starts_with(&written));

    // the partial file now counts as cached
    let path = speech.create_speech_file("hello", "test").await.unwrap();
    assert_eq!(path, partial);
    assert_eq!(provider.hits(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_filesystem_error_when_file_cannot_be_created(ctx: &TestContext) {
    let speech = ctx.speech("en");

    let err = speech
        .create_speech_file("hello", "missing/sub/test")
        .await
        .unwrap_err();

    match err {
        SpeechError::Filesystem { path, .. } => {
            assert_eq!(path, ctx.audio_folder().join("missing/sub/test.mp3"))
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(ctx.audio_folder().is_dir());
    assert!(!ctx.audio_folder().join("missing").exists());
}
