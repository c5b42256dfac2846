use content_metadata::embed::*;
use content_metadata::{EngineParameters, MetadataError};

#[test]
fn absent_or_blank_url_is_empty() {
    assert_eq!(resolve_embed_url(None, Some("youtube")), "");
    assert_eq!(resolve_embed_url(Some("   "), None), "");
}

#[test]
fn unparseable_url_is_empty() {
    assert_eq!(resolve_embed_url(Some("not a url"), None), "");
    assert_eq!(resolve_embed_url(Some("://missing-scheme"), Some("youtube")), "");
}

#[test]
fn watch_url_with_platform_hint_is_rewritten() {
    assert_eq!(
        resolve_embed_url(Some("https://host/watch?v=abc123"), Some("youtube")),
        "https://host/embed/abc123"
    );
}

#[test]
fn watch_url_on_video_host_is_rewritten_without_hint() {
    assert_eq!(
        resolve_embed_url(Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"), None),
        "https://www.youtube.com/embed/dQw4w9WgXcQ"
    );
}

#[test]
fn watch_url_without_hint_on_unknown_host_passes_through() {
    let url = "https://example.com/watch?v=abc123";
    assert_eq!(resolve_embed_url(Some(url), None), url);
}

#[test]
fn short_link_is_rewritten() {
    assert_eq!(
        resolve_embed_url(Some("https://youtu.be/abc123?si=share"), Some("youtube")),
        "https://www.youtube.com/embed/abc123"
    );
}

#[test]
fn embed_url_passes_through() {
    let url = "https://www.youtube.com/embed/abc123?autoplay=0";
    assert_eq!(resolve_embed_url(Some(url), Some("youtube")), url);
}

#[test]
fn blocked_hosts_are_empty() {
    assert_eq!(resolve_embed_url(Some("https://tiktok.com/@x/video/1"), Some("tiktok")), "");
    assert_eq!(resolve_embed_url(Some("https://www.tiktok.com/embed/1"), None), "");
    assert_eq!(resolve_embed_url(Some("https://www.instagram.com/reel/Cx1/"), None), "");
}

#[test]
fn lookalike_host_is_not_blocked() {
    let url = "https://nottiktok.com/video/1";
    assert_eq!(resolve_embed_url(Some(url), None), url);
}

#[test]
fn cdn_host_passes_through() {
    let url = "https://iframe.videodelivery.net/5d5bc37ffcf54c9b82e996823bffbb81";
    assert_eq!(resolve_embed_url(Some(url), Some("stream")), url);
}

#[test]
fn other_urls_pass_through() {
    let url = "https://player.vimeo.com/video/12345";
    assert_eq!(resolve_embed_url(Some(url), Some("vimeo")), url);
}

#[test]
fn invalid_video_id_is_not_rewritten() {
    let url = "https://www.youtube.com/watch?v=../../admin";
    assert_eq!(resolve_embed_url(Some(url), None), url);
}

#[test]
fn any_parseable_scheme_passes_through() {
    let url = "ftp://example.com/clip.mp4";
    assert_eq!(resolve_embed_url(Some(url), None), url);

    let params = EngineParameters::default();
    let target = try_resolve_embed_url(&params, "rtmp://live.example.com/app/key", None).unwrap();
    assert_eq!(target, EmbedTarget::Embed("rtmp://live.example.com/app/key".to_string()));
}

#[test]
fn parse_error_is_reported_by_fallible_variant() {
    let params = EngineParameters::default();
    let err = try_resolve_embed_url(&params, "not a url", None).unwrap_err();
    assert!(matches!(err, MetadataError::Url(_)));
}

#[test]
fn blocked_target_has_empty_src() {
    let params = EngineParameters::default();
    let target = try_resolve_embed_url(&params, "https://vm.tiktok.com/abc", None).unwrap();
    assert_eq!(target, EmbedTarget::Blocked);
    assert_eq!(target.into_src(), "");
}

#[test]
fn custom_host_lists() {
    let params = EngineParameters {
        passthrough_hosts: vec!["cdn.example.net".to_string()],
        blocked_hosts: vec!["example.org".to_string()],
        ..EngineParameters::default()
    };
    assert_eq!(
        resolve_embed_url_with(&params, Some("https://media.example.org/v/1"), None),
        ""
    );
    assert_eq!(
        resolve_embed_url_with(&params, Some("https://tiktok.com/@x/video/1"), None),
        "https://tiktok.com/@x/video/1"
    );
}
