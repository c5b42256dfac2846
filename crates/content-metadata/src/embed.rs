//! Rewrites third-party source URLs into iframe sources for preview players.

use url::Url;

use crate::error::Result;
use crate::params::EngineParameters;

/// Video hosts whose `/watch?v=<id>` pages have an `/embed/<id>` twin on the same host.
const VIDEO_HOSTS: &[&str] = &["youtube.com", "youtube-nocookie.com"];

/// Short-link hosts of the same platform: `/<id>` paths.
const SHORT_LINK_HOSTS: &[&str] = &["youtu.be"];

const SHORT_LINK_EMBED_BASE: &str = "https://www.youtube.com/embed/";

const VIDEO_PLATFORM_HINT: &str = "youtube";

/// Outcome of resolving a preview URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmbedTarget {
    /// URL safe to use as an iframe source.
    Embed(String),
    /// Host refuses third-party playback; the caller shows a fallback.
    Blocked,
}

impl EmbedTarget {
    /// Iframe source, empty when blocked.
    pub fn into_src(self) -> String {
        match self {
            EmbedTarget::Embed(src) => src,
            EmbedTarget::Blocked => String::new(),
        }
    }
}

/// Turn a raw source URL into an embeddable preview URL, or an empty string
/// when there is nothing safe to embed.
pub fn resolve_embed_url(url: Option<&str>, platform: Option<&str>) -> String {
    resolve_embed_url_with(&EngineParameters::default(), url, platform)
}

pub fn resolve_embed_url_with(
    params: &EngineParameters,
    url: Option<&str>,
    platform: Option<&str>,
) -> String {
    let Some(raw) = url.map(str::trim).filter(|u| !u.is_empty()) else {
        return String::new();
    };
    match try_resolve_embed_url(params, raw, platform) {
        Ok(target) => target.into_src(),
        Err(e) => {
            tracing::debug!("no embed source for {:?}: {}", raw, e);
            String::new()
        }
    }
}

/// Fallible core of [`resolve_embed_url`]: parse failures are reported
/// instead of swallowed.
pub fn try_resolve_embed_url(
    params: &EngineParameters,
    raw: &str,
    platform: Option<&str>,
) -> Result<EmbedTarget> {
    let raw = raw.trim();
    let parsed = Url::parse(raw)?;
    let host = parsed.host_str().unwrap_or_default();

    if params.passthrough_hosts.iter().any(|d| host_matches(host, d)) {
        return Ok(EmbedTarget::Embed(raw.to_string()));
    }
    if params.blocked_hosts.iter().any(|d| host_matches(host, d)) {
        return Ok(EmbedTarget::Blocked);
    }
    if parsed.path().starts_with("/embed/") {
        return Ok(EmbedTarget::Embed(raw.to_string()));
    }

    if SHORT_LINK_HOSTS.iter().any(|d| host_matches(host, d)) {
        let id = parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .filter(|id| is_video_id(id));
        if let Some(id) = id {
            return Ok(EmbedTarget::Embed(format!("{SHORT_LINK_EMBED_BASE}{id}")));
        }
    }

    let video_host = VIDEO_HOSTS.iter().any(|d| host_matches(host, d))
        || platform.is_some_and(|p| p.trim().eq_ignore_ascii_case(VIDEO_PLATFORM_HINT));
    if video_host && parsed.path().trim_end_matches('/') == "/watch" {
        let id = parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|id| is_video_id(id));
        if let Some(id) = id {
            let origin = parsed.origin().ascii_serialization();
            return Ok(EmbedTarget::Embed(format!("{origin}/embed/{id}")));
        }
    }

    Ok(EmbedTarget::Embed(raw.to_string()))
}

/// True if `host` is `domain` or one of its subdomains.
fn host_matches(host: &str, domain: &str) -> bool {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    let domain = domain.to_ascii_lowercase();
    host == domain
        || host
            .strip_suffix(domain.as_str())
            .is_some_and(|prefix| prefix.ends_with('.'))
}

fn is_video_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
