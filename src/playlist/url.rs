use url::Url;

/// Whether a submitted string is one of the three accepted video-reference
/// shapes:
///
/// - `youtu.be/<id>` (short link, id is the whole path)
/// - `youtube.com/watch?v=<id>`
/// - `youtube.com/embed/<id>`
///
/// with an exactly 11-character id of `[A-Za-z0-9_-]`. A leading `www.` on
/// the host is ignored. Everything else is rejected before it can reach
/// the gateway.
pub fn is_youtube_video_url(candidate: &str) -> bool {
    let Ok(parsed) = Url::parse(candidate) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let host = host.strip_prefix("www.").unwrap_or(host);

    match host {
        "youtu.be" => parsed
            .path()
            .strip_prefix('/')
            .is_some_and(is_video_id),
        "youtube.com" => {
            if parsed.path() == "/watch" {
                parsed
                    .query_pairs()
                    .any(|(key, value)| key == "v" && is_video_id(&value))
            } else if let Some(id) = parsed.path().strip_prefix("/embed/") {
                is_video_id(id)
            } else {
                false
            }
        }
        _ => false,
    }
}

fn is_video_id(candidate: &str) -> bool {
    candidate.len() == 11
        && candidate
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}
