// src/presentation/http/cookies.rs
//! Cookie plumbing: the session cookie and the `viewedArticles` cookie
//! that de-duplicates hit counting per viewer for a day.

pub const SESSION_COOKIE: &str = "sid";
pub const VIEWED_ARTICLES_COOKIE: &str = "viewedArticles";

const VIEWED_ARTICLES_MAX_AGE: u32 = 86_400;

pub fn session_cookie(session_id: &str) -> String {
    format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax")
}

pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Decodes a `viewedArticles` value of the form `[3]_[17]_[42]` into the
/// article ids it carries. Malformed segments are skipped rather than
/// failing the request.
pub fn decode_viewed_articles(value: &str) -> Vec<i64> {
    value
        .split('_')
        .filter_map(|segment| {
            segment
                .strip_prefix('[')
                .and_then(|s| s.strip_suffix(']'))
                .and_then(|s| s.parse().ok())
        })
        .collect()
}

fn encode_viewed_articles(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| format!("[{id}]"))
        .collect::<Vec<_>>()
        .join("_")
}

/// Set-Cookie value recording `article_id` as viewed, on top of whatever
/// the previous cookie already held. Scoped to the article pages and
/// expiring after 24 hours, so the hit counter moves at most once per
/// viewer per day.
pub fn viewed_articles_cookie(previous: &[i64], article_id: i64) -> String {
    let mut ids = previous.to_vec();
    if !ids.contains(&article_id) {
        ids.push(article_id);
    }
    format!(
        "{VIEWED_ARTICLES_COOKIE}={}; Path=/article; Max-Age={VIEWED_ARTICLES_MAX_AGE}",
        encode_viewed_articles(&ids)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_bracketed_ids() {
        assert_eq!(decode_viewed_articles("[3]_[17]_[42]"), vec![3, 17, 42]);
        assert_eq!(decode_viewed_articles("[5]"), vec![5]);
    }

    #[test]
    fn decode_skips_malformed_segments() {
        assert_eq!(decode_viewed_articles("[3]_junk_[x]_[7]"), vec![3, 7]);
        assert!(decode_viewed_articles("").is_empty());
    }

    #[test]
    fn viewed_cookie_appends_without_duplicating() {
        let cookie = viewed_articles_cookie(&[3], 17);
        assert!(cookie.starts_with("viewedArticles=[3]_[17];"));
        assert!(cookie.contains("Path=/article"));
        assert!(cookie.contains("Max-Age=86400"));

        let unchanged = viewed_articles_cookie(&[3, 17], 17);
        assert!(unchanged.starts_with("viewedArticles=[3]_[17];"));
    }

    #[test]
    fn session_cookie_round_trip() {
        let cookie = session_cookie("abc-123");
        assert!(cookie.starts_with("sid=abc-123;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(clear_session_cookie().contains("Max-Age=0"));
    }
}
