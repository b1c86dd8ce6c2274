use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;
use uuid::Uuid;

use crate::application::ports::{RepositoryError, SessionRepository};
use crate::domain::{SessionId, UserSession};

pub const SESSION_COOKIE: &str = "session_id";

const SESSION_COOKIE_MAX_AGE_DAYS: i64 = 30;

/// Return the caller's session id, creating and persisting a fresh one
/// (and queueing its Set-Cookie on the jar) when the request carries
/// none. The id itself is treated as opaque everywhere downstream.
pub(crate) async fn resolve_session(
    jar: CookieJar,
    sessions: &dyn SessionRepository,
) -> Result<(SessionId, CookieJar), RepositoryError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let session_id = SessionId::new(cookie.value());
        return Ok((session_id, jar));
    }

    let session_id = SessionId::new(Uuid::new_v4().to_string());
    sessions.insert(&UserSession::new(session_id.clone())).await?;

    tracing::debug!(session_id = %session_id, "Issued new session");

    let cookie = Cookie::build((SESSION_COOKIE, session_id.as_str().to_string()))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(SESSION_COOKIE_MAX_AGE_DAYS))
        .build();

    Ok((session_id, jar.add(cookie)))
}
