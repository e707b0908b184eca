use std::fmt;

use miru_types::model::{
    Anime, Character, Credentials, Episode, FavoriteItem, Genre, ProgressForm, RegisterForm,
    Token, User, UserAnimeProgress,
};
use reqwest::Method;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use wasm_bindgen::UnwrapThrowExt;
use web_sys::UrlSearchParams;

use crate::utils::{api_host, local_storage};

#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response.
    Transport(reqwest::Error),
    /// The response body was not the expected shape.
    Decode(reqwest::Error),
    /// Non-2xx answer; `detail` is the backend's message when it sent one.
    Status { status: u16, detail: String },
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "network error: {err}"),
            ApiError::Decode(err) => write!(f, "unexpected response: {err}"),
            ApiError::Status { detail, .. } => f.write_str(detail),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Error text for a non-2xx response: the backend's `detail` field when the
/// body carries one, a plain status line otherwise.
fn error_detail(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|body| body.detail)
        .unwrap_or_else(|_| format!("HTTP {status}"))
}

fn request(method: Method, path: &str) -> reqwest::RequestBuilder {
    let token = local_storage().get("token").unwrap_throw();

    let client = reqwest::Client::new();
    let mut req = client.request(method, format!("{}{}", api_host(), path));
    if let Some(token) = token.filter(|token| !token.is_empty()) {
        req = req.header("Authorization", format!("Bearer {token}"));
    }
    req
}

async fn send<T: DeserializeOwned>(req: reqwest::RequestBuilder) -> Result<T, ApiError> {
    let res = req.send().await.map_err(ApiError::Transport)?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            detail: error_detail(status.as_u16(), &body),
        });
    }

    res.json::<T>().await.map_err(ApiError::Decode)
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send(request(Method::GET, path)).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    send(request(Method::POST, path).json(body)).await
}

pub async fn login(credentials: Credentials) -> Result<Token, ApiError> {
    post_json("/auth/login", &credentials).await
}

pub async fn register(form: &RegisterForm) -> Result<User, ApiError> {
    post_json("/auth/register", form).await
}

pub async fn fetch_me() -> Result<User, ApiError> {
    get_json("/auth/me/").await
}

pub async fn fetch_anime_list(
    genre: Option<String>,
    status: Option<String>,
    search: Option<String>,
) -> Result<Vec<Anime>, ApiError> {
    let params = UrlSearchParams::new().unwrap_throw();
    if let Some(genre) = genre {
        params.append("genre_name", &genre);
    }
    if let Some(status) = status {
        params.append("status", &status);
    }
    if let Some(search) = search {
        params.append("search", &search);
    }

    let query = String::from(params.to_string());
    if query.is_empty() {
        get_json("/anime").await
    } else {
        get_json(&format!("/anime?{query}")).await
    }
}

pub async fn fetch_anime(id: i64) -> Result<Anime, ApiError> {
    get_json(&format!("/anime/{id}")).await
}

pub async fn fetch_genres() -> Result<Vec<Genre>, ApiError> {
    get_json("/genres").await
}

pub async fn fetch_episodes(anime_id: i64) -> Result<Vec<Episode>, ApiError> {
    get_json(&format!("/episodes/anime/{anime_id}")).await
}

pub async fn fetch_progress(anime_id: i64, user_id: i64) -> Result<UserAnimeProgress, ApiError> {
    get_json(&format!("/anime/{anime_id}/progress/{user_id}")).await
}

pub async fn submit_progress(
    anime_id: i64,
    form: &ProgressForm,
) -> Result<UserAnimeProgress, ApiError> {
    post_json(&format!("/anime/{anime_id}/progress"), form).await
}

pub async fn fetch_character(id: i64) -> Result<Character, ApiError> {
    get_json(&format!("/characters/{id}")).await
}

pub async fn search_characters(search: String) -> Result<Vec<Character>, ApiError> {
    let params = UrlSearchParams::new().unwrap_throw();
    params.append("search", &search);

    get_json(&format!("/characters?{}", String::from(params.to_string()))).await
}

pub async fn fetch_user(id: i64) -> Result<User, ApiError> {
    get_json(&format!("/users/{id}")).await
}

pub async fn fetch_favorites(user_id: i64) -> Result<Vec<FavoriteItem>, ApiError> {
    get_json(&format!("/users/{user_id}/favorites")).await
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_detail_prefers_backend_message() {
        let detail = error_detail(400, r#"{"detail": "Email already registered"}"#);
        assert_eq!(detail, "Email already registered");
    }

    #[test]
    fn test_error_detail_falls_back_to_status_line() {
        assert_eq!(error_detail(502, "<html>bad gateway</html>"), "HTTP 502");
        assert_eq!(error_detail(500, ""), "HTTP 500");
    }

    #[test]
    fn test_status_error_displays_detail_verbatim() {
        let err = ApiError::Status {
            status: 400,
            detail: "Username already taken".to_string(),
        };
        assert_eq!(err.to_string(), "Username already taken");
        assert!(!err.is_not_found());

        let missing = ApiError::Status {
            status: 404,
            detail: "Progress not found".to_string(),
        };
        assert!(missing.is_not_found());
    }
}
