use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Studio {
    pub id: i64,
    pub name: String,
    pub country: Option<String>,
    pub founded_year: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Anime {
    pub id: i64,
    pub title: String,
    pub japanese_title: Option<String>,
    pub status: Option<String>,
    // "type" on the wire
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub synopsis: Option<String>,
    pub episodes_total: Option<i64>,
    pub release_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub cover_url: Option<String>,
    pub studio: Option<Studio>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Episode {
    pub id: i64,
    pub anime_id: i64,
    pub episode_number: i64,
    pub title: Option<String>,
    pub duration_minutes: Option<i64>,
    pub air_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Watch-list status of a user for one anime. Serialized as the backend's
/// human-readable strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum WatchStatus {
    #[serde(rename = "Plan to Watch")]
    PlanToWatch,
    Watching,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
    Dropped,
}

impl WatchStatus {
    pub const ALL: [WatchStatus; 5] = [
        WatchStatus::PlanToWatch,
        WatchStatus::Watching,
        WatchStatus::Completed,
        WatchStatus::OnHold,
        WatchStatus::Dropped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WatchStatus::PlanToWatch => "Plan to Watch",
            WatchStatus::Watching => "Watching",
            WatchStatus::Completed => "Completed",
            WatchStatus::OnHold => "On Hold",
            WatchStatus::Dropped => "Dropped",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl Default for WatchStatus {
    fn default() -> Self {
        Self::PlanToWatch
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserAnimeProgress {
    pub id: i64,
    pub user_id: i64,
    pub anime_id: i64,
    pub episodes_watched: i64,
    pub status: Option<WatchStatus>,
    pub score: Option<i64>,
    pub last_updated: NaiveDateTime,
}

/// Body of the progress write. The backend answers with the stored
/// `UserAnimeProgress`, id assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressForm {
    pub user_id: i64,
    pub anime_id: i64,
    pub episodes_watched: i64,
    pub status: WatchStatus,
    pub score: Option<i64>,
}

/// Reduced anime payload nested inside a favorite entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FavoriteAnime {
    pub id: i64,
    pub title: String,
    pub cover_url: Option<String>,
    pub status: Option<String>,
    pub episodes_total: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FavoriteCharacter {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
}

/// A bookmark of either an anime or a character; exactly one side is set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FavoriteItem {
    pub id: i64,
    pub user_id: i64,
    pub anime_id: Option<i64>,
    pub character_id: Option<i64>,
    pub created_at: NaiveDateTime,
    pub anime: Option<FavoriteAnime>,
    pub character: Option<FavoriteCharacter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_watch_status_names_round_trip() {
        for status in WatchStatus::ALL {
            assert_eq!(WatchStatus::parse(status.as_str()), Some(status));

            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(serde_json::from_str::<WatchStatus>(&json).unwrap(), status);
        }

        assert_eq!(WatchStatus::parse("Rewatching"), None);
    }

    #[test]
    fn test_progress_form_payload() {
        let form = ProgressForm {
            user_id: 7,
            anime_id: 42,
            episodes_watched: 5,
            status: WatchStatus::Watching,
            score: None,
        };

        let payload = serde_json::to_value(&form).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "user_id": 7,
                "anime_id": 42,
                "episodes_watched": 5,
                "status": "Watching",
                "score": null,
            })
        );
    }

    #[test]
    fn test_progress_response_carries_assigned_id() {
        let progress: UserAnimeProgress = serde_json::from_str(
            r#"{
                "id": 13,
                "user_id": 7,
                "anime_id": 42,
                "episodes_watched": 5,
                "status": "Watching",
                "score": null,
                "last_updated": "2024-03-01T10:30:00"
            }"#,
        )
        .unwrap();

        assert_eq!(progress.id, 13);
        assert_eq!(progress.episodes_watched, 5);
        assert_eq!(progress.status, Some(WatchStatus::Watching));
        assert_eq!(progress.score, None);
    }

    #[test]
    fn test_anime_optional_fields_may_be_absent() {
        let anime: Anime = serde_json::from_str(
            r#"{"id": 1, "title": "Cowboy Bebop", "japanese_title": null,
                "status": "Finished Airing", "type": "TV", "synopsis": null,
                "episodes_total": 26, "release_date": "1998-04-03",
                "end_date": null, "cover_url": null, "studio": null}"#,
        )
        .unwrap();

        assert_eq!(anime.kind.as_deref(), Some("TV"));
        assert!(anime.genres.is_empty());
        assert_eq!(anime.release_date.unwrap().to_string(), "1998-04-03");
    }

    #[test]
    fn test_empty_search_result_is_an_empty_list() {
        let list: Vec<Anime> = serde_json::from_str("[]").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_favorite_item_sides() {
        let favorite: FavoriteItem = serde_json::from_str(
            r#"{
                "id": 3,
                "user_id": 7,
                "anime_id": 42,
                "character_id": null,
                "created_at": "2024-02-10T08:00:00",
                "anime": {"id": 42, "title": "Naruto", "cover_url": null,
                          "status": "Airing", "episodes_total": 220},
                "character": null
            }"#,
        )
        .unwrap();

        assert!(favorite.anime.is_some());
        assert!(favorite.character.is_none());
    }
}
