use dominator::{Dom, html, link};
use miru_types::model::{Anime, FavoriteAnime};

use crate::common::Route;

const PLACEHOLDER_COVER: &str = "https://via.placeholder.com/300x450.png?text=No+Image";

/// One anime rendered as a grid card. Pure presentation; whoever fetched the
/// record decides which fields it carries.
#[derive(Debug, Clone)]
pub struct AnimeCard {
    pub id: i64,
    pub title: String,
    pub cover_url: Option<String>,
    pub status: Option<String>,
    pub episodes_total: Option<i64>,
}

impl From<&Anime> for AnimeCard {
    fn from(anime: &Anime) -> Self {
        Self {
            id: anime.id,
            title: anime.title.clone(),
            cover_url: anime.cover_url.clone(),
            status: anime.status.clone(),
            episodes_total: anime.episodes_total,
        }
    }
}

impl From<&FavoriteAnime> for AnimeCard {
    fn from(anime: &FavoriteAnime) -> Self {
        Self {
            id: anime.id,
            title: anime.title.clone(),
            cover_url: anime.cover_url.clone(),
            status: anime.status.clone(),
            episodes_total: anime.episodes_total,
        }
    }
}

impl AnimeCard {
    pub fn render(&self) -> Dom {
        link!(Route::AnimeDetail(self.id).url(), {
            .class("card")
            .children(&mut [
                html!("img", {
                    .attr("src", self.cover_url.as_deref().unwrap_or(PLACEHOLDER_COVER))
                    .attr("loading", "lazy")
                    .attr("alt", &self.title)
                }),
                html!("div", {
                    .class("card-body")
                    .children(&mut [
                        html!("h3", {
                            .text(&self.title)
                        }),
                        html!("p", {
                            .text(&format!("Status: {}", self.status.as_deref().unwrap_or("N/A")))
                        }),
                        html!("p", {
                            .text(&format!(
                                "Episodes: {}",
                                self.episodes_total.map(|n| n.to_string()).unwrap_or_else(|| "N/A".to_string())
                            ))
                        }),
                    ])
                })
            ])
        })
    }
}
