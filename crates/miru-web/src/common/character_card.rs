use dominator::{Dom, html, link};
use miru_types::model::{Character, FavoriteCharacter};

use crate::common::Route;

const PLACEHOLDER_PORTRAIT: &str = "https://via.placeholder.com/300x450.png?text=No+Image";

#[derive(Debug, Clone)]
pub struct CharacterCard {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

impl From<&Character> for CharacterCard {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            image_url: character.image_url.clone(),
            description: character.description.clone(),
        }
    }
}

impl From<&FavoriteCharacter> for CharacterCard {
    fn from(character: &FavoriteCharacter) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            image_url: character.image_url.clone(),
            description: None,
        }
    }
}

impl CharacterCard {
    pub fn render(&self) -> Dom {
        link!(Route::CharacterDetail(self.id).url(), {
            .class("card")
            .children(&mut [
                html!("img", {
                    .attr("src", self.image_url.as_deref().unwrap_or(PLACEHOLDER_PORTRAIT))
                    .attr("loading", "lazy")
                    .attr("alt", &self.name)
                }),
                html!("div", {
                    .class("card-body")
                    .children(&mut [
                        html!("h3", {
                            .text(&self.name)
                        }),
                    ])
                    .apply_if(self.description.is_some(), |dom| {
                        dom.child(html!("p", {
                            .class("card-description")
                            .text(self.description.as_deref().unwrap_or_default())
                        }))
                    })
                })
            ])
        })
    }
}
