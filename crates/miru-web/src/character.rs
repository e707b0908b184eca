use std::rc::Rc;

use dominator::{Dom, html};
use futures_signals::signal::SignalExt;
use miru_types::fetch::FetchState;
use miru_types::model::Character;

use crate::common::Spinner;
use crate::query;
use crate::utils::Resource;

const PLACEHOLDER_PORTRAIT: &str = "https://via.placeholder.com/300x450.png?text=No+Image";

pub struct CharacterPage {
    character_id: i64,
    character: Resource<Character>,
}

impl CharacterPage {
    pub fn new(character_id: i64) -> Rc<Self> {
        Rc::new(Self {
            character_id,
            character: Resource::new(),
        })
    }

    fn render_detail(character: &Character) -> Dom {
        html!("div", {
            .class("character-detail")
            .children(&mut [
                html!("img", {
                    .class("detail-cover")
                    .attr("src", character.image_url.as_deref().unwrap_or(PLACEHOLDER_PORTRAIT))
                    .attr("alt", &character.name)
                }),
                html!("div", {
                    .class("detail-body")
                    .children(&mut [
                        html!("h1", {
                            .text(&character.name)
                        }),
                    ])
                    .apply_if(character.description.is_some(), |dom| {
                        dom.child(html!("p", {
                            .text(character.description.as_deref().unwrap_or_default())
                        }))
                    })
                }),
            ])
        })
    }

    pub fn render(page: Rc<Self>) -> Dom {
        page.character.load(query::fetch_character(page.character_id));

        html!("div", {
            .class("page")
            .child_signal(page.character.signal_cloned().map(|state| Some(match state {
                FetchState::Loading => Spinner::render(false),
                FetchState::Failed(message) => html!("p", {
                    .class("error-message")
                    .text(&message)
                }),
                FetchState::Ready(character) => Self::render_detail(&character),
            })))
        })
    }
}
