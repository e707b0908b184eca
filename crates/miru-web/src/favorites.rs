use std::rc::Rc;

use dominator::{Dom, html};
use futures_signals::signal::SignalExt;
use miru_types::fetch::FetchState;
use miru_types::model::FavoriteItem;

use crate::common::{AnimeCard, CharacterCard, Spinner};
use crate::query;
use crate::session::Session;
use crate::utils::Resource;

pub struct Favorites {
    session: Rc<Session>,
    favorites: Resource<Vec<FavoriteItem>>,
}

impl Favorites {
    pub fn new(session: Rc<Session>) -> Rc<Self> {
        Rc::new(Self {
            session,
            favorites: Resource::new(),
        })
    }

    // A favorite is either an anime or a character; a row with neither side
    // populated is skipped.
    fn render_item(item: &FavoriteItem) -> Option<Dom> {
        if let Some(anime) = &item.anime {
            Some(AnimeCard::from(anime).render())
        } else {
            item.character
                .as_ref()
                .map(|character| CharacterCard::from(character).render())
        }
    }

    fn render_list(items: &[FavoriteItem]) -> Dom {
        if items.is_empty() {
            return html!("p", {
                .class("empty-message")
                .text("You haven't added any favorites yet.")
            });
        }

        html!("div", {
            .class("card-grid")
            .children(items.iter().filter_map(Self::render_item).collect::<Vec<_>>())
        })
    }

    pub fn render(page: Rc<Self>) -> Dom {
        if let Some(user) = page.session.user() {
            page.favorites.load(query::fetch_favorites(user.id));
        }

        html!("div", {
            .class("page")
            .children(&mut [
                html!("h1", {
                    .text("Your Favorites")
                }),
            ])
            .child_signal(page.favorites.signal_cloned().map(|state| Some(match state {
                FetchState::Loading => Spinner::render(false),
                FetchState::Failed(message) => html!("p", {
                    .class("error-message")
                    .text(&message)
                }),
                FetchState::Ready(items) => Self::render_list(&items),
            })))
        })
    }
}
