use std::rc::Rc;

use dominator::{Dom, EventOptions, clone, html, with_node};
use futures_signals::signal::{Mutable, SignalExt};
use miru_types::fetch::FetchState;
use miru_types::model::{Anime, Character};
use web_sys::HtmlInputElement;

use crate::common::{AnimeCard, CharacterCard, Spinner, events};
use crate::query;
use crate::utils::Resource;

pub struct Search {
    keyword: Mutable<String>,
    // Nothing is fetched until the first submit.
    searched: Mutable<bool>,
    anime_results: Resource<Vec<Anime>>,
    character_results: Resource<Vec<Character>>,
}

impl Search {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            keyword: Mutable::new("".to_string()),
            searched: Mutable::new(false),
            anime_results: Resource::new(),
            character_results: Resource::new(),
        })
    }

    /// Two independent reads per submit; each section resolves on its own.
    pub fn search(page: Rc<Self>) {
        let keyword = page.keyword.get_cloned();
        if keyword.trim().is_empty() {
            page.searched.set_neq(false);
            return;
        }

        page.searched.set_neq(true);
        page.anime_results.load(query::fetch_anime_list(None, None, Some(keyword.clone())));
        page.character_results.load(query::search_characters(keyword));
    }

    fn render_anime_results(state: FetchState<Vec<Anime>>) -> Dom {
        match state {
            FetchState::Loading => Spinner::render(false),
            FetchState::Failed(message) => html!("p", {
                .class("error-message")
                .text(&message)
            }),
            FetchState::Ready(list) if list.is_empty() => html!("p", {
                .class("empty-message")
                .text("No anime found.")
            }),
            FetchState::Ready(list) => html!("div", {
                .class("card-grid")
                .children(list.iter().map(|anime| AnimeCard::from(anime).render()).collect::<Vec<_>>())
            }),
        }
    }

    fn render_character_results(state: FetchState<Vec<Character>>) -> Dom {
        match state {
            FetchState::Loading => Spinner::render(false),
            FetchState::Failed(message) => html!("p", {
                .class("error-message")
                .text(&message)
            }),
            FetchState::Ready(list) if list.is_empty() => html!("p", {
                .class("empty-message")
                .text("No characters found.")
            }),
            FetchState::Ready(list) => html!("div", {
                .class("card-grid")
                .children(list.iter().map(|character| CharacterCard::from(character).render()).collect::<Vec<_>>())
            }),
        }
    }

    pub fn render(page: Rc<Self>) -> Dom {
        html!("div", {
            .class("page")
            .children(&mut [
                html!("h1", {
                    .text("Search")
                }),
                html!("form", {
                    .class("search-form")
                    .event_with_options(&EventOptions::preventable(), clone!(page => move |e: events::KeyDown| {
                        if e.key() == "Enter" {
                            e.prevent_default();
                            Self::search(page.clone());
                        }
                    }))
                    .children(&mut [
                        html!("input" => HtmlInputElement, {
                            .attribute("type", "text")
                            .attribute("placeholder", "Search for anime or characters...")
                            .property_signal("value", page.keyword.signal_cloned())
                            .with_node!(input => {
                                .event(clone!(page => move |_: events::Input| {
                                    page.keyword.set_neq(input.value());
                                }))
                            })
                        }),
                        html!("button", {
                            .text("Search")
                            .event_with_options(&EventOptions::preventable(), clone!(page => move |e: events::Click| {
                                e.prevent_default();
                                Self::search(page.clone());
                            }))
                        }),
                    ])
                }),
            ])
            .child_signal(page.searched.signal().map(clone!(page => move |searched| {
                searched.then(|| html!("div", {
                    .children(&mut [
                        html!("h2", {
                            .text("Anime Results")
                        }),
                    ])
                    .child_signal(page.anime_results.signal_cloned().map(|state| Some(Self::render_anime_results(state))))
                    .children(&mut [
                        html!("h2", {
                            .text("Character Results")
                        }),
                    ])
                    .child_signal(page.character_results.signal_cloned().map(|state| Some(Self::render_character_results(state))))
                }))
            })))
        })
    }
}
