use std::rc::Rc;

use dominator::{Dom, clone, html, with_node};
use futures_signals::map_ref;
use futures_signals::signal::{Mutable, SignalExt};
use miru_types::fetch::FetchState;
use miru_types::model::{Anime, Genre};
use web_sys::{HtmlInputElement, HtmlSelectElement};

use crate::common::{AnimeCard, Spinner, events};
use crate::query;
use crate::utils::{AsyncLoader, Resource};

const STATUS_OPTIONS: [&str; 3] = ["Airing", "Finished Airing", "Not yet aired"];

pub struct AnimeList {
    genres: Mutable<Vec<Genre>>,
    selected_genre: Mutable<String>,
    selected_status: Mutable<String>,
    keyword: Mutable<String>,
    anime: Resource<Vec<Anime>>,
    genres_loader: AsyncLoader,
}

impl AnimeList {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            genres: Mutable::new(Vec::new()),
            selected_genre: Mutable::new("".to_string()),
            selected_status: Mutable::new("".to_string()),
            keyword: Mutable::new("".to_string()),
            anime: Resource::new(),
            genres_loader: AsyncLoader::new(),
        })
    }

    // The genre dropdown is decoration around the list; a failure here
    // leaves the filter empty without touching the page state.
    fn fetch_genres(page: Rc<Self>) {
        page.genres_loader.load(clone!(page => async move {
            match query::fetch_genres().await {
                Ok(genres) => {
                    page.genres.set(genres);
                }
                Err(e) => {
                    warn!("failed to fetch genres: {}", e);
                }
            }
        }));
    }

    /// Current filter set, the page's fetch locator.
    fn filters_signal(
        page: &Rc<Self>,
    ) -> impl futures_signals::signal::Signal<Item = (String, String, String)> + use<> {
        map_ref! {
            let genre = page.selected_genre.signal_cloned(),
            let status = page.selected_status.signal_cloned(),
            let keyword = page.keyword.signal_cloned() =>
            (genre.clone(), status.clone(), keyword.clone())
        }
    }

    fn fetch_anime(page: &Rc<Self>, genre: String, status: String, keyword: String) {
        let not_empty = |value: String| (!value.is_empty()).then_some(value);
        page.anime.load(query::fetch_anime_list(
            not_empty(genre),
            not_empty(status),
            not_empty(keyword),
        ));
    }

    fn render_filters(page: Rc<Self>) -> Dom {
        html!("div", {
            .class("filters")
            .child_signal(page.genres.signal_cloned().map(clone!(page => move |genres| {
                let mut options = vec![
                    html!("option", {
                        .attribute("value", "")
                        .text("All Genres")
                    }),
                ];
                options.extend(genres.iter().map(|genre| html!("option", {
                    .attribute("value", &genre.name)
                    .text(&genre.name)
                })));

                Some(html!("select" => HtmlSelectElement, {
                    .children(options)
                    .property_signal("value", page.selected_genre.signal_cloned())
                    .with_node!(select => {
                        .event(clone!(page => move |_: events::Change| {
                            page.selected_genre.set_neq(select.value());
                        }))
                    })
                }))
            })))
            .children(&mut [
                html!("select" => HtmlSelectElement, {
                    .children({
                        let mut options = vec![
                            html!("option", {
                                .attribute("value", "")
                                .text("All Statuses")
                            }),
                        ];
                        options.extend(STATUS_OPTIONS.iter().map(|status| html!("option", {
                            .attribute("value", status)
                            .text(status)
                        })));
                        options
                    })
                    .property_signal("value", page.selected_status.signal_cloned())
                    .with_node!(select => {
                        .event(clone!(page => move |_: events::Change| {
                            page.selected_status.set_neq(select.value());
                        }))
                    })
                }),
                html!("input" => HtmlInputElement, {
                    .attribute("type", "text")
                    .attribute("placeholder", "Search by title...")
                    .property_signal("value", page.keyword.signal_cloned())
                    .with_node!(input => {
                        .event(clone!(page => move |_: events::Input| {
                            page.keyword.set_neq(input.value());
                        }))
                    })
                }),
            ])
        })
    }

    fn render_main(page: Rc<Self>) -> Dom {
        html!("div", {
            .child_signal(page.anime.signal_cloned().map(|state| Some(match state {
                FetchState::Loading => Spinner::render(false),
                FetchState::Failed(message) => html!("p", {
                    .class("error-message")
                    .text(&message)
                }),
                FetchState::Ready(list) if list.is_empty() => html!("p", {
                    .class("empty-message")
                    .text("No anime found matching your criteria.")
                }),
                FetchState::Ready(list) => html!("div", {
                    .class("card-grid")
                    .children(list.iter().map(|anime| AnimeCard::from(anime).render()).collect::<Vec<_>>())
                }),
            })))
        })
    }

    pub fn render(page: Rc<Self>) -> Dom {
        Self::fetch_genres(page.clone());

        html!("div", {
            .class("page")
            // One read per distinct filter set; fires once on mount, then
            // only when a filter actually changes.
            .future(Self::filters_signal(&page).dedupe_cloned().for_each(clone!(page => move |(genre, status, keyword)| {
                Self::fetch_anime(&page, genre, status, keyword);
                async {}
            })))
            .children(&mut [
                html!("h1", {
                    .text("Anime List")
                }),
                Self::render_filters(page.clone()),
                Self::render_main(page),
            ])
        })
    }
}
