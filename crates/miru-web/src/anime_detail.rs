use std::rc::Rc;

use dominator::{Dom, clone, html, with_node};
use futures_signals::signal::{Mutable, SignalExt};
use futures_signals::signal_vec::MutableVec;
use miru_types::fetch::FetchState;
use miru_types::model::{Anime, Episode, ProgressForm, UserAnimeProgress, WatchStatus};
use web_sys::{HtmlInputElement, HtmlSelectElement};

use crate::common::{EpisodeList, Spinner, events, snackbar};
use crate::query;
use crate::session::Session;
use crate::utils::{AsyncLoader, Resource};

const PLACEHOLDER_COVER: &str = "https://via.placeholder.com/300x450.png?text=No+Image";

pub struct AnimeDetail {
    anime_id: i64,
    session: Rc<Session>,
    anime: Resource<Anime>,
    episodes: MutableVec<Episode>,
    progress: Mutable<Option<UserAnimeProgress>>,
    // Editable progress fields, kept apart from the stored record so a
    // failed write leaves whatever the user typed on screen.
    episodes_watched: Mutable<i64>,
    status: Mutable<WatchStatus>,
    score: Mutable<Option<i64>>,
    episodes_loader: AsyncLoader,
    progress_loader: AsyncLoader,
}

impl AnimeDetail {
    pub fn new(anime_id: i64, session: Rc<Session>) -> Rc<Self> {
        Rc::new(Self {
            anime_id,
            session,
            anime: Resource::new(),
            episodes: MutableVec::new(),
            progress: Mutable::new(None),
            episodes_watched: Mutable::new(0),
            status: Mutable::new(WatchStatus::default()),
            score: Mutable::new(None),
            episodes_loader: AsyncLoader::new(),
            progress_loader: AsyncLoader::new(),
        })
    }

    // The episode list is secondary content; its failure is logged and the
    // section just stays empty.
    fn fetch_episodes(page: Rc<Self>) {
        page.episodes_loader.load(clone!(page => async move {
            match query::fetch_episodes(page.anime_id).await {
                Ok(episodes) => {
                    page.episodes.lock_mut().replace_cloned(episodes);
                }
                Err(e) => {
                    warn!("failed to fetch episodes: {}", e);
                }
            }
        }));
    }

    /// A 404 means the viewer has never tracked this anime; the editor then
    /// starts from its zero-valued defaults and the first submit creates
    /// the record.
    fn fetch_progress(page: Rc<Self>, user_id: i64) {
        page.progress_loader.load(clone!(page => async move {
            match query::fetch_progress(page.anime_id, user_id).await {
                Ok(progress) => {
                    page.apply_progress(progress);
                }
                Err(e) if e.is_not_found() => {
                    debug!("no progress recorded for anime {} yet", page.anime_id);
                }
                Err(e) => {
                    warn!("failed to fetch progress: {}", e);
                }
            }
        }));
    }

    fn apply_progress(&self, progress: UserAnimeProgress) {
        self.episodes_watched.set_neq(progress.episodes_watched);
        self.status.set_neq(progress.status.unwrap_or_default());
        self.score.set_neq(progress.score);
        self.progress.set(Some(progress));
    }

    fn submit_progress(page: Rc<Self>) {
        let Some(user) = page.session.user() else {
            snackbar::show("Please log in to update your progress.".to_string());
            return;
        };

        let form = ProgressForm {
            user_id: user.id,
            anime_id: page.anime_id,
            episodes_watched: page.episodes_watched.get(),
            status: page.status.get(),
            score: page.score.get(),
        };

        page.progress_loader.load(clone!(page => async move {
            match query::submit_progress(page.anime_id, &form).await {
                Ok(progress) => {
                    page.apply_progress(progress);
                    snackbar::show("Progress updated".to_string());
                }
                Err(e) => {
                    snackbar::show(format!("Failed to update progress: {}", e));
                }
            }
        }));
    }

    fn render_progress_editor(page: Rc<Self>, anime: &Anime) -> Dom {
        let episodes_total = anime.episodes_total.unwrap_or(9999);

        html!("div", {
            .class("progress-editor")
            .children(&mut [
                html!("h3", {
                    .text("Your Progress")
                }),
                html!("label", {
                    .text("Episodes Watched:")
                }),
                html!("input" => HtmlInputElement, {
                    .attribute("type", "number")
                    .attribute("min", "0")
                    .attribute("max", &episodes_total.to_string())
                    .property_signal("value", page.episodes_watched.signal().map(|n| n.to_string()))
                    .with_node!(input => {
                        .event(clone!(page => move |_: events::Input| {
                            page.episodes_watched.set_neq(input.value().parse().unwrap_or(0));
                        }))
                    })
                }),
                html!("label", {
                    .text("Status:")
                }),
                html!("select" => HtmlSelectElement, {
                    .children(WatchStatus::ALL.iter().map(|status| html!("option", {
                        .attribute("value", status.as_str())
                        .text(status.as_str())
                    })).collect::<Vec<_>>())
                    .property_signal("value", page.status.signal().map(|status| status.as_str().to_string()))
                    .with_node!(select => {
                        .event(clone!(page => move |_: events::Change| {
                            page.status.set_neq(WatchStatus::parse(&select.value()).unwrap_or_default());
                        }))
                    })
                }),
                html!("label", {
                    .text("Score (1-10):")
                }),
                html!("input" => HtmlInputElement, {
                    .attribute("type", "number")
                    .attribute("min", "1")
                    .attribute("max", "10")
                    .property_signal("value", page.score.signal().map(|score| {
                        score.map(|s| s.to_string()).unwrap_or_default()
                    }))
                    .with_node!(input => {
                        .event(clone!(page => move |_: events::Input| {
                            page.score.set_neq(input.value().parse().ok());
                        }))
                    })
                }),
                html!("button", {
                    .text("Update Progress")
                    .property_signal("disabled", page.progress_loader.is_loading())
                    .event(clone!(page => move |_: events::Click| {
                        Self::submit_progress(page.clone());
                    }))
                }),
            ])
            .child_signal(page.progress.signal_cloned().map(|progress| {
                progress.map(|progress| html!("p", {
                    .class("progress-meta")
                    .text(&format!("Last updated: {}", progress.last_updated.format("%b %e, %Y %H:%M")))
                }))
            }))
        })
    }

    fn render_detail(page: Rc<Self>, anime: &Anime) -> Dom {
        let genres = anime
            .genres
            .iter()
            .map(|genre| genre.name.clone())
            .collect::<Vec<_>>()
            .join(", ");

        html!("div", {
            .class("anime-detail")
            .children(&mut [
                html!("img", {
                    .class("detail-cover")
                    .attr("src", anime.cover_url.as_deref().unwrap_or(PLACEHOLDER_COVER))
                    .attr("alt", &anime.title)
                }),
                html!("div", {
                    .class("detail-body")
                    .children(&mut [
                        html!("h1", {
                            .text(&anime.title)
                        }),
                    ])
                    .apply_if(anime.japanese_title.is_some(), |dom| {
                        dom.child(html!("h2", {
                            .class("japanese-title")
                            .text(anime.japanese_title.as_deref().unwrap_or_default())
                        }))
                    })
                    .children(&mut [
                        html!("p", {
                            .text(&format!("Status: {}", anime.status.as_deref().unwrap_or("N/A")))
                        }),
                        html!("p", {
                            .text(&format!("Type: {}", anime.kind.as_deref().unwrap_or("N/A")))
                        }),
                        html!("p", {
                            .text(&format!(
                                "Episodes: {}",
                                anime.episodes_total.map(|n| n.to_string()).unwrap_or_else(|| "N/A".to_string())
                            ))
                        }),
                        html!("p", {
                            .text(&format!(
                                "Release Date: {}",
                                anime.release_date.map(|d| d.format("%b %e, %Y").to_string()).unwrap_or_else(|| "N/A".to_string())
                            ))
                        }),
                        html!("p", {
                            .text(&format!(
                                "Studio: {}",
                                anime.studio.as_ref().map(|studio| studio.name.as_str()).unwrap_or("N/A")
                            ))
                        }),
                        html!("p", {
                            .text(&format!(
                                "Genres: {}",
                                if genres.is_empty() { "N/A" } else { genres.as_str() }
                            ))
                        }),
                        html!("p", {
                            .class("synopsis")
                            .text(anime.synopsis.as_deref().unwrap_or_default())
                        }),
                    ])
                    .child_signal(page.session.is_authenticated_signal().map(clone!(page, anime => move |authenticated| {
                        authenticated.then(|| Self::render_progress_editor(page.clone(), &anime))
                    })))
                }),
            ])
        })
    }

    pub fn render(page: Rc<Self>) -> Dom {
        // Three independent reads; each lands in its own slice of state, in
        // whatever order the responses come back.
        page.anime.load(query::fetch_anime(page.anime_id));
        Self::fetch_episodes(page.clone());

        html!("div", {
            .class("page")
            // The progress read is keyed on the viewer: it fires once the
            // session resolves (possibly after this page mounted) and again
            // only if the signed-in user actually changes.
            .future(page.session.user_signal().map(|user| user.map(|user| user.id)).dedupe().for_each(clone!(page => move |user_id| {
                if let Some(user_id) = user_id {
                    Self::fetch_progress(page.clone(), user_id);
                }
                async {}
            })))
            .child_signal(page.anime.signal_cloned().map(clone!(page => move |state| Some(match state {
                FetchState::Loading => Spinner::render(false),
                FetchState::Failed(message) => html!("p", {
                    .class("error-message")
                    .text(&message)
                }),
                FetchState::Ready(anime) => Self::render_detail(page.clone(), &anime),
            }))))
            .children(&mut [
                EpisodeList::render(&page.episodes),
            ])
        })
    }
}
