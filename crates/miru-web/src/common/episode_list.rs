use dominator::{Dom, html};
use futures_signals::signal::SignalExt;
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use miru_types::model::Episode;

pub struct EpisodeList {}

impl EpisodeList {
    fn render_row(episode: &Episode) -> Dom {
        let label = format!(
            "Ep. {}: {}",
            episode.episode_number,
            episode.title.as_deref().unwrap_or("Untitled")
        );

        let mut meta = Vec::new();
        if let Some(minutes) = episode.duration_minutes {
            meta.push(format!("{minutes} min"));
        }
        if let Some(air_date) = episode.air_date {
            meta.push(air_date.format("%b %e, %Y").to_string());
        }

        html!("li", {
            .class("episode-row")
            .children(&mut [
                html!("span", {
                    .text(&label)
                }),
                html!("span", {
                    .class("episode-meta")
                    .text(&meta.join(" - "))
                }),
            ])
        })
    }

    pub fn render(episodes: &MutableVec<Episode>) -> Dom {
        html!("div", {
            .class("episode-list")
            .children(&mut [
                html!("h3", {
                    .class("header")
                    .text("Episodes")
                }),
                html!("p", {
                    .text("No episodes available yet.")
                    .visible_signal(episodes.signal_vec_cloned().len().map(|len| len == 0))
                }),
                html!("ul", {
                    .children_signal_vec(episodes.signal_vec_cloned().map(|episode| Self::render_row(&episode)))
                }),
            ])
        })
    }
}
