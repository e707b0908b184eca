use std::rc::Rc;

use dominator::{Dom, clone, html, link, routing};
use futures_signals::signal::SignalExt;

use crate::common::{Route, events};
use crate::session::Session;

pub struct Navbar {}

impl Navbar {
    fn render_signed_in(session: Rc<Session>, username: &str) -> Dom {
        html!("div", {
            .class("nav-links")
            .children(&mut [
                link!(Route::Profile.url(), {
                    .text(&format!("{username}'s Profile"))
                }),
                link!(Route::Favorites.url(), {
                    .text("Favorites")
                }),
                link!(Route::Search.url(), {
                    .text("Search")
                }),
                html!("button", {
                    .class("logout-button")
                    .text("Logout")
                    .event(clone!(session => move |_: events::Click| {
                        session.logout();
                        routing::go_to_url(&Route::Home.url());
                    }))
                }),
            ])
        })
    }

    fn render_signed_out() -> Dom {
        html!("div", {
            .class("nav-links")
            .children(&mut [
                link!(Route::Login.url(), {
                    .text("Login")
                }),
                link!(Route::Signup.url(), {
                    .text("Signup")
                }),
            ])
        })
    }

    pub fn render(session: Rc<Session>) -> Dom {
        html!("nav", {
            .class("navbar")
            .children(&mut [
                link!(Route::Home.url(), {
                    .class("brand")
                    .text("Miru")
                }),
                link!(Route::AnimeList.url(), {
                    .text("Anime List")
                }),
            ])
            .child_signal(session.user_signal().map(clone!(session => move |user| {
                Some(match user {
                    Some(user) => Self::render_signed_in(session.clone(), &user.username),
                    None => Self::render_signed_out(),
                })
            })))
        })
    }
}
