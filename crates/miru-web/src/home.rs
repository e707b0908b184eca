use std::rc::Rc;

use dominator::{Dom, html, link};
use futures_signals::signal::SignalExt;

use crate::common::Route;
use crate::session::Session;

pub struct Home {
    session: Rc<Session>,
}

impl Home {
    pub fn new(session: Rc<Session>) -> Rc<Self> {
        Rc::new(Self { session })
    }

    pub fn render(home: Rc<Self>) -> Dom {
        html!("div", {
            .class("hero")
            .children(&mut [
                html!("h1", {
                    .text("Welcome to Miru!")
                }),
                html!("p", {
                    .text("Your companion for tracking, discovering, and managing your anime collection.")
                }),
                html!("div", {
                    .class("hero-actions")
                    .children(&mut [
                        link!(Route::AnimeList.url(), {
                            .class("button")
                            .text("Explore Anime")
                        }),
                    ])
                    .child_signal(home.session.is_authenticated_signal().map(|authenticated| {
                        (!authenticated).then(|| link!(Route::Signup.url(), {
                            .class("button")
                            .text("Join Now")
                        }))
                    }))
                }),
            ])
        })
    }
}
