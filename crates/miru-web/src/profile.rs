use std::rc::Rc;

use dominator::{Dom, html};
use futures_signals::signal::SignalExt;
use miru_types::fetch::FetchState;
use miru_types::model::User;

use crate::common::Spinner;
use crate::query;
use crate::session::Session;
use crate::utils::Resource;

pub struct Profile {
    session: Rc<Session>,
    profile: Resource<User>,
}

impl Profile {
    pub fn new(session: Rc<Session>) -> Rc<Self> {
        Rc::new(Self {
            session,
            profile: Resource::new(),
        })
    }

    fn render_profile(user: &User) -> Dom {
        html!("div", {
            .class("profile-card")
            .children(&mut [
                html!("h1", {
                    .text("User Profile")
                }),
                html!("p", {
                    .text(&format!("Username: {}", user.username))
                }),
                html!("p", {
                    .text(&format!("Email: {}", user.email))
                }),
                html!("p", {
                    .text(&format!("Member Since: {}", user.created_at.format("%B %e, %Y")))
                }),
            ])
        })
    }

    pub fn render(page: Rc<Self>) -> Dom {
        // The guard only renders this page once the session has resolved.
        if let Some(user) = page.session.user() {
            page.profile.load(query::fetch_user(user.id));
        }

        html!("div", {
            .class("page")
            .child_signal(page.profile.signal_cloned().map(|state| Some(match state {
                FetchState::Loading => Spinner::render(false),
                FetchState::Failed(message) => html!("p", {
                    .class("error-message")
                    .text(&message)
                }),
                FetchState::Ready(user) => Self::render_profile(&user),
            })))
        })
    }
}
