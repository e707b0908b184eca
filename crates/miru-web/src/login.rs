use std::rc::Rc;

use dominator::{Dom, EventOptions, clone, html, routing, with_node};
use futures_signals::signal::Mutable;
use miru_types::model::Credentials;
use web_sys::HtmlInputElement;

use crate::common::{Route, events, snackbar};
use crate::query;
use crate::session::Session;
use crate::utils::AsyncLoader;

pub struct Login {
    session: Rc<Session>,
    username: Mutable<String>,
    password: Mutable<String>,
    loader: AsyncLoader,
}

impl Login {
    pub fn new(session: Rc<Session>) -> Rc<Self> {
        Rc::new(Self {
            session,
            username: Mutable::new("".to_string()),
            password: Mutable::new("".to_string()),
            loader: AsyncLoader::new(),
        })
    }

    pub fn login(login: Rc<Self>) {
        let credentials = Credentials {
            username: login.username.get_cloned(),
            password: login.password.get_cloned(),
        };
        login.loader.load(clone!(login => async move {
            match query::login(credentials).await {
                Ok(token) => {
                    Session::login(login.session.clone(), token.access_token);
                    routing::go_to_url(&Route::Home.url());
                }
                Err(e) => {
                    snackbar::show(format!("Login failed: {}", e));
                }
            }
        }));
    }

    pub fn render(login: Rc<Self>) -> Dom {
        html!("div", {
            .class("auth-page")
            .children(&mut [
                html!("h1", {
                    .text("Login")
                }),
                html!("form", {
                    .event_with_options(&EventOptions::preventable(), |e: events::KeyDown| {
                        if e.key() == "Enter" {
                            e.prevent_default();
                        }
                    })
                    .children(&mut [
                        html!("input" => HtmlInputElement, {
                            .attribute("type", "text")
                            .attribute("placeholder", "Username")
                            .property_signal("value", login.username.signal_cloned())
                            .with_node!(input => {
                                .event(clone!(login => move |_: events::Input| {
                                    login.username.set(input.value());
                                }))
                            })
                        }),
                        html!("input" => HtmlInputElement, {
                            .attribute("type", "password")
                            .attribute("placeholder", "Password")
                            .property_signal("value", login.password.signal_cloned())
                            .with_node!(input => {
                                .event(clone!(login => move |_: events::Input| {
                                    login.password.set(input.value());
                                }))
                            })
                        }),
                        html!("button", {
                            .text("Login")
                            .event_with_options(&EventOptions::preventable(), clone!(login => move |e: events::Click| {
                                e.prevent_default();
                                Self::login(login.clone());
                            }))
                        }),
                    ])
                }),
                html!("p", {
                    .children(&mut [
                        html!("span", {
                            .text("Need an account? ")
                        }),
                        dominator::link!(Route::Signup.url(), {
                            .text("Sign up")
                        }),
                    ])
                }),
            ])
        })
    }
}
