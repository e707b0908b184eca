use std::rc::Rc;

use dominator::{Dom, EventOptions, clone, html, routing, with_node};
use futures_signals::signal::{Mutable, SignalExt};
use miru_types::model::RegisterForm;
use web_sys::HtmlInputElement;

use crate::common::{Route, events, snackbar};
use crate::session::Session;
use crate::utils::AsyncLoader;

pub struct Signup {
    session: Rc<Session>,
    username: Mutable<String>,
    email: Mutable<String>,
    password: Mutable<String>,
    error: Mutable<Option<String>>,
    loader: AsyncLoader,
}

impl Signup {
    pub fn new(session: Rc<Session>) -> Rc<Self> {
        Rc::new(Self {
            session,
            username: Mutable::new("".to_string()),
            email: Mutable::new("".to_string()),
            password: Mutable::new("".to_string()),
            error: Mutable::new(None),
            loader: AsyncLoader::new(),
        })
    }

    /// Create the account, then hand the visitor to the login page; signing
    /// up does not sign in.
    pub fn register(signup: Rc<Self>) {
        let form = RegisterForm {
            username: signup.username.get_cloned(),
            email: signup.email.get_cloned(),
            password: signup.password.get_cloned(),
        };
        signup.loader.load(clone!(signup => async move {
            signup.error.set(None);
            match signup.session.register(form).await {
                Ok(user) => {
                    snackbar::show(format!("Account {} created, you can now log in", user.username));
                    routing::go_to_url(&Route::Login.url());
                }
                Err(e) => {
                    signup.error.set(Some(e.to_string()));
                }
            }
        }));
    }

    pub fn render(signup: Rc<Self>) -> Dom {
        html!("div", {
            .class("auth-page")
            .children(&mut [
                html!("h1", {
                    .text("Signup")
                }),
            ])
            .child_signal(signup.error.signal_cloned().map(|error| {
                error.map(|message| html!("p", {
                    .class("error-message")
                    .text(&message)
                }))
            }))
            .children(&mut [
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
                            .property_signal("value", signup.username.signal_cloned())
                            .with_node!(input => {
                                .event(clone!(signup => move |_: events::Input| {
                                    signup.username.set(input.value());
                                }))
                            })
                        }),
                        html!("input" => HtmlInputElement, {
                            .attribute("type", "email")
                            .attribute("placeholder", "Email")
                            .property_signal("value", signup.email.signal_cloned())
                            .with_node!(input => {
                                .event(clone!(signup => move |_: events::Input| {
                                    signup.email.set(input.value());
                                }))
                            })
                        }),
                        html!("input" => HtmlInputElement, {
                            .attribute("type", "password")
                            .attribute("placeholder", "Password")
                            .property_signal("value", signup.password.signal_cloned())
                            .with_node!(input => {
                                .event(clone!(signup => move |_: events::Input| {
                                    signup.password.set(input.value());
                                }))
                            })
                        }),
                        html!("button", {
                            .text("Create Account")
                            .event_with_options(&EventOptions::preventable(), clone!(signup => move |e: events::Click| {
                                e.prevent_default();
                                Self::register(signup.clone());
                            }))
                        }),
                    ])
                }),
            ])
        })
    }
}
