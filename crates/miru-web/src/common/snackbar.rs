use std::cell::Cell;
use std::rc::Rc;

use dominator::{Dom, clone, html, svg};
use futures_signals::signal::{Mutable, SignalExt};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::common::events;

const DISMISS_AFTER_MS: u32 = 5_000;

thread_local! {
    static SNACKBAR: std::cell::RefCell<Rc<Snackbar>> = std::cell::RefCell::new(Snackbar::new());
}

pub fn show(message: String) {
    SNACKBAR.with(|s| Snackbar::show(s.borrow().clone(), message));
}

pub fn render() -> Dom {
    SNACKBAR.with(|s| Snackbar::render(s.borrow().clone()))
}

pub struct Snackbar {
    message: Mutable<Option<String>>,
    epoch: Cell<usize>,
}

impl Snackbar {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            message: Mutable::new(None),
            epoch: Cell::new(0),
        })
    }

    pub fn show(snackbar: Rc<Self>, message: String) {
        let epoch = snackbar.epoch.get() + 1;
        snackbar.epoch.set(epoch);
        snackbar.message.set(Some(message));

        spawn_local(clone!(snackbar => async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            // A newer message restarts the clock.
            if snackbar.epoch.get() == epoch {
                snackbar.message.set(None);
            }
        }));
    }

    pub fn render(snackbar: Rc<Self>) -> Dom {
        html!("div", {
            .class("snackbar")
            .visible_signal(snackbar.message.signal_cloned().map(|message| message.is_some()))
            .children(&mut [
                html!("div", {
                    .child_signal(snackbar.message.signal_cloned().map(|message| message.map(|msg| html!("span", {
                            .text(msg.as_str())
                        })
                    )))
                    .children(&mut [
                        html!("button", {
                            .event(clone!(snackbar => move |_: events::Click| snackbar.message.set(None)))
                            .children(&mut [
                                svg!("svg", {
                                    .attribute("xmlns", "http://www.w3.org/2000/svg")
                                    .attribute("viewBox", "0 0 24 24")
                                    .attribute("stroke", "currentColor")
                                    .attribute("fill", "none")
                                    .class("icon")
                                    .children(&mut [
                                        svg!("path", {
                                            .attribute("stroke-linecap", "round")
                                            .attribute("stroke-linejoin", "round")
                                            .attribute("stroke-width", "2")
                                            .attribute("d", "M6 18L18 6M6 6l12 12")
                                        }),
                                    ])
                                })
                            ])
                        })
                    ])
                })
            ])
        })
    }
}
