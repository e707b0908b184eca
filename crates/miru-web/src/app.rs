use std::rc::Rc;

use dominator::{Dom, clone, html, routing};
use futures_signals::map_ref;
use futures_signals::signal::SignalExt;

use crate::anime_detail::AnimeDetail;
use crate::anime_list::AnimeList;
use crate::character::CharacterPage;
use crate::common::{GuardOutcome, Navbar, Route, Spinner, guard, snackbar};
use crate::favorites::Favorites;
use crate::home::Home;
use crate::login::Login;
use crate::profile::Profile;
use crate::search::Search;
use crate::session::Session;
use crate::signup::Signup;

pub struct App {
    pub session: Rc<Session>,
}

impl App {
    pub fn new() -> Rc<Self> {
        Rc::new(App {
            session: Session::restore(),
        })
    }

    fn render_page(app: Rc<Self>, route: Route) -> Dom {
        match route {
            Route::Home => Home::render(Home::new(app.session.clone())),
            Route::Login => Login::render(Login::new(app.session.clone())),
            Route::Signup => Signup::render(Signup::new(app.session.clone())),
            Route::AnimeList => AnimeList::render(AnimeList::new()),
            Route::AnimeDetail(id) => AnimeDetail::render(AnimeDetail::new(id, app.session.clone())),
            Route::CharacterDetail(id) => CharacterPage::render(CharacterPage::new(id)),
            Route::Profile => Profile::render(Profile::new(app.session.clone())),
            Route::Favorites => Favorites::render(Favorites::new(app.session.clone())),
            Route::Search => Search::render(Search::new()),
            Route::NotFound => html!("div", {
                .class("not-found")
                .text("Page not found")
            }),
        }
    }

    pub fn render(app: Rc<Self>) -> Dom {
        // Re-render when the route changes or when the session phase changes
        // the guard's answer for it; a phase flip that leaves a public page
        // public does not tear the page down.
        let location = map_ref! {
            let route = Route::signal(),
            let phase = app.session.phase_signal() =>
            (*route, guard(*route, *phase))
        }
        .dedupe();

        html!("div", {
            .class("app")
            .children(&mut [
                Navbar::render(app.session.clone()),
            ])
            .child_signal(location.map(clone!(app => move |(route, outcome)| {
                match outcome {
                    GuardOutcome::Render => Some(Self::render_page(app.clone(), route)),
                    GuardOutcome::Wait => Some(Spinner::render(true)),
                    GuardOutcome::RedirectToLogin => {
                        routing::go_to_url(&Route::Login.url());
                        None
                    }
                }
            })))
            .children(&mut [
                snackbar::render(),
            ])
        })
    }
}
