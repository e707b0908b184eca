use std::fmt::Display;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::{
    future::{AbortHandle, abortable},
    Future,
};
use futures_signals::signal::{Mutable, Signal};
use miru_types::fetch::FetchState;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement, Storage, Window};

thread_local! {
    static WINDOW: Window = web_sys::window().unwrap_throw();
    static DOCUMENT: Document = WINDOW.with(|w| w.document().unwrap_throw());
    static BODY: HtmlElement = DOCUMENT.with(|d| d.body().unwrap_throw());
    static LOCAL_STORAGE: Storage = WINDOW.with(|w| w.local_storage().unwrap_throw().unwrap_throw());
    static API_HOST: std::cell::RefCell<String> = const { std::cell::RefCell::new(String::new()) };
}

pub struct AsyncState {
    id: usize,
    handle: AbortHandle,
}

impl AsyncState {
    fn new(handle: AbortHandle) -> Self {
        static ID: AtomicUsize = AtomicUsize::new(0);
        let id = ID.fetch_add(1, Ordering::SeqCst);

        Self { id, handle }
    }
}

/// Runs one future at a time; starting a new one aborts whatever is still
/// in flight, so the latest request is the only one that can write state.
pub struct AsyncLoader {
    loading: Mutable<Option<AsyncState>>,
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading: Mutable::new(None),
        }
    }

    fn replace(&self, value: Option<AsyncState>) {
        let mut loading = self.loading.lock_mut();
        if let Some(state) = loading.as_mut() {
            state.handle.abort();
        }
        *loading = value;
    }

    pub fn load<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let (fut, handle) = abortable(fut);

        let state = AsyncState::new(handle);
        let id = state.id;

        self.replace(Some(state));

        let loading = self.loading.clone();

        spawn_local(async move {
            if fut.await.is_ok() {
                let mut loading = loading.lock_mut();

                if let Some(current_id) = loading.as_ref().map(|x| x.id) {
                    if current_id == id {
                        *loading = None;
                    }
                }
            }
        });
    }

    pub fn is_loading(&self) -> impl Signal<Item = bool> + use<> {
        self.loading.signal_ref(|x| x.is_some())
    }
}

/// One read's loading/data/error triad, shared by every page instead of
/// being re-declared per view. `load` resets to `Loading` before the
/// request goes out; a superseded in-flight read is aborted, so the most
/// recently issued locator always wins.
pub struct Resource<T> {
    state: Mutable<FetchState<T>>,
    loader: AsyncLoader,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Resource<T> {
    pub fn new() -> Self {
        Self {
            state: Mutable::new(FetchState::Loading),
            loader: AsyncLoader::new(),
        }
    }

    pub fn load<F, E>(&self, fut: F)
    where
        T: 'static,
        E: Display,
        F: Future<Output = Result<T, E>> + 'static,
    {
        self.state.set(FetchState::Loading);

        let state = self.state.clone();
        self.loader.load(async move {
            match fut.await {
                Ok(data) => state.set(FetchState::Ready(data)),
                Err(err) => state.set(FetchState::Failed(err.to_string())),
            }
        });
    }

    pub fn signal_cloned(&self) -> impl Signal<Item = FetchState<T>> + use<T>
    where
        T: Clone,
    {
        self.state.signal_cloned()
    }
}

/// Resolve the backend host once at startup: an explicit `window.__MIRU_API__`
/// override wins, otherwise requests go to the document origin.
pub fn initialize_urls() {
    let api_host = match js_sys::eval("window.__MIRU_API__") {
        Ok(val) if !val.is_undefined() => val.as_string().unwrap_or_default(),
        _ => window().location().origin().unwrap_throw(),
    };

    API_HOST.with(|s| *s.borrow_mut() = api_host.trim_end_matches('/').to_string());
}

pub fn api_host() -> String {
    API_HOST.with(|v| v.borrow().clone())
}

pub fn apply_theme(theme: Option<String>) {
    match theme {
        Some(theme) if theme == "light" => {
            body().class_list().remove_1("dark").unwrap_throw();
        }
        Some(theme) if theme == "dark" => {
            body().class_list().add_1("dark").unwrap_throw();
        }
        None | Some(_) => {
            if window()
                .match_media("(prefers-color-scheme: dark)")
                .unwrap_throw()
                .map(|m| m.matches())
                .unwrap_or(false)
            {
                body().class_list().add_1("dark").unwrap_throw();
            } else {
                body().class_list().remove_1("dark").unwrap_throw();
            }
        }
    }
}

pub fn window() -> Window {
    WINDOW.with(|s| s.clone())
}

pub fn local_storage() -> Storage {
    LOCAL_STORAGE.with(|s| s.clone())
}

pub fn body() -> HtmlElement {
    BODY.with(|d| d.clone())
}
