//! Outcome of one read against the backend, as a page sees it.

/// Exactly one arm holds at any time. A re-issued read goes back to
/// `Loading` before it resolves, so stale data or errors never linger
/// next to a spinner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_exactly_one_arm_holds() {
        let loading = FetchState::<i64>::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());
        assert!(loading.error().is_none());

        let ready = FetchState::Ready(5);
        assert!(!ready.is_loading());
        assert_eq!(ready.data(), Some(&5));
        assert!(ready.error().is_none());

        let failed = FetchState::<i64>::Failed("User not found".to_string());
        assert!(!failed.is_loading());
        assert!(failed.data().is_none());
        assert_eq!(failed.error(), Some("User not found"));
    }

    #[test]
    fn test_new_read_resets_to_loading() {
        let mut state = FetchState::Failed("boom".to_string());
        state = FetchState::Loading;
        assert!(state.error().is_none());

        state = FetchState::Ready(1);
        state = FetchState::Loading;
        assert!(state.data().is_none());
    }
}
