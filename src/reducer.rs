//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, EMPTY_QUERY_MESSAGE};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Query actions =====
        Action::QueryChange(query) => {
            if state.query == query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        // ===== Lookup actions =====
        Action::LookupSubmit => {
            let id = state.trimmed_query().to_string();
            if id.is_empty() {
                state.lookup = DataResource::Failed(EMPTY_QUERY_MESSAGE.to_string());
                return DispatchResult::changed();
            }

            state.lookup = DataResource::Loading;
            DispatchResult::changed_with(Effect::FetchRecord { id })
        }

        Action::LookupDidLoad(record) => {
            state.lookup = DataResource::Loaded(record);
            DispatchResult::changed()
        }

        Action::LookupDidError(message) => {
            state.lookup = DataResource::Failed(message);
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{WeatherPayload, WeatherRecord};

    fn record() -> WeatherRecord {
        WeatherRecord {
            id: "sample-weather-123".into(),
            date: "2024-01-05".into(),
            location: "London".into(),
            notes: String::new(),
            weather_data: WeatherPayload::default(),
            created_at: "2024-01-05T00:00:00Z".into(),
        }
    }

    #[test]
    fn test_query_change_is_verbatim() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::QueryChange("  id 1 ".into()));

        assert!(result.changed);
        assert_eq!(state.query, "  id 1 ");
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_submit_blank_query_sets_validation_error() {
        for query in ["", " ", "\t\n  "] {
            let mut state = AppState::new(query);

            let result = reducer(&mut state, Action::LookupSubmit);

            assert!(result.changed);
            assert!(result.effects.is_empty(), "no fetch for {query:?}");
            assert_eq!(state.error(), Some(EMPTY_QUERY_MESSAGE));
            assert!(!state.is_loading());
        }
    }

    #[test]
    fn test_submit_clears_previous_result_and_fetches_trimmed_id() {
        let mut state = AppState {
            query: "  abc-1  ".into(),
            lookup: DataResource::Loaded(record()),
        };

        let result = reducer(&mut state, Action::LookupSubmit);

        assert!(state.is_loading());
        assert!(state.record().is_none());
        assert!(state.error().is_none());
        assert_eq!(result.effects.len(), 1);
        assert_eq!(
            result.effects[0],
            Effect::FetchRecord {
                id: "abc-1".into()
            }
        );
    }

    #[test]
    fn test_submit_clears_previous_error() {
        let mut state = AppState {
            query: "abc".into(),
            lookup: DataResource::Failed("not found".into()),
        };

        reducer(&mut state, Action::LookupSubmit);

        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_completion_lowers_loading() {
        let mut state = AppState::new("abc");
        reducer(&mut state, Action::LookupSubmit);

        reducer(&mut state, Action::LookupDidLoad(record()));
        assert!(!state.is_loading());
        assert_eq!(state.record(), Some(&record()));

        reducer(&mut state, Action::LookupSubmit);
        reducer(&mut state, Action::LookupDidError("not found".into()));
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("not found"));
        assert!(state.record().is_none());
    }
}
