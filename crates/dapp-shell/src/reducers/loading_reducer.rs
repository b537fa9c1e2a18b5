use crate::actions::{Action, BootstrapAction, GlobalAction};
use crate::state::LoadingState;

/// Reducer for the loading indicator state
pub fn reduce(mut state: LoadingState, action: &Action) -> LoadingState {
    match action {
        Action::Bootstrap(BootstrapAction::Start) => {
            state.loading = true;
            state.frame = 0;
        }
        Action::Bootstrap(BootstrapAction::End) => {
            state.loading = false;
        }
        Action::Global(GlobalAction::Tick) if state.loading => {
            state.frame = state.frame.wrapping_add(1);
        }
        _ => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_resets_frame() {
        let state = LoadingState {
            loading: false,
            frame: 7,
        };
        let state = reduce(state, &Action::Bootstrap(BootstrapAction::Start));
        assert!(state.loading);
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_tick_advances_only_while_loading() {
        let tick = Action::Global(GlobalAction::Tick);

        let idle = reduce(LoadingState::default(), &tick);
        assert_eq!(idle.frame, 0);

        let state = reduce(LoadingState::default(), &Action::Bootstrap(BootstrapAction::Start));
        let state = reduce(reduce(state, &tick), &tick);
        assert_eq!(state.frame, 2);

        let state = reduce(state, &Action::Bootstrap(BootstrapAction::End));
        assert!(!state.loading);
        assert_eq!(reduce(state.clone(), &tick), state);
    }
}
