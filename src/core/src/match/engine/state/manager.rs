use crate::r#match::MatchState;

/// What a meta request (pause key, menu button, window blur) does to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAction {
    StartNewMatch,
    Resume,
    Pause,
    RestartMatch,
}

pub struct StateManager;

impl StateManager {
    /// The pause key toggles play, starts the first match and replays after full time.
    pub fn on_pause_pressed(current_state: MatchState) -> MetaAction {
        match current_state {
            MatchState::Intro => MetaAction::StartNewMatch,
            MatchState::Playing => MetaAction::Pause,
            MatchState::Paused => MetaAction::Resume,
            MatchState::FullTime => MetaAction::RestartMatch,
        }
    }

    pub fn get_next_state(current_state: MatchState, action: MetaAction) -> MatchState {
        match (current_state, action) {
            (_, MetaAction::StartNewMatch) => MatchState::Playing,
            (_, MetaAction::RestartMatch) => MatchState::Playing,
            (MatchState::Paused, MetaAction::Resume) => MatchState::Playing,
            (MatchState::Playing, MetaAction::Pause) => MatchState::Paused,
            (state, _) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_key_cycle() {
        let mut state = MatchState::Intro;
        let mut visited = Vec::new();

        for _ in 0..3 {
            state = StateManager::get_next_state(state, StateManager::on_pause_pressed(state));
            visited.push(state);
        }

        assert_eq!(
            visited,
            vec![MatchState::Playing, MatchState::Paused, MatchState::Playing]
        );
    }

    #[test]
    fn test_pause_key_after_full_time_restarts() {
        let action = StateManager::on_pause_pressed(MatchState::FullTime);

        assert_eq!(action, MetaAction::RestartMatch);
        assert_eq!(
            StateManager::get_next_state(MatchState::FullTime, action),
            MatchState::Playing
        );
    }

    #[test]
    fn test_resume_is_ignored_at_full_time() {
        assert_eq!(
            StateManager::get_next_state(MatchState::FullTime, MetaAction::Resume),
            MatchState::FullTime
        );
        assert_eq!(
            StateManager::get_next_state(MatchState::Intro, MetaAction::Resume),
            MatchState::Intro
        );
    }

    #[test]
    fn test_pause_only_from_playing() {
        assert_eq!(
            StateManager::get_next_state(MatchState::Intro, MetaAction::Pause),
            MatchState::Intro
        );
        assert_eq!(
            StateManager::get_next_state(MatchState::FullTime, MetaAction::Pause),
            MatchState::FullTime
        );
    }
}
