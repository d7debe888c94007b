use crate::r#match::constants::MAX_FRAME_DELTA;
use crate::r#match::events::EventCollection;
use crate::r#match::{
    CollisionResolver, EventDispatcher, GameTickContext, MatchContext, MatchEvent, MatchField,
    MatchFieldSize, MatchResult, MatchSnapshot, MatchState, MetaAction, PlayerInput, RandomSource,
    RestartHandler, StateManager, TeamSide, ThreadRandom,
};
use log::info;

pub struct FootballEngine;

impl FootballEngine {
    /// Advances the match by one frame.
    pub fn game_tick(
        field: &mut MatchField,
        context: &mut MatchContext,
        input: &PlayerInput,
        dt: f32,
        random: &mut dyn RandomSource,
    ) {
        let dt = dt.clamp(0.0, MAX_FRAME_DELTA);

        Self::handle_meta_input(field, context, input);
        context.previous_input = Some(*input);

        if !context.state.is_playing() {
            return;
        }

        if context.time.increment(dt) >= context.time.length {
            Self::finish_match(context);
            return;
        }

        let tick_context = GameTickContext::new(field, context);

        field
            .home
            .update(dt, &mut field.ball, &tick_context, input, random);
        field
            .away
            .update(dt, &mut field.ball, &tick_context, &PlayerInput::idle(), random);

        if context.restart.is_none() {
            CollisionResolver::resolve(field, random);
        }

        let home_has_ball = field.home.has_possession(&field.ball);
        let away_has_ball = field.away.has_possession(&field.ball);
        context.possession.track(home_has_ball, away_has_ball, dt);

        if context.restart.is_some() {
            RestartHandler::advance(field, context, dt);
        } else {
            let mut events = EventCollection::new();
            field.ball.update(dt, &mut events);

            EventDispatcher::dispatch(events, field, context);
        }
    }

    fn handle_meta_input(field: &mut MatchField, context: &mut MatchContext, input: &PlayerInput) {
        let previous = context.previous_input.unwrap_or_default();

        if input.pause && !previous.pause {
            let action = StateManager::on_pause_pressed(context.state);
            Self::apply_meta_action(field, context, action);
        }

        if context.state.is_playing() && input.switch_player && !previous.switch_player {
            Self::switch_to_closest_player(field);
        }
    }

    pub fn apply_meta_action(field: &mut MatchField, context: &mut MatchContext, action: MetaAction) {
        match action {
            MetaAction::StartNewMatch | MetaAction::RestartMatch => {
                Self::reset_game(field, context);
                info!("Kick-off");
            }
            MetaAction::Resume => {
                if context.state == MatchState::Paused {
                    context.previous_input = None;
                }
            }
            MetaAction::Pause => {}
        }

        context.state = StateManager::get_next_state(context.state, action);
    }

    /// Hands control to the home player nearest the ball.
    pub fn switch_to_closest_player(field: &mut MatchField) {
        if let Some(handle) = field.closest_home_player_to_ball() {
            field.set_controlled_player(handle);
        }
    }

    /// Back to the kickoff of a fresh match. Control stays with the current player.
    pub fn reset_game(field: &mut MatchField, context: &mut MatchContext) {
        context.reset();

        field.reset_players_positions();
        field.ball.reset(1.0);
    }

    pub fn score_goal(field: &mut MatchField, context: &mut MatchContext, side: TeamSide) {
        let scorer = field.ball.last_touch_player;
        let second = context.time.elapsed;

        context.score.increment(side, second, scorer);

        // Kickoff rolls towards the team that conceded
        let kickoff_direction = match side {
            TeamSide::Home => -1.0,
            TeamSide::Away => 1.0,
        };

        field.reset_players_positions();
        field.ball.reset(kickoff_direction);
        context.restart = None;

        info!(
            "Goal for {:?} at {:.1}s: {} - {}",
            side, second, context.score.home, context.score.away
        );

        context.notify(MatchEvent::Goal {
            side,
            scorer,
            home: context.score.home,
            away: context.score.away,
            second,
        });
    }

    fn finish_match(context: &mut MatchContext) {
        context.time.elapsed = context.time.length;
        context.state = MatchState::FullTime;

        info!(
            "Full time: {} - {}",
            context.score.home, context.score.away
        );

        context.notify(MatchEvent::FullTime {
            home: context.score.home,
            away: context.score.away,
        });
    }
}

/// One match: the pitch, its bookkeeping and the jitter source.
pub struct Match {
    pub field: MatchField,
    pub context: MatchContext,
    random: Box<dyn RandomSource>,
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    pub fn new() -> Self {
        Self::with_random(Box::new(ThreadRandom))
    }

    pub fn with_random(random: Box<dyn RandomSource>) -> Self {
        Self::with_field_size(MatchFieldSize::default(), random)
    }

    pub fn with_field_size(size: MatchFieldSize, random: Box<dyn RandomSource>) -> Self {
        Match {
            field: MatchField::new(size),
            context: MatchContext::new(),
            random,
        }
    }

    pub fn update(&mut self, dt: f32, input: &PlayerInput) {
        FootballEngine::game_tick(
            &mut self.field,
            &mut self.context,
            input,
            dt,
            self.random.as_mut(),
        );
    }

    pub fn start_new_match(&mut self) {
        FootballEngine::apply_meta_action(&mut self.field, &mut self.context, MetaAction::StartNewMatch);
    }

    /// No effect at full time or before the first kickoff.
    pub fn resume(&mut self) {
        FootballEngine::apply_meta_action(&mut self.field, &mut self.context, MetaAction::Resume);
    }

    pub fn pause(&mut self) {
        FootballEngine::apply_meta_action(&mut self.field, &mut self.context, MetaAction::Pause);
    }

    pub fn restart_match(&mut self) {
        FootballEngine::apply_meta_action(&mut self.field, &mut self.context, MetaAction::RestartMatch);
    }

    pub fn state(&self) -> MatchState {
        self.context.state
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::capture(&self.field, &self.context)
    }

    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        self.context.drain_events()
    }

    pub fn result(&self) -> MatchResult {
        MatchResult::from_context(&self.context)
    }
}
