use crate::r#match::ball::Ball;
use crate::r#match::constants::*;
use crate::r#match::{
    MatchFieldSize, PlayerInput, PlayerTickContext, RandomSource, TeamColor, TeamSide,
    VectorExtensions,
};
use nalgebra::Vector2;
use serde::Serialize;

/// Stable reference to a player: team side plus roster index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerHandle {
    pub side: TeamSide,
    pub index: usize,
}

impl PlayerHandle {
    pub fn new(side: TeamSide, index: usize) -> Self {
        PlayerHandle { side, index }
    }
}

#[derive(Debug, Clone)]
pub struct MatchPlayer {
    pub side: TeamSide,
    pub index: usize,

    /// Normalized formation slot
    pub base_position: Vector2<f32>,

    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,
    pub color: TeamColor,

    pub is_user: bool,

    /// Facing, used as the default kick direction
    pub last_direction: Vector2<f32>,

    pub stamina: f32,

    pub pass_held: bool,
    pub shoot_held: bool,

    /// Set on the player chosen to take a restart
    pub pending_restart: bool,

    /// Seconds until the next kick or carry is allowed
    pub control_cooldown: f32,
}

impl MatchPlayer {
    pub fn new(
        side: TeamSide,
        index: usize,
        base_position: Vector2<f32>,
        color: TeamColor,
        size: &MatchFieldSize,
    ) -> Self {
        MatchPlayer {
            side,
            index,
            base_position,
            position: size.from_normalized(base_position, side),
            velocity: Vector2::zeros(),
            color,
            is_user: false,
            last_direction: Vector2::new(side.attack_direction(), 0.0),
            stamina: STAMINA_MAX,
            pass_held: false,
            shoot_held: false,
            pending_restart: false,
            control_cooldown: 0.0,
        }
    }

    pub fn handle(&self) -> PlayerHandle {
        PlayerHandle::new(self.side, self.index)
    }

    pub fn max_speed(&self) -> f32 {
        if self.is_user {
            USER_SPEED
        } else {
            PLAYER_SPEED
        }
    }

    pub fn stamina_fraction(&self) -> f32 {
        self.stamina / STAMINA_MAX
    }

    /// Formation slot in pitch pixels.
    pub fn formation_spot(&self, size: &MatchFieldSize) -> Vector2<f32> {
        size.from_normalized(self.base_position, self.side)
    }

    pub fn update(
        &mut self,
        dt: f32,
        ball: &mut Ball,
        input: &PlayerInput,
        context: &PlayerTickContext,
        random: &mut dyn RandomSource,
    ) {
        if self.control_cooldown > 0.0 {
            self.control_cooldown = (self.control_cooldown - dt).max(0.0);
        }

        if self.is_user {
            self.handle_user_control(dt, ball, input, context);
        } else {
            self.handle_ai(ball, context, random);
        }

        self.position += self.velocity * dt;
        self.keep_inside_pitch(&context.tick.field_size);
    }

    /// Kicks the ball if it is within reach. Direction preference: the override,
    /// then the facing, then straight at the ball, then to the right.
    pub fn try_kick(
        &mut self,
        ball: &mut Ball,
        power: f32,
        direction_override: Option<Vector2<f32>>,
    ) -> bool {
        let to_ball = ball.position - self.position;
        if to_ball.length() > PLAYER_RADIUS + BALL_RADIUS + KICK_RANGE_MARGIN {
            return false;
        }

        let mut direction = match direction_override {
            Some(direction) => direction,
            None if self.last_direction.length() > 0.1 => self.last_direction,
            None => to_ball,
        };

        if direction.length() == 0.0 {
            direction = Vector2::new(1.0, 0.0);
        }

        let direction = direction.normalize_or_zero();
        let strength = (KICK_STRENGTH * power).min(BALL_MAX_SPEED);

        ball.position = self.position + direction * DRIBBLE_LOCK_DISTANCE;
        ball.velocity = direction * strength;
        ball.record_touch(self.handle());

        self.last_direction = direction;
        self.control_cooldown = self.control_cooldown.max(DRIBBLE_RELEASE_TIME);

        true
    }

    /// Passes to the teammate that balances closeness against how far the ball
    /// would travel compared with the passer's own distance to it.
    pub fn try_pass(
        &mut self,
        ball: &mut Ball,
        teammates: impl IntoIterator<Item = Vector2<f32>>,
    ) -> bool {
        let own_distance = self.position.distance_to(&ball.position);

        let score = |teammate: &Vector2<f32>| {
            let distance = self.position.distance_to(teammate);
            distance + (own_distance - distance).abs() * 0.25
        };

        let Some(target) = teammates
            .into_iter()
            .min_by(|a, b| score(a).total_cmp(&score(b)))
        else {
            return false;
        };

        let distance = self.position.distance_to(&target);
        let power = (0.48 + distance / 520.0).min(1.12);
        let direction = (target - self.position).normalize_or_zero();

        self.try_kick(ball, power, Some(direction))
    }

    /// Back to the formation slot with a fresh state.
    pub fn reset(&mut self, size: &MatchFieldSize) {
        self.position = self.formation_spot(size);
        self.velocity = Vector2::zeros();
        self.stamina = STAMINA_MAX;
        self.pass_held = false;
        self.shoot_held = false;
        self.pending_restart = false;
        self.control_cooldown = 0.0;
    }

    pub(crate) fn recover_stamina(&mut self, dt: f32) {
        self.stamina = (self.stamina + STAMINA_RECOVERY_RATE * dt).clamp(0.0, STAMINA_MAX);
    }

    pub(crate) fn drain_stamina(&mut self, dt: f32) {
        self.stamina = (self.stamina - STAMINA_DRAIN_RATE * dt).clamp(0.0, STAMINA_MAX);
    }

    fn keep_inside_pitch(&mut self, size: &MatchFieldSize) {
        self.position.x = self
            .position
            .x
            .clamp(size.left() + PLAYER_RADIUS, size.right() - PLAYER_RADIUS);
        self.position.y = self
            .position
            .y
            .clamp(size.top() + PLAYER_RADIUS, size.bottom() - PLAYER_RADIUS);
    }
}
