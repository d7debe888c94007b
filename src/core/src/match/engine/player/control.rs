use crate::r#match::ball::Ball;
use crate::r#match::constants::*;
use crate::r#match::{MatchPlayer, PlayerInput, PlayerTickContext, VectorExtensions};
use nalgebra::Vector2;

impl MatchPlayer {
    pub(crate) fn handle_user_control(
        &mut self,
        dt: f32,
        ball: &mut Ball,
        input: &PlayerInput,
        context: &PlayerTickContext,
    ) {
        let is_restart_taker = context
            .tick
            .restart
            .as_ref()
            .is_some_and(|restart| restart.taker == Some(self.handle()));

        if is_restart_taker {
            self.velocity = Vector2::zeros();
            self.recover_stamina(dt);
            return;
        }

        self.apply_movement_input(dt, input);

        let shoot_pressed = input.shoot && !self.shoot_held;
        if shoot_pressed
            && self.control_cooldown <= 0.0
            && self.try_kick(ball, SHOT_POWER, None)
        {
            self.control_cooldown = SHOT_RELEASE_TIME;
        }
        self.shoot_held = input.shoot;

        let pass_pressed = input.pass && !self.pass_held;
        if pass_pressed
            && self.control_cooldown <= 0.0
            && self.try_pass(ball, context.teammates(self.index))
        {
            self.control_cooldown = PASS_RELEASE_TIME;
        }
        self.pass_held = input.pass;
    }

    fn apply_movement_input(&mut self, dt: f32, input: &PlayerInput) {
        let direction = input.movement.normalize_or_zero();

        if direction.length() == 0.0 {
            // Frame-based, not scaled by dt
            self.velocity *= IDLE_DAMPING;
            self.recover_stamina(dt);
            return;
        }

        let mut speed = self.max_speed();

        if input.sprint && self.stamina > SPRINT_STAMINA_FLOOR {
            speed = SPRINT_SPEED;
            self.drain_stamina(dt);
        } else {
            if !input.sprint {
                self.recover_stamina(dt);
            }
            if self.stamina <= 0.0 {
                speed *= EXHAUSTED_SPEED_FACTOR;
            }
        }

        self.velocity = direction * speed;
        self.last_direction = direction;
    }
}
