use env_logger::Env;
use kickabout_core::r#match::constants::*;
use kickabout_core::{
    Match, MatchEvent, MatchOutcome, MatchSnapshot, MatchState, MetaAction, PlayerInput,
    RestartKind, TeamColor, TeamSide, Vector2,
};
use log::info;
use macroquad::prelude::*;

const HUD_HEIGHT: f32 = 64.0;
const BANNER_TIME: f32 = 2.0;

const PITCH_GREEN: Color = Color::new(0.18, 0.49, 0.2, 1.0);
const PITCH_LINES: Color = Color::new(1.0, 1.0, 1.0, 0.85);
const USER_RING: Color = Color::new(1.0, 0.84, 0.0, 1.0);
const ASSIST: Color = Color::new(1.0, 0.84, 0.0, 0.75);

/// Maps pitch coordinates onto the window.
#[derive(Clone, Copy)]
struct View {
    offset_x: f32,
    offset_y: f32,
    scale: f32,
}

impl View {
    fn fit(snapshot: &MatchSnapshot) -> Self {
        let width = screen_width();
        let height = screen_height() - HUD_HEIGHT;

        let scale = (width / snapshot.field_width).min(height / snapshot.field_height);

        View {
            offset_x: (width - snapshot.field_width * scale) / 2.0,
            offset_y: HUD_HEIGHT + (height - snapshot.field_height * scale) / 2.0,
            scale,
        }
    }

    fn x(&self, x: f32) -> f32 {
        self.offset_x + x * self.scale
    }

    fn y(&self, y: f32) -> f32 {
        self.offset_y + y * self.scale
    }

    fn point(&self, position: Vector2<f32>) -> Vec2 {
        vec2(self.x(position.x), self.y(position.y))
    }

    fn len(&self, length: f32) -> f32 {
        length * self.scale
    }
}

/// Short-lived message shown under the scoreboard.
struct Banner {
    text: String,
    remaining: f32,
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut game = Match::new();
    let mut banner: Option<Banner> = None;

    loop {
        let keys = MenuKeys {
            kick_off: is_key_pressed(KeyCode::Enter),
            play_again: is_key_pressed(KeyCode::R),
        };

        match menu_action(game.state(), keys) {
            Some(MetaAction::RestartMatch) => game.restart_match(),
            Some(_) => game.start_new_match(),
            None => game.update(get_frame_time(), &read_input()),
        }

        for event in game.drain_events() {
            if let Some(text) = describe_event(&event) {
                info!("{}", text);
                banner = Some(Banner {
                    text,
                    remaining: BANNER_TIME,
                });
            }
        }

        if let Some(current) = banner.as_mut() {
            current.remaining -= get_frame_time();
            if current.remaining <= 0.0 {
                banner = None;
            }
        }

        let snapshot = game.snapshot();
        let view = View::fit(&snapshot);

        clear_background(Color::from_rgba(18, 32, 18, 255));

        draw_pitch(&snapshot, &view);
        draw_players(&snapshot, &view);
        draw_ball(&snapshot, &view);
        draw_direction_assist(&snapshot, &view);
        draw_radar(&snapshot);
        draw_hud(&snapshot, banner.as_ref());
        draw_overlay(&snapshot, game.result().outcome);

        next_frame().await;
    }
}

/// Menu keys pressed this frame. Space stays a pure shoot key.
#[derive(Debug, Clone, Copy, Default)]
struct MenuKeys {
    kick_off: bool,
    play_again: bool,
}

fn menu_action(state: MatchState, keys: MenuKeys) -> Option<MetaAction> {
    match state {
        MatchState::Intro if keys.kick_off => Some(MetaAction::StartNewMatch),
        MatchState::FullTime if keys.play_again => Some(MetaAction::RestartMatch),
        _ => None,
    }
}

fn read_input() -> PlayerInput {
    let axis = |negative: [KeyCode; 2], positive: [KeyCode; 2]| {
        let down = |keys: [KeyCode; 2]| keys.iter().any(|key| is_key_down(*key));
        match (down(negative), down(positive)) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    };

    let movement = Vector2::new(
        axis([KeyCode::Left, KeyCode::A], [KeyCode::Right, KeyCode::D]),
        axis([KeyCode::Up, KeyCode::W], [KeyCode::Down, KeyCode::S]),
    );

    PlayerInput {
        sprint: is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift),
        shoot: is_key_down(KeyCode::Space),
        pass: is_key_down(KeyCode::X) || is_key_down(KeyCode::E),
        switch_player: is_key_down(KeyCode::Q) || is_key_down(KeyCode::Tab),
        pause: is_key_down(KeyCode::P) || is_key_down(KeyCode::Escape),
        ..PlayerInput::with_movement(movement)
    }
}

fn describe_event(event: &MatchEvent) -> Option<String> {
    match event {
        MatchEvent::Goal { side, home, away, .. } => {
            Some(format!("GOAL for {}!  {} - {}", team_name(*side), home, away))
        }
        MatchEvent::RestartAwarded { kind, side } => {
            Some(format!("{} to {}", restart_label(*kind), team_name(*side)))
        }
        MatchEvent::FullTime { home, away } => Some(format!("Full time  {} - {}", home, away)),
    }
}

fn team_name(side: TeamSide) -> &'static str {
    match side {
        TeamSide::Home => "Home",
        TeamSide::Away => "Away",
    }
}

fn restart_label(kind: RestartKind) -> &'static str {
    match kind {
        RestartKind::ThrowIn => "Throw-in",
        RestartKind::Corner => "Corner",
        RestartKind::GoalKick => "Goal kick",
    }
}

fn team_color(color: TeamColor) -> Color {
    Color::from_rgba(color.red, color.green, color.blue, 255)
}

// draw

fn draw_pitch(snapshot: &MatchSnapshot, view: &View) {
    let width = snapshot.field_width;
    let height = snapshot.field_height;
    let line = view.len(4.0);

    draw_rectangle(view.x(0.0), view.y(0.0), view.len(width), view.len(height), PITCH_GREEN);

    draw_rectangle_lines(
        view.x(PITCH_MARGIN_X),
        view.y(PITCH_MARGIN_Y),
        view.len(width - PITCH_MARGIN_X * 2.0),
        view.len(height - PITCH_MARGIN_Y * 2.0),
        line,
        PITCH_LINES,
    );

    draw_line(
        view.x(width / 2.0),
        view.y(PITCH_MARGIN_Y),
        view.x(width / 2.0),
        view.y(height - PITCH_MARGIN_Y),
        line,
        PITCH_LINES,
    );

    draw_circle_lines(view.x(width / 2.0), view.y(height / 2.0), view.len(90.0), line, PITCH_LINES);
    draw_circle(view.x(width / 2.0), view.y(height / 2.0), view.len(6.0), PITCH_LINES);

    // penalty areas, then goal areas
    for (depth, half_height) in [(140.0, 160.0), (60.0, 80.0)] {
        let top = view.y(height / 2.0 - half_height);
        let box_height = view.len(half_height * 2.0);

        draw_rectangle_lines(view.x(PITCH_MARGIN_X), top, view.len(depth), box_height, line, PITCH_LINES);
        draw_rectangle_lines(
            view.x(width - PITCH_MARGIN_X - depth),
            top,
            view.len(depth),
            box_height,
            line,
            PITCH_LINES,
        );
    }

    draw_circle(view.x(160.0), view.y(height / 2.0), view.len(4.0), PITCH_LINES);
    draw_circle(view.x(width - 160.0), view.y(height / 2.0), view.len(4.0), PITCH_LINES);

    let corners = [
        (PITCH_MARGIN_X, PITCH_MARGIN_Y, 0.0),
        (width - PITCH_MARGIN_X, PITCH_MARGIN_Y, 90.0),
        (width - PITCH_MARGIN_X, height - PITCH_MARGIN_Y, 180.0),
        (PITCH_MARGIN_X, height - PITCH_MARGIN_Y, 270.0),
    ];

    for (x, y, rotation) in corners {
        draw_arc(view.x(x), view.y(y), 12, view.len(12.0), rotation, line / 2.0, 90.0, PITCH_LINES);
    }

    let goal_top = view.y(height / 2.0 - GOAL_WIDTH / 2.0);
    let goal_height = view.len(GOAL_WIDTH);
    draw_rectangle(view.x(PITCH_MARGIN_X - 10.0), goal_top, view.len(10.0), goal_height, WHITE);
    draw_rectangle(view.x(width - PITCH_MARGIN_X), goal_top, view.len(10.0), goal_height, WHITE);
}

fn draw_players(snapshot: &MatchSnapshot, view: &View) {
    for player in &snapshot.players {
        let center = view.point(player.position);
        let radius = view.len(PLAYER_RADIUS);

        draw_circle(center.x, center.y, radius, team_color(player.color));
        draw_circle(center.x, center.y, view.len(4.0), Color::new(1.0, 1.0, 1.0, 0.6));

        if player.is_user {
            draw_circle_lines(center.x, center.y, radius, view.len(4.0), USER_RING);
        } else {
            draw_circle_lines(center.x, center.y, radius, view.len(2.0), Color::new(1.0, 1.0, 1.0, 0.7));
        }

        if player.is_chaser && !player.is_user {
            draw_circle(center.x, center.y - radius - view.len(4.0), view.len(2.0), WHITE);
        }
    }
}

fn draw_ball(snapshot: &MatchSnapshot, view: &View) {
    let center = view.point(snapshot.ball);
    let radius = view.len(BALL_RADIUS);

    draw_circle(center.x, center.y, radius, Color::from_hex(0xf7f7f7));
    draw_circle_lines(center.x, center.y, radius, view.len(2.0), Color::from_hex(0x222222));
}

fn draw_direction_assist(snapshot: &MatchSnapshot, view: &View) {
    let Some(user) = snapshot.user() else {
        return;
    };

    let facing = user.facing;
    if facing.norm() < 0.1 {
        return;
    }

    let facing = facing.normalize();
    let start = user.position + facing * (PLAYER_RADIUS + 4.0);
    let end = start + facing * 46.0;
    let perpendicular = Vector2::new(-facing.y, facing.x) * 6.0;

    let tip = view.point(end);
    let left = view.point(end - facing * 10.0 + perpendicular);
    let right = view.point(end - facing * 10.0 - perpendicular);

    let from = view.point(start);
    draw_line(from.x, from.y, tip.x, tip.y, view.len(3.0), ASSIST);
    draw_triangle(tip, left, right, ASSIST);
}

fn draw_radar(snapshot: &MatchSnapshot) {
    let (width, height, margin, padding) = (170.0, 118.0, 20.0, 12.0);
    let origin_x = screen_width() - width - margin;
    let origin_y = screen_height() - height - margin;

    draw_rectangle(origin_x, origin_y, width, height, Color::new(0.02, 0.07, 0.02, 0.6));
    draw_rectangle_lines(origin_x, origin_y, width, height, 2.0, Color::new(1.0, 1.0, 1.0, 0.35));

    let pitch_width = snapshot.field_width - PITCH_MARGIN_X * 2.0;
    let pitch_height = snapshot.field_height - PITCH_MARGIN_Y * 2.0;
    let scale_x = (width - padding * 2.0) / pitch_width;
    let scale_y = (height - padding * 2.0) / pitch_height;

    let project = |position: Vector2<f32>| {
        vec2(
            origin_x + padding + (position.x - PITCH_MARGIN_X) * scale_x,
            origin_y + padding + (position.y - PITCH_MARGIN_Y) * scale_y,
        )
    };

    for player in &snapshot.players {
        let point = project(player.position);
        let size = if player.is_user { 5.0 } else { 3.0 };
        draw_circle(point.x, point.y, size, team_color(player.color));
    }

    let ball = project(snapshot.ball);
    draw_circle(ball.x, ball.y, 3.5, Color::from_hex(0xffd54f));
}

fn draw_hud(snapshot: &MatchSnapshot, banner: Option<&Banner>) {
    draw_rectangle(0.0, 0.0, screen_width(), HUD_HEIGHT, Color::new(0.0, 0.0, 0.0, 0.55));

    let score = format!("HOME {}  -  {} AWAY", snapshot.home_score, snapshot.away_score);
    draw_text(&score, 20.0, 28.0, 30.0, WHITE);
    draw_text(&snapshot.clock_label, screen_width() / 2.0 - 30.0, 28.0, 32.0, WHITE);

    let possession = format!(
        "Possession {}% - {}%",
        snapshot.possession.home, snapshot.possession.away
    );
    draw_text(&possession, 20.0, 54.0, 20.0, LIGHTGRAY);

    // stamina bar
    let bar_width = 160.0;
    let bar_x = screen_width() - bar_width - 20.0;
    draw_text("Stamina", bar_x - 70.0, 24.0, 20.0, LIGHTGRAY);
    draw_rectangle(bar_x, 12.0, bar_width, 14.0, Color::new(1.0, 1.0, 1.0, 0.2));
    draw_rectangle(
        bar_x,
        12.0,
        bar_width * snapshot.stamina.clamp(0.0, 1.0),
        14.0,
        Color::from_hex(0x66bb6a),
    );

    if let Some(kind) = snapshot.restart {
        draw_text(restart_label(kind), bar_x, 50.0, 22.0, USER_RING);
    }

    if let Some(banner) = banner {
        draw_text(&banner.text, screen_width() / 2.0 - 140.0, 56.0, 22.0, WHITE);
    }
}

fn draw_overlay(snapshot: &MatchSnapshot, outcome: MatchOutcome) {
    let (title, subtitle) = if snapshot.full_time {
        let title = match outcome {
            MatchOutcome::HomeWin => "Victory!",
            MatchOutcome::Draw => "Draw",
            MatchOutcome::AwayWin => "Defeat",
        };
        (title, "Press R to play again")
    } else if snapshot.paused {
        ("Paused", "Press P to resume")
    } else if !snapshot.state.has_started() {
        ("Kickabout", "Press Enter to kick off")
    } else {
        return;
    };

    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, 0.6));
    draw_centered_text(title, screen_height() / 2.0 - 20.0, 48.0);
    draw_centered_text(subtitle, screen_height() / 2.0 + 30.0, 28.0);
}

fn draw_centered_text(text: &str, y: f32, font_size: f32) {
    let dimensions = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, (screen_width() - dimensions.width) / 2.0, y, font_size, WHITE);
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Kickabout".to_owned(),
        window_width: 1040,
        window_height: 720,
        window_resizable: true,
        fullscreen: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_kicks_off_from_intro() {
        let keys = MenuKeys {
            kick_off: true,
            ..MenuKeys::default()
        };

        assert_eq!(menu_action(MatchState::Intro, keys), Some(MetaAction::StartNewMatch));
        assert_eq!(menu_action(MatchState::Playing, keys), None);
    }

    #[test]
    fn test_intro_waits_without_enter() {
        assert_eq!(menu_action(MatchState::Intro, MenuKeys::default()), None);
    }

    #[test]
    fn test_play_again_only_at_full_time() {
        let keys = MenuKeys {
            play_again: true,
            ..MenuKeys::default()
        };

        assert_eq!(menu_action(MatchState::FullTime, keys), Some(MetaAction::RestartMatch));
        assert_eq!(menu_action(MatchState::Paused, keys), None);
    }
}
