// Pitch

/// Default pitch width in pixels
pub const FIELD_WIDTH: f32 = 960.0;

/// Default pitch height in pixels
pub const FIELD_HEIGHT: f32 = 600.0;

/// Horizontal distance between the canvas edge and the goal lines
pub const PITCH_MARGIN_X: f32 = 40.0;

/// Vertical distance between the canvas edge and the sidelines
pub const PITCH_MARGIN_Y: f32 = 40.0;

/// Height of the goal mouth, centred on the goal line
pub const GOAL_WIDTH: f32 = 240.0;

// Players

pub const PLAYER_RADIUS: f32 = 12.0;

/// Top speed of AI players (px/s)
pub const PLAYER_SPEED: f32 = 150.0;

/// Top speed of the user-controlled player without sprint (px/s)
pub const USER_SPEED: f32 = 180.0;

pub const SPRINT_SPEED: f32 = 240.0;

pub const STAMINA_MAX: f32 = 100.0;

/// Stamina lost per second of sprinting
pub const STAMINA_DRAIN_RATE: f32 = 28.0;

/// Stamina regained per second when not sprinting
pub const STAMINA_RECOVERY_RATE: f32 = 16.0;

/// Sprint is only available above this much stamina
pub const SPRINT_STAMINA_FLOOR: f32 = 5.0;

/// Speed multiplier applied when stamina is fully spent
pub const EXHAUSTED_SPEED_FACTOR: f32 = 0.75;

/// Per-frame velocity multiplier when the user gives no movement input.
/// Applied once per frame, not scaled by the frame delta.
pub const IDLE_DAMPING: f32 = 0.85;

// Ball

pub const BALL_RADIUS: f32 = 8.0;

/// Velocity kept per 1/60 s of travel
pub const BALL_FRICTION: f32 = 0.983;

pub const BALL_MAX_SPEED: f32 = 360.0;

/// Kick speed for power 1.0 (px/s)
pub const KICK_STRENGTH: f32 = 320.0;

/// Horizontal ball speed given at kickoff
pub const KICKOFF_SPEED: f32 = 90.0;

/// Restitution when bouncing inside the sideline band
pub const SIDELINE_RESTITUTION: f32 = 0.7;

/// Restitution when bouncing off the end walls
pub const END_WALL_RESTITUTION: f32 = 0.75;

// Ball control

/// Cooldown after a successful pass
pub const PASS_RELEASE_TIME: f32 = 0.2;

/// Cooldown after a successful shot
pub const SHOT_RELEASE_TIME: f32 = 0.38;

/// Minimum cooldown after any kick
pub const DRIBBLE_RELEASE_TIME: f32 = 0.06;

/// Minimum ball speed while the controlled player dribbles
pub const DRIBBLE_MIN_SPEED: f32 = 110.0;

/// Distance from the player centre at which a kicked or carried ball is placed
pub const DRIBBLE_LOCK_DISTANCE: f32 = PLAYER_RADIUS + BALL_RADIUS + 1.4;

/// Extra reach beyond touching distance for a kick
pub const KICK_RANGE_MARGIN: f32 = 4.0;

pub const SHOT_POWER: f32 = 1.18;

/// Possession radius as a multiple of the player radius
pub const POSSESSION_RADIUS_FACTOR: f32 = 2.6;

// Match

/// Match length in seconds
pub const MATCH_LENGTH: f32 = 240.0;

/// Largest frame delta the simulation accepts (s)
pub const MAX_FRAME_DELTA: f32 = 0.033;
