/// Game tuning parameters for the reference build
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (logical units)
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 200.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;

    // Opponent
    pub const OPPONENT_SPEED: f32 = 3.0; // units per frame
    pub const OPPONENT_DEADZONE: f32 = 10.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_X: f32 = 3.0; // units per frame
    pub const BALL_SPEED_Y: f32 = 3.0;
    pub const PADDLE_HIT_FACTOR: f32 = 0.2; // vy per unit of offset from paddle center
    pub const SERVE_VY_MAX: f32 = 3.0; // serve vy drawn from [-max, max)

    // Net
    pub const NET_DASH: f32 = 10.0;
    pub const NET_STEP: f32 = 15.0;
    pub const NET_WIDTH: f32 = 2.0;
}
