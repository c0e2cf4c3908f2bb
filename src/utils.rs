/// Points for picking up a reward
pub const REWARD_POINTS: i64 = 25;
/// Extra points per collected reward when the robot aborts
pub const ABORT_BONUS: i64 = 25;
/// Extra points per collected reward when the robot reaches the exit
pub const EXIT_BONUS: i64 = 50;
/// Points charged for every turn the robot spends
pub const TURN_COST: i64 = 1;

/// Default submersion tolerance when the level does not set `Waterproof`
pub const DEFAULT_WATERPROOF: u32 = 10;
/// Default beard growth interval when the level does not set `Growth`
pub const DEFAULT_GROWTH: u32 = 25;

/// Contest wall-clock budget in seconds
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 140;

/// Search edge cost for a step that unsettles a resting boulder
pub const DISTURBANCE_COST: f64 = 100.0;

/// Route ranking multipliers, most severe side effect wins
pub const DISTURB_PENALTY: usize = 10;
pub const PUSH_PENALTY: usize = 100;
pub const TELEPORT_PENALTY: usize = 1000;
