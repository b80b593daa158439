//! Tunable strategy constants.

/// Armies committed next to a hijackable super-region each turn.
pub const DEFAULT_HIJACK_ARMIES: u32 = 5;

/// Largest number of missing regions for a super-region to be hijackable.
pub const DEFAULT_HIJACK_MAX_UNOWNED: usize = 3;

/// Regions returned for a multi-region starting pick.
pub const DEFAULT_PICK_COUNT: usize = 6;

/// Strategy parameters that stay fixed for the lifetime of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub hijack_armies: u32,
    pub hijack_max_unowned: usize,
    pub pick_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            hijack_armies: DEFAULT_HIJACK_ARMIES,
            hijack_max_unowned: DEFAULT_HIJACK_MAX_UNOWNED,
            pick_count: DEFAULT_PICK_COUNT,
        }
    }
}
