//! Debugging feature flags.
//!
//! Toggle individual diagnostics here. The flags are only read in debug
//! builds; per-request and serde traces are off by default.

pub struct DebugFlags {
    /// Emit UI interaction logs (e.g., symbol switching, favorites edits).
    pub print_ui_interactions: bool,
    /// Emit view state transitions (Idle -> Loading -> Ready/Error).
    pub print_state_transitions: bool,
    /// Emit a line per outbound ISS request.
    pub print_requests: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_state_transitions: true,
    print_requests: false,
    print_state_serde: false,
    print_shutdown: false,
};
