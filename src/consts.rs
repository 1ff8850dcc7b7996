pub mod cli_consts {
    //! Console Configuration Constants
    //!
    //! This module contains the configuration constants for the console,
    //! organized by functional area.

    // =============================================================================
    // API CONFIGURATION
    // =============================================================================

    /// Path of the benefits resource, appended to the configured API URL.
    pub const API_BASE_PATH: &str = "/api/v1/beneficios";

    /// Environment variable that overrides the configured API URL.
    pub const API_URL_ENV_VAR: &str = "BENEFITX_API_URL";

    /// Network timeouts for the HTTP client
    pub mod http {
        use std::time::Duration;

        /// Time allowed to establish a connection (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Time allowed for a full request/response cycle (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // VALIDATION
    // =============================================================================

    /// Maximum number of characters accepted for a benefit name.
    pub const NOME_MAX_LEN: usize = 100;

    /// Smallest accepted amount, in cents (R$ 0,01).
    pub const MIN_AMOUNT_CENTS: i64 = 1;

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// How long the splash screen stays up before the dashboard opens (milliseconds)
    pub const SPLASH_DURATION_MS: u64 = 1500;

    /// Keyboard poll interval of the UI loop (milliseconds)
    pub const UI_POLL_INTERVAL_MS: u64 = 100;
}
