// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names read by TaskMan

// API
pub const TASKMAN_API_URL: &str = "TASKMAN_API_URL";
pub const VITE_API_URL: &str = "VITE_API_URL"; // Legacy, shared .env with the web client

// Local state
pub const TASKMAN_HOME: &str = "TASKMAN_HOME";

// HTTP client
pub const TASKMAN_HTTP_REQUEST_TIMEOUT_SECS: &str = "TASKMAN_HTTP_REQUEST_TIMEOUT_SECS";
pub const TASKMAN_HTTP_CONNECT_TIMEOUT_SECS: &str = "TASKMAN_HTTP_CONNECT_TIMEOUT_SECS";

// Defaults
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Name of the session file inside the TaskMan home directory
pub const SESSION_FILE: &str = "session.toml";
