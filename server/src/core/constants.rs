// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display and platform directories)
pub const APP_NAME: &str = "RackView";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "rackview";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".rackview";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "rackview.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "RACKVIEW_CONFIG";

// =============================================================================
// Environment Variables - Debug
// =============================================================================

/// Environment variable for debug mode
pub const ENV_DEBUG: &str = "RACKVIEW_DEBUG";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "RACKVIEW_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "RACKVIEW_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "RACKVIEW_LOG";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 5390;

/// Default request body limit (listing endpoints take no body)
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

// =============================================================================
// Environment Variables - Storage
// =============================================================================

/// Environment variable to override data directory
pub const ENV_DATA_DIR: &str = "RACKVIEW_DATA_DIR";

/// Environment variable for SQLite pool size
pub const ENV_DATABASE_MAX_CONNECTIONS: &str = "RACKVIEW_DATABASE_MAX_CONNECTIONS";

// =============================================================================
// SQLite Database
// =============================================================================

/// SQLite database filename
pub const SQLITE_DB_FILENAME: &str = "rackview.db";

/// SQLite connection pool max connections (default)
pub const SQLITE_MAX_CONNECTIONS: u32 = 5;

/// Upper bound accepted for the SQLite pool size
pub const SQLITE_MAX_CONNECTIONS_LIMIT: u32 = 64;

/// SQLite busy timeout in seconds
pub const SQLITE_BUSY_TIMEOUT_SECS: u64 = 30;

/// SQLite cache size (negative = KB, so -64000 = 64MB)
pub const SQLITE_CACHE_SIZE: &str = "-64000";

/// SQLite WAL auto-checkpoint threshold (pages, ~4MB at 1000)
pub const SQLITE_WAL_AUTOCHECKPOINT: &str = "1000";

/// WAL checkpoint interval in seconds (5 minutes)
pub const SQLITE_CHECKPOINT_INTERVAL_SECS: u64 = 300;

// =============================================================================
// Shutdown
// =============================================================================

/// Graceful shutdown timeout in seconds
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 30;
