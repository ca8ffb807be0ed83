/// Engine name
pub const ENGINE_NAME: &str = "plinth";

/// Engine version
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process variable selecting the current environment name
pub const ENV_VAR: &str = "PLINTH_ENV";

/// Process variable overriding the project root directory
pub const ROOT_VAR: &str = "PLINTH_ROOT";

/// Environment name used when the variable is unset or empty
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Composite component aggregating every mounted application's configuration
pub const APPS_COMPOSITE: &str = "apps.configurations";

/// Component-name suffix for a mounted application's configuration
pub const APP_CONFIGURATION_SUFFIX: &str = "configuration";

/// Default config file name looked up in the project root
pub const DEFAULT_CONFIG_FILE: &str = "plinth.toml";
