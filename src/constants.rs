//! Common constants used throughout the mas generator.

/// Project name used when the destination yields no usable identifier
pub const DEFAULT_PROJECT_NAME: &str = "hello-mas";

/// Suffix appended to the project name for the service and its interface directory
pub const SERVICE_SUFFIX: &str = "api";

/// Directory holding the generated interfaces
pub const INTERFACE_DIR: &str = "interface";

/// Subdirectory of the service interface holding the demo handler
pub const DEMO_DIR: &str = "demo";

/// Words accepted as a "yes" at the overwrite confirmation (case-insensitive)
pub const AFFIRMATIVE_ANSWERS: [&str; 4] = ["y", "yes", "ok", "true"];

/// Mode for created directories (Unix only)
pub const DIR_MODE: u32 = 0o755;

/// Mode for written files before the umask is applied (Unix only)
pub const FILE_MODE: u32 = 0o666;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
