//! Global constants used throughout the component builder.
//!
//! File names, environment variables and default directories shared by the
//! resolver, the configuration layer and the CLI live here so that magic
//! strings are defined exactly once.

/// Name of the manifest file every component directory must contain.
///
/// The Component Locator treats a candidate directory as a component only
/// when this file exists inside it.
pub const MANIFEST_FILE_NAME: &str = "component.json";

/// Name of the optional build configuration file in the root component directory.
pub const CONFIG_FILE_NAME: &str = "cbuild.toml";

/// Environment variable that forces development mode when set to `1` or `true`.
pub const DEV_MODE_ENV: &str = "CBUILD_DEV";

/// Default directory (relative to the root component) where build outputs are written.
pub const DEFAULT_OUTPUT_DIR: &str = "build";

/// Conventional directory holding installed components.
///
/// Used as the only global search path when neither the configuration file
/// nor the command line provide one.
pub const DEFAULT_COMPONENTS_DIR: &str = "components";

/// File name of the merged script output (module runtime followed by the scripts aggregate).
pub const SCRIPTS_OUTPUT_FILE: &str = "build.js";

/// File name of the merged stylesheet output.
pub const STYLES_OUTPUT_FILE: &str = "build.css";
