// src/constants.rs

/// The name of the per-project configuration file, read from the project root.
pub const CONFIG_FILENAME: &str = "ts-builds.config.json";

/// Default location of the project's TypeScript sources.
pub const DEFAULT_SRC_DIR: &str = "./src";

/// Default location of the project's tests. Informational only; the chain
/// engine never reads it.
pub const DEFAULT_TEST_DIR: &str = "./test";

/// Steps of the built-in `validate` chain, in execution order.
pub const DEFAULT_VALIDATE_CHAIN: &[&str] = &["format", "lint", "typecheck", "test", "build"];

/// Name of the chain the built-in defaults install.
pub const VALIDATE_CHAIN_NAME: &str = "validate";
