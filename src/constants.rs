//! Common constants used throughout the retab application.

/// Extension marking a file as a Handlebars template
pub const TEMPLATE_SUFFIX: &str = ".hbs";

/// Directory under the root that holds one subdirectory per template
pub const TEMPLATES_DIR: &str = "templates";

/// Variant subdirectory inside each template that is subject to repair
pub const VARIANT_DIR: &str = "pro";

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["retab.json", "retab.yml", "retab.yaml"];

/// Patterns excluded from processing even without a configuration file.
/// Python templates are normalized by a separate tool chain.
pub const DEFAULT_IGNORE_PATTERNS: [&str; 1] = ["*.py.hbs"];

/// Compound suffixes handled by the structured-data reindenter
pub const YAML_SUFFIXES: [&str; 2] = [".yml.hbs", ".yaml.hbs"];

/// Compound suffixes handled by the brace-block reindenter
pub const HCL_SUFFIXES: [&str; 1] = [".tf.hbs"];

/// Compound suffixes handled by the document reindenter
pub const JSON_SUFFIXES: [&str; 1] = [".json.hbs"];

/// Compound suffixes handled by the C-family reindenter
pub const CFAMILY_SUFFIXES: [&str; 4] = [".ts.hbs", ".js.hbs", ".tsx.hbs", ".java.hbs"];

/// Indent unit for data and configuration formats
pub const DATA_INDENT_UNIT: &str = "  ";

/// Indent unit for C-family code
pub const CODE_INDENT_UNIT: &str = "    ";

/// Files whose trimmed content is shorter than this are left untouched
pub const MIN_CONTENT_LEN: usize = 10;
