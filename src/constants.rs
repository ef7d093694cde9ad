//! Template file names, output locations and other fixed values used
//! throughout the engine.

/// Page template, relative to the bundled root or an override directory.
pub const PAGE_TEMPLATE: &str = "page.html";

/// Navigation menu template.
pub const MENU_TEMPLATE: &str = "partials/menu.html";

/// Coverage badge template. Only ever read from the bundled root.
pub const BADGE_TEMPLATE: &str = "partials/coverage-badge.svg";

/// Directory under the output directory that receives badge assets.
pub const BADGE_OUTPUT_DIR: &str = "images";

/// Top-level binding the page and badge templates see their data under.
pub const DATA_BINDING: &str = "data";

/// Field injected into menu data before rendering.
pub const MENU_FIELD: &str = "menu";

/// Value of [`MENU_FIELD`] for the regular navigation menu.
pub const MENU_NORMAL: &str = "normal";

/// Default output directory when neither the CLI nor the config names one.
pub const DEFAULT_OUTPUT_DIR: &str = "documentation";

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "docgen.toml";

/// File name of the badge asset for `label`.
pub fn badge_file_name(label: &str) -> String {
    format!("coverage-badge-{label}.svg")
}

/// Directory holding the templates shipped with the crate.
pub fn bundled_templates_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}
