//! The fixed catalog of partial fragments and their registration.
//!
//! Partials are the reusable blocks the page and menu templates pull in with
//! `{% include "<name>" %}`. The catalog is a static table so adding or
//! renaming a fragment is a single edit here plus the template file itself.

use futures::future::try_join_all;
use tera::Tera;
use tracing::debug;

use crate::core::EngineError;
use crate::utils::fs::FileStore;

use super::locator::TemplateLocator;

/// One entry of the partial catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partial {
    /// Name templates use to include the fragment.
    pub name: &'static str,
    /// File location relative to the template root.
    pub path: &'static str,
}

macro_rules! partials {
    ($($name:literal),* $(,)?) => {
        &[$(Partial { name: $name, path: concat!("partials/", $name, ".html") }),*]
    };
}

/// Every partial registered during `init`.
pub const PARTIAL_CATALOG: &[Partial] = partials![
    "overview",
    "markdown",
    "modules",
    "module",
    "components",
    "component",
    "component-detail",
    "directives",
    "directive",
    "injectables",
    "injectable",
    "interceptor",
    "guard",
    "pipes",
    "pipe",
    "classes",
    "class",
    "interface",
    "routes",
    "index",
    "index-misc",
    "search-results",
    "search-input",
    "link-type",
    "block-method",
    "block-enum",
    "block-property",
    "block-index",
    "block-constructor",
    "block-typealias",
    "block-accessors",
    "block-input",
    "block-output",
    "coverage-report",
    "unit-test-report",
    "miscellaneous-functions",
    "miscellaneous-variables",
    "miscellaneous-typealiases",
    "miscellaneous-enumerations",
    "additional-page",
    "package-dependencies",
];

/// Looks up a catalog entry by name.
pub fn find_partial(name: &str) -> Option<&'static Partial> {
    PARTIAL_CATALOG.iter().find(|partial| partial.name == name)
}

/// Loads every catalog partial and registers it on `tera`.
///
/// All reads are issued concurrently. The first failed read fails the whole
/// call and nothing is registered, so `tera` is either fully populated or
/// unchanged. Registering a name that already exists replaces it.
pub async fn register_all<F: FileStore>(
    tera: &mut Tera,
    store: &F,
    locator: &TemplateLocator,
    override_dir: Option<&str>,
) -> Result<(), EngineError> {
    let loads = PARTIAL_CATALOG.iter().map(|partial| {
        let path = locator.resolve(store, override_dir, partial.path);
        async move {
            match store.read(&path).await {
                Ok(source) => Ok((partial.name, source)),
                Err(source) => Err(EngineError::PartialLoad {
                    name: partial.name.to_string(),
                    path,
                    source,
                }),
            }
        }
    });
    let sources = try_join_all(loads).await?;

    // Each fragment is added on its own so a parse error names the partial.
    let mut staged = tera.clone();
    for (name, source) in sources {
        staged.add_raw_template(name, &source).map_err(|source| EngineError::Compile {
            template: name.to_string(),
            source,
        })?;
    }
    *tera = staged;

    debug!("Registered {} partials", PARTIAL_CATALOG.len());
    Ok(())
}
