pub mod gamemode;

pub use gamemode::GameMode;

/// Resolves a path relative to the workspace root of the crate invoking it.
/// Used to reach the bundled `assets/` folder from tests and tools.
#[macro_export]
macro_rules! workspace_path {
    ($path:expr) => {{
        use std::path::Path;
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .map_or_else(|| Path::new(".").join($path), |root| root.join($path))
    }};
}
