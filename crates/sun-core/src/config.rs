//! Runtime table configuration

/// Per-table runtime configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableConfig {
    /// Name shown in miss diagnostics
    pub name: &'static str,
    /// Emit a warning when an accessor misses
    pub warn_on_miss: bool,
}

impl TableConfig {
    /// Warn-on-miss configuration under the given name
    pub const fn named(name: &'static str) -> Self {
        TableConfig {
            name,
            warn_on_miss: true,
        }
    }

    /// Tables probed speculatively, where a miss is expected
    pub const fn quiet(name: &'static str) -> Self {
        TableConfig {
            name,
            warn_on_miss: false,
        }
    }
}
