//! Snapshot presets
//!
//! A run has no external configuration. Each preset pins the root directory,
//! output file, extension filter and marker for one flavour of snapshot.

use std::path::PathBuf;

use crate::core::error::{Result, SnapError};
use crate::core::filter::ExtensionFilter;

/// Name of the snapshot file written by every preset
pub const OUTPUT_FILE_NAME: &str = "output.txt";

/// Marker used by the Go-only preset
pub const UNDERSCORE_MARKER: &str = "__________";

/// Marker used by the Go + SQL preset
pub const DASH_MARKER: &str = "------";

/// Everything a single aggregation run needs
#[derive(Debug, Clone)]
pub struct AggregateConfig {
    /// Traversal starting point
    pub root: PathBuf,
    /// File that receives the snapshot (truncated on open)
    pub output: PathBuf,
    /// Which candidate files are included
    pub extensions: ExtensionFilter,
    /// Literal that opens every entry's delimiter line
    pub marker: String,
}

/// Built-in snapshot flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// `.go` files under `.`, written to `output.txt`
    Go,
    /// `.go` and `.sql` files under the current directory
    GoSql,
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "go" => Ok(Preset::Go),
            "go-sql" => Ok(Preset::GoSql),
            _ => Err(format!("Unknown preset: {}", s)),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Preset::Go => write!(f, "go"),
            Preset::GoSql => write!(f, "go-sql"),
        }
    }
}

impl Preset {
    /// Resolve the preset into a run configuration
    pub fn config(self) -> Result<AggregateConfig> {
        match self {
            Preset::Go => Ok(AggregateConfig {
                root: PathBuf::from("."),
                output: PathBuf::from(OUTPUT_FILE_NAME),
                extensions: ExtensionFilter::new([".go"])?,
                marker: UNDERSCORE_MARKER.to_string(),
            }),
            Preset::GoSql => {
                let cwd = std::env::current_dir().map_err(SnapError::CurrentDir)?;
                Ok(AggregateConfig {
                    output: cwd.join(OUTPUT_FILE_NAME),
                    root: cwd,
                    extensions: ExtensionFilter::new([".go", ".sql"])?,
                    marker: DASH_MARKER.to_string(),
                })
            }
        }
    }

    /// One-line confirmation printed after a successful run
    pub fn confirmation(self, output: &std::path::Path) -> String {
        match self {
            Preset::Go => format!("File contents have been written to {}", output.display()),
            Preset::GoSql => format!("Go files copied to {}", output.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use std::path::Path;

    #[test]
    fn test_parse_preset() {
        assert_eq!("go".parse::<Preset>().unwrap(), Preset::Go);
        assert_eq!("go-sql".parse::<Preset>().unwrap(), Preset::GoSql);
        assert!("rust".parse::<Preset>().is_err());
    }

    #[test]
    fn test_parse_matches_cli_values_exactly() {
        // Same set the CLI's value parser accepts, nothing more
        assert!("GO".parse::<Preset>().is_err());
        assert!("GO-SQL".parse::<Preset>().is_err());
        assert!("gosql".parse::<Preset>().is_err());
    }

    #[test]
    fn test_display_roundtrips_cli_name() {
        assert_eq!(Preset::Go.to_string(), "go");
        assert_eq!(Preset::GoSql.to_string(), "go-sql");
    }

    #[test]
    fn test_go_preset() {
        let config = Preset::Go.config().unwrap();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.output, PathBuf::from("output.txt"));
        assert_eq!(config.marker, "__________");
        assert!(config.extensions.matches(OsStr::new("main.go")));
        assert!(!config.extensions.matches(OsStr::new("schema.sql")));
    }

    #[test]
    fn test_go_sql_preset_uses_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let config = Preset::GoSql.config().unwrap();
        assert_eq!(config.root, cwd);
        assert_eq!(config.output, cwd.join("output.txt"));
        assert_eq!(config.marker, "------");
        assert!(config.extensions.matches(OsStr::new("schema.sql")));
    }

    #[test]
    fn test_confirmation_names_output() {
        let out = Path::new("/work/output.txt");
        assert_eq!(
            Preset::Go.confirmation(out),
            "File contents have been written to /work/output.txt"
        );
        assert_eq!(
            Preset::GoSql.confirmation(out),
            "Go files copied to /work/output.txt"
        );
    }
}
