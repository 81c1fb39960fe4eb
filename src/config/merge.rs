//! CLI argument merging with config

use super::PackerConfig;
use crate::domain::InvalidEntryPolicy;
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub output: Option<PathBuf>,
    pub max_nesting_depth: Option<usize>,
    pub on_invalid_entry: Option<InvalidEntryPolicy>,
}

pub fn merge_cli_with_config(mut base_config: PackerConfig, cli: CliOverrides) -> PackerConfig {
    if let Some(output) = cli.output {
        base_config.output = output;
    }
    if let Some(max_nesting_depth) = cli.max_nesting_depth {
        base_config.max_nesting_depth = max_nesting_depth;
    }
    if let Some(on_invalid_entry) = cli.on_invalid_entry {
        base_config.on_invalid_entry = on_invalid_entry;
    }

    base_config
}

#[cfg(test)]
mod tests {
    use super::{merge_cli_with_config, CliOverrides};
    use crate::config::PackerConfig;
    use crate::domain::InvalidEntryPolicy;
    use std::path::PathBuf;

    #[test]
    fn cli_overrides_replace_base_values() {
        let base = PackerConfig {
            output: PathBuf::from("from-file.7z"),
            max_nesting_depth: 5,
            on_invalid_entry: InvalidEntryPolicy::Abort,
        };

        let cli = CliOverrides {
            output: Some(PathBuf::from("from-cli.7z")),
            max_nesting_depth: Some(2),
            on_invalid_entry: Some(InvalidEntryPolicy::Skip),
        };

        let merged = merge_cli_with_config(base, cli);
        assert_eq!(merged.output, PathBuf::from("from-cli.7z"));
        assert_eq!(merged.max_nesting_depth, 2);
        assert_eq!(merged.on_invalid_entry, InvalidEntryPolicy::Skip);
    }

    #[test]
    fn cli_none_values_preserve_base_values() {
        let base = PackerConfig {
            output: PathBuf::from("kept.7z"),
            max_nesting_depth: 4,
            on_invalid_entry: InvalidEntryPolicy::Skip,
        };

        let merged = merge_cli_with_config(base.clone(), CliOverrides::default());
        assert_eq!(merged, base);
    }
}
