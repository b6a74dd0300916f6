//! Command-line argument parsing for the replay tool
//!
//! Flags override the values loaded from `config.yaml`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::MaskConfig;
use crate::mask::AdvancePolicy;

/// Replay keystrokes against a masked input field
#[derive(Parser, Debug)]
#[command(name = "maskedit", version, about = "Replay keystrokes against a masked input field")]
pub struct CliArgs {
    /// Keystroke script (read from stdin when omitted)
    #[arg(value_name = "SCRIPT")]
    pub script: Option<String>,

    /// Config file to load instead of the default
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Mask string, e.g. "+1 (XXX) XXX-XXXX"
    #[arg(short, long)]
    pub mask: Option<String>,

    /// Character marking a slot in the mask
    #[arg(long, value_name = "CHAR")]
    pub marker: Option<char>,

    /// Character shown in empty slots
    #[arg(short, long, value_name = "CHAR")]
    pub placeholder: Option<char>,

    /// Accept any character in slots, not only digits
    #[arg(long)]
    pub any_char: bool,

    /// Keep the cursor on the last slot instead of wrapping to the first
    #[arg(long)]
    pub stay: bool,

    /// Initial value laid into the mask before replaying
    #[arg(short, long, value_name = "VALUE")]
    pub initial: Option<String>,

    /// Print one JSON object per step
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Merge flags over a loaded configuration
    pub fn apply_to(&self, mut config: MaskConfig) -> MaskConfig {
        if let Some(mask) = &self.mask {
            config.mask = mask.clone();
        }
        if let Some(marker) = self.marker {
            config.slot_marker = marker;
        }
        if let Some(placeholder) = self.placeholder {
            config.placeholder = placeholder;
        }
        if self.any_char {
            config.digits_only = false;
        }
        if self.stay {
            config.advance_policy = AdvancePolicy::Stay;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("maskedit").chain(argv.iter().copied()))
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let config = args(&["123"]).apply_to(MaskConfig::default());
        assert_eq!(config, MaskConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = args(&["--mask", "##-##", "--marker", "#", "-p", "_", "--any-char", "--stay"]);
        assert!(cli.script.is_none());
        let config = cli.apply_to(MaskConfig::default());
        assert_eq!(config.mask, "##-##");
        assert_eq!(config.slot_marker, '#');
        assert_eq!(config.placeholder, '_');
        assert!(!config.digits_only);
        assert_eq!(config.advance_policy, AdvancePolicy::Stay);
    }

    #[test]
    fn test_config_path_flag() {
        let cli = args(&["-c", "/tmp/masks.yaml", "1"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/masks.yaml")));
        assert!(args(&["1"]).config.is_none());
    }

    #[test]
    fn test_script_and_json() {
        let cli = args(&["--json", "12<"]);
        assert!(cli.json);
        assert_eq!(cli.script.as_deref(), Some("12<"));
    }
}
