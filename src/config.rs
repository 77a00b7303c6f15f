//! Output configuration.
//!
//! The deck has no flags or config files; everything here is derived from
//! the environment or fixed.
use crate::common::unit::{Emu, inches};
use crate::error::{DeckError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// File name of the written deck.
pub const OUTPUT_FILE_NAME: &str = "AI課程簡報.pptx";

/// Directory under the home directory that receives the deck.
pub const OUTPUT_DIR: &str = "Desktop";

/// Where and at what size the deck is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    pub output_path: PathBuf,
    /// Canvas width in EMUs
    pub slide_width: Emu,
    /// Canvas height in EMUs
    pub slide_height: Emu,
}

impl DeckConfig {
    /// Resolve the output path from `HOME`, falling back to `USERPROFILE`.
    pub fn from_env() -> Result<Self> {
        Self::from_home_vars(std::env::var_os("HOME"), std::env::var_os("USERPROFILE"))
    }

    /// Pick the home directory from the values of `HOME` and `USERPROFILE`.
    /// Unset and empty values are skipped.
    fn from_home_vars(home: Option<OsString>, user_profile: Option<OsString>) -> Result<Self> {
        let home = home
            .filter(|h| !h.is_empty())
            .or_else(|| user_profile.filter(|h| !h.is_empty()))
            .ok_or(DeckError::HomeNotFound)?;
        Ok(Self::for_home(home))
    }

    /// Configuration writing to `<home>/Desktop/AI課程簡報.pptx`.
    pub fn for_home(home: impl AsRef<Path>) -> Self {
        Self {
            output_path: home.as_ref().join(OUTPUT_DIR).join(OUTPUT_FILE_NAME),
            ..Self::default()
        }
    }
}

impl Default for DeckConfig {
    /// 13.333" x 7.5" (16:9), written to the current directory.
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(OUTPUT_FILE_NAME),
            slide_width: inches(13.333),
            slide_height: inches(7.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_home() {
        let config = DeckConfig::for_home("/home/someone");
        assert_eq!(
            config.output_path,
            PathBuf::from("/home/someone/Desktop/AI課程簡報.pptx")
        );
        assert_eq!(config.slide_width, 12_191_695);
        assert_eq!(config.slide_height, 6_858_000);
    }

    #[test]
    fn test_home_lookup_order() {
        let desktop = |home: &str| PathBuf::from(home).join(OUTPUT_DIR).join(OUTPUT_FILE_NAME);

        let both = DeckConfig::from_home_vars(Some("/home/a".into()), Some("C:/Users/b".into()));
        assert_eq!(both.unwrap().output_path, desktop("/home/a"));

        let profile_only = DeckConfig::from_home_vars(None, Some("C:/Users/b".into()));
        assert_eq!(profile_only.unwrap().output_path, desktop("C:/Users/b"));

        let empty_home = DeckConfig::from_home_vars(Some("".into()), Some("C:/Users/b".into()));
        assert_eq!(empty_home.unwrap().output_path, desktop("C:/Users/b"));
    }

    #[test]
    fn test_no_home_directory() {
        assert!(matches!(
            DeckConfig::from_home_vars(None, None),
            Err(DeckError::HomeNotFound)
        ));
        assert!(matches!(
            DeckConfig::from_home_vars(Some("".into()), Some("".into())),
            Err(DeckError::HomeNotFound)
        ));
    }
}
