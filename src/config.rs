//! Default kernels and background of a [`Resampler`], optionally read from a `config.toml`.
//!
//! ```toml
//! resize = "bilinear"
//! rotate = "quadratic"
//! pyramid = "nearest"
//! background = "white"
//! ```

use super::*;

/// The main imgwarp configuration, every key is optional
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "kebab-case", default))]
pub struct Config {
    /// The kernel used to resize
    pub resize: InterpolationKind,
    /// The kernel used to rotate
    pub rotate: InterpolationKind,
    /// The kernel used to upsample pyramid levels
    pub pyramid: InterpolationKind,
    /// The fill for rotated pixels that land outside the source
    pub background: BackgroundKind,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            resize: InterpolationKind::Bilinear,
            rotate: InterpolationKind::Quadratic,
            pyramid: InterpolationKind::Bilinear,
            background: BackgroundKind::Black,
        }
    }
}

#[cfg(feature = "config")]
impl Config {
    /// Parse a config from TOML, missing keys keep their defaults.
    /// # Errors
    /// [`Error::Config`] on malformed TOML or unknown values
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config = ::toml::from_str::<Config>(s)?;
        trace!(?config, "parsed config");
        Ok(config)
    }
    /// Read and parse a `config.toml`.
    /// # Errors
    /// [`Error::Io`] if the file can not be read, [`Error::Config`] if it can not be parsed
    #[instrument(level = "debug", fields(path = %path.as_ref().display()), skip(path))]
    pub fn load(path: impl AsRef<::std::path::Path>) -> Result<Self> {
        let s = ::std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&s)?;
        debug!("config loaded");
        Ok(config)
    }
}

#[cfg(all(test, feature = "config"))]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_keys_and_defaults() {
        let config = Config::from_toml_str("pyramid = \"nearest\"\nbackground = \"keep\"\n").unwrap();
        assert_eq!(config, Config { pyramid: InterpolationKind::Nearest, background: BackgroundKind::Keep, ..Config::default() });
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(matches!(Config::from_toml_str("resize = \"lanczos\""), Err(Error::Config(_))));
        assert!(matches!(Config::load("/nonexistent/imgwarp/config.toml"), Err(Error::Io(_))));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config { resize: InterpolationKind::Quadratic, background: BackgroundKind::White, ..Config::default() };
        let s = ::toml::to_string(&config).unwrap();
        assert!(s.contains("background = \"white\""));
        assert_eq!(Config::from_toml_str(&s).unwrap(), config);
    }
}
