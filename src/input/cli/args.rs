use crate::config::errors::ConfigError;
use crate::config::store::ConfigStore;
use clap::Parser;
use std::error::Error;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_SIZE: (u32, u32) = (800, 600);

/// Render the Mandelbrot set progressively; stop it at any time.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Surface size as WIDTHxHEIGHT
    #[arg(long, default_value = "800x600", value_parser = parse_size)]
    pub size: (u32, u32),

    /// Stop the render after this many milliseconds
    #[arg(long)]
    pub stop_after_ms: Option<u64>,

    /// Configuration assignments, e.g. max_iter=1000 algorithm=log
    #[arg(value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub assignments: Vec<String>,
}

#[derive(Debug)]
pub enum CliError {
    Arguments(clap::Error),
    Config(ConfigError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arguments(err) => write!(f, "{}", err),
            Self::Config(err) => write!(f, "{}", err),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arguments(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        Self::Arguments(err)
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Run options resolved from [`CliArgs`]: the surface size, an optional time
/// limit and the configuration store the assignments were applied to.
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub size: (u32, u32),
    pub stop_after: Option<Duration>,
    pub config: ConfigStore,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            stop_after: None,
            config: ConfigStore::with_defaults(),
        }
    }
}

impl CliArgs {
    pub fn into_options(self) -> Result<CliOptions, ConfigError> {
        let mut config = ConfigStore::with_defaults();

        for assignment in &self.assignments {
            config.apply_assignment(assignment)?;
        }

        Ok(CliOptions {
            size: self.size,
            stop_after: self.stop_after_ms.map(Duration::from_millis),
            config,
        })
    }
}

impl CliOptions {
    /// Parses a full argument list, program name first.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(CliArgs::try_parse_from(args)?.into_options()?)
    }
}

fn parse_size(value: &str) -> Result<(u32, u32), String> {
    let invalid = || format!("'{}' is not a size, expected WIDTHxHEIGHT", value);

    let (width, height) = value
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;
    let width: u32 = width.trim().parse().map_err(|_| invalid())?;
    let height: u32 = height.trim().parse().map_err(|_| invalid())?;

    if width == 0 || height == 0 {
        return Err(format!("'{}' has a zero dimension", value));
    }

    Ok((width, height))
}

fn parse_assignment(value: &str) -> Result<String, String> {
    match value.split_once('=') {
        Some((key, _)) if !key.trim().is_empty() => Ok(value.to_string()),
        _ => Err(format!("'{}' is not a KEY=VALUE assignment", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::store::keys;
    use clap::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_no_arguments_gives_defaults() {
        let options = CliOptions::try_parse_from(["mandel_render"]).unwrap();

        assert_eq!(options, CliOptions::default());
        assert_eq!(options.size, (800, 600));
        assert_eq!(options.stop_after, None);
    }

    #[test]
    fn test_run_options_and_config_assignments() {
        let options = CliOptions::try_parse_from([
            "mandel_render",
            "--size",
            "320x200",
            "--stop-after-ms",
            "1500",
            "max_iter=1000",
            "algorithm=log",
            "mandel_color=[10, 20, 30]",
        ])
        .unwrap();

        assert_eq!(options.size, (320, 200));
        assert_eq!(options.stop_after, Some(Duration::from_millis(1500)));
        assert_eq!(options.config.get(keys::MAX_ITER), Some(&json!(1000)));
        assert_eq!(options.config.get(keys::ALGORITHM), Some(&json!("log")));
        assert_eq!(
            options.config.get(keys::MANDEL_COLOR),
            Some(&json!([10, 20, 30]))
        );
        assert_eq!(options.config.get("size"), None);
    }

    #[test]
    fn test_negative_coordinates_are_assignments() {
        let args = CliArgs::try_parse_from(["mandel_render", "min_c_real=-1.5"]).unwrap();

        assert_eq!(args.assignments, vec!["min_c_real=-1.5".to_string()]);
        assert_eq!(
            args.into_options().unwrap().config.get(keys::MIN_C_REAL),
            Some(&json!(-1.5))
        );
    }

    #[test]
    fn test_invalid_sizes_are_rejected() {
        for value in ["800", "0x600", "axb", "12x"] {
            let err = CliArgs::try_parse_from(["mandel_render", "--size", value]).unwrap_err();

            assert_eq!(err.kind(), ErrorKind::ValueValidation, "{} should be rejected", value);
        }
    }

    #[test]
    fn test_invalid_duration_is_rejected() {
        let err = CliOptions::try_parse_from(["mandel_render", "--stop-after-ms", "soon"])
            .unwrap_err();

        assert!(matches!(err, CliError::Arguments(_)));
    }

    #[test]
    fn test_bare_word_is_not_an_assignment() {
        let err = CliArgs::try_parse_from(["mandel_render", "render"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_command_definition_is_consistent() {
        use clap::CommandFactory;

        CliArgs::command().debug_assert();
    }
}
