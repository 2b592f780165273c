//! Command-line arguments for the `vellum` binary.
//!
//! ```text
//! vellum [CONFIG.toml] [--seed N]
//! ```

use std::path::PathBuf;

use vellum_random::Seed;

use crate::config::SketchConfig;
use crate::error::{SketchError, SketchResult};

/// Usage line printed for `--help` and argument errors.
pub const USAGE: &str = "usage: vellum [CONFIG.toml] [--seed N]";

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Optional configuration file.
    pub config: Option<PathBuf>,
    /// Seed override; wins over the file.
    pub seed: Option<Seed>,
    /// `--help` was given.
    pub help: bool,
}

impl CliArgs {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// [`SketchError::Usage`] for unknown flags, a missing or malformed seed,
    /// or more than one config path.
    pub fn parse<I>(args: I) -> SketchResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "-s" | "--seed" => {
                    let value = args.next().ok_or_else(|| {
                        SketchError::Usage(format!("--seed needs a value\n{USAGE}"))
                    })?;
                    let seed = value
                        .parse::<Seed>()
                        .map_err(|err| SketchError::Usage(format!("{err}\n{USAGE}")))?;
                    parsed.seed = Some(seed);
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(SketchError::Usage(format!("unknown option {flag}\n{USAGE}")));
                }
                path => {
                    if parsed.config.is_some() {
                        return Err(SketchError::Usage(format!(
                            "only one config file may be given\n{USAGE}"
                        )));
                    }
                    parsed.config = Some(PathBuf::from(path));
                }
            }
        }

        Ok(parsed)
    }

    /// Loads the configuration these arguments describe.
    ///
    /// Without a config path the defaults apply. `--seed` overrides the file.
    ///
    /// # Errors
    ///
    /// Anything [`SketchConfig::from_file`] reports.
    pub fn load_config(&self) -> SketchResult<SketchConfig> {
        let mut config = match &self.config {
            Some(path) => SketchConfig::from_file(path)?,
            None => SketchConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.random.seed = Some(seed.value());
        }
        Ok(config)
    }
}
