//! Parsing command-line arguments.

use anyhow::{bail, Context, Result};
use clap::{command, value_parser, Arg, ArgMatches, Command};
use lifegrid_lib::Config;
use log::debug;
use std::{ffi::OsStr, fs, path::Path};

/// A struct to store the parse results.
#[derive(Debug)]
pub(crate) struct Args {
    pub(crate) config: Config,
    #[cfg(feature = "tui")]
    pub(crate) tui: bool,
}

/// The command-line interface.
pub(crate) fn command() -> Command {
    let mut cmd = command!()
        .long_about(
            "Conway's Game of Life on a bounded grid\n\
             \n\
             Starts from a random board where each cell is alive with probability 1/2, \
             and prints one frame per generation.\n\
             * Living cells are represented by `*`;\n\
             * Dead cells are represented by spaces;\n\
             * Cells on the edges simply have fewer neighbors. The board does not wrap around.\n",
        )
        .arg(
            Arg::new("WIDTH")
                .help("Width of the board [default: 50]")
                .index(1)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("HEIGHT")
                .help("Height of the board [default: 50]")
                .index(2)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("FRAMES")
                .help("Number of generations to show [default: 1000]")
                .short('f')
                .long("frames")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("DELAY")
                .help("Delay between frames in milliseconds [default: 150]")
                .short('d')
                .long("delay")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed of the initial board")
                .long_help(
                    "Seed of the initial board\n\
                     The same seed and size always give the same board.\n\
                     If it is not set, the board is different every time.\n",
                )
                .short('s')
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a file")
                .long_help(
                    "Reads the configuration from a file\n\
                     Supports TOML (.toml), YAML (.yaml, .yml) and JSON (.json).\n\
                     Missing fields take their default values. \
                     Other arguments override the values in the file.\n",
                )
                .short('c')
                .long("config")
                .value_parser(value_parser!(std::path::PathBuf)),
        );

    #[cfg(feature = "tui")]
    {
        cmd = cmd.arg(
            Arg::new("TUI")
                .help("Redraws the board in place instead of printing frames one after another")
                .long_help(
                    "Redraws the board in place instead of printing frames one after another\n\
                     Press [q], [Esc] or [Ctrl-C] to quit early.\n\
                     Ignored when the output is not a terminal.\n",
                )
                .short('t')
                .long("tui")
                .action(clap::ArgAction::SetTrue),
        );
    }

    cmd
}

/// Reads a configuration file. The format is chosen by the extension.
pub(crate) fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Unable to read config file {}", path.display()))?;
    let config = match path.extension().and_then(OsStr::to_str) {
        Some("toml") => toml::from_str(&text)
            .with_context(|| format!("Invalid TOML in {}", path.display()))?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
            .with_context(|| format!("Invalid YAML in {}", path.display()))?,
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?,
        _ => bail!(
            "Unknown config format: {}. Expected .toml, .yaml, .yml or .json",
            path.display()
        ),
    };
    Ok(config)
}

impl Args {
    /// Parses the command-line arguments.
    ///
    /// Exits the process on invalid arguments, like clap does.
    pub(crate) fn parse() -> Result<Self> {
        let matches = command().get_matches();
        Args::from_matches(&matches)
    }

    pub(crate) fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let mut config = match matches.get_one::<std::path::PathBuf>("CONFIG") {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };

        if let Some(&width) = matches.get_one::<i32>("WIDTH") {
            config.width = width;
        }
        if let Some(&height) = matches.get_one::<i32>("HEIGHT") {
            config.height = height;
        }
        if let Some(&frames) = matches.get_one::<u64>("FRAMES") {
            config.frames = frames;
        }
        if let Some(&delay_ms) = matches.get_one::<u64>("DELAY") {
            config.delay_ms = delay_ms;
        }
        if let Some(&seed) = matches.get_one::<u64>("SEED") {
            config.seed = Some(seed);
        }

        if config.width <= 0 || config.height <= 0 {
            bail!(
                "Width and height should be positive: got {}x{}",
                config.width,
                config.height
            );
        }
        debug!("{:?}", config);

        Ok(Args {
            config,
            #[cfg(feature = "tui")]
            tui: matches.get_flag("TUI"),
        })
    }

    /// Whether to redraw the terminal in place.
    ///
    /// Frames are printed plainly unless `--tui` is given and the output is a
    /// terminal, so piped output never contains escape sequences.
    #[cfg(feature = "tui")]
    pub(crate) fn use_tui(&self, stdout_is_terminal: bool) -> bool {
        self.tui && stdout_is_terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        env,
        error::Error,
        io,
        ops::Deref,
        path::PathBuf,
        process,
    };

    fn parse(args: &[&str]) -> Result<Args> {
        let matches = command().try_get_matches_from(args)?;
        Args::from_matches(&matches)
    }

    /// A file in the temp directory, removed when dropped.
    struct TempFile(PathBuf);

    impl TempFile {
        fn new(name: &str, contents: &str) -> io::Result<Self> {
            let path = env::temp_dir().join(format!("lifegrid-{}-{}", process::id(), name));
            fs::write(&path, contents)?;
            Ok(TempFile(path))
        }
    }

    impl Deref for TempFile {
        type Target = Path;

        fn deref(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[test]
    fn defaults() -> Result<(), Box<dyn Error>> {
        let args = parse(&["lifegrid"])?;
        assert_eq!(args.config, Config::default());
        #[cfg(feature = "tui")]
        {
            assert!(!args.use_tui(true));
            assert!(!args.use_tui(false));
        }
        Ok(())
    }

    #[test]
    fn overrides() -> Result<(), Box<dyn Error>> {
        let args = parse(&["lifegrid", "20", "10", "-f", "5", "--delay", "0", "-s", "42"])?;
        assert_eq!(
            args.config,
            Config::new(20, 10).set_frames(5).set_delay_ms(0).set_seed(42)
        );
        Ok(())
    }

    #[test]
    fn non_positive_size() {
        assert!(parse(&["lifegrid", "0", "10"]).is_err());
        assert!(parse(&["lifegrid", "10", "-3"]).is_err());
    }

    #[test]
    #[cfg(feature = "tui")]
    fn tui_mode() -> Result<(), Box<dyn Error>> {
        let args = parse(&["lifegrid", "--tui"])?;
        assert!(args.use_tui(true));
        assert!(!args.use_tui(false));
        assert!(parse(&["lifegrid", "-t"])?.use_tui(true));
        Ok(())
    }

    #[test]
    fn config_files() -> Result<(), Box<dyn Error>> {
        let toml = TempFile::new("config.toml", "width = 8\nheight = 6\nseed = 1\n")?;
        let yaml = TempFile::new("config.yaml", "width: 8\nheight: 6\nseed: 1\n")?;
        let json = TempFile::new("config.json", r#"{"width": 8, "height": 6, "seed": 1}"#)?;
        let expected = Config::new(8, 6).set_seed(1);
        for path in [&toml, &yaml, &json] {
            assert_eq!(load_config(path)?, expected);
        }

        let toml_str = toml.to_str().ok_or("non UTF-8 temp path")?;
        let args = parse(&["lifegrid", "-c", toml_str, "12"])?;
        assert_eq!(args.config, Config::new(12, 6).set_seed(1));

        let bad = TempFile::new("config.txt", "width = 8")?;
        assert!(load_config(&bad).is_err());
        let zero = TempFile::new("zero.toml", "width = 0")?;
        let zero_str = zero.to_str().ok_or("non UTF-8 temp path")?;
        assert!(parse(&["lifegrid", "--config", zero_str]).is_err());

        let path = bad.to_path_buf();
        drop(bad);
        assert!(!path.exists());
        Ok(())
    }
}
