use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// List-related extensions.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Extensions {
    /// Letter and Roman numeral markers (`a.`, `IV.`) set the list style
    pub fancy_lists: bool,
    /// All-letter markers that are valid Roman numerals count as Roman
    pub roman_numerals: bool,
    /// Emit a start index for lists that do not begin at 1
    pub startnum: bool,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            fancy_lists: true,
            roman_numerals: true,
            startnum: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Columns per indentation level; list markers must be indented less than
    /// this, nested markers less than twice this.
    pub tab_width: usize,
    pub extensions: Extensions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width: 4,
            extensions: Extensions::default(),
        }
    }
}

/// Widest tab stop honoured; larger configured values are clamped.
pub const MAX_TAB_WIDTH: usize = 64;

impl Config {
    /// Tab width used for indentation thresholds, within `1..=MAX_TAB_WIDTH`.
    pub fn effective_tab_width(&self) -> usize {
        self.tab_width.clamp(1, MAX_TAB_WIDTH)
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn tab_width(mut self, width: usize) -> Self {
        self.config.tab_width = width;
        self
    }

    pub fn fancy_lists(mut self, enabled: bool) -> Self {
        self.config.extensions.fancy_lists = enabled;
        self
    }

    pub fn roman_numerals(mut self, enabled: bool) -> Self {
        self.config.extensions.roman_numerals = enabled;
        self
    }

    pub fn startnum(mut self, enabled: bool) -> Self {
        self.config.extensions.startnum = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".fancylists.toml", "fancylists.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn user_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("fancylists").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    let p = dirs::config_dir()?.join("fancylists").join("config.toml");
    p.is_file().then_some(p)
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .fancylists.toml, fancylists.toml
/// 3) $XDG_CONFIG_HOME/fancylists/config.toml or the platform config dir
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir) {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring {}: {e}", p.display()),
        }
    }

    if let Some(p) = user_config_path() {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring {}: {e}", p.display()),
        }
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
