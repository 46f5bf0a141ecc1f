//! Entry point for the **ksw** binary.
//!
//! Loads the optional configuration, runs one layout cycle against the
//! live Sway session, and exits.  All errors propagate to this boundary;
//! nothing below it terminates the process.

use ksw::config::Config;
use ksw::cycler::LayoutCycler;
use ksw::sway::msg::SwayMsg;
use log::{error, info};

/// Resolve the config directory (`$XDG_CONFIG_HOME/ksw`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("ksw")
}

/// Try to load the config from `$XDG_CONFIG_HOME/ksw/config.json`,
/// falling back to compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

fn main() {
    env_logger::init();

    let config = load_config();

    let mut cycler = LayoutCycler::new(SwayMsg::new());
    cycler.set_mode(config.mode);
    cycler.set_require_uniform_layouts(config.require_uniform_layouts);

    let stdout = std::io::stdout();
    if let Err(e) = cycler.run(&mut stdout.lock()) {
        error!("{}", e);
        std::process::exit(1);
    }
}
