//! Configuration file management and service settings.

mod manager;

pub use manager::{
    BaruaConfig, ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, ResolvedService,
    ServiceConfig, resolve_config,
};
