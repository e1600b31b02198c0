//! Config command: show where settings come from and what they are.

use anyhow::Result;
use returnto_core::config::{self, ResolverConfig};
use std::path::Path;

pub fn run_config(explicit: Option<&Path>, cfg: &ResolverConfig) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("config file: {}", path.display());
    println!("fallback_path = {:?}", cfg.fallback_path);
    println!("param_name = {:?}", cfg.param_name);
    println!("max_decode_rounds = {}", cfg.max_decode_rounds);
    Ok(())
}
