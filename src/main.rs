use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{*};

use bookman::persistence;
use bookman::shell::Shell;
use bookman::Config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    debug!("{:?}", config);

    let fresh = config.fresh_list().context("invalid default list name")?;
    let (list, is_fresh) = persistence::load_or(&config.data_path, config.index_buckets, fresh)
        .with_context(|| format!("Load data from {} failed", config.data_path.display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut shell = Shell::new(list, &config.data_path);
    shell.greet(&mut out, is_fresh)?;
    shell.run(stdin.lock(), &mut out).context("Error reading command")?;
    out.flush()?;
    Ok(())
}
