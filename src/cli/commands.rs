use std::path::PathBuf;

use clap::Parser;

use crate::model::Filter;
use crate::tui::RunOptions;

#[derive(Parser, Debug)]
#[command(name = "tasklet", about = concat!("[x] tasklet v", env!("CARGO_PKG_VERSION"), " - a to-do list for the terminal"), version)]
pub struct Cli {
    /// Tasks to start with (blank entries are skipped)
    pub tasks: Vec<String>,

    /// Config file (default: $XDG_CONFIG_HOME/tasklet/config.toml)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (filter with TASKLET_LOG)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Initial filter: all, active or completed
    #[arg(long, value_parser = parse_filter)]
    pub filter: Option<Filter>,
}

fn parse_filter(s: &str) -> Result<Filter, String> {
    Filter::parse(s).ok_or_else(|| format!("unknown filter '{}' (expected all, active or completed)", s))
}

impl Cli {
    pub fn into_options(self) -> RunOptions {
        RunOptions {
            config_path: self.config,
            log_file: self.log_file,
            filter: self.filter,
            seed: self.tasks,
        }
    }
}
