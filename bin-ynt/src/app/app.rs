use log::info;
use clap::{Parser, Subcommand};

use super::cmd::{diff, eval, root};
use super::utils::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="lower")]
pub enum Cmd {
    /// Differentiate a polynomial.
    Diff(diff::Args),
    /// Evaluate a polynomial (or its derivative) at given points.
    Eval(eval::Args),
    /// Find a root by Newton's method.
    Root(root::Args),
}

impl CliArgs { 
    fn log_level(&self) -> log::LevelFilter { 
        let level = match &self.command { 
            Cmd::Diff(args) => args.log,
            Cmd::Eval(args) => args.log,
            Cmd::Root(args) => args.log,
        };
        ypoly::util::log::level_filter(level)
    }
}

pub struct App {
    pub args: CliArgs
}

impl App { 
    pub fn new() -> Self { 
        let args = CliArgs::parse();
        App { args }
    }

    pub fn new_with(args: CliArgs) -> Self { 
        App { args }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> { 
        self.init_logger();

        info!("args: {:?}", self.args);

        measure("time", || self.dispatch())
    }

    fn init_logger(&self) {
        let l = self.args.log_level();
        ypoly::util::log::init_simple_logger(l).ok(); // fails only if already set.
    }

    fn dispatch(&self) -> Result<String, Box<dyn std::error::Error>> { 
        guard_panic(||
            match &self.args.command { 
                Cmd::Diff(args) => diff::dispatch(args),
                Cmd::Eval(args) => eval::dispatch(args),
                Cmd::Root(args) => root::dispatch(args),
            }
        )
    }
}
