use crate::session::{self, Step};
use clap::{Parser, ValueEnum};
use coverflow::ClickIndexPolicy;

#[derive(Parser, Debug)]
#[command(name = "coverflow-demo")]
#[command(about = "Replays a touch script against a cover-flow pager container", long_about = None)]
pub struct Cli {
    /// Touch steps: tap:X, long:X or drag:X1:X2 (container x coordinates).
    /// A built-in script runs when none are given.
    #[arg(value_name = "STEP")]
    pub steps: Vec<Step>,

    /// Number of cover pages
    #[arg(long, default_value_t = 10)]
    pub covers: usize,

    /// What to do with clicks before the first or after the last cover
    #[arg(long, value_enum, default_value = "pass-through")]
    pub policy: PolicyArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    PassThrough,
    Clamp,
    Ignore,
}

impl From<PolicyArg> for ClickIndexPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::PassThrough => ClickIndexPolicy::PassThrough,
            PolicyArg::Clamp => ClickIndexPolicy::Clamp,
            PolicyArg::Ignore => ClickIndexPolicy::Ignore,
        }
    }
}

impl Cli {
    pub fn script(&self) -> Vec<Step> {
        if self.steps.is_empty() {
            session::default_script()
        } else {
            self.steps.clone()
        }
    }
}
