use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "seqweave",
    about = "Seqweave — merge DAG linearizations into one total order",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum DisciplineArg {
    /// Append the spine's leftover tail after the overlap
    FreeTail,
    /// Require every sequence to end in the same item
    SharedTerminal,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge sequences given as comma-separated item lists
    Merge(MergeArgs),
    /// Replay the built-in sample merge
    Demo(DemoArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    /// Sequences to merge, in order (e.g. "A,B,F,E"); read from stdin,
    /// one sequence per line, when none are given
    pub sequences: Vec<String>,

    #[arg(short, long, default_value = "free-tail")]
    pub discipline: DisciplineArg,
}

#[derive(Args)]
pub struct DemoArgs {
    #[arg(short, long, default_value = "free-tail")]
    pub discipline: DisciplineArg,
}
