use std::io::{self, BufRead};

use anyhow::Context;
use colored::Colorize;

use seqweave_core::{MergeDiscipline, SequenceMerger};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Merge(args) => cmd_merge(args, cli.format),
        Command::Demo(args) => cmd_demo(args, cli.format),
    }
}

fn discipline_of(arg: &DisciplineArg) -> MergeDiscipline {
    match arg {
        DisciplineArg::FreeTail => MergeDiscipline::FreeTail,
        DisciplineArg::SharedTerminal => MergeDiscipline::SharedTerminal,
    }
}

/// Parse one comma-separated sequence, e.g. "A,B,F,E".
fn parse_sequence(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn render(items: &[String]) -> String {
    items.join("->")
}

fn cmd_merge(args: MergeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let sequences: Vec<Vec<String>> = if args.sequences.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("reading sequences from stdin")?
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| parse_sequence(line))
            .collect()
    } else {
        args.sequences.iter().map(|s| parse_sequence(s)).collect()
    };

    let mut merger = SequenceMerger::new(discipline_of(&args.discipline));
    for sequence in &sequences {
        merger
            .merge(sequence)
            .with_context(|| format!("merging {}", render(sequence)))?;
    }

    match format {
        OutputFormat::Text => {
            for sequence in &sequences {
                println!("{} {}", "input:".dimmed(), render(sequence));
            }
            println!("{} {}", "merged:".green().bold(), render(&merger.merged_order()));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&merger.merged_order())?);
        }
    }

    Ok(())
}

fn cmd_demo(args: DemoArgs, format: OutputFormat) -> anyhow::Result<()> {
    let seq_a: Vec<String> = ["A", "B", "F", "E"].map(String::from).to_vec();
    let seq_b: Vec<String> = ["A", "F", "G", "C", "E"].map(String::from).to_vec();

    let mut merger = SequenceMerger::new(discipline_of(&args.discipline));
    merger.merge(&seq_a).context("merging the first sample")?;
    merger.merge(&seq_b).context("merging the second sample")?;

    match format {
        OutputFormat::Text => {
            println!("seqA: {}", render(&seq_a));
            println!("seqB: {}", render(&seq_b));
            println!("{} {}", "merged:".green().bold(), render(&merger.merged_order()));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&merger.merged_order())?);
        }
    }

    Ok(())
}
