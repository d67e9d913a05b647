use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use gb_graph_enumeration::analysis::vertex_connectivity;
use gb_graph_enumeration::code::GbCode;
use gb_graph_enumeration::{
    BruteForceOracle, Enumeration, EnumerationStats, Enumerator, IsomorphismOracle,
    SerializableGraph, Vf2Oracle,
};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OracleKind {
    /// petgraph VF2 on multiplicity-weighted graphs
    Vf2,
    /// Exhaustive bijection search (small n only)
    Brute,
}

/// Enumerate non-isomorphic (2,2)-GB code graphs for a range of moduli.
#[derive(Parser)]
#[command(name = "gb-enumerate")]
struct Args {
    /// Smallest modulus n.
    #[arg(long, default_value_t = 3)]
    min: usize,
    /// Largest modulus n (inclusive).
    #[arg(long, default_value_t = 20)]
    max: usize,
    #[arg(long, value_enum, default_value_t = OracleKind::Vf2)]
    oracle: OracleKind,
    /// Add logical qubit count and vertex connectivity per representative.
    #[arg(long)]
    analyze: bool,
    /// Include each representative's edge list.
    #[arg(long)]
    with_edges: bool,
    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Serialize)]
struct RepresentativeReport {
    n: usize,
    a: usize,
    b: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    physical_qubits: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    logical_qubits: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    connectivity: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    graph: Option<SerializableGraph>,
}

#[derive(Serialize)]
struct ModulusReport {
    n: usize,
    stats: EnumerationStats,
    representatives: Vec<RepresentativeReport>,
}

fn report(enumeration: Enumeration, args: &Args) -> Result<ModulusReport> {
    let mut representatives = Vec::with_capacity(enumeration.representatives.len());
    for t in enumeration.representatives {
        let mut r = RepresentativeReport {
            n: t.n,
            a: t.a,
            b: t.b,
            physical_qubits: None,
            logical_qubits: None,
            connectivity: None,
            graph: None,
        };
        if args.analyze || args.with_edges {
            let graph = t.graph()?;
            if args.analyze {
                let code = GbCode::from(t);
                r.physical_qubits = Some(code.physical_qubits());
                r.logical_qubits = Some(code.logical_qubits());
                r.connectivity = Some(vertex_connectivity(&graph));
            }
            if args.with_edges {
                r.graph = Some(SerializableGraph::from(&graph));
            }
        }
        representatives.push(r);
    }
    Ok(ModulusReport {
        n: enumeration.n,
        stats: enumeration.stats,
        representatives,
    })
}

fn save_reports(path: Option<&PathBuf>, reports: &[ModulusReport]) -> Result<()> {
    match path {
        Some(path) => {
            println!("Saving {} tables to {}", reports.len(), path.display());
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, reports)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            serde_json::to_writer_pretty(&mut lock, reports)?;
            writeln!(lock)?;
        }
    }
    Ok(())
}

fn run<O: IsomorphismOracle>(oracle: O, args: &Args) -> Result<Vec<ModulusReport>> {
    let bars = MultiProgress::new();
    let moduli = bars.add(ProgressBar::new((args.max - args.min + 1) as u64));
    moduli.set_style(
        ProgressStyle::with_template(
            "[mod  ] [{elapsed_precise}] {wide_bar:.cyan/blue} {pos}/{len}",
        )?
        .progress_chars("█▉▊▋▌▍▎▏  "),
    );
    let enumerator = Enumerator::new(oracle).with_progress(bars.add(ProgressBar::new(0)));

    let mut reports = Vec::new();
    let mut total_tests = 0;
    for n in args.min..=args.max {
        let enumeration = enumerator.enumerate(n)?;
        total_tests += enumeration.stats.isomorphism_tests;
        bars.println(format!(
            "n = {n}: {} classes ({} of {} candidates tested, {} isomorphism tests)",
            enumeration.representatives.len(),
            enumeration.stats.admitted,
            enumeration.stats.candidates,
            enumeration.stats.isomorphism_tests
        ))?;
        reports.push(report(enumeration, args)?);
        moduli.inc(1);
    }
    moduli.finish_with_message("✔ Enumeration complete");
    bars.clear()?;

    let classes: usize = reports.iter().map(|r| r.representatives.len()).sum();
    eprintln!(
        "Enumeration complete: {} moduli, {} classes, {} isomorphism tests",
        reports.len(),
        classes,
        total_tests
    );
    Ok(reports)
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.min == 0 {
        bail!("--min must be at least 1");
    }
    if args.min > args.max {
        bail!("--min ({}) is larger than --max ({})", args.min, args.max);
    }

    let reports = match args.oracle {
        OracleKind::Vf2 => run(Vf2Oracle, &args)?,
        OracleKind::Brute => run(BruteForceOracle, &args)?,
    };
    save_reports(args.out.as_ref(), &reports)
}
