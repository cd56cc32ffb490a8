use crate::config::{Config, load_config};
use crate::layout::{FilterSpec, LayoutEngine, LayoutResult};
use crate::layout_dump::{LayoutDump, write_layout_dump};
use crate::parser::parse_graph;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fmt::Write as _;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "dgl",
    version,
    about = "Lay out a file-dependency graph as domain, role and file boxes"
)]
pub struct Args {
    /// Input graph (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Config file (JSON5) with `layout` and `filter` sections
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Keep only files whose label or path contains this text
    #[arg(short = 's', long = "search")]
    pub search: Option<String>,

    /// Keep only files in this language ('all' for every language)
    #[arg(short = 'l', long = "language")]
    pub language: Option<String>,

    /// Keep only files with this role ('all' for every role)
    #[arg(short = 'r', long = "role")]
    pub role: Option<String>,

    /// Include absolute coordinates in the JSON output
    #[arg(long = "absolute")]
    pub absolute: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Summary,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    apply_filter_args(&mut config.filter, &args)?;

    let input = read_input(args.input.as_deref())?;
    let graph = parse_graph(&input).context("failed to parse input graph")?;

    let Config { layout, filter } = config;
    let engine = LayoutEngine::new(layout)?;
    let result = engine.layout(&graph, &filter);
    tracing::info!(
        nodes = result.nodes.len(),
        of = graph.nodes.len(),
        edges = result.edges.len(),
        "layout complete"
    );

    match args.format {
        OutputFormat::Json => match args.output.as_deref() {
            Some(path) => write_layout_dump(path, &result, args.absolute)?,
            None => {
                let json = LayoutDump::from_layout(&result, args.absolute).to_json()?;
                write_output(&json, None)?;
            }
        },
        OutputFormat::Summary => {
            write_output(&render_summary(&result), args.output.as_deref())?;
        }
    }

    Ok(())
}

fn apply_filter_args(filter: &mut FilterSpec, args: &Args) -> Result<()> {
    if let Some(search) = &args.search {
        filter.search = search.clone();
    }
    if let Some(language) = &args.language {
        filter.language = FilterSpec::parse_language(language);
    }
    if let Some(role) = &args.role {
        filter.role = FilterSpec::parse_role(role)?;
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_output(contents: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, contents)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            if !contents.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

fn render_summary(result: &LayoutResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "layout {:.0}x{:.0}: {} files, {} edges",
        result.width,
        result.height,
        result.nodes.len(),
        result.edges.len()
    );
    for domain in &result.domains {
        let _ = writeln!(
            out,
            "{} ({} files) at ({:.0}, {:.0}) size {:.0}x{:.0}",
            domain.label, domain.member_count, domain.x, domain.y, domain.width, domain.height
        );
        for role in &domain.roles {
            let _ = writeln!(
                out,
                "  {:<12} {:>4} files  weight {:>5}  at ({:.0}, {:.0}) size {:.0}x{:.0}",
                role.label, role.member_count, role.weight, role.x, role.y, role.width, role.height
            );
        }
    }
    out
}
