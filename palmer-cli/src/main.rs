//! `palmer` command line: sort quadrant text, compose descriptions, and
//! export Palmer cross charts.
//!
//! ```text
//! palmer sort UR 456                      # 654
//! palmer describe --finding UL:67 --finding LR:1
//! palmer describe --result analysis.json --lower-jaw
//! palmer chart --ur 654 --ul 67 -o chart.svg
//! palmer chart --preset primary --out-dir charts/
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chart_core::{ApproxMeasurer, ChartStyle, FontMeasurer, TextMeasurer, build_png, build_svg};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use palmer_core::{
    AnalysisResult, Dentition, Finding, JawPlacement, Quadrant, QuadrantInput, compose,
    export_file_stem, sort_quadrant,
};

#[derive(Parser)]
#[command(name = "palmer", about = "Palmer dental notation tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Put one quadrant's symbols in display order.
    Sort {
        /// Quadrant code or label (UR, UL, LR, LL, 右上, ...).
        quadrant: Quadrant,
        /// Raw symbols, e.g. `456` or `ABⅢ`.
        text: String,
    },
    /// Compose the combined description of a set of findings.
    Describe {
        /// `<quadrant>:<symbols>`, repeatable.
        #[arg(long = "finding", value_name = "QUADRANT:SYMBOLS")]
        findings: Vec<String>,
        /// Recognition result JSON to describe instead.
        #[arg(long, conflicts_with = "findings")]
        result: Option<PathBuf>,
        /// Read a result without a horizontal line as lower jaw.
        #[arg(long, requires = "result")]
        lower_jaw: bool,
        /// Also print each tooth on its own line.
        #[arg(long)]
        each: bool,
    },
    /// Render a cross chart to PNG or SVG.
    Chart(ChartArgs),
}

#[derive(clap::Args)]
struct ChartArgs {
    #[arg(long, default_value = "")]
    ur: String,
    #[arg(long, default_value = "")]
    ul: String,
    #[arg(long, default_value = "")]
    lr: String,
    #[arg(long, default_value = "")]
    ll: String,
    /// Quadrant JSON (`{"UR": "...", ...}`) from the free-text parser.
    #[arg(long, conflicts_with_all = ["ur", "ul", "lr", "ll", "preset"])]
    input: Option<PathBuf>,
    /// Fill all four quadrants with a full dentition.
    #[arg(long, value_enum)]
    preset: Option<Preset>,
    /// Style overrides (TOML).
    #[arg(long)]
    style: Option<PathBuf>,
    /// Output file; `.svg` writes SVG, anything else PNG. Defaults to a
    /// name derived from the description.
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    Permanent,
    Primary,
}

impl From<Preset> for Dentition {
    fn from(p: Preset) -> Self {
        match p {
            Preset::Permanent => Dentition::Permanent,
            Preset::Primary => Dentition::Primary,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Sort { quadrant, text } => {
            println!("{}", sort_quadrant(&text, quadrant));
        }
        Command::Describe {
            findings,
            result,
            lower_jaw,
            each,
        } => {
            let findings = match result {
                Some(path) => load_result(&path, lower_jaw)?,
                None => parse_findings(&findings)?,
            };
            if each {
                for f in &findings {
                    println!("{}\t{}", f.symbol(), f.description());
                }
            }
            println!("{}", compose(&findings));
        }
        Command::Chart(args) => chart(args)?,
    }
    Ok(())
}

fn parse_findings(groups: &[String]) -> Result<Vec<Finding>> {
    let mut out = Vec::new();
    for g in groups {
        out.extend(Finding::parse_group(g).with_context(|| format!("bad finding {g:?}"))?);
    }
    Ok(out)
}

fn load_result(path: &Path, lower_jaw: bool) -> Result<Vec<Finding>> {
    let txt = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let result: AnalysisResult = serde_json::from_str(&txt)
        .with_context(|| format!("parsing {}", path.display()))?;
    let jaw = if lower_jaw {
        JawPlacement::Lower
    } else {
        JawPlacement::Upper
    };
    if lower_jaw && !result.missing_horizontal_line {
        warn!("--lower-jaw has no effect: the result has a horizontal line");
    }
    Ok(result.active_findings(jaw))
}

fn chart_input(args: &ChartArgs) -> Result<QuadrantInput> {
    if let Some(path) = &args.input {
        let txt =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        return serde_json::from_str(&txt).with_context(|| format!("parsing {}", path.display()));
    }
    let mut input = match args.preset {
        Some(p) => QuadrantInput::preset(p.into()),
        None => QuadrantInput::default(),
    };
    for (q, raw) in [
        (Quadrant::UpperRight, &args.ur),
        (Quadrant::UpperLeft, &args.ul),
        (Quadrant::LowerRight, &args.lr),
        (Quadrant::LowerLeft, &args.ll),
    ] {
        if !raw.is_empty() {
            input.set_entry(q, raw);
        }
    }
    Ok(input)
}

fn measurer() -> Box<dyn TextMeasurer> {
    match FontMeasurer::embedded() {
        Ok(m) => Box::new(m),
        Err(e) => {
            warn!("{e}; using approximate text metrics");
            Box::new(ApproxMeasurer::default())
        }
    }
}

fn chart(args: ChartArgs) -> Result<()> {
    let input = chart_input(&args)?;
    let style = match &args.style {
        Some(path) => {
            let txt =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            ChartStyle::from_toml_str(&txt)?
        }
        None => ChartStyle::default(),
    };
    let output = match args.output {
        Some(p) => p,
        None => {
            let stem = export_file_stem(&input.sorted().findings());
            args.out_dir.join(format!("{stem}.png"))
        }
    };

    let measurer = measurer();
    let is_svg = output
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        fs::write(&output, build_svg(&input, measurer.as_ref(), &style))?;
    } else {
        if output.extension().is_none() {
            bail!("output {} has no extension", output.display());
        }
        let bytes = build_png(&input, measurer.as_ref(), &style)?;
        fs::write(&output, bytes)?;
    }
    info!("wrote {}", output.display());
    println!("{}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("palmer").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn chart_entries_are_sanitized_over_preset() {
        let Command::Chart(args) = parse(&["chart", "--preset", "primary", "--ur", "a, b"]).command
        else {
            panic!("expected chart");
        };
        let input = chart_input(&args).unwrap();
        assert_eq!(input.ur, "AB");
        assert_eq!(input.ll, "ABCDE");
    }

    #[test]
    fn findings_parse_from_groups() {
        let fs = parse_findings(&["UL:67".to_string(), "lr:1".to_string()]).unwrap();
        assert_eq!(compose(&fs), "左上第一磨牙、第二磨牙，右下中切牙");
        assert!(parse_findings(&["67".to_string()]).is_err());
    }

    #[test]
    fn sort_takes_quadrant_labels() {
        let Command::Sort { quadrant, text } = parse(&["sort", "右上", "456"]).command else {
            panic!("expected sort");
        };
        assert_eq!(sort_quadrant(&text, quadrant), "654");
    }

    #[test]
    fn input_conflicts_with_entries() {
        let r = Cli::try_parse_from(["palmer", "chart", "--input", "x.json", "--ur", "1"]);
        assert!(r.is_err());
    }
}
