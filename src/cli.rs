//! Command-line front end
//!
//! Every subcommand produces traces; `--json` prints them, otherwise they are
//! concatenated and handed to the replay player.

use crate::config::{Config, DEFAULT_MAX_TRACE_STEPS, DEFAULT_SESSION_TTL_SECS};
use crate::errors::Result;
use crate::graph_algorithms::GraphAlgorithmKind;
use crate::metrics::{compare_algorithms, AlgorithmComparison, AlgorithmResult};
use crate::session::{concat, parse_script, Frame, SessionRegistry};
use crate::sorting::SortKind;
use crate::structures::{sample_graph, Graph};
use crate::trace::{Player, Trace};
use crate::ui::App;
use clap::{Args, Parser, Subcommand};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "stepviz",
    about = "Record algorithm and data-structure operations step by step and replay them",
    version
)]
pub struct Cli {
    /// Print the recorded trace(s) as JSON instead of opening the player
    #[arg(long, global = true)]
    pub json: bool,

    /// Auto-play delay between steps
    #[arg(long, global = true, env = "STEPVIZ_PLAY_INTERVAL_MS", default_value_t = 1000)]
    pub play_interval_ms: u64,

    /// Longest trace the player accepts
    #[arg(
        long,
        global = true,
        env = "STEPVIZ_MAX_TRACE_STEPS",
        default_value_t = DEFAULT_MAX_TRACE_STEPS
    )]
    pub max_trace_steps: usize,

    /// Idle time after which a registry session expires
    #[arg(
        long,
        global = true,
        env = "STEPVIZ_SESSION_TTL_SECS",
        default_value_t = DEFAULT_SESSION_TTL_SECS
    )]
    pub session_ttl_secs: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sort integers with bubble, selection or quick sort.
    Sort(SortArgs),

    /// Run two sorting algorithms over the same input and compare them.
    Compare(CompareArgs),

    /// Run BFS, DFS or Dijkstra on the built-in A..E sample graph.
    Search(SearchArgs),

    /// Execute a command script against a fresh session.
    Script(ScriptArgs),
}

#[derive(Debug, Args)]
pub struct SortArgs {
    /// bubble, selection or quick
    pub algorithm: String,

    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    pub first: String,

    pub second: String,

    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// bfs, dfs or dijkstra
    pub algorithm: String,

    /// Start node id
    #[arg(long, default_value_t = 0)]
    pub start: usize,

    /// Stop once this node id is reached
    #[arg(long)]
    pub end: Option<usize>,
}

#[derive(Debug, Args)]
pub struct ScriptArgs {
    pub path: PathBuf,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            play_interval_ms: self.play_interval_ms,
            max_trace_steps: self.max_trace_steps,
            session_ttl_secs: self.session_ttl_secs,
        }
    }
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    match cli.command {
        Commands::Sort(args) => {
            let kind: SortKind = args.algorithm.parse()?;
            let trace = kind.sort(&args.values);
            if cli.json {
                return print_json(&trace);
            }
            play(trace.map(Frame::Sequence), kind.name(), &config)
        }
        Commands::Compare(args) => {
            let comparison = compare_algorithms(&args.values, &args.first, &args.second)?;
            if cli.json {
                return print_json(&comparison);
            }
            let title = format!(
                "{} vs {}",
                comparison.algorithm1.name, comparison.algorithm2.name
            );
            play(comparison_trace(&comparison), &title, &config)?;
            print_metrics(&comparison)
        }
        Commands::Search(args) => {
            let kind: GraphAlgorithmKind = args.algorithm.parse()?;
            let graph = sample_graph().graph_data();
            let trace = kind.execute(&graph, args.start, args.end);
            if cli.json {
                return print_json(&trace);
            }
            play(trace.map(Frame::Search), kind.name(), &config)
        }
        Commands::Script(args) => {
            let source = fs::read_to_string(&args.path)?;
            let commands = parse_script(&source)?;

            let mut registry = SessionRegistry::new(config.session_ttl());
            let id = registry.create();
            let traces = registry.get_mut(id)?.run(&commands);
            registry.remove(id)?;

            if cli.json {
                return print_json(&traces);
            }
            let title = format!("script {}", args.path.display());
            play(concat(traces), &title, &config)
        }
    }
}

/// Both runs back to back, each description tagged with its algorithm
fn comparison_trace(comparison: &AlgorithmComparison<i64>) -> Trace<Frame> {
    let tagged = |result: &AlgorithmResult<i64>| {
        let name = result.name.clone();
        Trace::from(
            result
                .steps
                .iter()
                .cloned()
                .map(|step| {
                    let mut step = step.map(Frame::Sequence);
                    step.description = format!("[{}] {}", name, step.description);
                    step
                })
                .collect::<Vec<_>>(),
        )
    };
    concat([tagged(&comparison.algorithm1), tagged(&comparison.algorithm2)])
}

fn print_metrics(comparison: &AlgorithmComparison<i64>) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{:<16} {:>11} {:>7} {:>7} {:>10}",
        "algorithm", "comparisons", "swaps", "steps", "time (ms)"
    )?;
    for result in [&comparison.algorithm1, &comparison.algorithm2] {
        let m = &result.metrics;
        writeln!(
            out,
            "{:<16} {:>11} {:>7} {:>7} {:>10.3}",
            result.name, m.comparisons, m.swaps, m.total_steps, m.execution_time_ms
        )?;
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Open the replay player on a finished trace
fn play(trace: Trace<Frame>, title: &str, config: &Config) -> Result<()> {
    let player = Player::new(trace, config.max_trace_steps)?;
    tracing::info!(steps = player.len(), title, "opening player");

    enable_raw_mode()?;
    // Restores the terminal on every exit path from here on, including `?`
    let _restore = RestoreOnDrop {
        restore: restore_terminal,
    };

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(player, title.to_string(), config.play_interval());
    app.run(&mut terminal).map_err(Into::into)
}

/// Runs `restore` when dropped
struct RestoreOnDrop<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(error) = disable_raw_mode() {
        tracing::warn!(%error, "failed to leave raw mode");
    }
    if let Err(error) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        tracing::warn!(%error, "failed to leave the alternate screen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn cli(json: bool, command: Commands) -> Cli {
        Cli {
            json,
            play_interval_ms: 1000,
            max_trace_steps: DEFAULT_MAX_TRACE_STEPS,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            command,
        }
    }

    #[test]
    fn unknown_sort_is_rejected_before_anything_runs() {
        let result = run(cli(
            true,
            Commands::Sort(SortArgs {
                algorithm: "bogo".to_string(),
                values: vec![3, 1],
            }),
        ));
        assert!(matches!(result, Err(Error::UnknownAlgorithm { .. })));
    }

    #[test]
    fn unknown_search_is_rejected() {
        let result = run(cli(
            true,
            Commands::Search(SearchArgs {
                algorithm: "astar".to_string(),
                start: 0,
                end: None,
            }),
        ));
        assert_eq!(result.unwrap_err().exit_code(), 2);
    }

    #[test]
    fn missing_script_is_an_io_error() {
        let result = run(cli(
            true,
            Commands::Script(ScriptArgs {
                path: PathBuf::from("/nonexistent/stepviz/script.txt"),
            }),
        ));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn flags_flow_into_config() {
        let parsed = Cli::parse_from([
            "stepviz",
            "--play-interval-ms",
            "250",
            "sort",
            "quick",
            "3",
            "-1",
        ]);
        assert_eq!(parsed.config().play_interval_ms, 250);
        match parsed.command {
            Commands::Sort(args) => assert_eq!(args.values, vec![3, -1]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn session_ttl_flag_reaches_config() {
        let parsed = Cli::parse_from(["stepviz", "--session-ttl-secs", "5", "script", "demo.txt"]);
        assert_eq!(parsed.config().session_ttl(), std::time::Duration::from_secs(5));
    }

    #[test]
    fn restore_runs_when_setup_fails_early() {
        let restored = std::cell::Cell::new(false);
        let setup = || -> io::Result<()> {
            let _restore = RestoreOnDrop {
                restore: || restored.set(true),
            };
            Err::<(), _>(io::Error::new(io::ErrorKind::Other, "no alternate screen"))?;
            Ok(())
        };
        assert!(setup().is_err());
        assert!(restored.get());
    }

    #[test]
    fn comparison_trace_tags_each_run() {
        let comparison = compare_algorithms(&[2, 1], "bubble", "selection").unwrap();
        let trace = comparison_trace(&comparison);
        assert_eq!(
            trace.len(),
            comparison.algorithm1.metrics.total_steps + comparison.algorithm2.metrics.total_steps
        );
        assert!(trace
            .first()
            .unwrap()
            .description
            .starts_with("[Bubble Sort] "));
        assert!(trace
            .last()
            .unwrap()
            .description
            .starts_with("[Selection Sort] "));
    }
}
