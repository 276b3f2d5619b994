//! Smoke runner for the harness
//!
//! Wires the engine to an in-memory stand-in for a live surface and runs two
//! demo suites, so the whole pipeline can be exercised end to end without
//! embedding into a real application.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use clap::{Parser, ValueEnum};
use colored::Colorize;

use surface_harness::common::logging;
use surface_harness::reporting::BatchSink;
use surface_harness::{
    Error, Harness, HarnessConfig, Reporter, Result, RunReport, RunSummary, Subject, TagFilter,
    TestSuite,
};

#[derive(Parser)]
#[command(name = "smoke", about = "Run the demo suites against a simulated surface")]
#[command(version, long_about = None)]
struct Cli {
    /// Run only cases tagged with one of these (repeatable)
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Delay in milliseconds before the first suite starts
    #[arg(long)]
    start_delay_ms: Option<u64>,

    /// Where the finished report goes
    #[arg(long, value_enum, default_value_t = ReporterKind::Console)]
    reporter: ReporterKind,

    /// Optional TOML config file (flags override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Deprecated: skip the run and deliver nothing
    #[arg(long = "no-report", hide = true)]
    no_report: bool,

    /// Declare one deliberately failing case
    #[arg(long)]
    inject_failure: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReporterKind {
    Console,
    Json,
}

#[tokio::main]
async fn main() {
    logging::init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(summary) if summary.all_passed() => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<RunSummary> {
    let surface = SimulatedSurface::default();
    let suites = demo_suites(&surface, cli.inject_failure);

    let mut harness = Harness::new(surface, suites);

    if let Some(path) = &cli.config {
        let config = HarnessConfig::load(path)?;
        harness = harness.with_config(&config);
    }
    if let Some(ms) = cli.start_delay_ms {
        harness = harness.with_start_delay(Duration::from_millis(ms));
    }
    if !cli.tags.is_empty() {
        harness = harness.with_filter(TagFilter::new(cli.tags.iter().cloned()));
    }
    if cli.no_report {
        #[allow(deprecated)]
        let legacy = harness.with_send_report(false);
        harness = legacy;
    }

    harness = harness.with_reporter(match cli.reporter {
        ReporterKind::Console => console_reporter(),
        ReporterKind::Json => Reporter::deferred(JsonSink),
    });

    harness.run().await
}

/// In-memory stand-in for a live surface
///
/// Clones share the same state, so the harness and the case bodies can hold
/// the surface at the same time.
#[derive(Debug, Default, Clone)]
struct SimulatedSurface {
    inner: Arc<SurfaceState>,
}

#[derive(Debug, Default)]
struct SurfaceState {
    widgets: Mutex<Vec<String>>,
    redraws: AtomicUsize,
}

impl SimulatedSurface {
    fn mount(&self, widget: &str) {
        self.widgets().push(widget.to_string());
    }

    fn mounted(&self, widget: &str) -> bool {
        self.widgets().iter().any(|w| w == widget)
    }

    fn widget_count(&self) -> usize {
        self.widgets().len()
    }

    fn redraw_count(&self) -> usize {
        self.inner.redraws.load(Ordering::SeqCst)
    }

    fn widgets(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.inner.widgets.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Subject for SimulatedSurface {
    async fn clear_state(&self) -> Result<()> {
        self.widgets().clear();
        Ok(())
    }

    async fn resync(&self) -> Result<()> {
        self.inner.redraws.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn demo_suites(surface: &SimulatedSurface, inject_failure: bool) -> Vec<TestSuite> {
    let banner = TestSuite::new("status banner")
        .before_each(|scope| async move {
            scope.insert("expected_text", "ready");
            Ok(())
        })
        .case("renders the seeded banner text", {
            let surface = surface.clone();
            move |scope| {
                let surface = surface.clone();
                async move {
                    let text = scope
                        .get("expected_text")
                        .and_then(|v| v.as_str().map(str::to_string))
                        .ok_or_else(|| Error::assertion("setup hook did not seed expected_text"))?;
                    surface.mount(&format!("banner: {text}"));
                    surface.resync().await?;
                    if !surface.mounted("banner: ready") {
                        return Err(Error::assertion("banner widget missing after redraw"));
                    }
                    Ok(())
                }
            }
        })
        .tagged_case("smoke", "starts from a clean slate", {
            let surface = surface.clone();
            move |_scope| {
                let surface = surface.clone();
                async move {
                    if surface.widget_count() != 0 {
                        return Err(Error::assertion("widgets leaked in from an earlier case"));
                    }
                    if surface.redraw_count() == 0 {
                        return Err(Error::assertion("surface was never resynchronized"));
                    }
                    Ok(())
                }
            }
        });

    let mut palette = TestSuite::new("command palette")
        .before_each(|scope| async move {
            scope.insert("commands", serde_json::json!(["open", "save"]));
            Ok(())
        })
        .case("lists the seeded commands", |scope| async move {
            let commands = scope
                .get("commands")
                .and_then(|v| v.as_array().cloned())
                .unwrap_or_default();
            if commands.len() != 2 {
                return Err(Error::assertion(format!(
                    "expected 2 seeded commands, found {}",
                    commands.len()
                )));
            }
            Ok(())
        })
        .tagged_case("render", "repaints when the palette opens", {
            let surface = surface.clone();
            move |_scope| {
                let surface = surface.clone();
                async move {
                    let before = surface.redraw_count();
                    surface.mount("palette");
                    surface.resync().await?;
                    if surface.redraw_count() <= before {
                        return Err(Error::assertion("opening the palette did not repaint"));
                    }
                    Ok(())
                }
            }
        });

    if inject_failure {
        palette = palette.case("fails on demand", |_scope| async {
            Err(Error::case_failure("injected failure"))
        });
    }

    vec![banner, palette]
}

fn console_reporter() -> Reporter {
    Reporter::callback(|report| async move {
        println!(
            "{} {} of {} cases failed ({:.2}s)",
            "Report:".cyan(),
            report.error_count,
            report.results.len(),
            report.duration
        );
        Ok(())
    })
}

/// Prints the finished report as pretty JSON
struct JsonSink;

#[async_trait]
impl BatchSink for JsonSink {
    async fn send(&mut self, report: RunReport) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }
}
