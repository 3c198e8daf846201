//! Rangeslider CLI - check slider manifests and replay drags headlessly.

#![allow(clippy::uninlined_format_args)]

use clap::{Parser, Subcommand, ValueEnum};
use rangeslider_core::{
    EndIndex, ListenerRegistry, MountedElements, PointerPhase, RangeState, Store, ValueStore,
};
use rangeslider_widgets::{GeometryProbe, RangeSlider, Slider, ThumbAxis};
use rangeslider_yaml::{ManifestError, SliderKind, SliderManifest};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rangeslider")]
#[command(about = "Check slider manifests and replay drag gestures")]
#[command(version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check slider manifest validity
    Check {
        /// Path to manifest file
        #[arg(default_value = "slider.yaml")]
        manifest: PathBuf,
    },

    /// Replay a drag gesture against a manifest
    Replay {
        /// Path to manifest file
        manifest: PathBuf,

        /// Pointer x at press, in track pixels
        #[arg(long, allow_hyphen_values = true)]
        from: f32,

        /// Pointer x at release, in track pixels
        #[arg(long, allow_hyphen_values = true)]
        to: f32,

        /// Number of pointer moves between press and release
        #[arg(long, default_value = "10")]
        steps: u16,

        /// Thumb to grab on a range slider
        #[arg(long, value_enum, default_value = "high")]
        thumb: ThumbArg,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThumbArg {
    Low,
    High,
}

impl From<ThumbArg> for EndIndex {
    fn from(thumb: ThumbArg) -> Self {
        match thumb {
            ThumbArg::Low => Self::Low,
            ThumbArg::High => Self::High,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// A replayed gesture.
#[derive(Debug, Serialize)]
struct ReplayReport {
    kind: SliderKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumb: Option<EndIndex>,
    max_x: f32,
    commits: Vec<i64>,
    header: String,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { manifest } => {
            check_manifest(&manifest);
        }
        Commands::Replay {
            manifest,
            from,
            to,
            steps,
            thumb,
            format,
        } => {
            replay_manifest(&manifest, from, to, steps, thumb.into(), format);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_or_exit(path: &Path) -> SliderManifest {
    match SliderManifest::load(path) {
        Ok(manifest) => manifest,
        Err(e) => {
            eprintln!("Manifest invalid: {}", e);
            std::process::exit(1);
        }
    }
}

fn check_manifest(path: &Path) {
    println!("Checking manifest: {}", path.display());
    let manifest = load_or_exit(path);

    let axis = match manifest.slider.kind {
        SliderKind::Single => ThumbAxis::Width,
        SliderKind::Range => ThumbAxis::Height,
    };
    let probe = GeometryProbe::new(axis);
    probe.probe(&manifest.elements());
    let max_x = probe.geometry().map_or(0.0, |g| g.max_x);

    println!("Manifest valid!");
    println!("  Kind: {}", manifest.slider.kind);
    println!("  Range: 0..={}", manifest.slider.max_value);
    match manifest.slider.kind {
        SliderKind::Single => {
            if let Ok(store) = manifest.single_store() {
                println!("  Value: {}", store.value());
            }
        }
        SliderKind::Range => {
            if let Ok(store) = manifest.range_store() {
                println!("  Ends: {}", store.state().value);
            }
        }
    }
    println!(
        "  Track: {}px (border {}px), thumb {}px",
        manifest.track.width, manifest.track.border, manifest.thumb.size
    );
    println!("  Thumb travel: {}px", max_x);
    if max_x <= 0.0 {
        println!("  Warning: thumb fills the track; dragging is disabled");
    }
}

fn replay_manifest(path: &Path, from: f32, to: f32, steps: u16, thumb: EndIndex, format: Format) {
    let manifest = load_or_exit(path);
    let report = match replay(&manifest, from, to, steps, thumb) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Replay failed: {}", e);
            std::process::exit(1);
        }
    };

    match format {
        Format::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to encode report: {}", e);
                std::process::exit(1);
            }
        },
        Format::Text => {
            println!(
                "Replaying {}: {} slider, pointer {} -> {} in {} steps",
                path.display(),
                report.kind,
                from,
                to,
                steps.max(1)
            );
            for value in &report.commits {
                println!("  commit {}", value);
            }
            println!("{}", report.header);
        }
    }
}

/// Pointer positions after `from`, ending exactly at `to`.
fn pointer_path(from: f32, to: f32, steps: u16) -> Vec<f32> {
    let steps = steps.max(1);
    (1..=steps)
        .map(|i| {
            if i == steps {
                to
            } else {
                (to - from).mul_add(f32::from(i) / f32::from(steps), from)
            }
        })
        .collect()
}

/// Track x to page x, through the track border.
fn page_x(elements: &MountedElements, x: f32) -> f32 {
    elements.content_box().x + x
}

fn replay(
    manifest: &SliderManifest,
    from: f32,
    to: f32,
    steps: u16,
    thumb: EndIndex,
) -> Result<ReplayReport, ManifestError> {
    let elements = manifest.elements();
    let mut surface = ListenerRegistry::new();
    let path = pointer_path(from, to, steps);
    info!(kind = %manifest.slider.kind, from, to, steps = path.len(), "replaying gesture");

    match manifest.slider.kind {
        SliderKind::Single => {
            let mut store = manifest.single_store()?;
            let mut slider = Slider::new();
            slider.mount(&elements);
            slider.start_drag(page_x(&elements, from), &store, &mut surface);

            let mut commits = Vec::new();
            for x in path {
                if surface.dispatch(PointerPhase::Move).is_empty() {
                    debug!("no drag open; move ignored");
                    continue;
                }
                if let Some(changed) = slider.drag(page_x(&elements, x), &mut store) {
                    commits.push(changed.value);
                }
            }
            surface.dispatch(PointerPhase::Up);
            slider.end_drag(&mut surface);

            Ok(ReplayReport {
                kind: SliderKind::Single,
                thumb: None,
                max_x: slider.geometry().map_or(0.0, |g| g.max_x),
                commits,
                header: format!("Slider value: {}", store.value()),
            })
        }
        SliderKind::Range => {
            let mut store: Store<RangeState> = manifest.range_store()?;
            let mut slider = RangeSlider::new();
            slider.mount(&elements);
            slider.start_drag(thumb, page_x(&elements, from), &store, &mut surface);

            let mut commits = Vec::new();
            for x in path {
                if surface.dispatch(PointerPhase::Move).is_empty() {
                    debug!("no drag open; move ignored");
                    continue;
                }
                if let Some(changed) = slider.drag(page_x(&elements, x), &mut store) {
                    commits.push(changed.value);
                }
            }
            surface.dispatch(PointerPhase::Up);
            slider.end_drag(&mut surface);

            Ok(ReplayReport {
                kind: SliderKind::Range,
                thumb: Some(thumb),
                max_x: slider.geometry().map_or(0.0, |g| g.max_x),
                commits,
                header: format!("Slider value: {}", store.state().value),
            })
        }
    }
}
