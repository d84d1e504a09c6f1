use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use planar::geom2::degrees_to_radians;
use planar::layout::{scale_and_align_rect, Alignment, Scaling};
use planar::{BezierCfg, BezierCurve, Ellipse, Size2, Vec2};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Ellipse geometry and layout helpers, printed as JSON")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Derived parameters of an ellipse: b, e, F, foci, bounding boxes, circle
    Ellipse {
        #[command(flatten)]
        shape: ShapeArgs,
    },
    /// Four-curve cubic Bézier approximation of an ellipse
    Bezier {
        #[command(flatten)]
        shape: ShapeArgs,
        /// Control-point constant (defaults to the library's quarter-arc constant)
        #[arg(long)]
        kappa: Option<f64>,
        /// Write the curves to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Place a source size inside a destination size
    Fit {
        /// Source size as WxH
        #[arg(long, value_parser = parse_size)]
        src: Size2,
        /// Destination size as WxH
        #[arg(long, value_parser = parse_size)]
        dst: Size2,
        #[arg(long, value_enum, default_value_t = ScalingArg::Proportionally)]
        scaling: ScalingArg,
        #[arg(long, value_enum, default_value_t = AlignmentArg::Center)]
        alignment: AlignmentArg,
    },
}

/// Ellipse parameters: `--a` with one of `--e`/`--b`, or a bounding `--size`.
#[derive(Args, Debug, Clone)]
struct ShapeArgs {
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    cx: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    cy: f64,
    /// Semi-major axis
    #[arg(long, allow_negative_numbers = true)]
    a: Option<f64>,
    /// Eccentricity in [0, 1]
    #[arg(long, conflicts_with_all = ["b", "size"])]
    e: Option<f64>,
    /// Semi-minor axis (<= a)
    #[arg(long, conflicts_with = "size", allow_negative_numbers = true)]
    b: Option<f64>,
    /// Bounding size as WxH; the major axis follows the longer side
    #[arg(long, value_parser = parse_size, conflicts_with_all = ["a", "rotation_deg"])]
    size: Option<Size2>,
    /// Rotation of the major axis, degrees counterclockwise
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rotation_deg: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScalingArg {
    None,
    Proportionally,
    ToFit,
}

impl From<ScalingArg> for Scaling {
    fn from(s: ScalingArg) -> Self {
        match s {
            ScalingArg::None => Scaling::None,
            ScalingArg::Proportionally => Scaling::Proportionally,
            ScalingArg::ToFit => Scaling::ToFit,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlignmentArg {
    Center,
    Top,
    TopLeft,
    TopRight,
    Left,
    Bottom,
    BottomLeft,
    BottomRight,
    Right,
}

impl From<AlignmentArg> for Alignment {
    fn from(a: AlignmentArg) -> Self {
        match a {
            AlignmentArg::Center => Alignment::Center,
            AlignmentArg::Top => Alignment::Top,
            AlignmentArg::TopLeft => Alignment::TopLeft,
            AlignmentArg::TopRight => Alignment::TopRight,
            AlignmentArg::Left => Alignment::Left,
            AlignmentArg::Bottom => Alignment::Bottom,
            AlignmentArg::BottomLeft => Alignment::BottomLeft,
            AlignmentArg::BottomRight => Alignment::BottomRight,
            AlignmentArg::Right => Alignment::Right,
        }
    }
}

/// One cubic, as plain coordinate pairs.
#[derive(Serialize)]
struct CurveRow {
    start: [f64; 2],
    control1: [f64; 2],
    control2: [f64; 2],
    end: [f64; 2],
}

impl From<&BezierCurve> for CurveRow {
    fn from(c: &BezierCurve) -> Self {
        Self {
            start: xy(c.start),
            control1: xy(c.control1),
            control2: xy(c.control2),
            end: xy(c.end),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Ellipse { shape } => emit(&describe(&shape)?, None),
        Action::Bezier { shape, kappa, out } => emit(&bezier(&shape, kappa)?, out.as_deref()),
        Action::Fit {
            src,
            dst,
            scaling,
            alignment,
        } => emit(&fit(src, dst, scaling, alignment), None),
    }
}

fn parse_size(s: &str) -> Result<Size2, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got {s:?}"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("bad width {w:?}: {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("bad height {h:?}: {e}"))?;
    if !(w >= 0.0 && h >= 0.0) {
        return Err(format!("size must be non-negative, got {w}x{h}"));
    }
    Ok(Size2::new(w, h))
}

/// Validate user input up front so bad parameters surface as errors, not panics.
fn build_ellipse(shape: &ShapeArgs) -> Result<Ellipse> {
    let center = Vec2::new(shape.cx, shape.cy);
    if let Some(size) = shape.size {
        return Ok(Ellipse::from_size(center, size));
    }
    let rotation = degrees_to_radians(shape.rotation_deg);
    let Some(a) = shape.a else {
        bail!("either --a (with --e or --b) or --size is required");
    };
    if !(a >= 0.0) {
        bail!("semi-major axis must be non-negative, got {a}");
    }
    match (shape.e, shape.b) {
        (Some(e), None) => {
            if !(0.0..=1.0).contains(&e) {
                bail!("eccentricity must lie in [0, 1], got {e}");
            }
            Ok(Ellipse::new(center, a, e, rotation))
        }
        (None, Some(b)) => {
            if !(b >= 0.0) {
                bail!("semi-minor axis must be non-negative, got {b}");
            }
            if a < b {
                bail!("semi-major axis {a} is shorter than semi-minor axis {b}");
            }
            Ok(Ellipse::from_axes(center, a, b, rotation))
        }
        _ => bail!("pass exactly one of --e or --b together with --a"),
    }
}

fn describe(shape: &ShapeArgs) -> Result<Value> {
    let ell = build_ellipse(shape)?;
    tracing::info!(ellipse = %ell, "ellipse");
    let (f1, f2) = ell.foci();
    let circle = ell.to_circle().map(|c| {
        json!({
            "center": xy(c.center()),
            "radius": c.radius(),
        })
    });
    Ok(json!({
        "center": xy(ell.center()),
        "a": ell.a(),
        "b": ell.b(),
        "e": ell.e(),
        "F": ell.linear_eccentricity(),
        "rotation": ell.rotation(),
        "foci": [xy(f1), xy(f2)],
        "unrotated_frame": rect_json(ell.unrotated_frame()),
        "bounding_box": rect_json(ell.bounding_box()),
        "analytic_bounding_box": rect_json(ell.analytic_bounding_box()),
        "circle": circle,
    }))
}

fn bezier(shape: &ShapeArgs, kappa: Option<f64>) -> Result<Value> {
    let ell = build_ellipse(shape)?;
    let kappa = kappa.unwrap_or(BezierCfg::default().kappa);
    if !kappa.is_finite() {
        bail!("kappa must be finite, got {kappa}");
    }
    tracing::info!(ellipse = %ell, kappa, "bezier");
    let rows: Vec<CurveRow> = ell
        .to_bezier_curves_with(kappa)
        .iter()
        .map(CurveRow::from)
        .collect();
    Ok(serde_json::to_value(rows)?)
}

fn fit(src: Size2, dst: Size2, scaling: ScalingArg, alignment: AlignmentArg) -> Value {
    tracing::info!(?src, ?dst, ?scaling, ?alignment, "fit");
    let r = scale_and_align_rect(src.to_rect(), dst.to_rect(), scaling.into(), alignment.into());
    rect_json(r)
}

fn emit(value: &Value, out: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(out = %path.display(), "wrote");
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn xy(p: Vec2<f64>) -> [f64; 2] {
    [p.x, p.y]
}

fn rect_json(r: planar::Rect2) -> Value {
    json!({
        "origin": xy(r.origin),
        "size": [r.size.width, r.size.height],
    })
}
