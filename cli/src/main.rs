use canvas::consts::{INVALID_LINE_MESSAGE, SNAP_THRESHOLD_PX};
use canvas::geom::{Bounds, Point};
use canvas::payload::{LinePayload, ScoreResponse, to_logical};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("canvas size must be positive, got {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error(
        "{msg} ({x}, {y}) is more than {threshold}px from every edge",
        msg = INVALID_LINE_MESSAGE,
        threshold = SNAP_THRESHOLD_PX
    )]
    InvalidEndpoint { x: f64, y: f64 },
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "edgeline", about = "Snap lines to a square's edges and score them")]
struct Cli {
    #[arg(long, env = "EDGELINE_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the host is up.
    Ping,
    /// Snap one pixel-space point and show its logical coordinates.
    #[command(allow_negative_numbers = true)]
    Snap {
        #[command(flatten)]
        canvas: CanvasArgs,
        x: f64,
        y: f64,
    },
    /// Snap both endpoints of a line and submit it for scoring.
    #[command(allow_negative_numbers = true)]
    Submit {
        #[command(flatten)]
        canvas: CanvasArgs,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        #[arg(long, default_value_t = false, help = "Print the request body instead of sending it")]
        dry_run: bool,
    },
}

#[derive(Args, Debug, Clone, Copy)]
struct CanvasArgs {
    #[arg(long, default_value_t = 400.0)]
    width: f64,
    #[arg(long, default_value_t = 400.0)]
    height: f64,
}

impl CanvasArgs {
    fn bounds(self) -> Result<Bounds, CliError> {
        if self.width > 0.0 && self.height > 0.0 {
            Ok(Bounds::new(self.width, self.height))
        } else {
            Err(CliError::InvalidSize { width: self.width, height: self.height })
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ping => run_ping(&cli.base_url).await,
        Command::Snap { canvas, x, y } => run_snap(canvas.bounds()?, Point::new(x, y)),
        Command::Submit { canvas, x1, y1, x2, y2, dry_run } => {
            let payload = line_payload(canvas.bounds()?, Point::new(x1, y1), Point::new(x2, y2))?;
            if dry_run {
                print_json(&serde_json::to_value(payload)?)
            } else {
                run_submit(&cli.base_url, &payload).await
            }
        }
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}/healthz", base_url.trim_end_matches('/'));
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError {
            status: status.as_u16(),
            message: "health check failed".to_owned(),
        });
    }
    println!("ok");
    Ok(())
}

fn run_snap(bounds: Bounds, pt: Point) -> Result<(), CliError> {
    let Some(snapped) = bounds.snap(pt) else {
        return Err(CliError::InvalidEndpoint { x: pt.x, y: pt.y });
    };
    let (edge, _) = bounds.nearest_edge(pt);
    println!("edge:    {edge:?}");
    println!("pixel:   ({}, {})", snapped.x, snapped.y);
    println!(
        "logical: ({}, {})",
        to_logical(snapped.x, bounds.width),
        to_logical(snapped.y, bounds.height)
    );
    if bounds.is_near_corner(pt) {
        println!("note:    point is within {SNAP_THRESHOLD_PX}px of a corner");
    }
    Ok(())
}

/// Snap both endpoints and rescale them, failing if either is off the edges.
fn line_payload(bounds: Bounds, start: Point, end: Point) -> Result<LinePayload, CliError> {
    let snap = |pt: Point| bounds.snap(pt).ok_or(CliError::InvalidEndpoint { x: pt.x, y: pt.y });
    Ok(LinePayload::from_line(snap(start)?, snap(end)?, bounds))
}

async fn run_submit(base_url: &str, payload: &LinePayload) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}/api/calculate", base_url.trim_end_matches('/'));
    let response = client.post(url).json(payload).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: error_detail(&body) });
    }

    let score = serde_json::from_str::<ScoreResponse>(&body)?;
    println!("{}", score.headline());
    if !score.explanation.is_empty() {
        println!("{}", score.explanation);
    }
    Ok(())
}

/// Pull `detail` out of an error body, falling back to the raw text.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| body.to_owned())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
