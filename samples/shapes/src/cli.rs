use std::str::FromStr;

use tetrad::{Vec2, Vector};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum ShapeKind {
    /// Position-only rectangle from `--position` and `--size`
    Rectangle,
    /// Position-only triangle
    Triangle,
    /// Rectangle with per-vertex color and texture coordinates
    Textured,
    /// Triangle with per-vertex color
    Gradient,
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeKind::Rectangle => f.write_str("rectangle"),
            ShapeKind::Triangle => f.write_str("triangle"),
            ShapeKind::Textured => f.write_str("textured"),
            ShapeKind::Gradient => f.write_str("gradient"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,tetrad=info,tetrad_mesh=debug,shapes=info",
        env = "SHAPES_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Shape to build
    #[arg(short, long, default_value_t = ShapeKind::Rectangle)]
    pub shape: ShapeKind,
    /// Top-left corner of the rectangle
    #[arg(short, long, default_value = "-1,0.5", value_parser = parse_vec2::<f32>, value_name = "X,Y", allow_hyphen_values = true)]
    pub position: Vec2<f32>,
    /// Width and height of the rectangle
    #[arg(long, default_value = "1,1", value_parser = parse_vec2::<f32>, value_name = "W,H")]
    pub size: Vec2<f32>,
    /// Number of frames to draw
    #[arg(short, long, default_value_t = 1)]
    pub frames: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseVecError<E> {
    #[error("expected 2 comma-separated components, found {0}")]
    Arity(usize),
    #[error(transparent)]
    Component(E),
}

fn parse_vec2<R: FromStr + Copy>(s: &str) -> Result<Vec2<R>, ParseVecError<R::Err>> {
    let split = s.trim().split(',').collect::<Vec<_>>();
    let [x, y] = split[..] else {
        return Err(ParseVecError::Arity(split.len()));
    };
    let x = R::from_str(x.trim()).map_err(ParseVecError::Component)?;
    let y = R::from_str(y.trim()).map_err(ParseVecError::Component)?;
    Ok(Vector::new([x, y]))
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
