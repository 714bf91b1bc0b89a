use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use helper_utils::color::rgb_color_to_hex_string;
use helper_utils::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "helper-utils", version, about = "Small everyday helpers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Format a packed 0xAARRGGBB color as #RRGGBB
    Hex { color: String },
    /// Make an immutable copy of the given items and print it
    Copy { items: Vec<String> },
    /// Convert pixels to density-independent pixels
    PxToDp {
        px: f32,
        #[arg(long, env = "HELPER_UTILS_DENSITY", default_value_t = 1.0)]
        density: f32,
    },
    /// Convert density-independent pixels to pixels
    DpToPx {
        dp: f32,
        #[arg(long, env = "HELPER_UTILS_DENSITY", default_value_t = 1.0)]
        density: f32,
    },
    /// Wrap an optional value and show how it resolves
    Pick {
        value: Option<String>,
        #[arg(long)]
        fallback: Option<String>,
    },
}

fn init_logging() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if debug_logging {
            "info,helper_utils=debug"
        } else {
            "info"
        })
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();

    tracing::debug!(debug_logging, "logging initialized");
}

/// Accepts `#RRGGBB`/`#AARRGGBB`, `0x...` or a plain decimal integer.
///
/// Decimal values must fit either an `i32` or a `u32`, since opaque colors
/// show up both ways.
fn parse_color(text: &str) -> anyhow::Result<i32> {
    let hex = text
        .strip_prefix('#')
        .or_else(|| text.strip_prefix("0x"))
        .or_else(|| text.strip_prefix("0X"));
    let parsed = match hex {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()) => {
            u32::from_str_radix(digits, 16).ok().map(|v| v as i32)
        }
        Some(_) => None,
        None => text
            .parse::<i64>()
            .ok()
            .filter(|v| (i64::from(i32::MIN)..=i64::from(u32::MAX)).contains(v))
            .map(|v| v as u32 as i32),
    };
    Optional::of_nullable(parsed).or_else_throw(anyhow!("'{}' is not a color", text))
}

fn metrics(density: f32) -> anyhow::Result<DisplayMetrics> {
    DisplayMetrics::new(density).context("invalid --density")
}

fn resolve_pick(optional: Optional<String>, fallback: Option<String>) -> anyhow::Result<String> {
    match fallback {
        Some(fallback) => Ok(optional.or_else(fallback)),
        None => optional
            .get()
            .cloned()
            .context("no value and no --fallback given"),
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Hex { color } => {
            let packed = parse_color(&color)?;
            tracing::debug!(packed, "formatting color");
            println!("{}", rgb_color_to_hex_string(packed));
        }
        Command::Copy { items } => {
            let list = copy_of(items);
            tracing::debug!(len = list.len(), "copied items");
            for item in &list {
                println!("{}", item);
            }
        }
        Command::PxToDp { px, density } => {
            let metrics = metrics(density)?;
            tracing::debug!(px, density, "converting px to dp");
            println!("{}", metrics.convert_px_to_dp(px));
        }
        Command::DpToPx { dp, density } => {
            let metrics = metrics(density)?;
            tracing::debug!(dp, density, "converting dp to px");
            println!("{}", metrics.convert_dp_to_px(dp));
        }
        Command::Pick { value, fallback } => {
            let optional = Optional::of_nullable(value);
            println!("{}", optional);
            println!("{}", resolve_pick(optional, fallback)?);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");
    run(cli.command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_prefixed_colors() {
        assert_eq!(parse_color("#FF0000").unwrap(), 0x00FF_0000);
        assert_eq!(parse_color("#ff00ff00").unwrap(), helper_utils::color::GREEN);
    }

    #[test]
    fn zero_x_prefixed_colors() {
        assert_eq!(parse_color("0x0000FF").unwrap(), 0xFF);
        assert_eq!(parse_color("0XFFFFFFFF").unwrap(), helper_utils::color::WHITE);
    }

    #[test]
    fn decimal_colors_in_either_sign() {
        assert_eq!(parse_color("16711680").unwrap(), 0x00FF_0000);
        assert_eq!(parse_color("-16777216").unwrap(), helper_utils::color::BLACK);
        assert_eq!(parse_color("4278190080").unwrap(), helper_utils::color::BLACK);
    }

    #[test]
    fn decimal_out_of_range_is_rejected() {
        assert!(parse_color("4294967296").is_err());
        assert!(parse_color("-2147483649").is_err());
        assert!(parse_color("-4278190081").is_err());
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(parse_color("0x").is_err());
        assert!(parse_color("#").is_err());
        assert!(parse_color("#GG0000").is_err());
        assert!(parse_color("#+FFFFFF").is_err());
        assert!(parse_color("0x1FFFFFFFF").is_err());
        assert!(parse_color("red").is_err());
    }

    #[test]
    fn bad_density_carries_context() {
        let err = metrics(0.0).unwrap_err();
        assert_eq!(err.to_string(), "invalid --density");
        assert!(err.chain().any(|cause| cause.to_string().contains("finite and positive")));
        assert!(metrics(2.0).is_ok());
    }

    #[test]
    fn pick_prefers_held_value() {
        let value = resolve_pick(Optional::of("a".to_string()), Some("b".to_string())).unwrap();
        assert_eq!(value, "a");
    }

    #[test]
    fn pick_uses_fallback_when_empty() {
        let value = resolve_pick(Optional::empty(), Some("b".to_string())).unwrap();
        assert_eq!(value, "b");
    }

    #[test]
    fn pick_without_value_or_fallback_fails() {
        let err = resolve_pick(Optional::empty(), None).unwrap_err();
        assert_eq!(err.to_string(), "no value and no --fallback given");
    }
}
