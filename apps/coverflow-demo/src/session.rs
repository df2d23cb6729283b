//! Scripted touch sessions.
//!
//! A session is a list of steps such as `tap:1000`, `long:540` or
//! `drag:1040:700`. Coordinates are container-local x positions; every step
//! happens on the container's vertical middle.

use anyhow::{bail, Context, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Tap { x: f32 },
    LongPress { x: f32 },
    Drag { from_x: f32, to_x: f32 },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Tap { x } => write!(f, "tap at x={x}"),
            Step::LongPress { x } => write!(f, "long press at x={x}"),
            Step::Drag { from_x, to_x } => write!(f, "drag from x={from_x} to x={to_x}"),
        }
    }
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        let mut parts = raw.split(':');
        let verb = parts.next().unwrap_or_default();
        let args = parts
            .map(|part| {
                part.parse::<f32>()
                    .with_context(|| format!("invalid coordinate `{part}` in step `{raw}`"))
            })
            .collect::<Result<Vec<_>>>()?;

        match (verb, args.as_slice()) {
            ("tap", [x]) => Ok(Step::Tap { x: *x }),
            ("long", [x]) => Ok(Step::LongPress { x: *x }),
            ("drag", [from_x, to_x]) => Ok(Step::Drag {
                from_x: *from_x,
                to_x: *to_x,
            }),
            _ => bail!("unrecognised step `{raw}`, expected tap:X, long:X or drag:X1:X2"),
        }
    }
}

/// Steps replayed when no script is given on the command line.
pub fn default_script() -> Vec<Step> {
    vec![
        Step::Tap { x: 1000.0 },
        Step::Tap { x: 1000.0 },
        Step::Tap { x: 80.0 },
        Step::Tap { x: 540.0 },
        Step::LongPress { x: 540.0 },
        Step::Drag {
            from_x: 1040.0,
            to_x: 640.0,
        },
    ]
}
