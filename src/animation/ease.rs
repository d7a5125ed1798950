use std::f64::consts::TAU;

use crate::foundation::error::{RevealError, RevealResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    OutExpo,
    /// Overshoot-then-settle. `amplitude` is clamped to `1..=10`, `period` to `0.1..=2`.
    OutElastic { amplitude: f64, period: f64 },
}

impl Ease {
    /// Settle curve used when a magnetic element is released.
    pub const SPRING_BACK: Self = Self::OutElastic {
        amplitude: 1.0,
        period: 0.5,
    };

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Self::OutElastic { amplitude, period } => 1.0 - in_elastic(1.0 - t, amplitude, period),
        }
    }

    /// Parses a curve name. Accepts the kebab-case serde tags (`out-expo`) as
    /// well as the `easeOutExpo` / `easeOutElastic(1, .5)` spelling common in
    /// web animation code.
    pub fn parse(s: &str) -> RevealResult<Self> {
        let raw = s.trim().to_ascii_lowercase();
        if raw.is_empty() {
            return Err(RevealError::validation("ease name must be non-empty"));
        }
        let (name, args) = match raw.split_once('(') {
            Some((name, rest)) => {
                let inner = rest.strip_suffix(')').ok_or_else(|| {
                    RevealError::validation(format!("unterminated ease arguments in '{s}'"))
                })?;
                (name.trim().to_string(), Some(inner.to_string()))
            }
            None => (raw.clone(), None),
        };
        let name = name.trim_start_matches("ease").replace(['-', '_'], "");

        let ease = match name.as_str() {
            "linear" => Self::Linear,
            "inquad" => Self::InQuad,
            "outquad" => Self::OutQuad,
            "inoutquad" => Self::InOutQuad,
            "incubic" => Self::InCubic,
            "outcubic" => Self::OutCubic,
            "inoutcubic" => Self::InOutCubic,
            "outexpo" => Self::OutExpo,
            "outelastic" => {
                let mut amplitude = 1.0;
                let mut period = 0.5;
                if let Some(args) = args.as_deref() {
                    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
                    let num = |v: &str| {
                        v.parse::<f64>().map_err(|_| {
                            RevealError::validation(format!("invalid elastic parameter '{v}'"))
                        })
                    };
                    match parts.as_slice() {
                        [""] => {}
                        [a] => amplitude = num(*a)?,
                        [a, p] => {
                            amplitude = num(*a)?;
                            period = num(*p)?;
                        }
                        _ => {
                            return Err(RevealError::validation(
                                "elastic ease takes at most two parameters",
                            ));
                        }
                    }
                }
                return Ok(Self::OutElastic { amplitude, period });
            }
            _ => return Err(RevealError::validation(format!("unknown ease '{s}'"))),
        };
        if args.is_some_and(|a| !a.trim().is_empty()) {
            return Err(RevealError::validation(format!(
                "ease '{name}' takes no parameters"
            )));
        }
        Ok(ease)
    }
}

fn in_elastic(t: f64, amplitude: f64, period: f64) -> f64 {
    if t <= 0.0 || t >= 1.0 {
        return t.clamp(0.0, 1.0);
    }
    let a = amplitude.clamp(1.0, 10.0);
    let p = period.clamp(0.1, 2.0);
    let shift = p / TAU * (1.0 / a).asin();
    -a * 2f64.powf(10.0 * (t - 1.0)) * (((t - 1.0) - shift) * TAU / p).sin()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
