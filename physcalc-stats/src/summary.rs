//! Summary statistics over a sample

use physcalc_core::to_fixed;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Most frequent values of a sample.
///
/// Serializes as an array of numbers, `"No mode"` or `"N/A"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModeRepr", into = "ModeRepr")]
pub enum Mode {
    /// Every value reaching the highest frequency, ascending
    Values(Vec<f64>),
    /// All values occur once
    NoMode,
    /// Empty sample
    NotAvailable,
}

const NO_MODE: &str = "No mode";
const NOT_AVAILABLE: &str = "N/A";

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ModeRepr {
    Values(Vec<f64>),
    Sentinel(String),
}

impl From<Mode> for ModeRepr {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Values(v) => ModeRepr::Values(v),
            Mode::NoMode => ModeRepr::Sentinel(NO_MODE.to_string()),
            Mode::NotAvailable => ModeRepr::Sentinel(NOT_AVAILABLE.to_string()),
        }
    }
}

impl TryFrom<ModeRepr> for Mode {
    type Error = String;

    fn try_from(repr: ModeRepr) -> Result<Self, Self::Error> {
        match repr {
            ModeRepr::Values(v) => Ok(Mode::Values(v)),
            ModeRepr::Sentinel(s) if s == NO_MODE => Ok(Mode::NoMode),
            ModeRepr::Sentinel(s) if s == NOT_AVAILABLE => Ok(Mode::NotAvailable),
            ModeRepr::Sentinel(s) => Err(format!("unknown mode sentinel '{}'", s)),
        }
    }
}

impl Mode {
    pub fn values(&self) -> Option<&[f64]> {
        match self {
            Mode::Values(v) => Some(v),
            _ => None,
        }
    }

    /// Mode values joined with ", ", or the sentinel text
    pub fn display(&self, decimals: usize) -> String {
        match self {
            Mode::Values(v) => v.iter().map(|x| to_fixed(*x, decimals)).collect::<Vec<_>>().join(", "),
            Mode::NoMode => NO_MODE.to_string(),
            Mode::NotAvailable => NOT_AVAILABLE.to_string(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(4))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    /// Population variance (divides by n)
    pub variance: f64,
    pub standard_deviation: f64,
    pub count: usize,
    pub sum: f64,
}

impl Statistics {
    /// One `Label: value` line per field
    pub fn display(&self, decimals: usize) -> String {
        [
            format!("Mean: {}", to_fixed(self.mean, decimals)),
            format!("Median: {}", to_fixed(self.median, decimals)),
            format!("Mode: {}", self.mode.display(decimals)),
            format!("Variance: {}", to_fixed(self.variance, decimals)),
            format!("Standard Deviation: {}", to_fixed(self.standard_deviation, decimals)),
            format!("Count: {}", self.count),
            format!("Sum: {}", to_fixed(self.sum, decimals)),
        ]
        .join("\n")
    }
}

/// Compute every summary statistic of `data`.
///
/// An empty sample yields zeros and `Mode::NotAvailable`.
pub fn calculate(data: &[f64]) -> Statistics {
    let n = data.len();
    if n == 0 {
        return Statistics {
            mean: 0.0,
            median: 0.0,
            mode: Mode::NotAvailable,
            variance: 0.0,
            standard_deviation: 0.0,
            count: 0,
            sum: 0.0,
        };
    }

    let sum: f64 = data.iter().sum();
    let mean = sum / n as f64;
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

    Statistics {
        mean,
        median: median(data),
        mode: mode(data),
        variance,
        standard_deviation: variance.sqrt(),
        count: n,
        sum,
    }
}

fn median(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

fn mode(data: &[f64]) -> Mode {
    // Keyed by bit pattern; +0.0 folds -0.0 into 0.0
    let mut counts: HashMap<u64, (f64, usize)> = HashMap::new();
    for &x in data {
        let x = x + 0.0;
        counts.entry(x.to_bits()).or_insert((x, 0)).1 += 1;
    }

    let max = counts.values().map(|&(_, c)| c).max().unwrap_or(0);
    if max <= 1 {
        return Mode::NoMode;
    }

    let mut modes: Vec<f64> = counts
        .into_values()
        .filter(|&(_, c)| c == max)
        .map(|(x, _)| x)
        .collect();
    modes.sort_by(f64::total_cmp);
    Mode::Values(modes)
}
