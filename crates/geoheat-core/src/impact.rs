// crates/geoheat-core/src/impact.rs

//! Headline figures for the digital-experience charts next to the map.
//!
//! Pure arithmetic on a headcount. Rendering the charts is somebody else's
//! job; this only produces the numbers and the labelled series.

use serde::{Deserialize, Serialize};

/// Assumptions behind the figures. Defaults are the published industry
/// estimates the landing page quotes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactModel {
    /// Hours per employee per year lost to IT interruptions.
    pub hours_lost_per_employee: f64,
    /// Fully-loaded cost of one hour, GBP.
    pub cost_per_hour_gbp: f64,
    pub working_hours_per_year: f64,
    /// Benchmark loss per 10 000 employees, USD.
    pub benchmark_usd_per_10k: f64,
}

impl Default for ImpactModel {
    fn default() -> Self {
        Self {
            hours_lost_per_employee: 50.0,
            cost_per_hour_gbp: 25.0,
            working_hours_per_year: 2080.0,
            benchmark_usd_per_10k: 25_000_000.0,
        }
    }
}

/// A labelled value for a pie or bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub name: String,
    pub value: f64,
}

impl SeriesPoint {
    fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactFigures {
    pub employees: u64,
    pub annual_hours_at_risk: f64,
    pub dex_cost_gbp: f64,
    pub benchmark_cost_usd: f64,
    /// Cost of every 1 000 employees, GBP.
    pub cost_per_thousand_gbp: f64,
    /// `dex_cost_gbp` in whole millions.
    pub dex_cost_gbp_millions: f64,
    /// `benchmark_cost_usd` in whole millions.
    pub benchmark_cost_usd_millions: f64,
    /// Per-employee year split: productive time vs interruptions.
    pub time_split: Vec<SeriesPoint>,
    /// Rounded cost under both models.
    pub cost_comparison: Vec<SeriesPoint>,
}

impl ImpactModel {
    /// Computes every figure for `employees`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geoheat_core::impact::ImpactModel;
    ///
    /// let f = ImpactModel::default().figures(1_000);
    /// assert_eq!(f.annual_hours_at_risk, 50_000.0);
    /// assert_eq!(f.dex_cost_gbp, 1_250_000.0);
    /// ```
    pub fn figures(&self, employees: u64) -> ImpactFigures {
        let n = employees as f64;
        let hours = n * self.hours_lost_per_employee;
        let dex = hours * self.cost_per_hour_gbp;
        let benchmark = n / 10_000.0 * self.benchmark_usd_per_10k;

        ImpactFigures {
            employees,
            annual_hours_at_risk: hours,
            dex_cost_gbp: dex,
            benchmark_cost_usd: benchmark,
            cost_per_thousand_gbp: 1_000.0 * self.hours_lost_per_employee * self.cost_per_hour_gbp,
            dex_cost_gbp_millions: (dex / 1_000_000.0).round(),
            benchmark_cost_usd_millions: (benchmark / 1_000_000.0).round(),
            time_split: vec![
                SeriesPoint::new(
                    "Productive Time",
                    (self.working_hours_per_year - self.hours_lost_per_employee).max(0.0),
                ),
                SeriesPoint::new("IT Interruptions", self.hours_lost_per_employee),
            ],
            cost_comparison: vec![
                SeriesPoint::new("DEX loss (£)", dex.round()),
                SeriesPoint::new("Benchmark model ($)", benchmark.round()),
            ],
        }
    }
}
