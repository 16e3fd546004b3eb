//! Simulation report generation.

use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one simulated round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub score: u32,
    pub spawns: u32,
    pub frames: u64,
    pub jumps: u64,
    /// False when the round hit the frame limit alive.
    pub crashed: bool,
}

/// Aggregated results from a batch of rounds.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_survived: u32,
    pub max_frames: u64,

    pub avg_score: f64,
    pub median_score: u32,
    pub max_score: u32,
    pub avg_spawns: f64,
    pub avg_frames: f64,
    pub avg_jumps: f64,

    /// Score -> number of runs ending with it
    pub score_distribution: BTreeMap<u32, u32>,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, max_frames: u64) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let average = |value: fn(&RunStats) -> f64| runs.iter().map(value).sum::<f64>() / divisor;
        let avg_score = average(|r| r.score as f64);
        let avg_spawns = average(|r| r.spawns as f64);
        let avg_frames = average(|r| r.frames as f64);
        let avg_jumps = average(|r| r.jumps as f64);

        let mut scores: Vec<u32> = runs.iter().map(|r| r.score).collect();
        scores.sort_unstable();
        let median_score = scores.get(scores.len() / 2).copied().unwrap_or(0);

        let mut score_distribution = BTreeMap::new();
        for run in &runs {
            *score_distribution.entry(run.score).or_insert(0) += 1;
        }

        Self {
            num_runs,
            runs_survived: runs.iter().filter(|r| !r.crashed).count() as u32,
            max_frames,
            avg_score,
            median_score,
            max_score: scores.last().copied().unwrap_or(0),
            avg_spawns,
            avg_frames,
            avg_jumps,
            score_distribution,
            run_stats: runs,
        }
    }

    /// Human-readable report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {}  (survived {} to the {}-frame limit)\n\n",
            self.num_runs, self.runs_survived, self.max_frames
        ));

        report.push_str("── SCORES ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Average Score: {:.2}\n", self.avg_score));
        report.push_str(&format!("  Median Score:  {}\n", self.median_score));
        report.push_str(&format!("  Max Score:     {}\n\n", self.max_score));

        report.push_str("── PACING ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Spawns:    {:.1}\n", self.avg_spawns));
        report.push_str(&format!("  Avg Frames:    {:.0}\n", self.avg_frames));
        report.push_str(&format!("  Avg Flaps:     {:.1}\n\n", self.avg_jumps));

        report.push_str("── SCORE DISTRIBUTION ───────────────────────────────────────────\n");
        for (score, count) in &self.score_distribution {
            let pct = *count as f64 / self.num_runs.max(1) as f64 * 100.0;
            let bar = "█".repeat((pct / 2.0).round() as usize);
            report.push_str(&format!("  {:>4}: {:>5.1}% {}\n", score, pct, bar));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
