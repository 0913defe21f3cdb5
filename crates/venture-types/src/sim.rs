//! Simulation domain types: milestones, metrics, and narration events.
//!
//! The milestone schedule is fixed at compile time. Dispatch is a closed
//! enum (`MilestoneKind`), not free-text matching, so adding a milestone
//! is a compile error until every match arm handles it.

use serde::{Deserialize, Serialize};

/// The closed set of milestone kinds in the scripted 30-day run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneKind {
    MarketResearch,
    MvpDevelopment,
    UserTesting,
    Launch,
}

/// A fixed, ordered phase of the scripted simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    /// Human-readable period, e.g. "Day 1-5".
    pub period: String,
    pub kind: MilestoneKind,
    pub description: String,
}

impl Milestone {
    /// Label for metric points recorded at the end of this period,
    /// e.g. "Day 5" for the period "Day 1-5".
    pub fn day_label(&self) -> String {
        let day = self
            .period
            .rsplit('-')
            .next()
            .unwrap_or(&self.period)
            .trim();
        format!("Day {day}")
    }
}

/// The fixed four-milestone schedule.
pub fn milestone_schedule() -> Vec<Milestone> {
    let schedule = [
        (
            "Day 1-5",
            MilestoneKind::MarketResearch,
            "Market research & tech stack selection",
        ),
        ("Day 6-15", MilestoneKind::MvpDevelopment, "MVP development"),
        (
            "Day 16-25",
            MilestoneKind::UserTesting,
            "User testing & marketing prep",
        ),
        ("Day 26-30", MilestoneKind::Launch, "Launch & analytics"),
    ];
    schedule
        .into_iter()
        .map(|(period, kind, description)| Milestone {
            period: period.to_string(),
            kind,
            description: description.to_string(),
        })
        .collect()
}

/// One (label, value) sample in a metric series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub label: String,
    pub value: f64,
}

/// A named, insertion-ordered metric series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSeries {
    pub name: String,
    pub points: Vec<MetricPoint>,
}

/// Append-only collection of metric series, read once at the end of a
/// run for chart rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricBook {
    series: Vec<MetricSeries>,
}

impl MetricBook {
    /// The four tracked startup metrics, in chart order.
    pub const SERIES_NAMES: [&'static str; 4] = [
        "User Signups",
        "Conversion Rate",
        "Development Velocity",
        "Customer Satisfaction",
    ];

    /// Create a book pre-seeded with the standard empty series.
    pub fn new() -> Self {
        Self {
            series: Self::SERIES_NAMES
                .iter()
                .map(|name| MetricSeries {
                    name: name.to_string(),
                    points: Vec::new(),
                })
                .collect(),
        }
    }

    /// Append a sample to a named series, creating the series if needed.
    pub fn record(&mut self, name: &str, label: impl Into<String>, value: f64) {
        let point = MetricPoint {
            label: label.into(),
            value,
        };
        match self.series.iter_mut().find(|s| s.name == name) {
            Some(series) => series.points.push(point),
            None => self.series.push(MetricSeries {
                name: name.to_string(),
                points: vec![point],
            }),
        }
    }

    pub fn series(&self) -> &[MetricSeries] {
        &self.series
    }

    pub fn get(&self, name: &str) -> Option<&MetricSeries> {
        self.series.iter().find(|s| s.name == name)
    }
}

impl Default for MetricBook {
    fn default() -> Self {
        Self::new()
    }
}

/// Narration events emitted by the simulation driver.
///
/// Keeps the narrative side effect separate from the data-producing
/// logic: the CLI renders these with console styling, the web layer and
/// tests ignore or inspect them structurally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    /// A milestone phase has begun.
    MilestoneStarted { period: String, description: String },

    /// A scripted narration line.
    Narration { text: String },

    /// An agent produced text for a labeled task.
    AgentReport {
        speaker: String,
        label: String,
        text: String,
    },

    /// Two agents are starting a dialogue about a topic.
    DialogueStarted {
        initiator: String,
        responder: String,
        topic: String,
    },

    /// One message within a dialogue.
    DialogueLine { speaker: String, message: String },

    /// A metric sample was appended.
    MetricRecorded {
        series: String,
        label: String,
        value: f64,
    },
}
