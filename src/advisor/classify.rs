use crate::segment::contains_keywords;
use serde::{Deserialize, Serialize};
use std::fmt;

const LOW_BELOW: f64 = 70.0;
const HIGH_ABOVE: f64 = 180.0;
const CRITICAL_ABOVE: f64 = 250.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlucoseStatus {
    Low,
    Normal,
    High,
    Critical,
}

impl GlucoseStatus {
    /// Thresholds apply to the reading in mg/dL, never to model text.
    pub fn from_reading(reading: f64) -> Self {
        if reading < LOW_BELOW {
            GlucoseStatus::Low
        } else if reading > CRITICAL_ABOVE {
            GlucoseStatus::Critical
        } else if reading > HIGH_ABOVE {
            GlucoseStatus::High
        } else {
            GlucoseStatus::Normal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GlucoseStatus::Low => "low",
            GlucoseStatus::Normal => "normal",
            GlucoseStatus::High => "high",
            GlucoseStatus::Critical => "critical",
        }
    }
}

impl fmt::Display for GlucoseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Emergency,
    Urgent,
    Routine,
}

/// Checked in order; the first matching set decides.
const URGENCY_KEYWORDS: [(Urgency, &[&str]); 2] = [
    (
        Urgency::Emergency,
        &["emergency", "911", "immediate", "urgent care"],
    ),
    (
        Urgency::Urgent,
        &["urgent", "contact doctor", "contact your doctor", "today"],
    ),
];

impl Urgency {
    /// Heuristic keyword scan of model text. It can disagree with the
    /// urgency the prose itself states.
    pub fn classify(text: &str) -> Self {
        URGENCY_KEYWORDS
            .iter()
            .find(|(_, keywords)| contains_keywords(text, keywords))
            .map(|(urgency, _)| *urgency)
            .unwrap_or(Urgency::Routine)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Emergency => "emergency",
            Urgency::Urgent => "urgent",
            Urgency::Routine => "routine",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
