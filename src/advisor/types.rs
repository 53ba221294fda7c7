use super::classify::{GlucoseStatus, Urgency};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of advisory categories the service answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    BloodSugar,
    MealPlan,
    Symptoms,
    Exercise,
    Medication,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::BloodSugar,
        Category::MealPlan,
        Category::Symptoms,
        Category::Exercise,
        Category::Medication,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::BloodSugar => "bloodSugarInterpreter",
            Category::MealPlan => "mealPlanner",
            Category::Symptoms => "symptomChecker",
            Category::Exercise => "exerciseAdvisor",
            Category::Medication => "medicationInfo",
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            Category::BloodSugar => "/bloodSugar",
            Category::MealPlan => "/mealPlan",
            Category::Symptoms => "/symptoms",
            Category::Exercise => "/exercise",
            Category::Medication => "/medication",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Category::BloodSugar => "Interpret blood sugar readings",
            Category::MealPlan => "Get diabetes-friendly meal plans",
            Category::Symptoms => "Check symptoms and get guidance",
            Category::Exercise => "Get safe exercise recommendations",
            Category::Medication => "Get medication information",
        }
    }

    /// Completes "failed to ..." when the backend call for this category fails.
    pub fn failure_context(self) -> &'static str {
        match self {
            Category::BloodSugar => "interpret blood sugar",
            Category::MealPlan => "generate meal plan",
            Category::Symptoms => "check symptoms",
            Category::Exercise => "generate exercise plan",
            Category::Medication => "get medication info",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodSugarInput {
    /// mg/dL
    pub reading: f64,
    /// fasting, before_meal or after_meal
    pub meal_timing: String,
    /// breakfast, lunch, dinner or snack
    pub meal_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodSugarOutput {
    pub status: GlucoseStatus,
    pub interpretation: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanInput {
    /// vegetarian, non_vegetarian or vegan
    pub diet_type: String,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub calorie_limit: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanOutput {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomInput {
    pub symptoms: String,
    pub duration: String,
    #[serde(default)]
    pub current_meds: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomOutput {
    pub urgency: Urgency,
    pub assessment: String,
    pub next_steps: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseInput {
    /// beginner, intermediate or advanced
    pub fitness_level: String,
    /// Minutes.
    pub time_available: u32,
    #[serde(default)]
    pub current_bg: Option<f64>,
    /// cardio, strength, yoga or walking
    pub preferred_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseOutput {
    pub safety_check: String,
    pub recommendation: String,
    pub duration: String,
    pub precautions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationInput {
    pub medication_name: String,
    /// dosage, timing, side_effects or interactions
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationOutput {
    pub information: String,
    pub reminder: String,
    pub disclaimer: String,
}
