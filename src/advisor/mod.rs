mod classify;
pub mod prompt;
mod types;

pub use classify::{GlucoseStatus, Urgency};
pub use types::*;

use crate::{
    Error, Result,
    llm::LlmClient,
    segment::{parse_meal_sections, split_into_sections},
};
use std::sync::Arc;
use tracing::debug;

pub const MEDICATION_REMINDER: &str = "Set reminders on your phone for medication times. \
Never skip doses without consulting your doctor.";

pub const MEDICATION_DISCLAIMER: &str = "⚠️ IMPORTANT: This is educational information only. \
Always consult your healthcare provider before starting, stopping, or changing any medication. \
This AI advisor cannot replace professional medical advice.";

/// One advisory category: how its input becomes a prompt and how the
/// backend's text becomes its output.
pub trait Advisory {
    type Output;

    const CATEGORY: Category;

    fn prompt(&self) -> String;

    fn assemble(&self, text: &str) -> Self::Output;
}

impl Advisory for BloodSugarInput {
    type Output = BloodSugarOutput;

    const CATEGORY: Category = Category::BloodSugar;

    fn prompt(&self) -> String {
        prompt::blood_sugar(self)
    }

    fn assemble(&self, text: &str) -> BloodSugarOutput {
        let [interpretation, recommendation, _] = take_sections::<3>(text);
        BloodSugarOutput {
            status: GlucoseStatus::from_reading(self.reading),
            interpretation,
            recommendation,
        }
    }
}

impl Advisory for MealPlanInput {
    type Output = MealPlanOutput;

    const CATEGORY: Category = Category::MealPlan;

    fn prompt(&self) -> String {
        prompt::meal_plan(self)
    }

    fn assemble(&self, text: &str) -> MealPlanOutput {
        let sections = parse_meal_sections(text);
        MealPlanOutput {
            breakfast: sections.breakfast,
            lunch: sections.lunch,
            dinner: sections.dinner,
            snacks: sections.snacks,
        }
    }
}

impl Advisory for SymptomInput {
    type Output = SymptomOutput;

    const CATEGORY: Category = Category::Symptoms;

    fn prompt(&self) -> String {
        prompt::symptoms(self)
    }

    fn assemble(&self, text: &str) -> SymptomOutput {
        let [assessment, next_steps, _] = take_sections::<3>(text);
        SymptomOutput {
            urgency: Urgency::classify(text),
            assessment,
            next_steps,
        }
    }
}

impl Advisory for ExerciseInput {
    type Output = ExerciseOutput;

    const CATEGORY: Category = Category::Exercise;

    fn prompt(&self) -> String {
        prompt::exercise(self)
    }

    fn assemble(&self, text: &str) -> ExerciseOutput {
        let [safety_check, recommendation, duration, precautions] = take_sections::<4>(text);
        ExerciseOutput {
            safety_check,
            recommendation,
            duration,
            precautions,
        }
    }
}

impl Advisory for MedicationInput {
    type Output = MedicationOutput;

    const CATEGORY: Category = Category::Medication;

    fn prompt(&self) -> String {
        prompt::medication(self)
    }

    fn assemble(&self, text: &str) -> MedicationOutput {
        MedicationOutput {
            information: text.to_string(),
            reminder: MEDICATION_REMINDER.to_string(),
            disclaimer: MEDICATION_DISCLAIMER.to_string(),
        }
    }
}

fn take_sections<const N: usize>(text: &str) -> [String; N] {
    let mut sections = split_into_sections(text, N).into_iter();
    std::array::from_fn(|_| sections.next().unwrap_or_default())
}

/// Renders prompts, calls the backend and segments its reply. Holds no
/// per-request state, so one instance serves every concurrent request.
#[derive(Clone)]
pub struct Advisor {
    llm_client: Arc<dyn LlmClient>,
}

impl Advisor {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    pub async fn run<A: Advisory>(&self, input: &A) -> Result<A::Output> {
        let category = A::CATEGORY;
        let prompt = input.prompt();
        debug!("Rendered {} prompt ({} chars)", category, prompt.len());

        let text = self
            .llm_client
            .generate(&prompt)
            .await
            .map_err(|e| Error::backend(category.failure_context(), e))?;

        debug!("Backend returned {} chars for {}", text.len(), category);

        Ok(input.assemble(&text))
    }

    pub async fn welcome(&self) -> Result<String> {
        self.llm_client.generate(prompt::WELCOME_PROMPT).await
    }
}
