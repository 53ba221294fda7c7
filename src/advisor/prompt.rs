//! Fixed instruction templates, one per advisory category.

use super::types::{BloodSugarInput, ExerciseInput, MealPlanInput, MedicationInput, SymptomInput};

pub const WELCOME_PROMPT: &str = "Generate a warm, encouraging welcome message for diabetes \
patients using this AI health advisor. Keep it under 50 words.";

pub fn blood_sugar(input: &BloodSugarInput) -> String {
    format!(
        "You are a diabetes care advisor. Analyze this blood sugar reading:

Reading: {reading:.1} mg/dL
Timing: {timing}
Meal: {meal}

Provide:
1. Status (normal/high/low/critical)
2. Clear interpretation in simple terms
3. Immediate actionable recommendations

Guidelines:
- Fasting: 70-100 normal, 100-126 pre-diabetes, >126 diabetes concern
- Before meal: 70-130 normal
- 2 hours after meal: <180 normal
- <70 is low (hypoglycemia)
- >250 requires immediate attention

Be supportive and clear.",
        reading = input.reading,
        timing = input.meal_timing,
        meal = input.meal_type,
    )
}

pub fn meal_plan(input: &MealPlanInput) -> String {
    let calorie_info = input
        .calorie_limit
        .filter(|limit| *limit > 0.0)
        .map(|limit| format!("Target daily calories: {limit:.0}"))
        .unwrap_or_default();

    format!(
        "Create a diabetes-friendly meal plan:

Diet Type: {diet}
Allergies/Restrictions: {allergies}
{calorie_info}

For each meal, provide:
- Specific food items
- Approximate portion sizes
- Why it's good for blood sugar control

Focus on:
- Low glycemic index foods
- Balanced macros (protein, healthy fats, complex carbs)
- High fiber content
- Foods that prevent blood sugar spikes

Format:
BREAKFAST: [meal details]
LUNCH: [meal details]
DINNER: [meal details]
SNACKS: [snack options]",
        diet = input.diet_type,
        allergies = input.allergies,
    )
}

pub fn symptoms(input: &SymptomInput) -> String {
    format!(
        "You are a diabetes health advisor. Assess these symptoms:

Symptoms: {symptoms}
Duration: {duration}
Current Medications: {meds}

Determine:
1. URGENCY LEVEL:
   - EMERGENCY (call 911): Severe symptoms like chest pain, loss of consciousness, extreme confusion
   - URGENT (contact doctor today): Persistent high BG, signs of infection, concerning symptoms
   - ROUTINE (monitor and schedule appointment): Mild symptoms

2. ASSESSMENT: What these symptoms might indicate

3. NEXT STEPS: Specific actions to take

Be clear about when to seek immediate medical help. Always err on the side of caution.",
        symptoms = input.symptoms,
        duration = input.duration,
        meds = input.current_meds,
    )
}

pub fn exercise(input: &ExerciseInput) -> String {
    let bg_info = input
        .current_bg
        .filter(|bg| *bg > 0.0)
        .map(|bg| format!("Current Blood Glucose: {bg:.1} mg/dL"))
        .unwrap_or_default();

    format!(
        "Create a diabetes-safe exercise plan:

Fitness Level: {level}
Time Available: {minutes} minutes
{bg_info}
Preferred Exercise: {preferred}

Provide:
1. SAFETY CHECK: Is it safe to exercise now based on BG? (BG 100-250 is generally safe, <100 eat snack first, >250 delay exercise)
2. EXERCISE PLAN: Specific exercises with sets/reps or duration
3. DURATION & INTENSITY: How to structure the workout
4. PRECAUTIONS: Important safety tips

Remember:
- Exercise lowers blood sugar
- Stay hydrated
- Have fast-acting carbs nearby
- Stop if feeling dizzy or unwell",
        level = input.fitness_level,
        minutes = input.time_available,
        preferred = input.preferred_type,
    )
}

pub fn medication(input: &MedicationInput) -> String {
    format!(
        "Provide general information about diabetes medication:

Medication: {name}
Question about: {purpose}

Provide helpful general information, but:
1. DO NOT prescribe or change dosages
2. Emphasize consulting with healthcare provider
3. Mention common considerations
4. Include important safety information

Always include a clear disclaimer that this is educational information only.",
        name = input.medication_name,
        purpose = input.purpose,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blood_sugar_prompt_formats_reading() {
        let prompt = blood_sugar(&BloodSugarInput {
            reading: 145.0,
            meal_timing: "after_meal".to_string(),
            meal_type: "lunch".to_string(),
        });
        assert!(prompt.contains("Reading: 145.0 mg/dL"));
        assert!(prompt.contains("Timing: after_meal"));
        assert!(prompt.contains("Meal: lunch"));
    }

    #[test]
    fn test_meal_prompt_mentions_positive_calorie_limit_only() {
        let mut input = MealPlanInput {
            diet_type: "vegetarian".to_string(),
            allergies: "none".to_string(),
            calorie_limit: Some(1800.0),
        };
        assert!(meal_plan(&input).contains("Target daily calories: 1800"));

        input.calorie_limit = Some(0.0);
        assert!(!meal_plan(&input).contains("Target daily calories"));

        input.calorie_limit = None;
        assert!(!meal_plan(&input).contains("Target daily calories"));
    }

    #[test]
    fn test_meal_prompt_requests_labelled_sections() {
        let prompt = meal_plan(&MealPlanInput {
            diet_type: "vegan".to_string(),
            allergies: "peanuts".to_string(),
            calorie_limit: None,
        });
        for label in crate::segment::MEAL_LABELS {
            assert!(prompt.contains(&format!("{label}: ")), "missing {label}");
        }
    }

    #[test]
    fn test_exercise_prompt_optional_glucose() {
        let mut input = ExerciseInput {
            fitness_level: "beginner".to_string(),
            time_available: 30,
            current_bg: Some(120.0),
            preferred_type: "walking".to_string(),
        };
        let prompt = exercise(&input);
        assert!(prompt.contains("Time Available: 30 minutes"));
        assert!(prompt.contains("Current Blood Glucose: 120.0 mg/dL"));

        input.current_bg = None;
        assert!(!exercise(&input).contains("Current Blood Glucose"));
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let input = SymptomInput {
            symptoms: "blurred vision".to_string(),
            duration: "2 days".to_string(),
            current_meds: "metformin".to_string(),
        };
        assert_eq!(symptoms(&input), symptoms(&input));
        assert!(symptoms(&input).contains("Current Medications: metformin"));
    }

    #[test]
    fn test_medication_prompt() {
        let prompt = medication(&MedicationInput {
            medication_name: "insulin glargine".to_string(),
            purpose: "timing".to_string(),
        });
        assert!(prompt.contains("Medication: insulin glargine"));
        assert!(prompt.contains("DO NOT prescribe"));
    }
}
