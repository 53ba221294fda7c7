//! Turns free-form model text into the fields of an advisory response.
//!
//! Every function here is total: malformed or empty text degrades into empty
//! slots or [`NO_INFORMATION`] instead of an error.

/// Returned by [`extract_section`] when a label is missing or has no content.
pub const NO_INFORMATION: &str = "No information available.";

/// Section labels the meal-plan prompt asks the model to emit.
pub const MEAL_LABELS: [&str; 4] = ["BREAKFAST", "LUNCH", "DINNER", "SNACKS"];

const PARAGRAPH_BREAK: &str = "\n\n";

/// Splits `text` on blank lines and returns exactly `count` trimmed chunks,
/// padding with empty strings when the text has fewer paragraphs.
pub fn split_into_sections(text: &str, count: usize) -> Vec<String> {
    let mut sections = vec![String::new(); count];
    if text.is_empty() {
        return sections;
    }

    for (slot, part) in sections.iter_mut().zip(text.split(PARAGRAPH_BREAK)) {
        *slot = part.trim().to_string();
    }

    sections
}

/// Returns the content following the first case-insensitive occurrence of
/// `label`, cut at the earliest occurrence of any other entry in `labels`.
///
/// Matching is plain substring search, so a label word inside an earlier
/// field's prose anchors or truncates there.
pub fn extract_section(text: &str, label: &str, labels: &[&str]) -> String {
    if text.is_empty() || label.is_empty() {
        return NO_INFORMATION.to_string();
    }

    // ASCII folding keeps byte offsets identical between `text` and `haystack`.
    let haystack = text.to_ascii_uppercase();
    let label_upper = label.to_ascii_uppercase();

    let Some(start) = haystack.find(&label_upper) else {
        return NO_INFORMATION.to_string();
    };
    let content_start = start + label_upper.len();
    let rest = &haystack[content_start..];

    let end = labels
        .iter()
        .map(|other| other.to_ascii_uppercase())
        .filter(|other| !other.is_empty() && *other != label_upper)
        .filter_map(|other| rest.find(&other))
        .min()
        .unwrap_or(rest.len());

    let content = text[content_start..content_start + end]
        .trim_start_matches(|c: char| c == ':' || c == '-' || c.is_whitespace())
        .trim();

    if content.is_empty() {
        NO_INFORMATION.to_string()
    } else {
        content.to_string()
    }
}

/// Case-insensitive check for any of `keywords` in `text`. Empty keywords are
/// ignored; empty text or an empty keyword list never matches.
pub fn contains_keywords(text: &str, keywords: &[&str]) -> bool {
    if text.is_empty() || keywords.is_empty() {
        return false;
    }

    let text_lower = text.to_lowercase();
    keywords
        .iter()
        .filter(|keyword| !keyword.is_empty())
        .any(|keyword| text_lower.contains(&keyword.to_lowercase()))
}

/// Meal sections of a meal-plan response, keyed by position in [`MEAL_LABELS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealSections {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
}

pub fn parse_meal_sections(text: &str) -> MealSections {
    let [breakfast, lunch, dinner, snacks] =
        MEAL_LABELS.map(|label| extract_section(text, label, &MEAL_LABELS));

    MealSections {
        breakfast,
        lunch,
        dinner,
        snacks,
    }
}
