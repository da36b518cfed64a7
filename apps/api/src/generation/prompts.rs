//! Deterministic prompt construction for the AI-assist calls.
//!
//! Exact wording is a presentation concern; what matters is that the prompt
//! is a pure function of current field values.

use crate::errors::AppError;
use crate::generation::GenerationField;
use crate::models::resume::{ExperienceEntry, ResumeData};

/// How many leading skills the summary prompt mentions.
const SUMMARY_SKILL_COUNT: usize = 3;

pub fn summary_prompt(data: &ResumeData) -> String {
    let skills = data
        .skills
        .iter()
        .take(SUMMARY_SKILL_COUNT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Generate a professional summary for a {} with skills in {}. \
         Keep it concise and impactful.",
        data.personal_info.title, skills
    )
}

pub fn experience_prompt(entry: &ExperienceEntry) -> String {
    format!(
        "Generate 3-4 bullet points for a {} at {}. \
         Focus on achievements and quantifiable results.",
        entry.title, entry.company
    )
}

/// Builds the prompt for a field from current values. Fails when the field
/// references an entry that no longer exists.
pub fn prompt_for(field: GenerationField, data: &ResumeData) -> Result<String, AppError> {
    match field {
        GenerationField::Summary => Ok(summary_prompt(data)),
        GenerationField::Experience(id) => data
            .experience_entry(id)
            .map(experience_prompt)
            .ok_or_else(|| AppError::NotFound(format!("experience entry {id} not found"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_uses_title_and_first_three_skills() {
        let mut data = ResumeData::starter();
        data.personal_info.title = "Data Engineer".into();
        data.skills = vec!["SQL".into(), "Spark".into(), "Rust".into(), "Go".into()];

        let prompt = summary_prompt(&data);
        assert!(prompt.contains("Data Engineer"));
        assert!(prompt.contains("SQL, Spark, Rust"));
        assert!(!prompt.contains("Go"));
    }

    #[test]
    fn test_experience_prompt_uses_entry_title_and_company() {
        let data = ResumeData::starter();
        let entry = &data.experience[0];

        let prompt = experience_prompt(entry);
        assert!(prompt.contains(&entry.title));
        assert!(prompt.contains(&entry.company));
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let data = ResumeData::starter();
        assert_eq!(summary_prompt(&data), summary_prompt(&data));
    }
}
