//! Form editor — the typed update surface over the resume aggregate.
//!
//! Every editable control maps to exactly one `ResumeUpdate` variant, so the
//! whole edit surface is enumerable. Handlers apply the targeted update and
//! nothing else: no validation, no formatting, no network calls.

pub mod handlers;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{EducationField, ExperienceField, PersonalField, ResumeData};

/// One edit operation, tagged for the wire:
/// `{"op": "update_experience", "id": "...", "field": "title", "value": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ResumeUpdate {
    UpdatePersonal { field: PersonalField, value: String },
    UpdateSummary { value: String },
    AddExperience,
    UpdateExperience { id: Uuid, field: ExperienceField, value: String },
    RemoveExperience { id: Uuid },
    AddEducation,
    UpdateEducation { id: Uuid, field: EducationField, value: String },
    RemoveEducation { id: Uuid },
    /// Raw comma-separated skills input; the sequence is re-derived by
    /// splitting and trimming.
    SetSkills { input: String },
}

/// Applies one update to the aggregate. Removes of unknown ids are no-ops;
/// updates of unknown ids report not-found.
pub fn apply(data: &mut ResumeData, update: ResumeUpdate) -> Result<(), AppError> {
    match update {
        ResumeUpdate::UpdatePersonal { field, value } => {
            data.update_personal(field, value);
        }
        ResumeUpdate::UpdateSummary { value } => {
            data.set_summary(value);
        }
        ResumeUpdate::AddExperience => {
            data.add_experience();
        }
        ResumeUpdate::UpdateExperience { id, field, value } => {
            if !data.update_experience(id, field, value) {
                return Err(AppError::NotFound(format!("experience entry {id} not found")));
            }
        }
        ResumeUpdate::RemoveExperience { id } => {
            data.remove_experience(id);
        }
        ResumeUpdate::AddEducation => {
            data.add_education();
        }
        ResumeUpdate::UpdateEducation { id, field, value } => {
            if !data.update_education(id, field, value) {
                return Err(AppError::NotFound(format!("education entry {id} not found")));
            }
        }
        ResumeUpdate::RemoveEducation { id } => {
            data.remove_education(id);
        }
        ResumeUpdate::SetSkills { input } => {
            data.set_skills_from_input(&input);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_apply_update_summary() {
        let mut data = ResumeData::starter();
        apply(
            &mut data,
            ResumeUpdate::UpdateSummary {
                value: "short and sweet".into(),
            },
        )
        .unwrap();
        assert_eq!(data.summary, "short and sweet");
    }

    #[test]
    fn test_apply_update_of_unknown_experience_is_not_found() {
        let mut data = ResumeData::starter();
        let before = data.clone();
        let result = apply(
            &mut data,
            ResumeUpdate::UpdateExperience {
                id: Uuid::new_v4(),
                field: ExperienceField::Title,
                value: "Ghost".into(),
            },
        );
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(data, before);
    }

    #[test]
    fn test_apply_remove_of_unknown_id_is_a_noop() {
        let mut data = ResumeData::starter();
        let before = data.clone();
        apply(&mut data, ResumeUpdate::RemoveExperience { id: Uuid::new_v4() }).unwrap();
        apply(&mut data, ResumeUpdate::RemoveEducation { id: Uuid::new_v4() }).unwrap();
        assert_eq!(data, before);
    }

    #[test]
    fn test_add_remove_sequences_keep_ids_unique_and_values_targeted() {
        let mut data = ResumeData::starter();

        apply(&mut data, ResumeUpdate::AddExperience).unwrap();
        apply(&mut data, ResumeUpdate::AddExperience).unwrap();
        let first_new = data.experience[data.experience.len() - 2].id;
        let second_new = data.experience[data.experience.len() - 1].id;

        apply(
            &mut data,
            ResumeUpdate::UpdateExperience {
                id: first_new,
                field: ExperienceField::Company,
                value: "First Co".into(),
            },
        )
        .unwrap();
        apply(&mut data, ResumeUpdate::RemoveExperience { id: second_new }).unwrap();
        apply(&mut data, ResumeUpdate::AddExperience).unwrap();

        let ids: HashSet<Uuid> = data.experience.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), data.experience.len(), "duplicate id after edits");

        let first = data.experience.iter().find(|e| e.id == first_new).unwrap();
        assert_eq!(first.company, "First Co");
        assert!(first.title.is_empty(), "sibling field bled into new entry");
    }

    #[test]
    fn test_set_skills_splits_and_trims() {
        let mut data = ResumeData::starter();
        apply(
            &mut data,
            ResumeUpdate::SetSkills {
                input: "React, TS, Go".into(),
            },
        )
        .unwrap();
        assert_eq!(data.skills, vec!["React", "TS", "Go"]);
    }

    #[test]
    fn test_update_op_wire_shape() {
        let json = serde_json::json!({
            "op": "update_personal",
            "field": "email",
            "value": "a@b.c"
        });
        let update: ResumeUpdate = serde_json::from_value(json).unwrap();
        let mut data = ResumeData::starter();
        apply(&mut data, update).unwrap();
        assert_eq!(data.personal_info.email, "a@b.c");
    }
}
