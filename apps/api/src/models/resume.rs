//! The canonical resume shape — one aggregate owning everything an editing
//! session works on.
//!
//! Invariants:
//! - Entry ids are unique within their sequence and never reused after removal.
//! - Sequence order is display order and survives edits.
//! - Targeted updates never touch sibling entries or unrelated fields.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact block shown at the top of every template. Free text throughout —
/// no format validation on the edit path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub company: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    /// Newline-separated bullet lines; a leading bullet glyph is allowed
    /// and stripped at render time.
    pub description: String,
}

impl ExperienceEntry {
    /// A fresh entry with a new id and blank fields, appended by the add
    /// operation.
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            company: String::new(),
            title: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
}

impl EducationEntry {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            institution: String::new(),
            degree: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

/// Closed field sets for the targeted update operations. Keeping these as
/// enums makes the whole update surface enumerable and testable instead of
/// an open-ended partial merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalField {
    Name,
    Title,
    Email,
    Phone,
    Location,
    Website,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Company,
    Title,
    StartDate,
    EndDate,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Institution,
    Degree,
    StartDate,
    EndDate,
}

/// The aggregate root for an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

impl ResumeData {
    /// The sample resume every new session starts from.
    pub fn starter() -> Self {
        ResumeData {
            personal_info: PersonalInfo {
                name: "Alex Doe".to_string(),
                title: "Senior Frontend Developer".to_string(),
                email: "alex.doe@email.com".to_string(),
                phone: "123-456-7890".to_string(),
                location: "San Francisco, CA".to_string(),
                website: "alexdoe.dev".to_string(),
            },
            summary: "Innovative Senior Frontend Developer with 8+ years of experience \
                      building and maintaining responsive and scalable web applications. \
                      Proficient in React, TypeScript, and modern JavaScript frameworks. \
                      Passionate about creating intuitive user interfaces and collaborating \
                      in agile environments to deliver high-quality software."
                .to_string(),
            experience: vec![
                ExperienceEntry {
                    id: Uuid::new_v4(),
                    company: "Tech Solutions Inc.".to_string(),
                    title: "Senior Frontend Developer".to_string(),
                    start_date: "Jan 2020".to_string(),
                    end_date: "Present".to_string(),
                    description: "• Led the development of a new customer-facing dashboard using React and Redux, improving user engagement by 25%.\n\
                                  • Mentored junior developers and conducted code reviews to maintain high code quality standards.\n\
                                  • Collaborated with UX/UI designers to translate wireframes into functional components."
                        .to_string(),
                },
                ExperienceEntry {
                    id: Uuid::new_v4(),
                    company: "Web Innovators".to_string(),
                    title: "Frontend Developer".to_string(),
                    start_date: "Jun 2016".to_string(),
                    end_date: "Dec 2019".to_string(),
                    description: "• Developed and maintained client websites using HTML, CSS, and JavaScript (ES6+).\n\
                                  • Implemented responsive designs to ensure seamless experience across all devices.\n\
                                  • Optimized web applications for maximum speed and scalability."
                        .to_string(),
                },
            ],
            education: vec![EducationEntry {
                id: Uuid::new_v4(),
                institution: "University of Technology".to_string(),
                degree: "B.S. in Computer Science".to_string(),
                start_date: "Sep 2012".to_string(),
                end_date: "May 2016".to_string(),
            }],
            skills: [
                "React",
                "TypeScript",
                "JavaScript",
                "Node.js",
                "Tailwind CSS",
                "GraphQL",
                "Jest",
                "Webpack",
                "Figma",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }

    // ── Singleton fields ────────────────────────────────────────────────────

    pub fn update_personal(&mut self, field: PersonalField, value: String) {
        let info = &mut self.personal_info;
        match field {
            PersonalField::Name => info.name = value,
            PersonalField::Title => info.title = value,
            PersonalField::Email => info.email = value,
            PersonalField::Phone => info.phone = value,
            PersonalField::Location => info.location = value,
            PersonalField::Website => info.website = value,
        }
    }

    pub fn set_summary(&mut self, value: String) {
        self.summary = value;
    }

    // ── Experience ──────────────────────────────────────────────────────────

    /// Appends a blank entry and returns its fresh id.
    pub fn add_experience(&mut self) -> Uuid {
        let entry = ExperienceEntry::blank();
        let id = entry.id;
        self.experience.push(entry);
        id
    }

    /// Replaces one field of the entry matching `id`. Returns false when no
    /// entry matches; sibling entries are never touched.
    pub fn update_experience(&mut self, id: Uuid, field: ExperienceField, value: String) -> bool {
        let Some(entry) = self.experience.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        match field {
            ExperienceField::Company => entry.company = value,
            ExperienceField::Title => entry.title = value,
            ExperienceField::StartDate => entry.start_date = value,
            ExperienceField::EndDate => entry.end_date = value,
            ExperienceField::Description => entry.description = value,
        }
        true
    }

    /// Removes the entry matching `id`. Unknown ids are a no-op.
    pub fn remove_experience(&mut self, id: Uuid) {
        self.experience.retain(|e| e.id != id);
    }

    pub fn experience_entry(&self, id: Uuid) -> Option<&ExperienceEntry> {
        self.experience.iter().find(|e| e.id == id)
    }

    /// Wholesale description replace, used when merging generated text.
    pub fn set_experience_description(&mut self, id: Uuid, description: String) -> bool {
        self.update_experience(id, ExperienceField::Description, description)
    }

    // ── Education ───────────────────────────────────────────────────────────

    pub fn add_education(&mut self) -> Uuid {
        let entry = EducationEntry::blank();
        let id = entry.id;
        self.education.push(entry);
        id
    }

    pub fn update_education(&mut self, id: Uuid, field: EducationField, value: String) -> bool {
        let Some(entry) = self.education.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        match field {
            EducationField::Institution => entry.institution = value,
            EducationField::Degree => entry.degree = value,
            EducationField::StartDate => entry.start_date = value,
            EducationField::EndDate => entry.end_date = value,
        }
        true
    }

    pub fn remove_education(&mut self, id: Uuid) {
        self.education.retain(|e| e.id != id);
    }

    // ── Skills ──────────────────────────────────────────────────────────────

    /// Re-derives the full skills sequence from the raw comma-separated
    /// input. Each piece is trimmed; empty pieces and duplicates are kept —
    /// a trailing comma transiently produces an empty entry until the next
    /// edit cleans it up.
    pub fn set_skills_from_input(&mut self, raw: &str) {
        self.skills = raw.split(',').map(|s| s.trim().to_string()).collect();
    }

    /// The comma-joined display string shown in the skills input.
    pub fn skills_display(&self) -> String {
        self.skills.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_add_experience_assigns_unique_ids() {
        let mut data = ResumeData::starter();
        for _ in 0..5 {
            data.add_experience();
        }
        let ids: HashSet<Uuid> = data.experience.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), data.experience.len());
    }

    #[test]
    fn test_update_experience_targets_only_matching_entry() {
        let mut data = ResumeData::starter();
        let target = data.experience[0].id;
        let sibling_before = data.experience[1].clone();

        let found = data.update_experience(target, ExperienceField::Title, "Staff Engineer".into());

        assert!(found);
        assert_eq!(data.experience[0].title, "Staff Engineer");
        assert_eq!(data.experience[1], sibling_before);
    }

    #[test]
    fn test_update_experience_unknown_id_returns_false() {
        let mut data = ResumeData::starter();
        let before = data.clone();
        let found = data.update_experience(Uuid::new_v4(), ExperienceField::Company, "Acme".into());
        assert!(!found);
        assert_eq!(data, before);
    }

    #[test]
    fn test_remove_experience_unknown_id_is_noop() {
        let mut data = ResumeData::starter();
        let before = data.clone();
        data.remove_experience(Uuid::new_v4());
        assert_eq!(data, before);
    }

    #[test]
    fn test_remove_experience_preserves_sibling_order() {
        let mut data = ResumeData::starter();
        let a = data.add_experience();
        let b = data.add_experience();
        let c = data.add_experience();

        data.remove_experience(b);

        let ids: Vec<Uuid> = data.experience.iter().map(|e| e.id).collect();
        let pos_a = ids.iter().position(|&id| id == a).unwrap();
        let pos_c = ids.iter().position(|&id| id == c).unwrap();
        assert!(!ids.contains(&b));
        assert!(pos_a < pos_c);
    }

    #[test]
    fn test_education_add_update_remove() {
        let mut data = ResumeData::starter();
        let id = data.add_education();
        assert!(data.update_education(id, EducationField::Institution, "MIT".into()));
        assert_eq!(
            data.education.iter().find(|e| e.id == id).unwrap().institution,
            "MIT"
        );

        data.remove_education(id);
        assert!(data.education.iter().all(|e| e.id != id));
        // the starter entry is untouched
        assert_eq!(data.education.len(), 1);
    }

    #[test]
    fn test_skills_round_trip_through_display_string() {
        let mut data = ResumeData::starter();
        data.skills = vec!["React".into(), "TS".into()];
        assert_eq!(data.skills_display(), "React, TS");

        data.set_skills_from_input("React, TS, Go");
        assert_eq!(data.skills, vec!["React", "TS", "Go"]);
    }

    #[test]
    fn test_skills_split_trims_and_keeps_empty_pieces() {
        let mut data = ResumeData::starter();
        data.set_skills_from_input("Rust,  tokio ,, axum,");
        assert_eq!(data.skills, vec!["Rust", "tokio", "", "axum", ""]);
    }

    #[test]
    fn test_update_personal_replaces_only_named_field() {
        let mut data = ResumeData::starter();
        data.update_personal(PersonalField::Email, "new@email.com".into());
        assert_eq!(data.personal_info.email, "new@email.com");
        assert_eq!(data.personal_info.name, "Alex Doe");
    }
}
