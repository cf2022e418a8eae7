//! Job Posting Request — the structured form input that seeds the prompt.

use serde::Deserialize;

/// One submitted form. Built fresh at submit time, consumed once by the
/// prompt builder, never persisted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobPostingRequest {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub job_title: String,
    /// Business/mission description of the role.
    #[serde(default)]
    pub job_content: String,
    #[serde(default)]
    pub target_persona: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub location: String,
}

impl JobPostingRequest {
    /// The input form's starting values. Salary and location are suggestions
    /// the user can overwrite; the two textareas start empty.
    pub fn prefilled() -> Self {
        Self {
            company_name: "Mixjob Inc.".to_string(),
            job_title: "Sales Manager".to_string(),
            job_content: String::new(),
            target_persona: String::new(),
            salary: "$90,000 – $130,000".to_string(),
            location: "Shibuya, Tokyo (hybrid)".to_string(),
        }
    }

    /// Checks the three required fields. Optional fields may stay empty.
    pub fn validate(&self) -> Result<(), String> {
        let mut missing = Vec::new();
        if self.company_name.trim().is_empty() {
            missing.push("company name");
        }
        if self.job_title.trim().is_empty() {
            missing.push("job title");
        }
        if self.job_content.trim().is_empty() {
            missing.push("job content");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!(
                "Please fill in the required fields: {}.",
                missing.join(", ")
            ))
        }
    }
}
