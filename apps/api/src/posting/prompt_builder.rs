//! Prompt Builder — pure interpolation of a `JobPostingRequest` into the
//! fixed article prompt. No validation, no side effects; optional fields
//! render as empty substrings.

use crate::posting::models::JobPostingRequest;
use crate::posting::prompts::ARTICLE_PROMPT_TEMPLATE;

/// Builds the deterministic generation prompt embedding all six fields.
pub fn build_prompt(request: &JobPostingRequest) -> String {
    ARTICLE_PROMPT_TEMPLATE
        .replace("{company_name}", &request.company_name)
        .replace("{job_title}", &request.job_title)
        .replace("{job_content}", &request.job_content)
        .replace("{target_persona}", &request.target_persona)
        .replace("{salary}", &request.salary)
        .replace("{location}", &request.location)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_occurrences(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    fn full_request() -> JobPostingRequest {
        JobPostingRequest {
            company_name: "Acme Inc".to_string(),
            job_title: "Sales Manager".to_string(),
            job_content: "Drive revenue across the APAC region".to_string(),
            target_persona: "Seasoned closers who coach juniors".to_string(),
            salary: "$120k plus commission".to_string(),
            location: "Osaka, onsite".to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_each_field_exactly_once() {
        let request = full_request();
        let prompt = build_prompt(&request);
        for value in [
            &request.company_name,
            &request.job_title,
            &request.job_content,
            &request.target_persona,
            &request.salary,
            &request.location,
        ] {
            assert_eq!(
                count_occurrences(&prompt, value),
                1,
                "field value {value:?} must appear exactly once"
            );
        }
    }

    #[test]
    fn test_no_unreplaced_slots_remain() {
        let prompt = build_prompt(&full_request());
        assert!(!prompt.contains('{'), "template slot left in: {prompt}");
    }

    #[test]
    fn test_optional_fields_render_as_empty_substrings() {
        let request = JobPostingRequest {
            company_name: "Acme Inc".to_string(),
            job_title: "Sales Manager".to_string(),
            job_content: "Drive revenue".to_string(),
            ..Default::default()
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("Ideal candidate: \n"));
        assert!(prompt.contains("Salary:  /"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let request = full_request();
        assert_eq!(build_prompt(&request), build_prompt(&request));
    }

    #[test]
    fn test_formatting_rules_are_hardcoded() {
        let prompt = build_prompt(&full_request());
        assert!(prompt.contains("###"));
        assert!(prompt.contains("**"));
    }
}
