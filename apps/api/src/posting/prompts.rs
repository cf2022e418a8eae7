// Prompt constants for article generation.

/// System instruction framing the model as a recruitment-marketing consultant.
pub const ARTICLE_SYSTEM: &str = "You are a star recruitment-marketing consultant. \
    From the data the user provides, write a job advertisement so compelling that \
    candidates can hardly resist applying. Respond in Markdown only.";

/// Article generation prompt. Replace the six `{field}` slots before sending.
///
/// The two formatting rules are fixed: `###` headings to separate sections,
/// bold for the key benefits. The result view's styling depends on both.
pub const ARTICLE_PROMPT_TEMPLATE: &str = r#"Using the [DATA] below, write a magnetic job advertisement in Markdown.

RULES:
1. Always use headings (###) to break the article into themed sections.
2. Always bold (**) the important keywords, merits, and benefits.

[DATA]
Company: {company_name} / Role: {job_title}
Responsibilities and mission: {job_content} / Ideal candidate: {target_persona}
Salary: {salary} / Location: {location}"#;
