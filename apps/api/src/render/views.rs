//! Server-rendered views: the input form, the result screen, and the shared
//! page shell. All user- or model-supplied text is escaped before it is
//! embedded; the article body goes through `render::markdown` instead.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::posting::models::JobPostingRequest;
use crate::render::markdown::markdown_to_html;
use crate::session::GeneratedArticle;

/// Fixed external policy document both lead-capture links point at.
pub const PRIVACY_POLICY_URL: &str = "https://mixjob.co.jp/privacy/";

/// Embedded logo asset, served at /static/logo.svg.
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 320 80">
  <rect x="4" y="12" width="56" height="56" rx="14" fill="#ff7f7f"/>
  <path d="M18 52V30h8l6 10 6-10h8v22h-8V42l-6 9-6-9v10z" fill="#ffffff"/>
  <text x="76" y="54" font-family="Helvetica, Arial, sans-serif" font-size="34" font-weight="bold" fill="#e63946">mixjob</text>
</svg>
"##;

const STYLES: &str = r#"
    html, body {
        margin: 0;
        font-family: 'Helvetica Neue', 'Arial', 'Hiragino Kaku Gothic ProN', 'Hiragino Sans', sans-serif;
        background-color: #fafafa;
        color: #333;
    }
    .container { max-width: 850px; margin: 0 auto; padding: 3rem 1rem; }
    .logo { display: block; width: 50%; margin: 0 auto 30px; }

    .header-banner {
        background-color: #ffffff;
        padding: 35px 20px;
        border-radius: 20px;
        text-align: center;
        margin-bottom: 40px;
        box-shadow: 0 10px 25px rgba(0,0,0,0.05);
        border: 1px solid #f0f0f0;
    }
    .header-text { color: #e63946; font-weight: bold; font-size: 30px; margin-bottom: 10px; }
    .header-sub { color: #555; font-size: 20px; }

    .article-box {
        background-color: #ffffff;
        padding: 35px;
        border-radius: 15px;
        border: 1px solid #eee;
        line-height: 1.9;
        box-shadow: inset 0 2px 10px rgba(0,0,0,0.02);
    }
    .article-box h3 {
        color: #e63946;
        border-left: 8px solid #e63946;
        padding-left: 15px;
        margin-top: 35px;
        margin-bottom: 15px;
        font-size: 1.5em;
    }
    .article-box strong {
        color: #000;
        background: linear-gradient(transparent 60%, #ffdfdf 60%);
        padding: 0 3px;
    }

    .banner { padding: 14px 18px; border-radius: 10px; margin-bottom: 20px; }
    .banner.success { background-color: #e7f6ec; color: #1a7f37; border: 1px solid #bfe5cc; }
    .banner.warning { background-color: #fff8e1; color: #8a6d00; border: 1px solid #f0e0a0; }
    .banner.error   { background-color: #fdecea; color: #b3261e; border: 1px solid #f5c6c2; }

    form.posting label { display: block; font-weight: bold; margin: 14px 0 6px; }
    form.posting input[type=text], form.posting textarea {
        width: 100%;
        box-sizing: border-box;
        padding: 10px;
        border: 1px solid #ddd;
        border-radius: 8px;
        font-size: 15px;
        font-family: inherit;
    }
    .field-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0 24px; }

    button {
        background-color: #ff7f7f;
        color: white;
        border-radius: 50px;
        border: none;
        font-weight: bold;
        cursor: pointer;
        transition: transform 0.2s ease, box-shadow 0.2s ease, background-color 0.2s ease;
    }
    button:hover:not(:disabled) {
        transform: translateY(-3px);
        box-shadow: 0 10px 20px rgba(255,127,127,0.5);
        background-color: #ff6666;
    }
    button:disabled {
        background-color: #e0e0e0;
        color: #999999;
        box-shadow: none;
        transform: none;
        cursor: default;
    }
    button.generate {
        padding: 15px 40px;
        font-size: 22px;
        width: 100%;
        margin-top: 24px;
        box-shadow: 0 6px 15px rgba(255,127,127,0.3);
    }
    button.consult {
        height: 100px;
        font-size: 28px;
        width: 100%;
        box-shadow: 0 8px 25px rgba(255,127,127,0.4);
    }
    button.back {
        background: none;
        color: #555;
        font-weight: normal;
        margin-top: 20px;
        padding: 8px 16px;
    }
    button.back:hover { box-shadow: none; transform: none; background: #eee; }

    .consult-pitch {
        background-color: #fff5f5;
        padding: 25px;
        border-radius: 15px;
        border-left: 10px solid #ff7f7f;
        margin-bottom: 25px;
    }
    .consult-pitch .lead { margin: 0 0 8px; font-weight: bold; color: #e63946; font-size: 1.2em; }
    .consult-pitch .body { font-size: 0.95em; color: #444; line-height: 1.6; margin: 0; }
    .policy-note { font-size: 0.95em; margin-bottom: 10px; color: #666; }
    .policy-note a { color: #e63946; text-decoration: underline; }
    .consent-row { margin: 14px 0 20px; }
    hr { border: none; border-top: 1px solid #e5e5e5; margin: 32px 0; }
"#;

/// Wraps view content in the shared page shell.
fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>AI Job Posting Consultant</title>
<style>{STYLES}</style>
</head>
<body>
<div class="container">
<img class="logo" src="/static/logo.svg" alt="mixjob">
<div class="header-banner">
    <p class="header-text">&#128640; Your free AI consultant writes the job posting!</p>
    <p class="header-sub">Next-generation AI distilled from professional recruiting know-how. It puts your company's appeal into words in seconds.</p>
</div>
{body}
</div>
</body>
</html>"#
    )
}

fn text_input(label: &str, name: &str, value: &str) -> String {
    format!(
        r#"<div><label for="{name}">{label}</label>
<input type="text" id="{name}" name="{name}" value="{}"></div>"#,
        encode_double_quoted_attribute(value)
    )
}

fn textarea(label: &str, name: &str, value: &str, placeholder: &str, rows: u8) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<textarea id="{name}" name="{name}" rows="{rows}" placeholder="{}">{}</textarea>"#,
        encode_double_quoted_attribute(placeholder),
        encode_text(value)
    )
}

/// The INPUT screen: six labeled fields plus the generate action.
/// `warning` carries the blocked-submission message, values are preserved.
pub fn input_view(form: &JobPostingRequest, warning: Option<&str>) -> String {
    let warning_html = warning
        .map(|w| format!(r#"<div class="banner warning">{}</div>"#, encode_text(w)))
        .unwrap_or_default();

    let body = format!(
        r#"<h3>&#128221; Enter the basics of the role</h3>
{warning_html}
<form class="posting" method="post" action="/generate"
      onsubmit="var b=this.querySelector('button.generate'); b.disabled=true; b.textContent='Your AI consultant is drafting the article...'; return true;">
<div class="field-grid">
{company}
{title}
{salary}
{location}
</div>
{content}
{persona}
<button class="generate" type="submit">&#10024; Generate the job posting for free</button>
</form>"#,
        company = text_input("1. Company name", "company_name", &form.company_name),
        title = text_input("2. Job title", "job_title", &form.job_title),
        salary = text_input("3. Salary", "salary", &form.salary),
        location = text_input("4. Location", "location", &form.location),
        content = textarea(
            "5. Responsibilities and mission",
            "job_content",
            &form.job_content,
            "What problems will they solve, and what makes the work rewarding?",
            6,
        ),
        persona = textarea(
            "6. Ideal candidate",
            "target_persona",
            &form.target_persona,
            "What experience and values would make someone a great fit?",
            4,
        ),
    );

    page(&body)
}

/// Transient banner on the RESULT screen after a consult submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultFlash {
    /// Consent checkbox was not checked; the request was rejected.
    ConsentRequired,
    /// Static acknowledgment — no data goes anywhere.
    ConsultAcknowledged,
}

/// The RESULT screen: the generated article (or a distinct failure banner),
/// the static lead-capture panel, and the redo action.
pub fn result_view(article: &GeneratedArticle, flash: Option<ResultFlash>) -> String {
    let article_html = match article {
        GeneratedArticle::Completed(text) => format!(
            r#"<div class="banner success">&#127881; Your job posting is ready!</div>
<hr>
<div class="article-box">
{}
</div>
<hr>"#,
            markdown_to_html(text)
        ),
        GeneratedArticle::Failed(reason) => format!(
            r#"<div class="banner error">The article could not be generated: {}<br>
Use the button below to go back and try again.</div>"#,
            encode_text(reason)
        ),
    };

    let flash_html = match flash {
        Some(ResultFlash::ConsultAcknowledged) => {
            r#"<div class="banner success">&#9989; Request received! A consultant will reach out within one business day.</div>"#
        }
        Some(ResultFlash::ConsentRequired) => {
            r#"<div class="banner warning">Please agree to the policy before booking a consultation.</div>"#
        }
        None => "",
    };

    let body = format!(
        r#"{article_html}
<h3>&#129309; Talk to a professional consultant</h3>
<div class="consult-pitch">
    <p class="lead">Ready to start hiring with this draft?</p>
    <p class="body">Using this AI draft as the base, a professional will walk with you to a successful hire: how to reach your target candidates, which channels fit best, and more.</p>
</div>
<div class="policy-note">
    Please review our <a href="{policy}">privacy policy</a> and
    <a href="{policy}">personal data protection rules</a> before requesting a consultation.
</div>
{flash_html}
<form method="post" action="/consult">
    <div class="consent-row">
        <label>
            <input type="checkbox" name="consent" value="on"
                   onchange="document.getElementById('consult-btn').disabled = !this.checked;">
            I agree to the rules above and want to book a free online consultation
        </label>
    </div>
    <button class="consult" id="consult-btn" type="submit" disabled>&#128640; Talk to a consultant (free)</button>
</form>
<form method="post" action="/reset">
    <button class="back" type="submit">&#8592; Edit the details and generate again</button>
</form>"#,
        policy = PRIVACY_POLICY_URL,
    );

    page(&body)
}
