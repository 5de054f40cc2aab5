//! # Sharing
//!
//! Builds the short text summary users paste into messages, plus ready-made
//! `mailto:` and `sms:` links carrying it. Nothing here sends anything; the
//! caller decides whether to print, copy or open the link.
//!
//! ## Example
//!
//! ```rust
//! use sleep_core::calculations::{calculate_results, CalculatorInputs};
//! use sleep_core::share::{email_link, generate_share_text};
//!
//! let results = calculate_results(&CalculatorInputs::default()).unwrap();
//! let text = generate_share_text(&results, "https://example.com");
//! assert!(text.starts_with("🛌 My Smart Sleep Score: 17/100 (Grade F)"));
//!
//! let link = email_link(&results, "https://example.com");
//! assert!(link.starts_with("mailto:?subject=My%20Smart%20Sleep%20Score"));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::CalculatorResults;
use crate::format::{format_break_even, format_currency};

/// Link used when the caller has no page URL of its own
pub const DEFAULT_SHARE_URL: &str = "https://smartsleepscore.app";

/// Title used by share sheets and as the email subject prefix
pub const SHARE_TITLE: &str = "My Smart Sleep Score";

/// Target platform for `sms:` links; iOS expects `&body=` instead of `?body=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SmsPlatform {
    Ios,
    #[default]
    Other,
}

/// Title/text/url triple for native share sheets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Multi-line plain-text summary of the results.
pub fn generate_share_text(results: &CalculatorResults, url: &str) -> String {
    format!(
        "🛌 {title}: {score}/100 (Grade {grade})\n\
         \n\
         💰 Current sleep costs me {total}/year\n\
         📈 ROI on a smart mattress: {roi}%\n\
         ⏱️ Break-even: {break_even}\n\
         💎 10-year value: {ten_year}\n\
         \n\
         Calculate your score at: {url}",
        title = SHARE_TITLE,
        score = results.sleep_score,
        grade = results.score_grade,
        total = format_currency(results.total_annual_cost),
        roi = results.roi,
        break_even = format_break_even(results.break_even_months),
        ten_year = format_currency(results.ten_year_value),
        url = url,
    )
}

/// Share-sheet payload.
pub fn share_data(results: &CalculatorResults, url: &str) -> ShareData {
    ShareData {
        title: SHARE_TITLE.to_string(),
        text: generate_share_text(results, url),
        url: url.to_string(),
    }
}

/// `mailto:` link with the score in the subject and the summary as body.
pub fn email_link(results: &CalculatorResults, url: &str) -> String {
    let subject = format!("{}: {}/100", SHARE_TITLE, results.sleep_score);
    let body = generate_share_text(results, url);
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

/// `sms:` link carrying the summary.
pub fn sms_link(results: &CalculatorResults, url: &str, platform: SmsPlatform) -> String {
    let body = urlencoding::encode(&generate_share_text(results, url)).into_owned();
    match platform {
        SmsPlatform::Ios => format!("sms:&body={}", body),
        SmsPlatform::Other => format!("sms:?body={}", body),
    }
}
