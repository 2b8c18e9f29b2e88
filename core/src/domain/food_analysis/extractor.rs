//! Recovers the score, reasons and tips from the agent's free-text answer.
//!
//! Every field has a default (0 or an empty list); a truncated or drifting
//! answer gives a partial result instead of an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::food_analysis::value_objects::ExtractedAnswer;

const MAX_HEALTH_SCORE: u32 = 100;

/// Anything but digits and newlines may sit between the label and the score,
/// so `**건강 점수:** 82` and `건강 점수 - 82점` both parse.
static HEALTH_SCORE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"건강\s*점수[^\d\n]*?(\d+)").ok());

static REASONS_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"2\)\s*이유[:\s]*([\s\S]*?)(?:3\)|$)").ok());

static TIPS_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"3\)\s*개선\s*팁[:\s]*([\s\S]*)").ok());

pub fn extract_answer(response_text: &str) -> ExtractedAnswer {
    ExtractedAnswer {
        health_score: extract_health_score(response_text),
        reasons: extract_reasons(response_text),
        tips: extract_tips(response_text),
    }
}

/// First integer on the "건강 점수" line, capped at 100; 0 when absent.
pub fn extract_health_score(response_text: &str) -> u32 {
    capture_section(&HEALTH_SCORE_PATTERN, response_text)
        .and_then(parse_score_digits)
        .unwrap_or(0)
}

/// Folds ASCII and full-width digits into a capped score. Digits from other
/// scripts are not mapped and give `None`.
fn parse_score_digits(digits: &str) -> Option<u32> {
    digits.chars().try_fold(0u32, |score, c| {
        let digit = match c {
            '0'..='9' => c as u32 - '0' as u32,
            '０'..='９' => c as u32 - '０' as u32,
            _ => return None,
        };
        Some(
            score
                .saturating_mul(10)
                .saturating_add(digit)
                .min(MAX_HEALTH_SCORE),
        )
    })
}

pub fn extract_reasons(response_text: &str) -> Vec<String> {
    capture_section(&REASONS_PATTERN, response_text)
        .map(split_bullet_lines)
        .unwrap_or_default()
}

pub fn extract_tips(response_text: &str) -> Vec<String> {
    capture_section(&TIPS_PATTERN, response_text)
        .map(split_bullet_lines)
        .unwrap_or_default()
}

fn capture_section<'a>(pattern: &Option<Regex>, text: &'a str) -> Option<&'a str> {
    pattern
        .as_ref()?
        .captures(text)?
        .get(1)
        .map(|section| section.as_str())
}

fn split_bullet_lines(section: &str) -> Vec<String> {
    section
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.trim_start_matches(['-', '•', ' '])
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}
