use std::sync::OnceLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Money-string parsing
// ---------------------------------------------------------------------------
//
// Funding descriptions are free-form text written by humans:
//   "Raised $1.2B • Valuation: $6B"
//   "$500M Series C"
//   "Funding: N/A"
// Parsing is best-effort by contract: a malformed money string degrades to
// 0.0 for that record and never aborts ingestion of the surrounding dataset.

fn funding_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\$(\d+(?:\.\d+)?)\s*([BMK])?").expect("regex is valid")
    })
}

fn valuation_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:valuation|val)\s*[:=]?\s*\$?(\d+(?:\.\d+)?)\s*([BMK])?")
            .expect("regex is valid")
    })
}

/// Extract the disclosed funding amount from a free-form money string,
/// normalized to billions. The first `$<number><unit>` occurrence wins;
/// a missing unit letter means billions.
///
/// Returns `0.0` for empty input, input containing "N/A" (any case), or
/// input with no recognizable dollar amount. Never fails.
pub fn parse_funding(text: &str) -> f64 {
    if text.is_empty() || text.to_uppercase().contains("N/A") {
        return 0.0;
    }
    let Some(caps) = funding_pattern().captures(text) else {
        return 0.0;
    };
    let Ok(v) = caps[1].parse::<f64>() else {
        return 0.0;
    };
    match unit_letter(caps.get(2)) {
        Some('M') => v / 1_000.0,
        Some('K') => v / 1_000_000.0,
        _ => v, // explicit B, or no unit (defaults to billions)
    }
}

/// Extract the valuation from a free-form money string, normalized to
/// billions. Looks for "valuation" / "val" followed by an amount; when no
/// explicit valuation is stated, falls back to 5x the disclosed funding.
///
/// Unit handling here is intentionally narrower than [`parse_funding`]:
/// only `B` is recognized as billions, every other unit letter divides by
/// 1000. Legacy behavior, kept for output compatibility.
pub fn parse_valuation(text: &str) -> f64 {
    if let Some(caps) = valuation_pattern().captures(text) {
        if let Ok(v) = caps[1].parse::<f64>() {
            return match unit_letter(caps.get(2)) {
                None | Some('B') => v,
                Some(_) => v / 1_000.0,
            };
        }
    }
    parse_funding(text) * 5.0
}

fn unit_letter(m: Option<regex::Match<'_>>) -> Option<char> {
    m.and_then(|u| u.as_str().chars().next())
        .map(|c| c.to_ascii_uppercase())
}
