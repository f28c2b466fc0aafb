use crate::{PredictionResponse, POSITIVE_CLASS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Detected,
    NotDetected,
}

impl Verdict {
    pub fn for_class(predicted_class: &str) -> Self {
        if predicted_class == POSITIVE_CLASS {
            Verdict::Detected
        } else {
            Verdict::NotDetected
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Verdict::Detected => "Leprosy indicators detected",
            Verdict::NotDetected => "No leprosy indicators detected",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Verdict::Detected => "leprosy",
            Verdict::NotDetected => "non-leprosy",
        }
    }
}

/// One confidence bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityRow {
    pub label: String,
    pub percentage: String,
    /// Bar width in percent, clamped to `0..=100`.
    pub bar_width: f64,
    pub positive: bool,
}

impl ProbabilityRow {
    pub fn bar_style(&self) -> String {
        format!("width: {:.2}%", self.bar_width)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub predicted_class: String,
    pub verdict: Verdict,
    pub rows: Vec<ProbabilityRow>,
}

impl ResultView {
    /// Rows follow the service's key order; values are shown as received.
    pub fn from_response(response: &PredictionResponse) -> Self {
        let rows = response
            .probabilities
            .iter()
            .map(|p| ProbabilityRow {
                label: p.label.clone(),
                percentage: format_percentage(p.value),
                bar_width: (p.value * 100.0).clamp(0.0, 100.0),
                positive: is_positive_label(&p.label),
            })
            .collect();

        Self {
            predicted_class: response.predicted_class.clone(),
            verdict: Verdict::for_class(&response.predicted_class),
            rows,
        }
    }
}

/// Case-sensitive match on the positive class code, exact or as a
/// substring of the label.
pub fn is_positive_label(label: &str) -> bool {
    label.contains(POSITIVE_CLASS)
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClassProbability;

    fn response(predicted: &str, probabilities: &[(&str, f64)]) -> PredictionResponse {
        PredictionResponse {
            predicted_class: predicted.to_string(),
            probabilities: probabilities
                .iter()
                .map(|(label, value)| ClassProbability {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    #[test]
    fn renders_lep_result() {
        let view = ResultView::from_response(&response("Lep", &[("Lep", 0.87), ("Non-Lep", 0.13)]));

        assert_eq!(view.verdict, Verdict::Detected);
        assert_eq!(view.predicted_class, "Lep");
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].label, "Lep");
        assert_eq!(view.rows[0].percentage, "87.00%");
        assert!(view.rows[0].positive);
        assert_eq!(view.rows[1].label, "Non-Lep");
        assert_eq!(view.rows[1].percentage, "13.00%");
        // "Non-Lep" contains the class code, so it shares the positive styling.
        assert!(view.rows[1].positive);
    }

    #[test]
    fn keeps_response_order_instead_of_sorting() {
        let view = ResultView::from_response(&response(
            "Non-Lep",
            &[("Non-Lep", 0.2), ("Other", 0.7), ("Lep", 0.1)],
        ));
        let labels: Vec<_> = view.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Non-Lep", "Other", "Lep"]);
        assert_eq!(view.verdict, Verdict::NotDetected);
    }

    #[test]
    fn percentages_are_raw_and_two_decimals() {
        let view = ResultView::from_response(&response(
            "Lep",
            &[("Lep", 0.912345), ("Non-Lep", 0.5), ("Zero", 0.0), ("One", 1.0)],
        ));
        let texts: Vec<_> = view.rows.iter().map(|r| r.percentage.as_str()).collect();
        assert_eq!(texts, vec!["91.23%", "50.00%", "0.00%", "100.00%"]);
    }

    #[test]
    fn bar_width_is_clamped_but_text_is_not() {
        let view = ResultView::from_response(&response("Lep", &[("Lep", 1.25), ("Non-Lep", -0.1)]));
        assert_eq!(view.rows[0].percentage, "125.00%");
        assert_eq!(view.rows[0].bar_width, 100.0);
        assert_eq!(view.rows[1].bar_width, 0.0);
        assert_eq!(view.rows[0].bar_style(), "width: 100.00%");
    }

    #[test]
    fn positive_label_matching_is_case_sensitive() {
        assert!(is_positive_label("Lep"));
        assert!(is_positive_label("Lep-borderline"));
        assert!(!is_positive_label("lep"));
        assert!(!is_positive_label("Healthy"));
        assert!(!is_positive_label(""));
    }

    #[test]
    fn verdict_requires_exact_code() {
        assert_eq!(Verdict::for_class("Lep"), Verdict::Detected);
        assert_eq!(Verdict::for_class("Lep-borderline"), Verdict::NotDetected);
        assert_eq!(Verdict::for_class("lep"), Verdict::NotDetected);
        assert_eq!(Verdict::NotDetected.css_class(), "non-leprosy");
    }

    #[test]
    fn mapping_is_deterministic() {
        let input = response("Lep", &[("Lep", 0.87), ("Non-Lep", 0.13)]);
        assert_eq!(ResultView::from_response(&input), ResultView::from_response(&input));
    }
}
