//! Fixed user-facing text of the upload and result views.

use crate::Phase;

pub const APP_NAME: &str = "DermaInspect";
pub const APP_TAGLINE: &str = "AI-Powered Leprosy Detection";
pub const PAGE_HEADING: &str = "Leprosy Skin Lesion Detection";

pub const DROP_PROMPT: &str = "Drag and drop an image here or click to select";
pub const CHANGE_IMAGE_LABEL: &str = "Change Image";
pub const ANALYZING_NOTICE: &str = "Analyzing image...";

pub const RESULT_HEADING: &str = "Analysis Result";
pub const CONFIDENCE_HEADING: &str = "Confidence Levels:";
pub const RESULT_DISCLAIMER: &str = "This is an AI-based decision support tool and not a substitute \
     for professional medical diagnosis. Please consult a qualified healthcare professional for \
     proper diagnosis and treatment.";
pub const RESET_AFTER_RESULT_LABEL: &str = "Analyze Another Image";
pub const RESET_AFTER_ERROR_LABEL: &str = "Start Over";

pub const FOOTER_DISCLAIMER: &str = "This tool is for research and educational purposes only. \
     It is not a substitute for professional medical diagnosis, advice, or treatment.";
pub const FOOTER_NOTE: &str =
    "Always consult a qualified healthcare professional for proper diagnosis and treatment.";

pub fn selected_file_label(name: &str) -> String {
    format!("Selected: {}", name)
}

/// The analyze button reads "Analyzing..." while its request is in flight.
pub fn analyze_button_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Submitting => "Analyzing...",
        _ => "Analyze Lesion",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_label_switches_only_while_submitting() {
        assert_eq!(analyze_button_label(Phase::Submitting), "Analyzing...");
        for phase in [Phase::Idle, Phase::Staged, Phase::Failed, Phase::Succeeded] {
            assert_eq!(analyze_button_label(phase), "Analyze Lesion");
        }
    }

    #[test]
    fn disclaimers_carry_the_medical_caveat() {
        assert!(RESULT_DISCLAIMER.contains("not a substitute for professional medical diagnosis"));
        assert!(FOOTER_DISCLAIMER.starts_with("This tool is for research and educational purposes only."));
        assert!(!RESULT_DISCLAIMER.contains("  "));
        assert!(!FOOTER_DISCLAIMER.contains("  "));
    }

    #[test]
    fn reset_labels_and_selection_text() {
        assert_eq!(RESET_AFTER_RESULT_LABEL, "Analyze Another Image");
        assert_eq!(selected_file_label("lesion.jpg"), "Selected: lesion.jpg");
    }
}
