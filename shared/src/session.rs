use strum::{Display, IntoStaticStr};

use crate::controller::RequestId;
use crate::PredictionResponse;

/// A user-supplied file that can back a display preview.
///
/// The preview is a revocable resource (an object URL in the browser).
/// It is released by dropping it, so a `StagedImage` going out of scope
/// frees its preview on every path.
pub trait PreviewSource {
    type Preview;

    fn name(&self) -> String;
    fn mime_type(&self) -> String;
    fn create_preview(&self) -> Self::Preview;
}

/// Drop-zone filter. The file picker applies no such filter.
pub fn is_droppable_image(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

pub struct StagedImage<F: PreviewSource> {
    file: F,
    preview: F::Preview,
    name: String,
}

impl<F: PreviewSource> StagedImage<F> {
    pub fn new(file: F) -> Self {
        let preview = file.create_preview();
        let name = file.name();
        Self { file, preview, name }
    }

    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn preview(&self) -> &F::Preview {
        &self.preview
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Phase {
    Idle,
    Staged,
    Submitting,
    Succeeded,
    Failed,
}

/// What the upload view is currently showing.
pub enum Session<F: PreviewSource> {
    Idle,
    Staged {
        image: StagedImage<F>,
    },
    Submitting {
        image: StagedImage<F>,
        request: RequestId,
    },
    Succeeded {
        image: StagedImage<F>,
        result: PredictionResponse,
    },
    Failed {
        image: StagedImage<F>,
        message: String,
    },
}

impl<F: PreviewSource> Default for Session<F> {
    fn default() -> Self {
        Session::Idle
    }
}

impl<F: PreviewSource> Session<F> {
    pub fn phase(&self) -> Phase {
        match self {
            Session::Idle => Phase::Idle,
            Session::Staged { .. } => Phase::Staged,
            Session::Submitting { .. } => Phase::Submitting,
            Session::Succeeded { .. } => Phase::Succeeded,
            Session::Failed { .. } => Phase::Failed,
        }
    }

    pub fn image(&self) -> Option<&StagedImage<F>> {
        match self {
            Session::Idle => None,
            Session::Staged { image }
            | Session::Submitting { image, .. }
            | Session::Succeeded { image, .. }
            | Session::Failed { image, .. } => Some(image),
        }
    }

    pub fn result(&self) -> Option<&PredictionResponse> {
        match self {
            Session::Succeeded { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Session::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Session::Submitting { .. })
    }

    /// Submit is offered for a fresh selection and as a retry after a
    /// failure.
    pub fn can_submit(&self) -> bool {
        matches!(self, Session::Staged { .. } | Session::Failed { .. })
    }

    pub fn can_reset(&self) -> bool {
        matches!(self, Session::Succeeded { .. } | Session::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_filter_requires_image_prefix() {
        assert!(is_droppable_image("image/png"));
        assert!(is_droppable_image("image/jpeg"));
        assert!(is_droppable_image("image/"));
        assert!(!is_droppable_image("application/pdf"));
        assert!(!is_droppable_image("text/image/png"));
        assert!(!is_droppable_image("IMAGE/PNG"));
        assert!(!is_droppable_image(""));
    }

    #[test]
    fn phase_names_are_kebab_case() {
        assert_eq!(Phase::Submitting.to_string(), "submitting");
        let name: &'static str = Phase::Succeeded.into();
        assert_eq!(name, "succeeded");
    }
}
