use std::fmt;
use std::mem;

use log::{debug, info, warn};

use crate::session::{is_droppable_image, Phase, PreviewSource, Session, StagedImage};
use crate::{PredictError, PredictionResponse, SubmitError};

/// Identifies one submission so a late or superseded response can be
/// told apart from the one the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything the caller needs to send one prediction request.
pub struct Submission<F> {
    pub id: RequestId,
    pub file: F,
}

/// Owns the session and applies the four user-driven events to it:
/// staging, submit, service resolution and reset.
pub struct Controller<F: PreviewSource> {
    session: Session<F>,
    next_request: u64,
}

impl<F: PreviewSource> Default for Controller<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: PreviewSource> Controller<F> {
    pub fn new() -> Self {
        Self {
            session: Session::Idle,
            next_request: 1,
        }
    }

    pub fn session(&self) -> &Session<F> {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// File-picker path: any file is staged, whatever its type.
    pub fn select_file(&mut self, file: F) -> bool {
        if self.session.is_submitting() {
            warn!("Ignoring selection of {} while a request is in flight", file.name());
            return false;
        }

        let image = StagedImage::new(file);
        debug!("{} -> staged ({})", self.phase(), image.name());
        // Replacing the session drops the previous image and its preview.
        self.session = Session::Staged { image };
        true
    }

    /// Drop-zone path: only `image/*` files are staged; anything else is
    /// ignored without an error.
    pub fn drop_file(&mut self, file: F) -> bool {
        let mime_type = file.mime_type();
        if !is_droppable_image(&mime_type) {
            debug!("Ignoring dropped file {} of type `{}`", file.name(), mime_type);
            return false;
        }
        self.select_file(file)
    }

    pub fn submit(&mut self) -> Result<Submission<F>, SubmitError>
    where
        F: Clone,
    {
        let image = match mem::take(&mut self.session) {
            Session::Staged { image } | Session::Failed { image, .. } => image,
            other => {
                let error = match &other {
                    Session::Idle => SubmitError::NoImageSelected,
                    Session::Submitting { .. } => SubmitError::AlreadySubmitting,
                    _ => SubmitError::AlreadyResolved,
                };
                debug!("Submit rejected in {} state: {}", other.phase(), error);
                self.session = other;
                return Err(error);
            }
        };

        let id = RequestId(self.next_request);
        self.next_request += 1;

        info!("Submitting {} as request {}", image.name(), id);
        let submission = Submission {
            id,
            file: image.file().clone(),
        };
        self.session = Session::Submitting { image, request: id };
        Ok(submission)
    }

    /// Applies the outcome of request `id`. Returns `false` when the
    /// session is no longer waiting for that request.
    pub fn resolve(
        &mut self,
        id: RequestId,
        outcome: Result<PredictionResponse, PredictError>,
    ) -> bool {
        match mem::take(&mut self.session) {
            Session::Submitting { image, request } if request == id => {
                self.session = match outcome {
                    Ok(result) => {
                        info!("Request {} resolved: {}", id, result.predicted_class);
                        Session::Succeeded { image, result }
                    }
                    Err(error) => {
                        warn!("Request {} failed: {}", id, error);
                        Session::Failed {
                            image,
                            message: error.user_message(),
                        }
                    }
                };
                true
            }
            other => {
                debug!("Discarding stale outcome of request {} in {} state", id, other.phase());
                self.session = other;
                false
            }
        }
    }

    /// Back to idle from any state, releasing the staged image.
    pub fn reset(&mut self) {
        let previous = mem::take(&mut self.session);
        debug!("{} -> idle", previous.phase());
    }

    /// Id of the request the session is waiting on, if any.
    pub fn in_flight(&self) -> Option<RequestId> {
        match &self.session {
            Session::Submitting { request, .. } => Some(*request),
            _ => None,
        }
    }
}
