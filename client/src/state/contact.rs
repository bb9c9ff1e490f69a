//! Lead-capture contact form state.
//!
//! DESIGN
//! ======
//! Status moves strictly `Idle -> Submitting -> Success`; `reset` returns to
//! `Idle` from anywhere. Each submission gets a sequence number so a delayed
//! completion for an abandoned submission cannot flip a newer one to success.
//!
//! Nothing is sent over the network: the page simulates delivery with a fixed
//! delay.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::content::pricing::TIERS;

/// Simulated delivery time for a submission.
pub const SUBMIT_DELAY_MS: u64 = 1500;

/// Package choice for visitors who have not picked a tier.
pub const PACKAGE_UNDECIDED: &str = "Not sure yet";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl ContactStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("cannot move contact form from {} to {}", .from.as_str(), .to.as_str())]
    InvalidTransition { from: ContactStatus, to: ContactStatus },
    #[error("submission {seq} is no longer current")]
    StaleSubmission { seq: u64 },
}

/// Raw field values as typed by the visitor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub package: String,
    pub message: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            package: PACKAGE_UNDECIDED.to_owned(),
            message: String::new(),
        }
    }
}

impl ContactForm {
    /// Trim every field and check the required ones.
    ///
    /// # Errors
    ///
    /// `MissingName` when the name is blank, `InvalidEmail` when the email
    /// is not `local@domain.tld` shaped.
    pub fn validated(&self) -> Result<Self, ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        let package = self.package.trim();
        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            company: self.company.trim().to_owned(),
            package: if package.is_empty() { PACKAGE_UNDECIDED.to_owned() } else { package.to_owned() },
            message: self.message.trim().to_owned(),
        })
    }
}

/// A submission accepted by `begin_submit`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub seq: u64,
    pub payload: ContactForm,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub status: ContactStatus,
    pub form: ContactForm,
    pub error: Option<ContactError>,
    pub submission_seq: u64,
}

impl ContactState {
    /// Validate the form and move `Idle -> Submitting`.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` unless idle; a validation error (also stored in
    /// `error`) when required fields are missing.
    pub fn begin_submit(&mut self) -> Result<Submission, ContactError> {
        if self.status != ContactStatus::Idle {
            return Err(ContactError::InvalidTransition { from: self.status, to: ContactStatus::Submitting });
        }
        let payload = match self.form.validated() {
            Ok(payload) => payload,
            Err(e) => {
                self.error = Some(e.clone());
                return Err(e);
            }
        };
        self.error = None;
        self.submission_seq += 1;
        self.status = ContactStatus::Submitting;
        Ok(Submission { seq: self.submission_seq, payload })
    }

    /// Move `Submitting -> Success` for the submission numbered `seq`.
    ///
    /// # Errors
    ///
    /// `StaleSubmission` if a reset or newer submission superseded `seq`;
    /// `InvalidTransition` if not submitting.
    pub fn complete(&mut self, seq: u64) -> Result<(), ContactError> {
        if seq != self.submission_seq {
            return Err(ContactError::StaleSubmission { seq });
        }
        if self.status != ContactStatus::Submitting {
            return Err(ContactError::InvalidTransition { from: self.status, to: ContactStatus::Success });
        }
        self.status = ContactStatus::Success;
        Ok(())
    }

    /// Back to an empty idle form ("submit another").
    pub fn reset(&mut self) {
        self.status = ContactStatus::Idle;
        self.form = ContactForm::default();
        self.error = None;
        // Invalidate any in-flight completion.
        self.submission_seq += 1;
    }

    /// Fields are locked while a submission is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.status == ContactStatus::Submitting
    }
}

/// Values offered in the package dropdown: each tier, then "not sure".
#[must_use]
pub fn package_options() -> Vec<&'static str> {
    TIERS.iter().map(|t| t.name).chain(std::iter::once(PACKAGE_UNDECIDED)).collect()
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}
