use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Booking inquiry drafted in the profile view's contact form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct InquiryRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

#[derive(Debug, Error)]
pub enum InquiryError {
    #[error("All fields are required.")]
    MissingFields(#[from] validator::ValidationErrors),
}

/// Local acknowledgement produced for a valid inquiry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryReceipt {
    #[serde(rename = "inquiryId")]
    pub inquiry_id: uuid::Uuid,
    pub photographer: String,
    #[serde(rename = "submittedAt")]
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

impl InquiryRequest {
    /// Validate the drafted fields and mint a receipt for the named
    /// photographer. No request leaves the client; delivery is out of scope
    /// for the browsing session.
    pub fn submit(&self, photographer: &str) -> Result<InquiryReceipt, InquiryError> {
        self.validate()?;
        Ok(InquiryReceipt {
            inquiry_id: uuid::Uuid::new_v4(),
            photographer: photographer.to_string(),
            submitted_at: chrono::Utc::now(),
        })
    }
}
