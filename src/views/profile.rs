use crate::models::{InquiryReceipt, InquiryRequest, ProfileRecord};
use crate::services::{DirectoryClient, DirectoryError, ProfileCache};

/// Load lifecycle of a single profile screen
#[derive(Debug, Clone)]
pub enum ProfileState {
    Loading,
    Loaded(Box<ProfileRecord>),
    NotFound,
}

/// Profile screen state
///
/// Holds the fetched record, the portfolio gallery position and the inquiry
/// form. Gallery navigation wraps around at both ends.
#[derive(Debug)]
pub struct ProfileView {
    state: ProfileState,
    gallery: usize,
    inquiry: InquiryForm,
}

impl ProfileView {
    pub fn new() -> Self {
        Self {
            state: ProfileState::Loading,
            gallery: 0,
            inquiry: InquiryForm::default(),
        }
    }

    /// Fetch the profile, serving from the session cache when possible
    ///
    /// Any fetch failure lands in the not-found state; the screen renders
    /// its "Photographer not found." message rather than crashing the
    /// session.
    pub async fn load(&mut self, client: &DirectoryClient, cache: &ProfileCache, id: u64) {
        self.state = ProfileState::Loading;
        self.gallery = 0;

        if let Some(record) = cache.get(id).await {
            self.state = ProfileState::Loaded(Box::new(record));
            return;
        }

        match client.fetch_photographer(id).await {
            Ok(record) => {
                cache.insert(record.clone()).await;
                self.state = ProfileState::Loaded(Box::new(record));
            }
            Err(DirectoryError::NotFound(_)) => {
                tracing::info!("Photographer {} not found", id);
                self.state = ProfileState::NotFound;
            }
            Err(e) => {
                tracing::error!("Failed to fetch photographer {}: {}", id, e);
                self.state = ProfileState::NotFound;
            }
        }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn record(&self) -> Option<&ProfileRecord> {
        match &self.state {
            ProfileState::Loaded(record) => Some(record),
            _ => None,
        }
    }

    pub fn gallery_index(&self) -> usize {
        self.gallery
    }

    /// The portfolio image currently in view
    pub fn current_slide(&self) -> Option<&str> {
        self.record()
            .and_then(|r| r.portfolio.get(self.gallery))
            .map(|s| s.as_str())
    }

    /// Advance the gallery, wrapping from the last image to the first
    pub fn gallery_next(&mut self) {
        if let Some(record) = self.record() {
            let len = record.portfolio.len();
            if len > 0 {
                self.gallery = (self.gallery + 1) % len;
            }
        }
    }

    /// Step the gallery back, wrapping from the first image to the last
    pub fn gallery_prev(&mut self) {
        if let Some(record) = self.record() {
            let len = record.portfolio.len();
            if len > 0 {
                self.gallery = (self.gallery + len - 1) % len;
            }
        }
    }

    pub fn inquiry(&self) -> &InquiryForm {
        &self.inquiry
    }

    /// Open the inquiry form with blank fields
    pub fn open_inquiry(&mut self) {
        self.inquiry = InquiryForm {
            open: true,
            ..InquiryForm::default()
        };
    }

    pub fn close_inquiry(&mut self) {
        self.inquiry.open = false;
        self.inquiry.error = None;
    }

    pub fn set_inquiry_name(&mut self, name: &str) {
        self.inquiry.request.name = name.to_string();
    }

    pub fn set_inquiry_email(&mut self, email: &str) {
        self.inquiry.request.email = email.to_string();
    }

    pub fn set_inquiry_message(&mut self, message: &str) {
        self.inquiry.request.message = message.to_string();
    }

    /// Submit the drafted inquiry for the loaded photographer
    ///
    /// On success the form closes and clears, keeping the receipt for the
    /// confirmation banner. On validation failure the fields stay put and
    /// the error message is shown in place.
    pub fn submit_inquiry(&mut self) {
        let photographer = match self.record() {
            Some(record) => record.name.clone(),
            None => return,
        };

        match self.inquiry.request.submit(&photographer) {
            Ok(receipt) => {
                tracing::info!("Inquiry {} drafted for {}", receipt.inquiry_id, photographer);
                self.inquiry = InquiryForm {
                    confirmation: Some(receipt),
                    ..InquiryForm::default()
                };
            }
            Err(e) => {
                self.inquiry.error = Some(e.to_string());
            }
        }
    }
}

impl Default for ProfileView {
    fn default() -> Self {
        Self::new()
    }
}

/// Inquiry form state on the profile screen
#[derive(Debug, Default)]
pub struct InquiryForm {
    open: bool,
    request: InquiryRequest,
    error: Option<String>,
    confirmation: Option<InquiryReceipt>,
}

impl InquiryForm {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn request(&self) -> &InquiryRequest {
        &self.request
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn confirmation(&self) -> Option<&InquiryReceipt> {
        self.confirmation.as_ref()
    }
}
