use thiserror::Error;

/// A failure talking to the order service itself.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("order request failed: {0}")]
    Http(String),

    #[error("could not encode order: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for OrderError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

/// Why an order submission did not go through.
///
/// None of these leave the checkout form modified.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("no user logged in")]
    MissingIdentity,

    #[error("an order submission is already in progress")]
    SubmissionInFlight,

    #[error("order service responded with status {status}")]
    Rejected { status: u16, body: Option<String> },

    #[error(transparent)]
    Transport(#[from] OrderError),
}

impl CheckoutError {
    /// A short message suitable for showing under the form.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingIdentity => "Please sign in before placing an order.".to_string(),
            Self::SubmissionInFlight => "Your order is already being placed.".to_string(),
            Self::Rejected { status, .. } => {
                format!("The order could not be placed (status {status}). Please try again.")
            }
            Self::Transport(_) => {
                "Could not reach the order service. Please try again.".to_string()
            }
        }
    }
}
