// --- File: crates/littlelemon_booking/src/service.rs ---
//! HTTP implementations of the availability and reservation collaborators.
//!
//! Availability: `GET {availability_url}?date=YYYY-MM-DD`, answering either a
//! bare JSON array of slot strings or `{"slots": [...]}`.
//! Reservation: `POST {submit_url}` with the reservation JSON, answering either
//! a bare boolean or `{"accepted": bool}`.

use chrono::NaiveDate;
use little_lemon_common::services::{AvailabilityService, BoxFuture, ReservationService};
use little_lemon_common::{create_client, ReservationRequest, HTTP_CLIENT};
use little_lemon_config::BookingConfig;
use reqwest::{Client, Response};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when talking to a remote booking backend.
#[derive(Error, Debug)]
pub enum RemoteServiceError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SlotsReply {
    Bare(Vec<String>),
    Wrapped { slots: Vec<String> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SubmitReply {
    Bare(bool),
    Wrapped { accepted: bool },
}

fn client_for(config: &BookingConfig) -> Result<Client, RemoteServiceError> {
    match config.request_timeout_secs {
        Some(secs) => create_client(secs, true).map_err(RemoteServiceError::Request),
        None => Ok(HTTP_CLIENT.clone()),
    }
}

async fn read_body(response: Response) -> Result<String, RemoteServiceError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(RemoteServiceError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

/// Availability lookup against a remote HTTP endpoint.
pub struct RemoteAvailabilityService {
    client: Client,
    url: String,
}

impl RemoteAvailabilityService {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_config(config: &BookingConfig) -> Result<Self, RemoteServiceError> {
        let url = config
            .availability_url
            .clone()
            .ok_or_else(|| RemoteServiceError::Config("availability_url is not set".into()))?;
        Ok(Self::new(client_for(config)?, url))
    }
}

impl AvailabilityService for RemoteAvailabilityService {
    type Error = RemoteServiceError;

    fn fetch_slots(&self, date: NaiveDate) -> BoxFuture<'_, Vec<String>, Self::Error> {
        Box::pin(async move {
            let date = date.format("%Y-%m-%d").to_string();
            debug!(url = %self.url, %date, "Fetching slots");
            let response = self
                .client
                .get(&self.url)
                .query(&[("date", date.as_str())])
                .send()
                .await?;
            let body = read_body(response).await?;
            let slots = match serde_json::from_str::<SlotsReply>(&body)? {
                SlotsReply::Bare(slots) | SlotsReply::Wrapped { slots } => slots,
            };
            Ok(slots)
        })
    }
}

/// Reservation submission to a remote HTTP endpoint.
pub struct RemoteReservationService {
    client: Client,
    url: String,
}

impl RemoteReservationService {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_config(config: &BookingConfig) -> Result<Self, RemoteServiceError> {
        let url = config
            .submit_url
            .clone()
            .ok_or_else(|| RemoteServiceError::Config("submit_url is not set".into()))?;
        Ok(Self::new(client_for(config)?, url))
    }
}

impl ReservationService for RemoteReservationService {
    type Error = RemoteServiceError;

    fn submit_reservation(&self, request: ReservationRequest) -> BoxFuture<'_, bool, Self::Error> {
        Box::pin(async move {
            debug!(url = %self.url, "Submitting reservation");
            let response = self.client.post(&self.url).json(&request).send().await?;
            let body = read_body(response).await?;
            let accepted = match serde_json::from_str::<SubmitReply>(&body)? {
                SubmitReply::Bare(accepted) | SubmitReply::Wrapped { accepted } => accepted,
            };
            Ok(accepted)
        })
    }
}

/// In-process collaborators for tests and local runs.
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Error, Debug)]
    #[error("mock service error: {0}")]
    pub struct MockServiceError(pub String);

    /// Answers every lookup with the same slots and records the dates asked for.
    pub struct StaticAvailabilityService {
        slots: Vec<String>,
        calls: Mutex<Vec<NaiveDate>>,
    }

    impl StaticAvailabilityService {
        pub fn new(slots: &[&str]) -> Self {
            Self {
                slots: slots.iter().map(|slot| slot.to_string()).collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<NaiveDate> {
            self.calls
                .lock()
                .map(|calls| calls.clone())
                .unwrap_or_default()
        }
    }

    impl AvailabilityService for StaticAvailabilityService {
        type Error = MockServiceError;

        fn fetch_slots(&self, date: NaiveDate) -> BoxFuture<'_, Vec<String>, Self::Error> {
            Box::pin(async move {
                if let Ok(mut calls) = self.calls.lock() {
                    calls.push(date);
                }
                Ok(self.slots.clone())
            })
        }
    }

    /// Fails every lookup.
    pub struct FailingAvailabilityService;

    impl AvailabilityService for FailingAvailabilityService {
        type Error = MockServiceError;

        fn fetch_slots(&self, date: NaiveDate) -> BoxFuture<'_, Vec<String>, Self::Error> {
            Box::pin(async move { Err(MockServiceError(format!("no slots for {date}"))) })
        }
    }

    /// What [`RecordingReservationService`] answers.
    #[derive(Debug, Clone)]
    pub enum MockReply {
        Accept,
        Reject,
        Fail(String),
    }

    /// Records every submitted request and answers with a fixed reply.
    pub struct RecordingReservationService {
        reply: MockReply,
        requests: Mutex<Vec<ReservationRequest>>,
    }

    impl RecordingReservationService {
        pub fn new(reply: MockReply) -> Self {
            Self {
                reply,
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn requests(&self) -> Vec<ReservationRequest> {
            self.requests
                .lock()
                .map(|requests| requests.clone())
                .unwrap_or_default()
        }
    }

    impl ReservationService for RecordingReservationService {
        type Error = MockServiceError;

        fn submit_reservation(&self, request: ReservationRequest) -> BoxFuture<'_, bool, Self::Error> {
            Box::pin(async move {
                if let Ok(mut requests) = self.requests.lock() {
                    requests.push(request);
                }
                match &self.reply {
                    MockReply::Accept => Ok(true),
                    MockReply::Reject => Ok(false),
                    MockReply::Fail(message) => Err(MockServiceError(message.clone())),
                }
            })
        }
    }
}
