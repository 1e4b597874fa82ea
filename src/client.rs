//! HTTP client for the LINQ Connect FamilyMenu endpoint.
//!
//! A single authentication-free GET with a fixed timeout. Everything after
//! the fetch is the pure pipeline in `extract` and `schedule`, exposed
//! separately via [`MenuClient::process_payload`] so stored payloads can be
//! replayed without the transport.

use std::time::Duration;

use chrono::{Local, NaiveDate};

use crate::config::MenuConfig;
use crate::error::MenuError;
use crate::extract::extract_menus_by_date;
use crate::feed::FamilyMenuResponse;
use crate::schedule::{build_schedule, format_menu_date, ScheduleDay};
use crate::sentence::FormatOptions;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.linqconnect.com/api/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A lightweight client for the LINQ Connect (TitanSchools) menu API.
pub struct MenuClient {
    http: reqwest::Client,
    base_url: String,
    config: MenuConfig,
    format: FormatOptions,
}

impl MenuClient {
    /// Build a client, validating required identifiers.
    pub fn new(config: MenuConfig) -> Result<Self, MenuError> {
        if config.building_id.trim().is_empty() {
            return Err(MenuError::MissingConfig("buildingId"));
        }
        if config.district_id.trim().is_empty() {
            return Err(MenuError::MissingConfig("districtId"));
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let format = FormatOptions {
            entree_joiner: config.entree_joiner.clone(),
            show_category_labels: config.show_category_labels,
            use_oxford_comma: config.use_oxford_comma,
            alternative_label: config.alternative_label.clone(),
        };

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            config,
            format,
        })
    }

    /// Point the client at a different API root. Districts occasionally
    /// front the API with their own proxy; also used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the menu for a date range and normalize it into schedule days.
    ///
    /// Server-side failures map to [`MenuError::UpstreamUnavailable`],
    /// client-side ones to [`MenuError::UpstreamRejected`]; neither is
    /// retried here.
    pub async fn fetch_menu(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<ScheduleDay>, MenuError> {
        let start = format_menu_date(start_date);
        let end = format_menu_date(end_date);

        if self.config.debug {
            log::debug!("Requesting FamilyMenu from {} to {}", start, end);
        }

        let resp = self
            .http
            .get(format!("{}FamilyMenu", self.base_url))
            .query(&[
                ("buildingId", self.config.building_id.as_str()),
                ("districtId", self.config.district_id.as_str()),
                ("startDate", start.as_str()),
                ("endDate", end.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(map_status_error(status, &body));
        }

        let payload: FamilyMenuResponse = resp.json().await?;
        Ok(self.process_payload(&payload))
    }

    /// Run the normalization pipeline against the current local date.
    pub fn process_payload(&self, payload: &FamilyMenuResponse) -> Vec<ScheduleDay> {
        self.process_payload_at(payload, Local::now().date_naive())
    }

    /// Clock-injected variant of [`process_payload`](Self::process_payload):
    /// the schedule window starts at `today` instead of the current date.
    pub fn process_payload_at(
        &self,
        payload: &FamilyMenuResponse,
        today: NaiveDate,
    ) -> Vec<ScheduleDay> {
        let menus = extract_menus_by_date(
            payload,
            &self.config.recipe_categories_to_include,
            &self.format,
            self.config.debug,
        );

        let schedule = build_schedule(
            &menus,
            today,
            self.config.number_of_days_to_display,
            self.config.buffer_days,
        );

        log::info!(
            "Upcoming school meal schedule: {}",
            serde_json::to_string(&schedule).unwrap_or_default()
        );

        schedule
    }
}

/// Map a non-success HTTP status onto the error taxonomy, pulling the
/// upstream `error_description` out of the body when one is present.
fn map_status_error(status: reqwest::StatusCode, body: &str) -> MenuError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error_description")
                .and_then(|d| d.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| status.to_string());

    if status.is_server_error() {
        MenuError::UpstreamUnavailable {
            status: status.as_u16(),
            message,
        }
    } else if status.is_client_error() {
        MenuError::UpstreamRejected {
            status: status.as_u16(),
            message,
        }
    } else {
        MenuError::UnexpectedStatus(status.as_u16())
    }
}
