//! Lightweight client for the LINQ Connect (TitanSchools) school menu API.
//!
//! Fetches a district's FamilyMenu feed and normalizes it into a short,
//! human-readable schedule: one entry per upcoming day, each carrying a
//! grammatically correct sentence for breakfast and lunch.
//!
//! Modules:
//! - client: HTTP fetch + the pipeline entry points
//! - config: configuration surface and defaults
//! - feed: drift-tolerant raw payload types
//! - extract: payload walk into per-session day menus
//! - classify / grammar / sentence: category taxonomy and sentence building
//! - schedule: calendar generation and the buffered day window
//!
//! ```no_run
//! use chrono::{Duration, Local};
//! use titan_menu::{MenuClient, MenuConfig};
//!
//! # async fn demo() -> Result<(), titan_menu::MenuError> {
//! let mut config = MenuConfig::new("<buildingId>", "<districtId>");
//! config.number_of_days_to_display = 3;
//!
//! let client = MenuClient::new(config)?;
//! let today = Local::now().date_naive();
//! let schedule = client.fetch_menu(today, today + Duration::days(10)).await?;
//! for day in schedule {
//!     println!("{} ({}): {:?}", day.label, day.date, day.lunch);
//! }
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod feed;
pub mod grammar;
pub mod schedule;
pub mod sentence;

pub use client::{MenuClient, DEFAULT_BASE_URL};
pub use config::{MenuConfig, BUFFER_DAYS};
pub use error::MenuError;
pub use extract::{ExtractedDayMenu, MealType};
pub use feed::FamilyMenuResponse;
pub use schedule::ScheduleDay;
pub use sentence::FormatOptions;
