use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::info;

use crate::cli::render::{
    render_booking_card, render_flat_card, render_flat_detail, render_office_card,
    render_office_detail,
};
use crate::clients::{FlatsApi, FlatsClient, OfficesApi, OfficesClient};
use crate::config::Config;
use crate::screens::booking::{BookingScreen, SubmitOutcome};
use crate::screens::booking_card::BookingCard;
use crate::screens::flat_detail::FlatDetailScreen;
use crate::screens::flat_list::FlatListScreen;
use crate::screens::my_bookings::MyBookingsScreen;
use crate::screens::office_booking::{OfficeBookingScreen, ReserveOutcome};
use crate::screens::office_detail::OfficeDetailScreen;
use crate::screens::office_list::{OfficeListScreen, NO_OFFICES_MESSAGE};
use crate::screens::Navigator;
use crate::services::email_store::{last_email, FileStore, KeyValueStore};
use crate::services::validation::FilterInputs;

#[derive(Parser, Debug)]
#[command(name = "flatly", version, about = "Browse flats and offices and manage bookings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List flats. Any filter option switches to the filter endpoint.
    Flats {
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        min_price: Option<String>,
        #[arg(long)]
        max_price: Option<String>,
        #[arg(long)]
        rooms: Option<String>,
        #[arg(long)]
        max_distance: Option<String>,
    },
    /// Show one flat
    Flat { id: i64 },
    /// Book a flat for a date range (YYYY-MM-DD)
    Book {
        flat_id: i64,
        /// Defaults to the last email used for a booking
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Active bookings for an email
    Bookings {
        #[arg(long)]
        email: Option<String>,
    },
    /// Cancel a booking
    Cancel { booking_id: i64 },
    /// List offices
    Offices,
    /// Show one office
    Office { id: i64 },
    /// Reserve an office for a date range (YYYY-MM-DD)
    Reserve {
        office_id: i64,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
    },
}

/// Terminal stand-in for screen navigation.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn back(&self) {
        info!("Navigating back");
    }

    fn notify(&self, message: &str) {
        println!("{}", message.green().bold());
    }

    fn open_flat(&self, flat_id: i64) {
        println!("Run `flatly flat {flat_id}` for details");
    }
}

pub struct App {
    pub config: Arc<Config>,
    pub flats: Arc<dyn FlatsApi>,
    pub offices: Arc<dyn OfficesApi>,
    pub store: Arc<dyn KeyValueStore>,
    pub navigator: Arc<dyn Navigator>,
}

impl App {
    pub fn from_config(config: Arc<Config>) -> Result<App> {
        Ok(App {
            flats: Arc::new(FlatsClient::from_config(&config)?),
            offices: Arc::new(OfficesClient::from_config(&config)?),
            store: Arc::new(FileStore::new(&config.email_store_path)),
            navigator: Arc::new(TerminalNavigator),
            config,
        })
    }

    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Flats {
                location,
                min_price,
                max_price,
                rooms,
                max_distance,
            } => {
                let inputs = FilterInputs {
                    location: location.unwrap_or_default(),
                    min_price: min_price.unwrap_or_default(),
                    max_price: max_price.unwrap_or_default(),
                    room_number: rooms.unwrap_or_default(),
                    max_distance: max_distance.unwrap_or_default(),
                };
                self.show_flats(inputs).await
            }
            Command::Flat { id } => self.show_flat(id).await,
            Command::Book {
                flat_id,
                email,
                start,
                end,
            } => self.book(flat_id, email, start, end).await,
            Command::Bookings { email } => self.show_bookings(email).await,
            Command::Cancel { booking_id } => self.cancel(booking_id).await,
            Command::Offices => self.show_offices().await,
            Command::Office { id } => self.show_office(id).await,
            Command::Reserve {
                office_id,
                email,
                start,
                end,
            } => self.reserve(office_id, email, start, end).await,
        }
        Ok(())
    }

    async fn show_flats(&self, inputs: FilterInputs) {
        let screen = FlatListScreen::new(self.flats.clone());

        if inputs == FilterInputs::default() {
            screen.mount().await;
        } else {
            screen.set_filters(inputs);
            if let Err(e) = screen.apply_filters().await {
                println!("{}", e.to_string().red());
                return;
            }
        }

        let state = screen.snapshot();
        if let Some(empty) = state.empty_message() {
            println!("{}", empty.dimmed());
        }
        for flat in &state.flats {
            println!("{}\n", render_flat_card(flat, self.flats.base_url()));
        }
    }

    async fn show_flat(&self, id: i64) {
        let screen = FlatDetailScreen::new(self.flats.clone(), id);
        screen.load().await;
        println!("{}", render_flat_detail(&screen.snapshot(), screen.base_url()));
        if let Some(flat_id) = screen.booking_target() {
            println!(
                "\nBook it: flatly book {flat_id} --start YYYY-MM-DD --end YYYY-MM-DD"
            );
        }
    }

    async fn book(
        &self,
        flat_id: i64,
        email: Option<String>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) {
        let screen = BookingScreen::new(
            self.flats.clone(),
            self.store.clone(),
            self.navigator.clone(),
            &self.config,
            Some(flat_id),
        );
        screen.load_flat().await;

        if let Some(email) = email {
            screen.set_email(&email);
        }
        if let Some(start) = start {
            screen.set_start_date(start);
        }
        if let Some(end) = end {
            screen.set_end_date(end);
        }

        if let Some(flat) = screen.snapshot().flat.value() {
            println!("Book: {}", flat.name.bold());
        }

        match screen.submit().await {
            SubmitOutcome::Submitted(booking) => {
                info!("Booking submitted: {:?}", booking.id);
            }
            SubmitOutcome::Invalid(_) | SubmitOutcome::Failed(_) => {
                println!("{}", screen.snapshot().error_message.red());
            }
            SubmitOutcome::Busy | SubmitOutcome::Unmounted => {}
        }
    }

    async fn show_bookings(&self, email: Option<String>) {
        let Some(email) = email.or_else(|| last_email(self.store.as_ref())) else {
            println!("{}", "Please provide an email with --email.".red());
            return;
        };

        let screen = MyBookingsScreen::new(self.flats.clone(), self.navigator.clone(), &email);
        screen.refresh().await;

        if let Some(empty) = screen.empty_message() {
            println!("{}", empty.dimmed());
        }
        for card in screen.cards() {
            println!("{}\n", render_booking_card(&card.snapshot()));
        }
    }

    async fn cancel(&self, booking_id: i64) {
        let booking = match self.flats.get_booking(booking_id).await {
            Ok(booking) => booking,
            Err(e) => {
                println!(
                    "{}",
                    e.user_message(
                        &format!("Could not load booking {booking_id}"),
                        "Could not reach the bookings service."
                    )
                    .red()
                );
                return;
            }
        };

        let card = BookingCard::new(self.flats.clone(), self.navigator.clone(), booking);
        card.load_flat().await;
        card.cancel(|| info!("Booking {booking_id} removed from active list"))
            .await;
        println!("{}", render_booking_card(&card.snapshot()));
    }

    async fn show_offices(&self) {
        let screen = OfficeListScreen::new(self.offices.clone());
        screen.mount().await;

        let state = screen.snapshot();
        if state.offices.is_empty() {
            println!("{}", NO_OFFICES_MESSAGE.dimmed());
        }
        for office in &state.offices {
            println!("{}\n", render_office_card(office));
        }
    }

    async fn show_office(&self, id: i64) {
        let screen = OfficeDetailScreen::new(self.offices.clone(), id);
        screen.load().await;
        if let Some(message) = screen.error_message() {
            println!("{}", message.red());
        }
        println!("{}", render_office_detail(&screen.snapshot()));
        if let Some(office_id) = screen.reservation_target() {
            println!(
                "\nReserve it: flatly reserve {office_id} --email you@example.com --start YYYY-MM-DD --end YYYY-MM-DD"
            );
        }
    }

    async fn reserve(
        &self,
        office_id: i64,
        email: Option<String>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) {
        let screen =
            OfficeBookingScreen::new(self.offices.clone(), self.navigator.clone(), Some(office_id));
        screen.load_office().await;

        if let Some(email) = email {
            screen.set_email(&email);
        }
        if let Some(start) = start {
            screen.set_start_date(start);
        }
        if let Some(end) = end {
            screen.set_end_date(end);
        }

        if let Some(office) = screen.snapshot().office.value() {
            println!("Book: {}", office.name.bold());
        }

        match screen.submit().await {
            ReserveOutcome::Reserved(reservation) => {
                info!(
                    "Reservation submitted for office {} ({} - {})",
                    reservation.office_id, reservation.start_time, reservation.end_time
                );
            }
            ReserveOutcome::Invalid(_) | ReserveOutcome::Failed(_) => {
                println!("{}", screen.snapshot().error_message.red());
            }
            ReserveOutcome::Busy | ReserveOutcome::Unmounted => {}
        }
    }
}

