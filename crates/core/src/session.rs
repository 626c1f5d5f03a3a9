// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The facility booking flow.
//!
//! A `BookingSession` is driven one line of input at a time:
//!
//! ```text
//! SelectDate -> SelectType -> SelectEntry ----------------> Committed
//!                          -> SelectCourt -> SelectTime --> Committed
//! ```
//!
//! ## Failure handling
//!
//! - Any invalid input restarts the flow at `SelectDate`
//! - A schedule clash is the one exception: only the time window is asked
//!   for again, with date and facility kept. Clashes are checked against the
//!   ledger and against court bookings already waiting in the sink
//! - There is no retry limit; no input ends the session except `0` at
//!   date selection or a successful commit

use crate::cart::LineItemSink;
use crate::clock::Clock;
use crate::error::CoreError;
use crate::ledger::{ReservationLedger, find_conflict};
use sportsplex_domain::{
    CalendarDate, ClockTime, DomainError, FacilityKind, ItemDescriptor, LineItem, ReservedSlot,
    TimeInterval, Timestamp, find_clash, price_for, validate_bookable_date,
    validate_not_started, validate_time_window,
};
use tracing::{debug, info, warn};

/// Where a booking session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Choosing today or tomorrow.
    SelectDate,
    /// Choosing hourly court booking or per-entry pass.
    SelectType {
        /// The chosen day.
        date: CalendarDate,
    },
    /// Choosing which venue to enter.
    SelectEntry {
        /// The chosen day.
        date: CalendarDate,
    },
    /// Choosing which court to book.
    SelectCourt {
        /// The chosen day.
        date: CalendarDate,
    },
    /// Entering the start, then the end, of the time window.
    SelectTime {
        /// The chosen day.
        date: CalendarDate,
        /// The chosen court.
        facility: FacilityKind,
        /// The start time, once entered.
        start: Option<ClockTime>,
    },
    /// A line item was produced.
    Committed,
    /// The user left without booking.
    Exited,
}

/// What the user should be asked next.
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    /// `1` today, `2` tomorrow, `0` exit.
    Date {
        /// Today's date.
        today: CalendarDate,
        /// Tomorrow's date.
        tomorrow: CalendarDate,
    },
    /// `1` hourly court booking, `2` per-entry pass.
    BookingType {
        /// The chosen day.
        date: CalendarDate,
        /// Whether weekend prices apply.
        weekend: bool,
    },
    /// `1` swimming pool, `2` gym room, `3` fitness studio.
    Entry {
        /// Whether weekend prices apply.
        weekend: bool,
    },
    /// `1` badminton, `2` pickleball, `3` basketball.
    Court,
    /// Start of the time window, `HHMM`.
    StartTime {
        /// The chosen court.
        facility: FacilityKind,
        /// The applicable hourly rate.
        hourly_rate: f64,
    },
    /// End of the time window, `HHMM`.
    EndTime {
        /// The chosen court.
        facility: FacilityKind,
        /// The start already entered.
        start: ClockTime,
    },
    /// The session has ended.
    Finished,
}

/// Category of a rejected booking input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unparseable number, date or time.
    MalformedInput,
    /// Outside operation hours, too short, already started.
    PolicyViolation,
    /// Overlaps an existing reservation.
    ScheduleConflict,
    /// A menu choice that does not exist.
    OutOfRange,
    /// The ledger could not be read.
    Storage,
}

/// Why a booking input was rejected. None of these are fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The input could not be parsed.
    MalformedInput {
        /// The rejected input.
        input: String,
        /// What was expected.
        reason: String,
    },
    /// The menu has no such option.
    OutOfRange {
        /// The chosen number.
        choice: u32,
        /// The menu the choice was made on.
        menu: &'static str,
    },
    /// A booking rule was broken.
    PolicyViolation(DomainError),
    /// The window overlaps an existing reservation.
    ScheduleConflict {
        /// The requested window.
        requested: ReservedSlot,
        /// The reservation it overlaps.
        existing: ReservedSlot,
    },
    /// The ledger failed.
    Ledger(CoreError),
}

impl BookingError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput { .. } => ErrorKind::MalformedInput,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::PolicyViolation(_) => ErrorKind::PolicyViolation,
            Self::ScheduleConflict { .. } => ErrorKind::ScheduleConflict,
            Self::Ledger(_) => ErrorKind::Storage,
        }
    }
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedInput { input, reason } => {
                write!(f, "Invalid input '{input}': {reason}")
            }
            Self::OutOfRange { choice, menu } => {
                write!(f, "Invalid option {choice} on the {menu} menu")
            }
            Self::PolicyViolation(err) => write!(f, "{err}"),
            Self::ScheduleConflict {
                requested,
                existing,
            } => write!(
                f,
                "This slot is already booked for {} on {} ({}-{} overlaps {}-{})",
                requested.facility,
                requested.date,
                requested.start,
                requested.end,
                existing.start,
                existing.end
            ),
            Self::Ledger(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for BookingError {}

impl From<DomainError> for BookingError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidClockTime { input, reason } => Self::MalformedInput {
                input,
                reason: reason.to_string(),
            },
            DomainError::InvalidDate { input, reason } => Self::MalformedInput { input, reason },
            other => Self::PolicyViolation(other),
        }
    }
}

impl From<CoreError> for BookingError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DomainViolation(domain) => domain.into(),
            CoreError::ScheduleConflict {
                requested,
                existing,
            } => Self::ScheduleConflict {
                requested,
                existing,
            },
            other => Self::Ledger(other),
        }
    }
}

/// The result of feeding one line of input to a session.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Input accepted; the session moved on.
    Continue,
    /// Input rejected; the session is back at date selection.
    Restart(BookingError),
    /// The window clashed; the session asks for a new time window.
    Retry(BookingError),
    /// A line item was produced and handed to the sink.
    Committed(LineItem),
    /// The user chose to leave.
    Exited,
    /// Input arrived after the session had ended.
    Finished,
}

/// Interactive booking flow over an injected clock.
#[derive(Debug)]
pub struct BookingSession<C: Clock> {
    clock: C,
    state: SessionState,
    today: CalendarDate,
    tomorrow: CalendarDate,
}

impl<C: Clock> BookingSession<C> {
    /// Starts a session at date selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the clock reports a date outside the supported range.
    pub fn new(clock: C) -> Result<Self, DomainError> {
        let today: CalendarDate = clock.today()?;
        let tomorrow: CalendarDate = today.offset_days(1)?;
        Ok(Self {
            clock,
            state: SessionState::SelectDate,
            today,
            tomorrow,
        })
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns whether the session has ended.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Committed | SessionState::Exited)
    }

    /// Describes the input the session is waiting for.
    #[must_use]
    pub fn prompt(&self) -> Prompt {
        match self.state {
            SessionState::SelectDate => Prompt::Date {
                today: self.today,
                tomorrow: self.tomorrow,
            },
            SessionState::SelectType { date } => Prompt::BookingType {
                date,
                weekend: date.is_weekend(),
            },
            SessionState::SelectEntry { date } => Prompt::Entry {
                weekend: date.is_weekend(),
            },
            SessionState::SelectCourt { .. } => Prompt::Court,
            SessionState::SelectTime {
                date,
                facility,
                start: None,
            } => Prompt::StartTime {
                facility,
                hourly_rate: facility.rate().for_day(date.is_weekend()),
            },
            SessionState::SelectTime {
                facility,
                start: Some(start),
                ..
            } => Prompt::EndTime { facility, start },
            SessionState::Committed | SessionState::Exited => Prompt::Finished,
        }
    }

    /// Feeds one line of input to the session.
    ///
    /// A committed line item is handed to `sink` and also returned in the
    /// outcome.
    pub fn handle<L, S>(&mut self, input: &str, ledger: &L, sink: &mut S) -> StepOutcome
    where
        L: ReservationLedger,
        S: LineItemSink + ?Sized,
    {
        match self.state {
            SessionState::SelectDate => self.select_date(input),
            SessionState::SelectType { date } => self.select_type(input, date),
            SessionState::SelectEntry { date } => self.select_entry(input, date, sink),
            SessionState::SelectCourt { date } => self.select_court(input, date),
            SessionState::SelectTime {
                date,
                facility,
                start: None,
            } => match parse_clock(input) {
                Ok(start) => self.advance(SessionState::SelectTime {
                    date,
                    facility,
                    start: Some(start),
                }),
                Err(err) => self.restart(err),
            },
            SessionState::SelectTime {
                date,
                facility,
                start: Some(start),
            } => self.select_end(input, ledger, sink, date, facility, start),
            SessionState::Committed | SessionState::Exited => StepOutcome::Finished,
        }
    }

    fn select_date(&mut self, input: &str) -> StepOutcome {
        match parse_choice(input) {
            Ok(0) => {
                debug!("Booking session exited at date selection");
                self.state = SessionState::Exited;
                StepOutcome::Exited
            }
            Ok(1) => self.advance(SessionState::SelectType { date: self.today }),
            Ok(2) => self.advance(SessionState::SelectType {
                date: self.tomorrow,
            }),
            Ok(choice) => self.restart(BookingError::OutOfRange {
                choice,
                menu: "date",
            }),
            Err(err) => self.restart(err),
        }
    }

    fn select_type(&mut self, input: &str, date: CalendarDate) -> StepOutcome {
        match parse_choice(input) {
            Ok(1) => self.advance(SessionState::SelectCourt { date }),
            Ok(2) => self.advance(SessionState::SelectEntry { date }),
            Ok(choice) => self.restart(BookingError::OutOfRange {
                choice,
                menu: "booking type",
            }),
            Err(err) => self.restart(err),
        }
    }

    fn select_entry<S>(&mut self, input: &str, date: CalendarDate, sink: &mut S) -> StepOutcome
    where
        S: LineItemSink + ?Sized,
    {
        let facility: FacilityKind = match menu_pick(input, &FacilityKind::ENTRIES, "entry") {
            Ok(facility) => facility,
            Err(err) => return self.restart(err),
        };

        match book_entry(&self.clock, facility, date) {
            Ok(item) => self.commit(item, sink),
            Err(err) => self.restart(err),
        }
    }

    fn select_court(&mut self, input: &str, date: CalendarDate) -> StepOutcome {
        match menu_pick(input, &FacilityKind::COURTS, "court") {
            Ok(facility) => self.advance(SessionState::SelectTime {
                date,
                facility,
                start: None,
            }),
            Err(err) => self.restart(err),
        }
    }

    fn select_end<L, S>(
        &mut self,
        input: &str,
        ledger: &L,
        sink: &mut S,
        date: CalendarDate,
        facility: FacilityKind,
        start: ClockTime,
    ) -> StepOutcome
    where
        L: ReservationLedger,
        S: LineItemSink + ?Sized,
    {
        let end: ClockTime = match parse_clock(input) {
            Ok(end) => end,
            Err(err) => return self.restart(err),
        };

        let booked: Result<LineItem, BookingError> =
            book_court(&self.clock, ledger, facility, date, start, end)
                .and_then(|item| check_pending(&item, &*sink).map(|()| item));
        match booked {
            Ok(item) => self.commit(item, sink),
            Err(err @ BookingError::ScheduleConflict { .. }) => {
                warn!(%err, "Time window clashes, asking for another window");
                self.state = SessionState::SelectTime {
                    date,
                    facility,
                    start: None,
                };
                StepOutcome::Retry(err)
            }
            Err(err) => self.restart(err),
        }
    }

    fn advance(&mut self, next: SessionState) -> StepOutcome {
        debug!(from = ?self.state, to = ?next, "Booking session advanced");
        self.state = next;
        StepOutcome::Continue
    }

    fn commit<S>(&mut self, item: LineItem, sink: &mut S) -> StepOutcome
    where
        S: LineItemSink + ?Sized,
    {
        self.state = SessionState::Committed;
        sink.accept_line_item(item.clone());
        StepOutcome::Committed(item)
    }

    fn restart(&mut self, err: BookingError) -> StepOutcome {
        warn!(%err, "Booking input rejected, restarting at date selection");
        self.state = SessionState::SelectDate;

        // A restart may cross midnight
        let refreshed: Result<(CalendarDate, CalendarDate), DomainError> =
            self.clock.today().and_then(|today| {
                today
                    .offset_days(1)
                    .map(|tomorrow: CalendarDate| (today, tomorrow))
            });
        match refreshed {
            Ok((today, tomorrow)) => {
                self.today = today;
                self.tomorrow = tomorrow;
            }
            Err(clock_err) => warn!(%clock_err, "Keeping previous date choices"),
        }

        StepOutcome::Restart(err)
    }
}

/// Validates and prices a court booking.
///
/// Checks, in order: the window rules of `validate_time_window`, that the
/// date is not in the past, the same-day cutoff (when `date` is today), and
/// finally the ledger for clashes.
///
/// # Errors
///
/// Returns the first failed check. A clash is reported as
/// `BookingError::ScheduleConflict`.
pub fn book_court<C, L>(
    clock: &C,
    ledger: &L,
    facility: FacilityKind,
    date: CalendarDate,
    start: ClockTime,
    end: ClockTime,
) -> Result<LineItem, BookingError>
where
    C: Clock + ?Sized,
    L: ReservationLedger,
{
    let interval: TimeInterval = validate_time_window(facility, date, start, end)?;

    let now: Timestamp = clock.now()?;
    validate_bookable_date(date, now.date)?;
    if date == now.date {
        validate_not_started(start, now.time)?;
    }

    if let Some(existing) = find_conflict(ledger, facility, date, start, end)? {
        return Err(BookingError::ScheduleConflict {
            requested: interval.as_slot(),
            existing,
        });
    }

    let price: f64 = price_for(facility, date, interval.duration_hours());
    let item: LineItem = LineItem::new(ItemDescriptor::court_booking(&interval), price);
    info!(label = %item.label(), price, "Court booking accepted");
    Ok(item)
}

/// Rejects a court booking that overlaps one already waiting in `sink`.
fn check_pending<S>(item: &LineItem, sink: &S) -> Result<(), BookingError>
where
    S: LineItemSink + ?Sized,
{
    let Some(slot) = item.descriptor().reserved_slot() else {
        return Ok(());
    };
    match find_clash(slot.facility, slot.date, slot.start, slot.end, sink.pending_slots()) {
        Some(existing) => Err(BookingError::ScheduleConflict {
            requested: slot,
            existing,
        }),
        None => Ok(()),
    }
}

/// Prices a per-entry pass.
///
/// # Errors
///
/// Returns an error if the facility is booked by the hour or the date is in the past.
pub fn book_entry<C>(
    clock: &C,
    facility: FacilityKind,
    date: CalendarDate,
) -> Result<LineItem, BookingError>
where
    C: Clock + ?Sized,
{
    if facility.is_hourly() {
        return Err(DomainError::NotEntryFacility(facility).into());
    }
    validate_bookable_date(date, clock.today()?)?;

    let price: f64 = price_for(facility, date, 1.0);
    let item: LineItem = LineItem::new(ItemDescriptor::EntryPass { facility, date }, price);
    info!(label = %item.label(), price, "Entry pass accepted");
    Ok(item)
}

fn parse_choice(input: &str) -> Result<u32, BookingError> {
    input
        .trim()
        .parse()
        .map_err(|_| BookingError::MalformedInput {
            input: input.trim().to_string(),
            reason: String::from("expected a menu number"),
        })
}

fn parse_clock(input: &str) -> Result<ClockTime, BookingError> {
    ClockTime::parse(input).map_err(BookingError::from)
}

/// Maps a 1-based menu choice onto `options`.
fn menu_pick<T: Copy>(input: &str, options: &[T], menu: &'static str) -> Result<T, BookingError> {
    let choice: u32 = parse_choice(input)?;
    usize::try_from(choice)
        .ok()
        .and_then(|choice| choice.checked_sub(1))
        .and_then(|index| options.get(index).copied())
        .ok_or(BookingError::OutOfRange { choice, menu })
}
