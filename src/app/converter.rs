//! Application state for the converter screen.
//!
//! Field groups each have their own writer: the credential through
//! [`Converter::set_credential`], the request through the amount/currency
//! setters, rate data only through [`Converter::apply_refresh`], and the
//! result only through [`Converter::convert_now`].

use std::time::Instant;

use tracing::{debug, info};

use crate::{
    app::{
        calc,
        schedule::{Debouncer, RefreshTimer},
        utils::parse_amount,
    },
    error::ConverterError,
    models::{ConversionResult, Credential, CurrencyCode},
    services::{Applied, RateRepository, RefreshOutcome, RefreshTicket},
};

pub struct Converter {
    repository: RateRepository,
    amount_input: String,
    source: CurrencyCode,
    target: CurrencyCode,
    result: Option<ConversionResult>,
    error: Option<ConverterError>,
    debounce: Debouncer,
    refresh_timer: RefreshTimer,
    refresh_requested: bool,
    in_flight: usize,
}

impl Converter {
    pub fn new(
        repository: RateRepository,
        debounce: Debouncer,
        refresh_timer: RefreshTimer,
    ) -> Self {
        Self {
            repository,
            amount_input: String::from("1"),
            source: CurrencyCode::eur(),
            target: CurrencyCode::usd(),
            result: None,
            error: None,
            debounce,
            refresh_timer,
            refresh_requested: false,
            in_flight: 0,
        }
    }

    pub fn repository(&self) -> &RateRepository {
        &self.repository
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    pub fn source(&self) -> &CurrencyCode {
        &self.source
    }

    pub fn target(&self) -> &CurrencyCode {
        &self.target
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ConverterError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0 || self.refresh_requested
    }

    pub fn debounce(&self) -> &Debouncer {
        &self.debounce
    }

    pub fn refresh_timer(&self) -> &RefreshTimer {
        &self.refresh_timer
    }

    /// Commits a new API key. A changed, non-blank key queues one immediate
    /// refresh; any change cancels the pending timers of the old key.
    pub fn set_credential(&mut self, raw: &str) -> bool {
        if !self.repository.set_credential(Credential::new(raw)) {
            return false;
        }

        self.refresh_timer.cancel();
        self.debounce.cancel();
        self.in_flight = 0;
        self.refresh_requested = !self.repository.credential().is_blank();
        true
    }

    pub fn set_amount(&mut self, input: &str, now: Instant) {
        self.amount_input = input.to_string();
        self.input_changed(now);
    }

    pub fn set_source(&mut self, code: CurrencyCode, now: Instant) {
        self.source = code;
        self.input_changed(now);
    }

    pub fn set_target(&mut self, code: CurrencyCode, now: Instant) {
        self.target = code;
        self.input_changed(now);
    }

    pub fn swap(&mut self, now: Instant) {
        std::mem::swap(&mut self.source, &mut self.target);
        self.input_changed(now);
    }

    fn input_changed(&mut self, now: Instant) {
        if !self.repository.rates().is_empty() {
            self.debounce.schedule(now);
        }
    }

    pub fn request_refresh(&mut self) {
        if !self.repository.credential().is_blank() {
            self.refresh_requested = true;
        }
    }

    /// Hands out the queued refresh, if any. The caller runs
    /// [`RefreshTicket::fetch`] and feeds the outcome to [`Self::apply_refresh`].
    pub fn take_refresh(&mut self) -> Option<RefreshTicket> {
        if !std::mem::take(&mut self.refresh_requested) {
            return None;
        }

        let ticket = self.repository.ticket()?;
        self.in_flight += 1;
        debug!(generation = ticket.generation(), "Refresh issued");
        Some(ticket)
    }

    pub fn apply_refresh(&mut self, outcome: RefreshOutcome, now: Instant) {
        match self.repository.apply(outcome) {
            Applied::Stale => return,
            Applied::Fresh {
                rates_updated,
                error,
            } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.error = error;
                if rates_updated && !self.repository.rates().is_empty() {
                    self.debounce.schedule(now);
                }
            }
        }

        if !self.repository.credential().is_blank() && !self.repository.rates().is_empty() {
            self.refresh_timer.arm(now);
        }
    }

    pub fn convert_now(&mut self) -> Result<ConversionResult, ConverterError> {
        let outcome = self.evaluate();

        match &outcome {
            Ok(result) => {
                self.result = Some(result.clone());
                self.error = None;
            }
            Err(ConverterError::RatesUnavailable) => {
                info!("No rates yet, requesting a refresh before converting");
                self.request_refresh();
                self.error = Some(ConverterError::RatesUnavailable);
            }
            Err(err) => {
                self.error = Some(err.clone());
            }
        }

        outcome
    }

    fn evaluate(&self) -> Result<ConversionResult, ConverterError> {
        if self.repository.credential().is_blank() {
            return Err(ConverterError::validation("Please enter your API key"));
        }

        let amount = parse_amount(&self.amount_input)?;
        calc::convert(amount, &self.source, &self.target, self.repository.rates())
    }

    /// Fires whichever deadlines have passed.
    pub fn tick(&mut self, now: Instant) {
        if self.refresh_timer.fire(now)
            && !self.repository.credential().is_blank()
            && !self.repository.rates().is_empty()
        {
            debug!("Periodic refresh due");
            self.request_refresh();
        }

        if self.debounce.fire(now)
            && !self.repository.credential().is_blank()
            && !self.repository.rates().is_empty()
        {
            let _ = self.convert_now();
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.debounce.deadline(), self.refresh_timer.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn shutdown(&mut self) {
        self.debounce.cancel();
        self.refresh_timer.cancel();
        self.refresh_requested = false;
    }
}
