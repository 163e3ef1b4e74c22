use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{Local, NaiveDate};
use csv::{ReaderBuilder, Trim};
use tracing::info;

use crate::calendar::{build_calendar, Calendar};
use crate::engine::errors::PipelineError;
use crate::engine::reconciler::reconcile;
use crate::models::{RawRow, TransactionRow, DEFAULT_DATE_FORMAT};

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// `chrono` format string every date column is parsed with.
    pub date_format: String
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string()
        }
    }
}

/// Turns one earnings export into a stay calendar.
///
/// Stateless between runs: every call starts from an empty set of reservations,
/// so the same input always produces the same calendar.
pub struct Pipeline {
    options: PipelineOptions,
    today: Option<NaiveDate>
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self {
            options,
            today: None
        }
    }

    /// Fixes the date used as the calendar focus when the export has no reservations.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Runs the export at `path` through validation, reconciliation and calendar building.
    pub fn run(&self, path: &Path) -> Result<Calendar, PipelineError> {
        let file = File::open(path)?;
        self.run_reader(BufReader::new(file))
    }

    /// Same as [`Pipeline::run`] for an export that is already open.
    ///
    /// Nothing past validation runs unless every row validates.
    pub fn run_reader<R: Read>(&self, reader: R) -> Result<Calendar, PipelineError> {
        let rows = self.validate(reader)?;
        let reservations = reconcile(&rows)?;

        info!("Reconciled [{}] rows into [{}] reservations", rows.len(), reservations.len());

        if reservations.is_empty() {
            info!("Export contains no reservations");
        }

        let today = self.today.unwrap_or_else(|| Local::now().date_naive());

        Ok(build_calendar(reservations.iter(), today)?)
    }

    fn validate<R: Read>(&self, reader: R) -> Result<Vec<TransactionRow>, PipelineError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let mut rows = Vec::new();

        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |position| position.line());
            let raw: RawRow = record.deserialize(Some(&headers))?;

            rows.push(TransactionRow::from_raw(&raw, line, &self.options.date_format)?);
        }

        Ok(rows)
    }
}
