//! Interactive input wizard
//!
//! Walks the user through the planning steps in order: name, destination,
//! travel styles, transport, and duration. Each step validates
//! its input and re-prompts on recoverable errors; the result is a fully
//! validated [`ItineraryRequest`]. The wizard is generic over its reader
//! and writer so sessions can be driven from in-memory buffers in tests.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::planner::error::{PlannerError, PlannerResult};
use crate::planner::request::{self, ItineraryRequest};
use crate::types::{Destination, Transport, TravelStyle};

/// Step-by-step console wizard collecting an itinerary request
pub struct Wizard<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> fmt::Debug for Wizard<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wizard").finish()
    }
}

impl<R: BufRead, W: Write> Wizard<R, W> {
    /// Create a wizard over the given input and output streams
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Run all steps and return the validated request
    pub fn run(&mut self) -> PlannerResult<ItineraryRequest> {
        writeln!(self.writer, "CustomVacay Travel Assistant")?;
        writeln!(self.writer, "============================")?;
        writeln!(self.writer)?;

        let name = self.prompt_name()?;
        let destination = self.prompt_destination()?;
        let styles = self.prompt_styles()?;
        let transport = self.prompt_transport()?;
        let duration = self.prompt_duration()?;

        ItineraryRequest::new(&name, destination, &duration, &styles, transport)
    }

    fn prompt_name(&mut self) -> PlannerResult<String> {
        loop {
            write!(self.writer, "Name: ")?;
            self.writer.flush()?;
            let input = self.read_line()?;

            if request::validate_name(&input) {
                return Ok(input);
            }
            writeln!(self.writer, "{}", PlannerError::invalid_name(input.as_str()))?;
        }
    }

    fn prompt_destination(&mut self) -> PlannerResult<Destination> {
        writeln!(self.writer, "Destinations:")?;
        for (index, destination) in Destination::ALL.iter().enumerate() {
            writeln!(self.writer, "  {}. {}", index + 1, destination)?;
        }

        loop {
            write!(self.writer, "Destination (number or name): ")?;
            self.writer.flush()?;
            let input = self.read_line()?;

            if let Some(destination) = parse_menu_choice(&input, &Destination::ALL) {
                return Ok(destination);
            }
            writeln!(self.writer, "Unknown destination: {}", input)?;
        }
    }

    fn prompt_styles(&mut self) -> PlannerResult<Vec<TravelStyle>> {
        writeln!(self.writer, "Travel styles:")?;
        for (index, style) in TravelStyle::ALL.iter().enumerate() {
            writeln!(self.writer, "  {}. {}", index + 1, style)?;
        }

        loop {
            write!(self.writer, "Styles (comma-separated, at least one): ")?;
            self.writer.flush()?;
            let input = self.read_line()?;

            match parse_styles(&input) {
                Some(styles) if request::validate_styles(&styles) => return Ok(styles),
                _ => writeln!(self.writer, "{}", PlannerError::InvalidStyles)?,
            }
        }
    }

    fn prompt_transport(&mut self) -> PlannerResult<Transport> {
        writeln!(self.writer, "Transportation:")?;
        for (index, transport) in Transport::ALL.iter().enumerate() {
            writeln!(self.writer, "  {}. {}", index + 1, transport)?;
        }

        loop {
            write!(self.writer, "Transport (number or name): ")?;
            self.writer.flush()?;
            let input = self.read_line()?;

            if let Some(transport) = parse_menu_choice(&input, &Transport::ALL) {
                return Ok(transport);
            }
            writeln!(self.writer, "Unknown transport mode: {}", input)?;
        }
    }

    fn prompt_duration(&mut self) -> PlannerResult<String> {
        loop {
            write!(self.writer, "Duration in days (1-10): ")?;
            self.writer.flush()?;
            let input = self.read_line()?;

            if request::validate_duration(&input) {
                return Ok(input);
            }
            writeln!(self.writer, "{}", PlannerError::invalid_duration(input.as_str()))?;
        }
    }

    /// Read one trimmed input line; EOF mid-session is an error
    fn read_line(&mut self) -> PlannerResult<String> {
        let mut buffer = String::new();
        let bytes = self.reader.read_line(&mut buffer)?;
        if bytes == 0 {
            return Err(PlannerError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before the wizard finished",
            )));
        }
        Ok(buffer.trim().to_string())
    }
}

/// Resolve a menu answer: a 1-based option number, or the option's name
fn parse_menu_choice<T: Copy + FromStr>(input: &str, options: &[T]) -> Option<T> {
    let input = input.trim();
    if let Ok(number) = input.parse::<usize>() {
        return (1..=options.len()).contains(&number).then(|| options[number - 1]);
    }
    input.parse::<T>().ok()
}

/// Parse a comma-separated style list; `None` if any entry is unknown
fn parse_styles(input: &str) -> Option<Vec<TravelStyle>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_menu_choice(entry, &TravelStyle::ALL))
        .collect()
}
