//! Interactive console menu.
//!
//! The menu reads one choice per line and prompts for the ids each query
//! needs. Query failures are reported and the loop continues; it ends on
//! the exit choice or end of input.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::debug;

use crate::config::OutputFormat;
use crate::graph::{LineNo, StopId};
use crate::network::{PassengerRecord, TransitNetwork};
use crate::report::{ErrorView, ItineraryView, LineListView, LineStopsView, StopLinesView, render};

const MENU: &str = "\
===== Transit Router =====
1. List lines
2. Show stops of a line
3. Search a stop
4. Plan route for a passenger
5. Plan route between two stops
0. Exit";

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    ListLines,
    LineStops,
    SearchStop,
    PassengerRoute,
    StopRoute,
    Exit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::ListLines),
            "2" => Some(Choice::LineStops),
            "3" => Some(Choice::SearchStop),
            "4" => Some(Choice::PassengerRoute),
            "5" => Some(Choice::StopRoute),
            "0" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Menu over a loaded network and passenger list.
#[derive(Debug)]
pub struct Menu<'a> {
    network: &'a TransitNetwork,
    passengers: &'a [PassengerRecord],
    format: OutputFormat,
}

impl<'a> Menu<'a> {
    pub fn new(
        network: &'a TransitNetwork,
        passengers: &'a [PassengerRecord],
        format: OutputFormat,
    ) -> Self {
        Self {
            network,
            passengers,
            format,
        }
    }

    /// Run until the user exits or input ends.
    ///
    /// Query results and errors go to `output`. The menu text and prompts go
    /// to `prompts`, so `output` holds nothing but results.
    pub fn run<R, W, P>(&self, input: R, output: W, prompts: P) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        P: Write,
    {
        let mut console = Console {
            input,
            output,
            prompts,
            format: self.format,
        };

        loop {
            writeln!(console.prompts, "\n{MENU}")?;
            let Some(line) = console.prompt("Choice: ")? else {
                return Ok(());
            };

            let Some(choice) = Choice::parse(&line) else {
                console.emit(&ErrorView::new("invalid choice"))?;
                continue;
            };
            debug!(?choice, "Menu choice");

            match choice {
                Choice::ListLines => console.emit(&LineListView::new(self.network))?,
                Choice::LineStops => {
                    let Some(number) = console.read_number("Line number: ")? else {
                        continue;
                    };
                    match self.network.line(LineNo(number)) {
                        Ok(line) => console.emit(&LineStopsView::new(line))?,
                        Err(e) => console.emit(&ErrorView::new(e.to_string()))?,
                    }
                }
                Choice::SearchStop => {
                    let Some(id) = console.read_number("Stop id: ")? else {
                        continue;
                    };
                    let stop = StopId(id);
                    match self.network.lines_at_stop(stop) {
                        Ok(lines) => {
                            console.emit(&StopLinesView::new(self.network, stop, lines))?
                        }
                        Err(e) => console.emit(&ErrorView::new(e.to_string()))?,
                    }
                }
                Choice::PassengerRoute => {
                    let Some(id) = console.read_number("Passenger id: ")? else {
                        continue;
                    };
                    match self.network.plan_for_passenger(self.passengers, id) {
                        Ok((record, itinerary)) => console.emit(&ItineraryView::new(
                            self.network,
                            &itinerary,
                            Some(record),
                        ))?,
                        Err(e) => console.emit(&ErrorView::new(e.to_string()))?,
                    }
                }
                Choice::StopRoute => {
                    let Some(from) = console.read_number("From stop id: ")? else {
                        continue;
                    };
                    let Some(to) = console.read_number("To stop id: ")? else {
                        continue;
                    };
                    match self.network.plan(StopId(from), StopId(to)) {
                        Ok(itinerary) => {
                            console.emit(&ItineraryView::new(self.network, &itinerary, None))?
                        }
                        Err(e) => console.emit(&ErrorView::new(e.to_string()))?,
                    }
                }
                Choice::Exit => {
                    writeln!(console.prompts, "Goodbye.")?;
                    return Ok(());
                }
            }
        }
    }
}

/// The streams one menu session reads from and writes to.
struct Console<R, W, P> {
    input: R,
    output: W,
    prompts: P,
    format: OutputFormat,
}

impl<R: BufRead, W: Write, P: Write> Console<R, W, P> {
    /// Write a prompt and read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.prompts, "{text}")?;
        self.prompts.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt for an unsigned number. `None` on end of input or a bad
    /// number; the latter is reported.
    fn read_number(&mut self, text: &str) -> io::Result<Option<u32>> {
        let Some(line) = self.prompt(text)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                self.emit(&ErrorView::new(format!("invalid number {:?}", line.trim())))?;
                Ok(None)
            }
        }
    }

    fn emit<T: Serialize + Display>(&mut self, view: &T) -> io::Result<()> {
        let text = render(view, self.format)?;
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }
}
