use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use crate::core::command::Command;
use crate::core::counter::{CounterStore, Presentation};
use crate::core::error::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A headless counter screen: owns a store, turns input tokens into taps
/// and writes one line per notification to `out`.
pub struct Session<W> {
    store: CounterStore,
    updates: Rc<RefCell<Vec<i64>>>,
    out: W,
    format: OutputFormat,
}

impl<W: Write> Session<W> {
    /// Subscribes to a fresh store and draws its initial value.
    pub fn start(out: W, format: OutputFormat) -> Result<Self, SessionError> {
        let updates = Rc::new(RefCell::new(Vec::new()));
        let mut store = CounterStore::new();
        let sink = Rc::clone(&updates);
        store.subscribe(move |value: i64| sink.borrow_mut().push(value));

        let mut session = Self {
            store,
            updates,
            out,
            format,
        };
        let initial = session.store.presentation();
        session.render(&initial)?;
        Ok(session)
    }

    pub fn tap(&mut self, input: &str) -> Result<i64, SessionError> {
        let command: Command = input.parse()?;
        tracing::info!(%command, "Tap received");
        let value = self.store.apply(command);

        let pending: Vec<i64> = self.updates.borrow_mut().drain(..).collect();
        for value in pending {
            self.render(&Presentation::of(value))?;
        }
        Ok(value)
    }

    pub fn run_ops<I, S>(&mut self, ops: I) -> Result<(), SessionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for op in ops {
            self.tap(op.as_ref())?;
        }
        Ok(())
    }

    /// One tap per line; blank lines are ignored.
    pub fn run_lines<R: BufRead>(&mut self, input: R) -> Result<(), SessionError> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            self.tap(&line)?;
        }
        Ok(())
    }

    pub fn current_value(&self) -> i64 {
        self.store.current_value()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, presentation: &Presentation) -> Result<(), SessionError> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, presentation).map_err(SessionError::Render)?;
                writeln!(self.out)?;
            }
            OutputFormat::Text => writeln!(self.out, "{}", presentation.text)?,
        }
        Ok(())
    }
}
