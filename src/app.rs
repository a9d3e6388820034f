use std::io::{Read, Write};

use anyhow::{Context, Result};

use crate::args::Format;
use crate::load::Loader;
use crate::settings::{Input, Settings};
use crate::ui::Ui;

/// This struct actually runs the command-line app.
pub struct App {
    /// Interpreted command line settings
    settings: Settings,
    /// User interface
    ui: Ui,
}

impl App {
    /// Create a new `App`.
    pub fn new(settings: Settings) -> Self {
        let ui = Ui::new(&settings);
        Self { settings, ui }
    }

    /// Run the app, printing the ordered jobs to stdout.
    pub fn run(self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Run the app, printing the ordered jobs to `out`.
    pub fn run_to<W: Write>(mut self, out: &mut W) -> Result<()> {
        let text = self.read_input()?;

        self.ui.verbose_progress("Ordering jobs");
        self.ui.start_timer();
        let order = Loader::new(self.settings.strict)
            .load(&text)
            .context("invalid job list")?;
        self.ui.done();
        self.ui.print_elapsed("Ordering jobs");

        log::info!("ordered {} jobs", order.len());
        self.write_order(&order, out)
    }

    fn read_input(&mut self) -> Result<String> {
        match &self.settings.input {
            Input::Text(text) => Ok(text.clone()),
            Input::File(path) => {
                self.ui.verbose_progress_debug("Reading job list", path);
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("while reading job list file {:?}", path))?;
                self.ui.done();
                Ok(text)
            }
            Input::Stdin => {
                self.ui.verbose_progress("Reading job list from stdin");
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("while reading job list from stdin")?;
                self.ui.done();
                Ok(text)
            }
        }
    }

    fn write_order<W: Write>(&self, order: &[String], out: &mut W) -> Result<()> {
        match self.settings.format {
            Format::List => {
                for code in order {
                    writeln!(out, "{code}")?;
                }
            }
            Format::String => {
                writeln!(out, "{}", order.join(&self.settings.delimiter))?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
