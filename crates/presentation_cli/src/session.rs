//! Interactive directions session
//!
//! Prompts for two addresses and a vehicle, prints the itinerary and asks
//! whether to start over. Reads lines from any async buffered reader and
//! writes to any `Write` sink so the whole dialogue can be scripted.

use std::io::{self, Write};

use application::{AddressField, DirectionsService, ItineraryPresenter};
use domain::{Place, RouteRequest, TravelMode};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

/// Answers accepted as "yes" to the repeat prompt
const YES_ANSWERS: [&str; 5] = ["s", "si", "sí", "y", "yes"];

/// How a single directions attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    /// Itinerary or error message shown
    Done,
    /// Input closed while prompting
    EndOfInput,
}

/// Result of prompting for one address
enum Lookup {
    Found(Place),
    Failed,
    EndOfInput,
}

/// Interactive session over an input and an output stream
pub struct Session<R, W> {
    service: DirectionsService,
    presenter: ItineraryPresenter,
    input: R,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    /// Create a session reading answers from `input` and writing to `output`
    pub fn new(service: DirectionsService, input: R, output: W) -> Self {
        Self {
            service,
            presenter: ItineraryPresenter::new(),
            input,
            output,
        }
    }

    /// Run attempts until the operator declines another route or input ends
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            if self.attempt().await? == Attempt::EndOfInput {
                debug!("Input closed, ending session");
                break;
            }

            writeln!(self.output, "\n{}", self.presenter.rule())?;
            let answer = self.prompt("¿Desea calcular otra ruta? (s/n): ").await?;
            if !answer.as_deref().is_some_and(wants_another) {
                break;
            }

            writeln!(self.output, "\n\n")?;
        }

        self.farewell()
    }

    async fn attempt(&mut self) -> io::Result<Attempt> {
        writeln!(self.output, "{}", self.presenter.banner("SISTEMA DE DIRECCIONES"))?;

        let origin = match self.locate(AddressField::Origin).await? {
            Lookup::Found(place) => place,
            Lookup::Failed => return Ok(Attempt::Done),
            Lookup::EndOfInput => return Ok(Attempt::EndOfInput),
        };

        let destination = match self.locate(AddressField::Destination).await? {
            Lookup::Found(place) => place,
            Lookup::Failed => return Ok(Attempt::Done),
            Lookup::EndOfInput => return Ok(Attempt::EndOfInput),
        };

        let Some(mode) = self.choose_mode().await? else {
            return Ok(Attempt::EndOfInput);
        };

        writeln!(self.output, "\n⏳ Calculando ruta...")?;
        let request = RouteRequest::new(origin.location, destination.location, mode);
        let outcome = self.service.plan(&request).await;

        writeln!(
            self.output,
            "\n{}",
            self.presenter
                .render(&outcome, &origin.name, &destination.name)
        )?;
        Ok(Attempt::Done)
    }

    async fn locate(&mut self, field: AddressField) -> io::Result<Lookup> {
        writeln!(
            self.output,
            "\n📍 Ingrese la dirección de {}:",
            field.label().to_uppercase()
        )?;
        let Some(line) = self.prompt("   → ").await? else {
            return Ok(Lookup::EndOfInput);
        };

        let address = line.trim();
        if !address.is_empty() {
            writeln!(self.output, "\n⏳ Buscando dirección de {}...", field.label())?;
        }

        match self.service.locate(field, address).await {
            Ok(place) => {
                writeln!(
                    self.output,
                    "{}",
                    ItineraryPresenter::render_place(field, &place)
                )?;
                Ok(Lookup::Found(place))
            },
            Err(e) => {
                writeln!(self.output, "{}", ItineraryPresenter::render_error(&e))?;
                Ok(Lookup::Failed)
            },
        }
    }

    async fn choose_mode(&mut self) -> io::Result<Option<TravelMode>> {
        writeln!(self.output, "\n🚗 Seleccione el tipo de vehículo:")?;
        for (number, mode) in TravelMode::ALL.iter().enumerate() {
            writeln!(self.output, "   {}. {}", number + 1, mode.label())?;
        }

        let choice = self
            .prompt("\nOpción (presione Enter para automóvil): ")
            .await?;
        Ok(choice.map(|c| TravelMode::from_menu_choice(&c)))
    }

    /// Show `text` and read one line; `None` once input is exhausted
    async fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn farewell(&mut self) -> io::Result<()> {
        let rule = self.presenter.rule();
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "👋 ¡Gracias por usar el sistema de direcciones!")?;
        writeln!(self.output, "{rule}")?;
        self.output.flush()
    }
}

/// Whether a repeat-prompt answer asks for another route
fn wants_another(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    YES_ANSWERS.contains(&answer.as_str())
}
