//! Itinerary presentation
//!
//! Pure formatting of directions outcomes into the Spanish console text
//! shown to the operator. Nothing here performs I/O; the caller decides
//! where the text goes.

use domain::{Place, Route};

use crate::{
    error::{AddressField, DirectionsError},
    translator::translate,
};

/// Default width of the `=` rules framing each section
pub const DEFAULT_WIDTH: usize = 70;

/// Formats directions outcomes as console text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItineraryPresenter {
    width: usize,
}

impl Default for ItineraryPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ItineraryPresenter {
    /// Presenter using the default rule width
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }

    /// Horizontal rule
    #[must_use]
    pub fn rule(&self) -> String {
        "=".repeat(self.width)
    }

    /// Title centred between two rules
    #[must_use]
    pub fn banner(&self, title: &str) -> String {
        let rule = self.rule();
        format!("{rule}\n{title:^width$}\n{rule}", width = self.width)
    }

    /// Render a routing outcome
    ///
    /// Failures produce a single line. A route produces the full itinerary
    /// with every instruction translated.
    #[must_use]
    pub fn render(
        &self,
        outcome: &Result<Route, DirectionsError>,
        origin_label: &str,
        destination_label: &str,
    ) -> String {
        match outcome {
            Ok(route) => self.render_route(route, origin_label, destination_label),
            Err(e) => Self::render_error(e),
        }
    }

    fn render_route(&self, route: &Route, origin_label: &str, destination_label: &str) -> String {
        let rule = self.rule();
        let mut lines = vec![
            self.banner("RUTA CALCULADA"),
            String::new(),
            format!("📍 Origen:  {origin_label}"),
            format!("📍 Destino: {destination_label}"),
            String::new(),
            format!("📏 Distancia total: {:.2} km", route.distance_km()),
            format!(
                "⏱️  Tiempo estimado: {}",
                Self::format_total_duration(route)
            ),
            String::new(),
            rule.clone(),
            "INSTRUCCIONES PASO A PASO:".to_string(),
            rule.clone(),
            String::new(),
        ];

        for (step, instruction) in route.instructions.iter().enumerate() {
            lines.push(format!("Paso {}: {}", step + 1, translate(&instruction.text)));

            if !instruction.is_stationary() {
                lines.push(format!(
                    "   → Distancia: {}",
                    Self::format_leg_distance(instruction.distance_meters)
                ));
                lines.push(format!(
                    "   → Tiempo: {}",
                    Self::format_leg_duration(instruction.duration_seconds())
                ));
            }

            lines.push(String::new());
        }

        lines.push(rule.clone());
        lines.push("¡Buen viaje!".to_string());
        lines.push(rule);

        lines.join("\n")
    }

    /// Confirmation shown after an address resolves
    #[must_use]
    pub fn render_place(field: AddressField, place: &Place) -> String {
        let title = match field {
            AddressField::Origin => "Origen",
            AddressField::Destination => "Destino",
        };
        format!(
            "✅ {title} encontrado: {}\n   Coordenadas: {}",
            place.name, place.location
        )
    }

    /// One-line message for a failed attempt
    #[must_use]
    pub fn render_error(error: &DirectionsError) -> String {
        match error {
            DirectionsError::EmptyInput { field } => {
                format!("❌ Debe ingresar una dirección de {}.", field.label())
            },
            DirectionsError::AddressNotFound(address) => {
                format!("❌ No se pudo encontrar la dirección: {address}")
            },
            DirectionsError::NoRouteAvailable => {
                "❌ No se encontraron rutas disponibles.".to_string()
            },
            DirectionsError::Api(detail) | DirectionsError::Transport(detail) => {
                format!("❌ Error: {detail}")
            },
        }
    }

    /// Step distance in metres below 1 km, kilometres otherwise
    #[must_use]
    pub fn format_leg_distance(meters: f64) -> String {
        if meters >= 1000.0 {
            format!("{:.2} km", meters / 1000.0)
        } else {
            format!("{meters:.2} metros")
        }
    }

    /// Step duration in seconds below one minute, minutes otherwise
    #[must_use]
    pub fn format_leg_duration(seconds: f64) -> String {
        if seconds >= 60.0 {
            format!("{:.2} minutos", seconds / 60.0)
        } else {
            format!("{seconds:.2} segundos")
        }
    }

    /// Total duration in minutes below one hour, hours plus minutes otherwise
    #[must_use]
    pub fn format_total_duration(route: &Route) -> String {
        let minutes = route.duration_minutes();
        if minutes >= 60.0 {
            format!("{:.2} horas ({minutes:.2} minutos)", route.duration_hours())
        } else {
            format!("{minutes:.2} minutos")
        }
    }
}
