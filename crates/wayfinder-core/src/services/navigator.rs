//! Top-level navigation flow.
//!
//! `Navigator` owns the catalog state, the two location inputs and their
//! suggestion lists, the drawing surface, and the voice controller. Adapters
//! forward user actions to it; every action reports its outcome through the
//! notification service and none of them can leave the navigator unusable.

use std::sync::Arc;

use crate::autocomplete::{AutocompleteFilter, LocationField};
use crate::catalog::{CatalogState, load_catalog};
use crate::domain::{RoutePath, title_case};
use crate::error::NavigationError;
use crate::notifications::NotificationService;
use crate::ports::{DrawingSurface, NavigationApiPort, RouteRequest, SpeechRecognizerPort};
use crate::render::{CoordinateMapper, PathRenderer, PathStyle, RenderOutcome};
use crate::settings::NavigatorSettings;
use crate::speech::{SpeechOutcome, SpeechResolutionController};

/// The only floor with a floor plan and routable rooms.
pub const MAPPED_FLOOR: u8 = 1;

/// Infrastructure the navigator is wired with.
pub struct NavigatorDeps<S> {
    /// Navigation backend.
    pub api: Arc<dyn NavigationApiPort>,
    /// Platform speech recognizer.
    pub recognizer: Arc<dyn SpeechRecognizerPort>,
    /// Notification channel.
    pub notifications: NotificationService,
    /// Floor-plan surface.
    pub surface: S,
}

/// A successfully drawn route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    /// The route as returned by the backend.
    pub path: RoutePath,
    /// Straight segments drawn.
    pub segments: usize,
}

/// Navigation orchestrator.
pub struct Navigator<S: DrawingSurface> {
    api: Arc<dyn NavigationApiPort>,
    catalog: CatalogState,
    current_location: String,
    destination: String,
    floor: u8,
    autocomplete: AutocompleteFilter,
    renderer: PathRenderer,
    surface: S,
    settings: NavigatorSettings,
    notifications: NotificationService,
    speech: SpeechResolutionController,
}

impl<S: DrawingSurface> Navigator<S> {
    /// Wire a navigator. The catalog starts uninitialized.
    pub fn new(deps: NavigatorDeps<S>, settings: NavigatorSettings) -> Self {
        let mapper = CoordinateMapper::new(settings.grid, deps.surface.size());
        let renderer = PathRenderer::new(
            mapper,
            PathStyle::sized(settings.stroke_width, settings.marker_radius),
        );
        let speech = SpeechResolutionController::new(
            deps.recognizer,
            settings.speech.clone(),
            deps.notifications.clone(),
        );

        Self {
            api: deps.api,
            catalog: CatalogState::Uninitialized,
            current_location: String::new(),
            destination: String::new(),
            floor: MAPPED_FLOOR,
            autocomplete: AutocompleteFilter::new(),
            renderer,
            surface: deps.surface,
            settings,
            notifications: deps.notifications,
            speech,
        }
    }

    // ── Startup ────────────────────────────────────────────────────

    /// Load (or reload) the room catalog and block geometry.
    ///
    /// On failure the catalog is left empty; suggestions and voice matching
    /// keep working against it.
    pub async fn initialize(&mut self) -> &CatalogState {
        self.catalog = CatalogState::Loading;
        tracing::info!("Loading room catalog");

        match load_catalog(self.api.as_ref()).await {
            Ok(catalog) => {
                tracing::info!(
                    rooms = catalog.len(),
                    blocks = catalog.blocks().len(),
                    "Room catalog ready"
                );
                self.catalog = CatalogState::Ready(Arc::new(catalog));
                self.renderer.clear(&mut self.surface);
                self.notifications
                    .success("Map loaded and rooms populated successfully!");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Room catalog unavailable");
                self.notifications.error(format!(
                    "Failed to initialize map: {e}. Please check backend server."
                ));
                self.catalog = CatalogState::Failed { reason: e };
            }
        }

        self.refresh_suggestions(LocationField::Current);
        self.refresh_suggestions(LocationField::Destination);
        &self.catalog
    }

    // ── Inputs and suggestions ─────────────────────────────────────

    /// Replace an input's text and recompute its suggestions.
    pub fn set_input(&mut self, field: LocationField, text: impl Into<String>) -> &[String] {
        *self.input_mut(field) = text.into();
        self.refresh_suggestions(field)
    }

    /// Current text of an input.
    pub fn input(&self, field: LocationField) -> &str {
        match field {
            LocationField::Current => &self.current_location,
            LocationField::Destination => &self.destination,
        }
    }

    /// Suggestions for an input.
    pub fn suggestions(&self, field: LocationField) -> &[String] {
        self.autocomplete.suggestions(field)
    }

    /// Put a room picked from the room list into the first empty input.
    ///
    /// Fills the current location when it is empty, otherwise the destination.
    pub fn select_room(&mut self, name: &str) -> LocationField {
        let display = title_case(name);
        self.notifications
            .success(format!("Selected room: {display}"));

        let field = if self.current_location.is_empty() {
            LocationField::Current
        } else {
            LocationField::Destination
        };
        *self.input_mut(field) = display;
        field
    }

    /// Switch floor tabs. Only [`MAPPED_FLOOR`] has rooms.
    pub fn change_floor(&mut self, floor: u8) {
        self.floor = floor;
        if floor == MAPPED_FLOOR {
            self.refresh_suggestions(LocationField::Current);
            self.refresh_suggestions(LocationField::Destination);
        } else {
            tracing::debug!(floor, "Unmapped floor selected");
            self.notifications
                .info("This floor is currently under development");
            self.autocomplete.clear();
        }
    }

    /// Selected floor.
    pub const fn floor(&self) -> u8 {
        self.floor
    }

    // ── Voice ──────────────────────────────────────────────────────

    /// Fill `field` by voice.
    ///
    /// The input only changes when the utterance resolved to a room.
    pub async fn voice_input(&mut self, field: LocationField) -> SpeechOutcome {
        let outcome = self.speech.resolve(self.catalog.rooms()).await;
        if let SpeechOutcome::Resolved(room) = &outcome {
            *self.input_mut(field) = room.display_name().to_string();
        }
        outcome
    }

    // ── Routing ────────────────────────────────────────────────────

    /// Ask the backend for a route between the two inputs and draw it.
    pub async fn request_route(&mut self) -> Result<RouteSummary, NavigationError> {
        let result = self.find_and_draw().await;
        match &result {
            Ok(summary) => {
                tracing::info!(
                    from = %self.current_location,
                    to = %self.destination,
                    cells = summary.path.cells.len(),
                    "Route drawn"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "Route request failed");
                self.notifications.error(e.to_string());
            }
        }
        result
    }

    async fn find_and_draw(&mut self) -> Result<RouteSummary, NavigationError> {
        if self.current_location.trim().is_empty() {
            return Err(NavigationError::Validation {
                missing: LocationField::Current,
            });
        }
        if self.destination.trim().is_empty() {
            return Err(NavigationError::Validation {
                missing: LocationField::Destination,
            });
        }

        let request = RouteRequest::new(self.current_location.trim(), self.destination.trim());
        let path = self.api.find_path(&request).await?;

        if let Some(cell) = path.first_cell_outside(self.settings.grid) {
            return Err(NavigationError::InvalidRoute { cell });
        }

        match self.renderer.render(&mut self.surface, &path) {
            RenderOutcome::Empty => Err(NavigationError::NoPathFound),
            RenderOutcome::Drawn { segments } => {
                self.notifications.success(format!(
                    "Path found from {} to {}.",
                    request.current_location.to_uppercase(),
                    request.destination.to_uppercase()
                ));
                Ok(RouteSummary { path, segments })
            }
        }
    }

    /// Erase the drawn route.
    pub fn clear_path(&mut self) {
        self.renderer.clear(&mut self.surface);
        self.notifications.success("Path cleared.");
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// Catalog load state.
    pub const fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// The drawing surface.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the navigator and hand back its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// The route renderer (and through it, the coordinate mapper).
    pub const fn renderer(&self) -> &PathRenderer {
        &self.renderer
    }

    /// The notification channel.
    pub const fn notifications(&self) -> &NotificationService {
        &self.notifications
    }

    fn refresh_suggestions(&mut self, field: LocationField) -> &[String] {
        if self.floor != MAPPED_FLOOR {
            return self.autocomplete.suggestions(field);
        }
        let query = match field {
            LocationField::Current => &self.current_location,
            LocationField::Destination => &self.destination,
        };
        self.autocomplete
            .refresh(field, query, self.catalog.rooms())
    }

    fn input_mut(&mut self, field: LocationField) -> &mut String {
        match field {
            LocationField::Current => &mut self.current_location,
            LocationField::Destination => &mut self.destination,
        }
    }
}
