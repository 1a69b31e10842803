//! # Lamina GUI Application
//!
//! Desktop and browser front end for the composite laminate backend.
//! Built with Iced framework for cross-platform support (Windows, macOS, Linux, WASM).
//!
//! ## Layout
//!
//! ```text
//! ┌ toolbar: preset picker · selection · action buttons ────────────┐
//! │ input panel (material, layup, limits)  │ results panel           │
//! │                                        │ constants / ABD / plots │
//! └ status bar ─────────────────────────────────────────────────────┘
//!                                           toasts (bottom right)
//! ```
//!
//! Every backend action is one `Task`; its button is put into the loading
//! state before the task starts and restored when `Message::Finished` comes
//! back, whatever the outcome.

mod clipboard;
mod results;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use iced::widget::{column, row, stack};
use iced::{Element, Length, Subscription, Task, Theme};
use tracing::{error, info, warn};
use uuid::Uuid;

use lamina_core::client::HttpClient;
use lamina_core::config::Settings;
use lamina_core::errors::{LaminaError, LaminaResult};
use lamina_core::feedback::{Action, ActionControls, CopyButton, ToastQueue};
use lamina_core::form::{Field, LaminateForm, Selection};
use lamina_core::gateway::{ActionResult, Gateway};
use lamina_core::laminate::ModulusComponent;
use lamina_core::materials::MaterialLibrary;
use lamina_core::{logging, MaterialPreset};

use clipboard::SystemClipboard;
use results::{CopyTarget, Results};

/// Interval of the feedback tick that ages toasts and copy confirmations
const TICK: Duration = Duration::from_millis(100);

pub fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    logging::init_logger(false);
    let settings = load_settings();
    info!("Backend at {}", settings.api.base_url);

    iced::application(move || App::new(settings.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size((1280.0, 860.0))
        .run()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings() -> Settings {
    match Settings::load(None) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("{}; using default settings", e);
            Settings::default().with_base_url(std::env::var(lamina_core::config::API_URL_ENV).ok())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_settings() -> Settings {
    Settings::default()
}

/// A materials-library entry as shown in the preset picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetChoice {
    pub key: String,
    pub name: String,
}

impl From<&MaterialPreset> for PresetChoice {
    fn from(preset: &MaterialPreset) -> Self {
        PresetChoice {
            key: preset.key.clone(),
            name: preset.display_name().to_string(),
        }
    }
}

impl std::fmt::Display for PresetChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    PresetSelected(PresetChoice),
    FieldChanged(Field, String),
    SymmetryToggled(bool),
    Run(Action),
    Finished(Action, LaminaResult<ActionResult>),
    PolarComponentSelected(ModulusComponent),
    Copy(CopyTarget),
    Copied(CopyTarget, LaminaResult<()>),
    DismissToast(Uuid),
    Tick,
    ToggleDarkMode,
}

pub struct App {
    pub library: MaterialLibrary,
    pub form: LaminateForm,
    pub gateway: Option<Gateway>,
    pub base_url: String,
    pub controls: ActionControls,
    pub results: Results,
    pub polar_component: ModulusComponent,
    pub toasts: ToastQueue,
    pub copy_constants: CopyButton,
    pub copy_matrix: CopyButton,
    pub clipboard: SystemClipboard,
    pub dark_mode: bool,
    pub status: String,
}

impl App {
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let library = settings.library();
        let form = library
            .first()
            .map(LaminateForm::from_preset)
            .unwrap_or_default();

        let (gateway, status) = match HttpClient::from_settings(&settings.api) {
            Ok(client) => (Some(Gateway::new(Arc::new(client))), "Ready".to_string()),
            Err(e) => {
                error!("{}", e);
                (None, e.user_message())
            }
        };

        let app = App {
            library,
            form,
            gateway,
            base_url: settings.api.base_url.clone(),
            controls: ActionControls::default(),
            results: Results::default(),
            polar_component: settings.ui.polar_component,
            toasts: ToastQueue::new(settings.ui.toast_duration()),
            copy_constants: CopyButton::default(),
            copy_matrix: CopyButton::default(),
            clipboard: SystemClipboard::default(),
            dark_mode: settings.ui.dark_mode,
            status,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        "Lamina - Composite Laminate Calculator".to_string()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Preset picker entries in library order
    pub fn preset_choices(&self) -> Vec<PresetChoice> {
        self.library.presets().iter().map(PresetChoice::from).collect()
    }

    /// Picker value; `None` while the form is `Custom`
    pub fn selected_choice(&self) -> Option<PresetChoice> {
        match self.form.selection() {
            Selection::Preset(key) => {
                self.library.get(key).ok().map(PresetChoice::from)
            }
            Selection::Custom => None,
        }
    }

    fn copy_button_mut(&mut self, target: CopyTarget) -> &mut CopyButton {
        match target {
            CopyTarget::Constants => &mut self.copy_constants,
            CopyTarget::Matrix => &mut self.copy_matrix,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PresetSelected(choice) => {
                match self.library.get(&choice.key) {
                    Ok(preset) => {
                        self.form.apply_preset(preset);
                        self.status = format!("Loaded {}", preset.display_name());
                    }
                    Err(e) => {
                        self.toasts.error(e.user_message());
                    }
                }
                Task::none()
            }
            Message::FieldChanged(field, value) => {
                self.form.edit(field, value);
                Task::none()
            }
            Message::SymmetryToggled(symmetric) => {
                self.form.set_symmetric(symmetric);
                Task::none()
            }
            Message::Run(action) => self.run(action),
            Message::Finished(action, outcome) => {
                // restore the control before looking at the outcome
                self.controls.finish(action);
                match outcome {
                    Ok(result) => {
                        result.deliver(&mut self.results);
                        self.toasts.success(action.success_message());
                        self.status = action.success_message().to_string();
                    }
                    Err(e) => {
                        warn!("{} failed: {}", action.label(), e);
                        self.toasts.error(e.user_message());
                        self.status = format!("{} failed", action.label());
                    }
                }
                Task::none()
            }
            Message::PolarComponentSelected(component) => {
                self.polar_component = component;
                Task::none()
            }
            Message::Copy(target) => {
                let text = self.results.copy_text(target);
                if text.is_empty() {
                    return Task::none();
                }
                let result = self.clipboard.write_text(&text);
                Task::done(Message::Copied(target, result))
            }
            Message::Copied(target, result) => {
                match result {
                    Ok(()) => {
                        self.copy_button_mut(target).mark_copied();
                        self.toasts.success("Copied to clipboard");
                    }
                    Err(e) => {
                        error!("Failed to copy: {}", e);
                        self.toasts.error(e.user_message());
                    }
                }
                Task::none()
            }
            Message::DismissToast(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
            Message::Tick => {
                self.toasts.advance(TICK);
                self.copy_constants.advance(TICK);
                self.copy_matrix.advance(TICK);
                Task::none()
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                Task::none()
            }
        }
    }

    fn run(&mut self, action: Action) -> Task<Message> {
        let Some(gateway) = self.gateway.clone() else {
            let e = LaminaError::network("HTTP client unavailable");
            self.toasts.error(e.user_message());
            return Task::none();
        };

        // busy controls ignore clicks
        if !self.controls.begin(action) {
            return Task::none();
        }

        self.status = format!("{}...", action.label());
        Task::perform(gateway.run(action, &self.form), move |outcome| {
            Message::Finished(action, outcome)
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        let animating = !self.toasts.is_empty()
            || self.copy_constants.is_confirming()
            || self.copy_matrix.is_confirming();

        if animating {
            iced::time::every(TICK).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            ui::toolbar::view_toolbar(self),
            row![
                ui::input_panel::view_input_panel(self, 0.4),
                ui::results_panel::view_results_panel(self, 0.4),
            ]
            .spacing(8)
            .height(Length::Fill),
            ui::status_bar::view_status_bar(self),
        ]
        .spacing(6)
        .padding(10);

        stack![content, ui::toasts::view_toasts(&self.toasts)].into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lamina_core::feedback::PROCESSING_LABEL;
    use lamina_core::laminate::{AbdMatrix, CalculateResponse, EngineeringConstants};
    use lamina_core::units::Pascals;

    fn app() -> App {
        App::new(Settings::default()).0
    }

    fn calculation() -> ActionResult {
        ActionResult::Calculated(CalculateResponse {
            properties: EngineeringConstants {
                ex: Pascals(54.7e9),
                ey: Pascals(54.7e9),
                gxy: Pascals(20.9e9),
                vxy: 0.31,
            },
            abd: AbdMatrix(vec![vec![0.0; 6]; 6]),
        })
    }

    #[test]
    fn test_starts_with_first_preset() {
        let app = app();
        assert_eq!(app.form.selection(), &Selection::Preset("carbon".to_string()));
        assert_eq!(app.selected_choice().map(|c| c.name), Some("Carbon/Epoxy".to_string()));
        assert_eq!(app.preset_choices().len(), 2);
    }

    #[test]
    fn test_edit_switches_to_custom_until_preset() {
        let mut app = app();
        let _ = app.update(Message::FieldChanged(Field::E2, "11e9".to_string()));
        assert_eq!(app.selected_choice(), None);
        assert_eq!(app.form.selection_label(), "Custom");

        let glass = app.preset_choices()[1].clone();
        let _ = app.update(Message::PresetSelected(glass));
        assert_eq!(app.form.selection_label(), "Glass/Epoxy");
    }

    #[test]
    fn test_run_sets_loading_and_ignores_second_click() {
        let mut app = app();
        let _ = app.update(Message::Run(Action::Calculate));
        let control = app.controls.get(Action::Calculate);
        assert_eq!(control.label(), PROCESSING_LABEL);
        assert!(control.is_disabled());

        let _ = app.update(Message::Run(Action::Calculate));
        assert!(app.controls.get(Action::Calculate).is_busy());

        let _ = app.update(Message::Finished(Action::Calculate, Ok(calculation())));
        let control = app.controls.get(Action::Calculate);
        assert_eq!(control.label(), Action::Calculate.label());
        assert!(!control.is_disabled());
    }

    #[test]
    fn test_success_fills_one_region_and_toasts() {
        let mut app = app();
        let _ = app.update(Message::Run(Action::Calculate));
        let _ = app.update(Message::Finished(Action::Calculate, Ok(calculation())));

        assert!(app.results.calculation.is_some());
        assert!(app.results.polar.is_none());
        assert!(app.results.envelope.is_none());
        let toast = app.toasts.iter().next().unwrap();
        assert_eq!(toast.message, "Calculation complete");
    }

    #[test]
    fn test_error_restores_control_and_toasts_message() {
        let mut app = app();
        let _ = app.update(Message::Run(Action::Envelope));
        let err = LaminaError::backend(422, "Xt: must be positive");
        let _ = app.update(Message::Finished(Action::Envelope, Err(err)));

        assert!(!app.controls.get(Action::Envelope).is_busy());
        assert!(app.results.envelope.is_none());
        let toast = app.toasts.iter().next().unwrap();
        assert_eq!(toast.message, "Xt: must be positive");
    }

    #[test]
    fn test_copy_of_empty_region_is_noop() {
        let mut app = app();
        let _ = app.update(Message::Copy(CopyTarget::Matrix));
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_copy_outcomes() {
        let mut app = app();
        let _ = app.update(Message::Copied(CopyTarget::Constants, Ok(())));
        assert_eq!(app.copy_constants.label(), "Copied!");

        let _ = app.update(Message::Copied(
            CopyTarget::Matrix,
            Err(LaminaError::clipboard("no display")),
        ));
        let messages: Vec<&str> = app.toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["Copied to clipboard", "Failed to copy to clipboard"]);
        assert_eq!(app.copy_matrix.label(), "Copy");
    }

    #[test]
    fn test_ticks_expire_toasts() {
        let mut app = app();
        let id = app.toasts.info("hello");
        app.toasts.info("world");
        let _ = app.update(Message::DismissToast(id));
        assert_eq!(app.toasts.len(), 1);

        for _ in 0..60 {
            let _ = app.update(Message::Tick);
        }
        assert!(app.toasts.is_empty());
    }
}
