mod api;
mod components;

use components::handlers;
use components::header::render_header;
use components::preview_area::render_preview_area;
use components::results::ResultDisplay;
use components::theme_toggle::{render_theme_toggle, Theme};
use components::upload_section::render_upload_section;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{ApiConfig, DetectionError, DetectionResult, FileKind};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

// Models
pub struct SelectedFile {
    file: GlooFile,
    name: String,
    kind: FileKind,
    preview_url: Option<ObjectUrl>,
}

// Yew msg components
pub enum Msg {
    // File operations
    FileChosen(GlooFile),
    ClearFile,

    // Analysis operations
    Analyze,
    AnalysisFinished(u64, Result<DetectionResult, DetectionError>),

    // UI states
    SetError(Option<String>),
    SetDragging(bool),
    ToggleTheme,

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
pub struct Model {
    config: ApiConfig,
    selected: Option<SelectedFile>,
    result: Option<DetectionResult>,
    analysis_id: Option<u64>,
    loading: bool,
    error: Option<String>,
    is_dragging: bool,
    paste_listener: Option<EventListener>,
    theme: Theme,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = ApiConfig::from_env();
        log::info!("Detection service at {}", config.base_url());

        let theme = Theme::load();
        theme.apply();

        let mut model = Self {
            config,
            selected: None,
            result: None,
            analysis_id: None,
            loading: false,
            error: None,
            is_dragging: false,
            paste_listener: None,
            theme,
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        } else {
            log::warn!("No global window, clipboard paste disabled");
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File operations
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, ctx, file),
            Msg::ClearFile => handlers::handle_clear_file(self),

            // Analysis operations
            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::AnalysisFinished(id, outcome) => {
                handlers::handle_analysis_finished(self, id, outcome)
            }

            // UI states
            Msg::SetError(error) => {
                self.error = error;
                self.loading = false;
                true
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (file_name, file_type) = self
            .selected
            .as_ref()
            .map(|selected| (selected.name.clone(), selected.kind))
            .unwrap_or_else(|| (String::new(), FileKind::Unknown));

        html! {
            <div class="container">
                { render_header() }
                <div class="top-right">
                    { render_theme_toggle(self.theme, ctx.link()) }
                </div>

                <main class="main-content">
                    { render_upload_section(self, ctx) }
                    { render_preview_area(self, ctx) }
                    <ResultDisplay
                        result={self.result.clone()}
                        {file_name}
                        {file_type}
                        loading={self.loading}
                        error={self.error.clone()}
                    />
                </main>

                <footer class="app-footer">
                    <p>{"AI Disproval System | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
