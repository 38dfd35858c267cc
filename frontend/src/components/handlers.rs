use super::super::{Model, Msg, SelectedFile};
use super::utils::{first_file, generate_id};
use crate::api;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{DetectionError, DetectionResult, FileKind};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

pub fn handle_file_chosen(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    let name = file.name();
    let kind = FileKind::from_file_name(&name);
    log::info!("Selected {} ({})", name, kind);

    model.result = None;
    model.analysis_id = None;
    model.loading = false;

    if !kind.is_supported() {
        log::warn!("Skipping unsupported file: {}", name);
        model.selected = None;
        model.error = Some(DetectionError::UnsupportedFile(name).to_string());
        return true;
    }

    let preview_url = matches!(kind, FileKind::Image | FileKind::Video)
        .then(|| ObjectUrl::from(file.clone()));

    model.selected = Some(SelectedFile {
        file,
        name,
        kind,
        preview_url,
    });

    start_analysis(model, ctx);
    true
}

pub fn handle_clear_file(model: &mut Model) -> bool {
    model.selected = None;
    model.result = None;
    model.analysis_id = None;
    model.loading = false;
    model.error = None;
    true
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.selected.is_none() {
        ctx.link()
            .send_message(Msg::SetError(Some("No file selected for analysis.".into())));
        return false;
    }

    start_analysis(model, ctx);
    true
}

pub fn handle_analysis_finished(
    model: &mut Model,
    id: u64,
    outcome: Result<DetectionResult, DetectionError>,
) -> bool {
    // The file was cleared or replaced while this request was in flight.
    if model.analysis_id != Some(id) {
        log::info!("Dropping result of superseded analysis {}", id);
        return false;
    }

    model.analysis_id = None;
    model.loading = false;

    match outcome {
        Ok(result) => {
            log::info!("Received {} result: {}", result.kind(), result.label());
            if let DetectionResult::Text(flat) | DetectionResult::Image(flat) = &result {
                if flat.has_conflicting_signals() {
                    log::warn!(
                        "Label {:?} and class {} disagree on the AI verdict",
                        flat.predicted_label,
                        flat.predicted_class
                    );
                }
            }
            model.error = None;
            model.result = Some(result);
        }
        Err(err) => {
            log::warn!("Analysis failed: {}", err);
            model.result = None;
            model.error = Some(err.to_string());
        }
    }

    true
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    model.theme = model.theme.toggled();
    model.theme.apply();
    model.theme.persist();
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file) = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .as_ref()
        .and_then(first_file)
    {
        ctx.link().send_message(Msg::FileChosen(file));
    }

    true
}

pub fn handle_paste(ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    let Some(file_list) = event
        .clipboard_data()
        .and_then(|data_transfer| data_transfer.files())
    else {
        return false;
    };

    match first_file(&file_list) {
        Some(file) => {
            event.prevent_default();
            ctx.link().send_message(Msg::FileChosen(file));
            true
        }
        None => false,
    }
}

fn start_analysis(model: &mut Model, ctx: &Context<Model>) {
    let Some(selected) = model.selected.as_ref() else {
        return;
    };

    let id = generate_id();
    model.analysis_id = Some(id);
    model.loading = true;
    model.error = None;
    model.result = None;

    let file = selected.file.clone();
    let config = model.config.clone();
    let link = ctx.link().clone();

    spawn_local(async move {
        let outcome = api::analyze(&config, &file).await;
        link.send_message(Msg::AnalysisFinished(id, outcome));
    });
}
