use super::super::{Model, Msg, SelectedFile};
use super::utils::{debounce, shorten};
use shared::FileKind;
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(selected) = model.selected.as_ref() else {
        return html! {};
    };

    let link = ctx.link().clone();

    html! {
        <div id="preview-container">
            { render_selected_preview(selected) }
            <div class="button-container">
                <button
                    id="clear-btn"
                    class="analyze-btn"
                    style="background-color: var(--clear-color);"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::ClearFile)
                    })}
                >
                    <i class="fa-solid fa-trash"></i>{" Clear"}
                </button>
                <button
                    class="analyze-btn"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Analyze)
                    })}
                    disabled={model.loading}
                >
                    { render_analyze_button_content(model, selected) }
                </button>
            </div>
        </div>
    }
}

fn render_selected_preview(selected: &SelectedFile) -> Html {
    match (selected.kind, selected.preview_url.as_ref()) {
        (FileKind::Image, Some(url)) => html! {
            <img id="actual-image-preview" src={url.to_string()} alt={selected.name.clone()} />
        },
        (FileKind::Video, Some(url)) => html! {
            <video id="actual-video-preview" src={url.to_string()} controls=true />
        },
        (FileKind::Text, _) => html! {
            <div class="text-preview">
                <i class="fa-solid fa-file-lines fa-2x"></i>
                <p>{ &selected.name }</p>
            </div>
        },
        _ => html! {
            <div class="unavailable-preview">
                <p>{"Preview unavailable"}</p>
            </div>
        },
    }
}

fn render_analyze_button_content(model: &Model, selected: &SelectedFile) -> Html {
    if model.loading {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
    } else {
        let label = if model.result.is_some() || model.error.is_some() {
            "Analyze again"
        } else {
            "Analyze"
        };
        html! {
            <>
                <i class="fa-solid fa-magnifying-glass"></i>
                { format!(" {} \"{}\"", label, shorten(&selected.name, 20)) }
            </>
        }
    }
}
