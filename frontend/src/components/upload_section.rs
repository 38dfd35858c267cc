use super::super::{Model, Msg};
use super::utils::{debounce, first_file};
use shared::file_kind::accept_attribute;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let chosen = input.files().as_ref().and_then(first_file);

        input.set_value("");

        match chosen {
            Some(file) => Msg::FileChosen(file),
            None => Msg::SetError(Some("No file selected.".into())),
        }
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        let input = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("file-input"));

        if let Some(html_input) = input.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
            html_input.click();
        }
    });

    html! {
        <div class="upload-section">
            <input
                type="file"
                id="file-input"
                accept={accept_attribute()}
                style="display: none;"
                onchange={handle_change}
            />

            <button
                id="upload-button"
                class="analyze-btn"
                disabled={model.loading}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <i class="fa-solid fa-upload"></i> {" Select File"}
            </button>

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Drag & drop a file here, paste, or click"}</p>
                    <p class="file-types">{"Text: TXT, PDF, DOC, DOCX"}</p>
                    <p class="file-types">{"Images: JPG, JPEG, PNG, WEBP, GIF"}</p>
                    <p class="file-types">{"Video: MP4, MOV, AVI, MKV, WEBM"}</p>
                </div>
            </div>
        </div>
    }
}
