use super::super::{Model, Msg, UploadFile};
use super::preview_area::render_preview_area;
use super::utils::first_file;
use shared::copy::{self, analyze_button_label};
use shared::Session;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let session = model.controller.session();
    let phase: &'static str = session.phase().into();

    html! {
        <div class={classes!("upload-section", phase)}>
            { render_preview_area(model, ctx, render_file_input(ctx, "file-input", "file-input")) }
            {
                match session {
                    Session::Staged { image } | Session::Failed { image, .. } => html! {
                        <>
                            <div class="file-info">
                                <p>{ copy::selected_file_label(image.name()) }</p>
                                { render_file_input(ctx, "change-file-input", "file-input-button") }
                                <label for="change-file-input" class="change-image-btn">
                                    { copy::CHANGE_IMAGE_LABEL }
                                </label>
                            </div>
                            { render_analyze_button(ctx, session) }
                        </>
                    },
                    Session::Submitting { image, .. } => html! {
                        <>
                            <div class="file-info">
                                <p>{ copy::selected_file_label(image.name()) }</p>
                            </div>
                            { render_analyze_button(ctx, session) }
                            <div class="loading-spinner">
                                <div class="spinner"></div>
                                <p>{ copy::ANALYZING_NOTICE }</p>
                            </div>
                        </>
                    },
                    Session::Idle | Session::Succeeded { .. } => html! {},
                }
            }
        </div>
    }
}

// The picker does not filter by type; `accept` is only a hint to the dialog.
fn render_file_input(ctx: &Context<Model>, id: &'static str, class: &'static str) -> Html {
    let handle_change = ctx.link().batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_file);

        input.set_value("");
        file.map(Msg::FilePicked)
    });

    html! {
        <input
            type="file"
            id={id}
            class={class}
            accept="image/*"
            onchange={handle_change}
        />
    }
}

fn render_analyze_button(ctx: &Context<Model>, session: &Session<UploadFile>) -> Html {
    let icon = if session.is_submitting() {
        "fa-solid fa-spinner fa-spin"
    } else {
        "fa-solid fa-magnifying-glass"
    };

    html! {
        <button
            class="analyze-btn"
            disabled={!session.can_submit()}
            onclick={ctx.link().callback(|_| Msg::Submit)}
        >
            <i class={icon}></i>
            { format!(" {}", analyze_button_label(session.phase())) }
        </button>
    }
}
