use super::super::{Model, Msg};
use gloo_file::File as GlooFile;
use web_sys::FileList;
use yew::prelude::*;

/// Only the first file of a multi-file pick or drop is used.
pub fn first_file(file_list: &FileList) -> Option<GlooFile> {
    file_list.item(0).map(GlooFile::from)
}

pub fn render_error_message(model: &Model, ctx: &Context<Model>) -> Html {
    let message = model
        .validation_error
        .as_deref()
        .or_else(|| model.controller.session().error_message());

    match message {
        Some(error_msg) if !model.error_dismissed => html! {
            <div class="error-message" role="alert">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
                <button
                    class="dismiss-btn"
                    title="Dismiss"
                    onclick={ctx.link().callback(|_| Msg::DismissError)}
                >
                    <i class="fa-solid fa-times"></i>
                </button>
            </div>
        },
        _ => html! {},
    }
}
