use super::super::{Model, Msg};
use shared::copy::DROP_PROMPT;
use web_sys::DragEvent;
use yew::prelude::*;

/// Drop target showing either the staged image or the placeholder.
pub fn render_preview_area(model: &Model, ctx: &Context<Model>, picker: Html) -> Html {
    let link = ctx.link();

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    html! {
        <div
            id="drop-zone"
            class={classes!("drop-zone", model.is_dragging.then_some("drag-over"))}
            ondragover={handle_drag_over}
            ondragleave={handle_drag_leave}
            ondrop={handle_drop}
        >
            {
                match model.controller.session().image() {
                    Some(image) => html! {
                        <img
                            class="preview-image"
                            src={image.preview().to_string()}
                            alt="Preview"
                        />
                    },
                    None => html! {
                        <div class="drop-zone-placeholder">
                            <i class="fa-solid fa-cloud-arrow-up"></i>
                            <p>{ DROP_PROMPT }</p>
                            { picker }
                        </div>
                    },
                }
            }
        </div>
    }
}
