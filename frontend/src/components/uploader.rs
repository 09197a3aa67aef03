use super::utils::{debounce, first_file, first_image_file};
use flamescope_shared::{ModelType, Submission, UploadSelection};
use gloo_file::{File as GlooFile, ObjectUrl};
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UploaderProps {
    pub model_type: ModelType,
    pub on_submit: Callback<Submission<GlooFile>>,
    #[prop_or_default]
    pub disabled: bool,
}

/// One upload form. Keeps the picked file to itself and hands it to the
/// parent on submit; it never talks to the network.
#[function_component(Uploader)]
pub fn uploader(props: &UploaderProps) -> Html {
    let model_type = props.model_type;
    let selection = use_state(|| UploadSelection::<GlooFile>::new(model_type));
    let preview = use_state(|| None::<ObjectUrl>);
    let is_dragging = use_state(|| false);
    let submit_timeout = use_mut_ref(|| None);

    let select_file = {
        let selection = selection.clone();
        let preview = preview.clone();
        Callback::from(move |file: GlooFile| {
            log::info!("{} uploader: selected {}", model_type, file.name());
            let mut next = (*selection).clone();
            next.select(file.clone(), file.name());
            selection.set(next);
            preview.set(Some(ObjectUrl::from(file)));
        })
    };

    let handle_change = {
        let select_file = select_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().as_ref().and_then(first_file) {
                select_file.emit(file);
            }
            input.set_value("");
        })
    };

    let handle_drag_over = {
        let is_dragging = is_dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            is_dragging.set(true);
        })
    };

    let handle_drag_leave = {
        let is_dragging = is_dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            is_dragging.set(false);
        })
    };

    let handle_drop = {
        let is_dragging = is_dragging.clone();
        let select_file = select_file.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            is_dragging.set(false);
            let file = e
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| first_image_file(&files));
            if let Some(file) = file {
                select_file.emit(file);
            }
        })
    };

    let handle_submit = {
        let selection = selection.clone();
        let on_submit = props.on_submit.clone();
        debounce(submit_timeout.clone(), 300, move || match selection.submit() {
            Some(submission) => on_submit.emit(submission),
            None => log::info!("{} uploader: submit ignored, no file selected", model_type),
        })
    };

    let input_id = format!("fileUpload-{}", model_type);

    html! {
        <form class="uploader" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
            <h2 class="uploader-title">{ model_type.title() }</h2>
            <input
                type="file"
                id={input_id.clone()}
                class="hidden"
                accept="image/*"
                onchange={handle_change}
            />
            <label
                for={input_id}
                class={classes!("upload-area", (*is_dragging).then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
            >
                {
                    if let Some(url) = &*preview {
                        html! { <img class="upload-preview" src={url.to_string()} alt="Selected image preview" /> }
                    } else {
                        html! { <i class="fa-solid fa-cloud-arrow-up"></i> }
                    }
                }
                <span class="upload-label">{ selection.label() }</span>
            </label>
            <button
                type="button"
                class="analyze-btn"
                onclick={handle_submit}
                disabled={props.disabled}
            >
                {
                    if props.disabled {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Examining..."}</> }
                    } else {
                        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Examine"}</> }
                    }
                }
            </button>
        </form>
    }
}
