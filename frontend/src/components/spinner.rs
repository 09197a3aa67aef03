use yew::prelude::*;

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="spinner-container" aria-busy="true">
            <span class="loader"></span>
        </div>
    }
}
