use crate::shared::icons::icon;
use crate::system::auth::{do_login, use_auth};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_auth) = use_auth();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match do_login(
            set_auth,
            &username.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(()) => {
                set_error.set(None);
                navigate("/", Default::default());
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <div class="login">
            <form class="login__card" on:submit=on_submit>
                <div class="login__brand">
                    {icon("package")}
                    <span>"Upacku"</span>
                </div>
                <h1 class="login__title">"Admin Dashboard"</h1>
                <p class="login__hint">"Sign in to manage the platform"</p>
                {move || {
                    error
                        .get()
                        .map(|e| {
                            view! { <div class="login__error">{e}</div> }
                        })
                }}
                <label class="login__field">
                    <span>"Username"</span>
                    <input
                        type="text"
                        placeholder="admin"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="login__field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary login__submit" type="submit">
                    "Sign In"
                </button>
            </form>
        </div>
    }
}
