use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::i18n::use_i18n;
use crate::shared::client::use_client;

use super::admin::use_admin_session;
use super::agent::use_agent_session;
use super::identity::use_delegated_identity;
use super::AuthError;

/// Admin credential form; errors stay inline, success closes the dialog
#[component]
pub fn AdminLoginModal(open: RwSignal<bool>) -> impl IntoView {
    let i18n = use_i18n();
    let session = use_admin_session();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |_| {
        let result = session.login(&username.get_untracked(), &password.get_untracked());
        match result {
            Ok(()) => {
                username.set(String::new());
                password.set(String::new());
                error.set(None);
                open.set(false);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || i18n.t("admin.login")}</DialogTitle>
                    <DialogContent>
                        {move || {
                            error.get().map(|message| view! { <p class="form-error">{message}</p> })
                        }}
                        <div class="form-field">
                            <label>"Username"</label>
                            <Input value=username />
                        </div>
                        <div class="form-field">
                            <label>"Password"</label>
                            <Input value=password input_type=InputType::Password />
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=submit>
                            {move || i18n.t("admin.login")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            {move || i18n.t("cancel")}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

/// Agent login: delegated identity exchange first, then the credential RPC
#[component]
pub fn AgentLoginModal(open: RwSignal<bool>) -> impl IntoView {
    let i18n = use_i18n();
    let session = use_agent_session();
    let identity = use_delegated_identity();
    let client_ctx = use_client();

    let mobile_number = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let logging_in = RwSignal::new(false);

    let submit = move |_| {
        let mobile = mobile_number.get_untracked();
        let pass = password.get_untracked();
        if mobile.is_empty() || pass.is_empty() {
            error.set(Some(i18n.t("agent.loginErrorRequired")));
            return;
        }
        let Some(client) = client_ctx.client.get_untracked() else {
            error.set(Some(AuthError::NotAvailable.to_string()));
            return;
        };
        logging_in.set(true);
        error.set(None);
        spawn_local(async move {
            let result = async {
                if !identity.is_present() {
                    identity.login(&client).await?;
                }
                session.login(&client, &mobile, &pass).await
            }
            .await;
            logging_in.set(false);
            match result {
                Ok(()) => {
                    mobile_number.set(String::new());
                    password.set(String::new());
                    open.set(false);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let logout = move |_| {
        session.logout();
        open.set(false);
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || {
                            if session.is_authenticated() {
                                i18n.t("agent.logout")
                            } else {
                                i18n.t("agent.loginTitle")
                            }
                        }}
                    </DialogTitle>
                    <DialogContent>
                        <Show
                            when=move || session.is_authenticated()
                            fallback=move || {
                                view! {
                                    {move || {
                                        error
                                            .get()
                                            .map(|message| {
                                                view! { <p class="form-error">{message}</p> }
                                            })
                                    }}
                                    <p class="form-hint">{move || i18n.t("agent.loginDesc")}</p>
                                    <div class="form-field">
                                        <label>{move || i18n.t("agent.mobileNumber")}</label>
                                        <Input value=mobile_number />
                                    </div>
                                    <div class="form-field">
                                        <label>{move || i18n.t("agent.password")}</label>
                                        <Input value=password input_type=InputType::Password />
                                    </div>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        disabled=logging_in
                                        on_click=submit
                                    >
                                        {move || {
                                            if logging_in.get() {
                                                i18n.t("agent.loggingIn")
                                            } else {
                                                i18n.t("agent.login")
                                            }
                                        }}
                                    </Button>
                                }
                            }
                        >
                            <p>{move || i18n.t("agent.loggedInAs")}</p>
                            <Button appearance=ButtonAppearance::Secondary on_click=logout>
                                {move || i18n.t("agent.logout")}
                            </Button>
                        </Show>
                    </DialogContent>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
