//! Admin agent roster; the mobile number is the record key, so it is only
//! editable at creation time

use contracts::domain::{Agent, AgentInput};
use contracts::shared::validation::{validate_mobile, validate_required};
use leptos::prelude::*;
use thaw::*;

use crate::domain::agents::hooks::{use_agent_mutations, use_agents};
use crate::i18n::use_i18n;
use crate::shared::components::{ErrorState, FieldError, LoadingState};

#[component]
pub fn AgentManagementPage() -> impl IntoView {
    let i18n = use_i18n();
    let agents = use_agents();
    let mutations = use_agent_mutations();

    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<Agent>);

    view! {
        <section class="agent-management">
            <h1>{move || i18n.t("admin.agents")}</h1>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| {
                    editing.set(None);
                    form_open.set(true);
                }
            >
                {move || i18n.t("add")}
            </Button>

            <Show when=move || agents.loading.get()>
                <LoadingState />
            </Show>

            {move || {
                agents
                    .error
                    .get()
                    .map(|message| {
                        view! {
                            <ErrorState
                                message=message
                                on_retry=Callback::new(move |()| agents.refetch())
                            />
                        }
                    })
            }}

            <table class="manager-table">
                <thead>
                    <tr>
                        <th>"Username"</th>
                        <th>{move || i18n.t("agent.mobileNumber")}</th>
                        <th>"Role"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        agents
                            .data
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|agent| {
                                let mobile = agent.mobile_number.clone();
                                let edit_agent = agent.clone();
                                view! {
                                    <tr>
                                        <td>{agent.username.clone()}</td>
                                        <td>{agent.mobile_number.clone()}</td>
                                        <td>{agent.role.clone()}</td>
                                        <td>
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                size=ButtonSize::Small
                                                on_click=move |_| {
                                                    editing.set(Some(edit_agent.clone()));
                                                    form_open.set(true);
                                                }
                                            >
                                                {i18n.t("edit")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| {
                                                    mutations.delete(mobile.clone())
                                                }
                                            >
                                                {i18n.t("delete")}
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <AgentFormDialog open=form_open editing />
        </section>
    }
}

#[component]
fn AgentFormDialog(open: RwSignal<bool>, editing: RwSignal<Option<Agent>>) -> impl IntoView {
    let i18n = use_i18n();
    let mutations = use_agent_mutations();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new("agent".to_string());
    let mobile = RwSignal::new(String::new());

    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let mobile_error = RwSignal::new(None::<String>);

    Effect::new(move |_| match editing.get() {
        Some(agent) => {
            username.set(agent.username);
            password.set(agent.password);
            role.set(agent.role);
            mobile.set(agent.mobile_number);
        }
        None => {
            username.set(String::new());
            password.set(String::new());
            role.set("agent".to_string());
            mobile.set(String::new());
        }
    });

    let submit = move |_| {
        username_error.set(validate_required(&username.get_untracked(), "Username"));
        password_error.set(validate_required(&password.get_untracked(), "Password"));
        mobile_error.set(validate_mobile(&mobile.get_untracked()));
        if username_error.get_untracked().is_some()
            || password_error.get_untracked().is_some()
            || mobile_error.get_untracked().is_some()
        {
            return;
        }

        let is_new = editing.get_untracked().is_none();
        let input = AgentInput {
            username: username.get_untracked(),
            password: password.get_untracked(),
            role: role.get_untracked(),
            mobile_number: mobile.get_untracked(),
        };
        mutations.save(input, is_new);
        open.set(false);
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || {
                            if editing.get().is_some() { i18n.t("edit") } else { i18n.t("add") }
                        }}
                    </DialogTitle>
                    <DialogContent>
                        <div class="form-field">
                            <label>"Username"</label>
                            <Input value=username />
                            <FieldError error=username_error />
                        </div>
                        <div class="form-field">
                            <label>{move || i18n.t("agent.password")}</label>
                            <Input value=password />
                            <FieldError error=password_error />
                        </div>
                        <div class="form-field">
                            <label>"Role"</label>
                            <Input value=role />
                        </div>
                        <div class="form-field">
                            <label>{move || i18n.t("agent.mobileNumber")}</label>
                            <Input value=mobile disabled=Signal::derive(move || editing.get().is_some()) />
                            <FieldError error=mobile_error />
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=submit>
                            {move || i18n.t("save")}
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
