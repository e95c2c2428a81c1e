use dioxus::prelude::*;

use crate::components::inputs::{InputType, RoleSelect, ValidatedInput};
use crate::services::host::{HostBridge, ToastSeverity, WebHost};
use crate::wizard::{
    back_page, next_page, AddMembersChoice, WizardAction, WizardState, ERROR_TITLE,
};

#[derive(Props, PartialEq, Clone)]
pub struct OrderTeamFormProps {
    pub state: Signal<WizardState>,
    pub dispatch: EventHandler<WizardAction>,
}

/// Page 2 (Order Team Change only): keep existing team members and/or add
/// new ones. Checkbox state always renders from `selected_team_ids`, so
/// revisiting the page restores the selection without any DOM fixups.
#[component]
pub fn OrderTeamForm(props: OrderTeamFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    let team_rows = state().order_team.into_iter().map(|member| {
        let checked = state().is_team_member_selected(&member.id);
        let member_id = member.id.clone();
        rsx! {
            label {
                key: "{member.id}",
                class: "team-member-row",
                input {
                    r#type: "checkbox",
                    checked: checked,
                    onchange: move |_| {
                        dispatch.call(WizardAction::ToggleTeamMember(member_id.clone()));
                    }
                }
                span { class: "team-member-name", "{member.user_name}" }
            }
        }
    });

    let candidate_rows = state().new_members.into_iter().enumerate().map(|(index, row)| {
        rsx! {
            div {
                key: "{index}",
                class: "candidate-row",
                ValidatedInput {
                    value: row.user_id.clone(),
                    placeholder: "User id".to_string(),
                    input_type: InputType::Text,
                    input_class: "input-field user-input".to_string(),
                    disabled: state().is_loading,
                    on_change: move |user_id: String| {
                        dispatch.call(WizardAction::SetCandidateUser { index, user_id });
                    }
                }
                RoleSelect {
                    options: state().role_options,
                    selected: row.role.clone(),
                    disabled: state().is_loading,
                    on_change: move |role: String| {
                        dispatch.call(WizardAction::SetCandidateRole { index, role });
                    }
                }
            }
        }
    });

    rsx! {
        div {
            class: "wizard-form order-team-page",

            h2 {
                class: "form-title",
                "Order Team"
            }

            div {
                class: "team-section",
                if state().has_order_team() {
                    h3 { class: "section-title", "Keep existing team members" }
                    {team_rows}
                } else {
                    div {
                        class: "empty-team-note",
                        "This order has no team members yet."
                    }
                }
            }

            div {
                class: "radio-section",
                span { class: "input-label", "Add new team members?" }
                for choice in [AddMembersChoice::Yes, AddMembersChoice::No] {
                    label {
                        class: "radio-option",
                        input {
                            r#type: "radio",
                            name: "add-members",
                            value: "{choice.label()}",
                            checked: state().add_members == choice,
                            onchange: move |_| {
                                dispatch.call(WizardAction::SetAddMembers(choice));
                            }
                        }
                        "{choice.label()}"
                    }
                }
            }

            if state().show_add_members_section() {
                div {
                    class: "candidate-section",
                    {candidate_rows}
                    button {
                        class: "add-member-button",
                        onclick: move |_| dispatch.call(WizardAction::AddCandidateRow),
                        "Add Team Member"
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    class: "back-button",
                    onclick: move |_| {
                        if let Some(page) = back_page(&state()) {
                            dispatch.call(WizardAction::SetCurrentPage(page));
                        }
                    },
                    "Back"
                }
                button {
                    class: "next-button",
                    disabled: state().is_loading,
                    onclick: move |_| {
                        match next_page(&state()) {
                            Ok(advance) => {
                                dispatch.call(WizardAction::SetCurrentPage(advance.to));
                            }
                            Err(validation) => {
                                WebHost.notify(
                                    ERROR_TITLE,
                                    &validation.to_string(),
                                    ToastSeverity::Error,
                                );
                            }
                        }
                    },
                    "Next"
                }
            }
        }
    }
}
