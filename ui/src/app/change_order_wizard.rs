use dioxus::prelude::*;

use crate::components::display::LoadingIndicator;
use crate::components::forms::{ChangeOrderForm, ConfirmationForm, OrderTeamForm};
use crate::services::client::CrmClient;
use crate::services::host::WebHost;
use crate::wizard::{orchestrator::load_role_options, WizardAction, WizardPage, WizardState};

const WIZARD_CSS: Asset = asset!("/assets/styling/change_order_wizard.css");

/// The change-order wizard. The host page supplies the record identifier
/// it was opened on; everything else is local view state.
#[component]
pub fn ChangeOrderWizard(record_id: String) -> Element {
    let record = record_id.clone();
    let mut state = use_signal(move || WizardState::new(record.clone()));

    // Dispatch function for actions - in-place reduction preserves Dioxus
    // Signal reactivity
    let dispatch = EventHandler::new(move |action: WizardAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    // Load the role lookup once at mount; a failure leaves the dropdown
    // empty but does not block the wizard
    use_effect(move || {
        spawn(async move {
            let api = CrmClient::new();
            load_role_options(&api, &WebHost, move |action| dispatch.call(action)).await;
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: WIZARD_CSS }

        div {
            class: "change-order-wizard",

            h1 {
                class: "wizard-title",
                "Process Change Order"
            }

            if state().is_loading {
                LoadingIndicator { message: "Working...".to_string() }
            }

            if state().current_page == WizardPage::ChangeOrder {
                ChangeOrderForm {
                    state: state,
                    dispatch: dispatch
                }
            }

            if state().current_page == WizardPage::OrderTeam {
                OrderTeamForm {
                    state: state,
                    dispatch: dispatch
                }
            }

            if state().current_page == WizardPage::Confirmation {
                ConfirmationForm {
                    state: state,
                    dispatch: dispatch
                }
            }
        }
    }
}
