// Core types for the change-order wizard - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The three wizard pages. Exactly one is active at a time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WizardPage {
    ChangeOrder,
    OrderTeam,
    Confirmation,
}

/// The change-order types offered on the first page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChangeOrderType {
    NonCommissionableChange,
    ProductMaterialChange,
    ContractAmountChange,
    OrderTeamChange,
}

impl ChangeOrderType {
    /// Radio options in display order.
    pub const ALL: [ChangeOrderType; 4] = [
        ChangeOrderType::NonCommissionableChange,
        ChangeOrderType::ProductMaterialChange,
        ChangeOrderType::ContractAmountChange,
        ChangeOrderType::OrderTeamChange,
    ];

    /// The label shown in the UI and sent on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            ChangeOrderType::NonCommissionableChange => "Non Commissionable Change",
            ChangeOrderType::ProductMaterialChange => "Product Material Change",
            ChangeOrderType::ContractAmountChange => "Contract Amount Change",
            ChangeOrderType::OrderTeamChange => "Order Team Change",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.label() == label)
    }
}

impl fmt::Display for ChangeOrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the "add new members" section of the order-team page is open.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AddMembersChoice {
    Yes,
    #[default]
    No,
}

impl AddMembersChoice {
    pub fn label(&self) -> &'static str {
        match self {
            AddMembersChoice::Yes => "Yes",
            AddMembersChoice::No => "No",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Yes" => Some(AddMembersChoice::Yes),
            "No" => Some(AddMembersChoice::No),
            _ => None,
        }
    }
}

/// Option for the team-member-role dropdown, loaded once at mount.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RoleOption {
    pub label: String,
    pub value: String,
}

impl RoleOption {
    /// The server returns bare role names; label and value are the same.
    pub fn from_name(name: &str) -> Self {
        Self {
            label: name.to_string(),
            value: name.to_string(),
        }
    }
}

/// A user-appendable new-team-member row. Fields stay empty until chosen.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberCandidate {
    pub user_id: String,
    pub role: String,
}

impl TeamMemberCandidate {
    /// A row counts toward validation only when both fields are filled.
    pub fn is_complete(&self) -> bool {
        !self.user_id.is_empty() && !self.role.is_empty()
    }
}

/// An existing order-team entry fetched from the server. Selection lives in
/// `WizardState::selected_team_ids`, not on the entry itself.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OrderTeamMember {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
}

/// Local roster-edit failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("candidate row index {index} out of range (rows: {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum WizardAction {
    // Change-order page
    SelectChangeOrderType(ChangeOrderType),
    SetTargetCustomerAmount(String),

    // Order-team page
    SetAddMembers(AddMembersChoice),
    SetOrderTeam(Vec<OrderTeamMember>),
    ToggleTeamMember(String),
    AddCandidateRow,
    SetCandidateUser { index: usize, user_id: String },
    SetCandidateRole { index: usize, role: String },

    // Lookup data
    SetRoleOptions(Vec<RoleOption>),

    // Wizard flow
    SetCurrentPage(WizardPage),
    SetLoading(bool),
    SetSubmitting(bool),
}

#[derive(Clone, PartialEq, Debug)]
pub struct WizardState {
    /// Record the wizard was opened for, supplied by the host page.
    pub record_id: String,
    pub current_page: WizardPage,
    pub change_order_type: Option<ChangeOrderType>,
    pub target_customer_amount: String,
    pub add_members: AddMembersChoice,
    pub role_options: Vec<RoleOption>,
    pub order_team: Vec<OrderTeamMember>,
    /// Set once the roster fetch has succeeded; revisits reuse the cache.
    pub team_loaded: bool,
    pub selected_team_ids: Vec<String>,
    pub new_members: Vec<TeamMemberCandidate>,
    pub is_loading: bool,
    /// Guards against a rapid double-click issuing two submits.
    pub submit_in_flight: bool,
}

impl WizardState {
    pub fn new(record_id: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            current_page: WizardPage::ChangeOrder,
            change_order_type: None,
            target_customer_amount: String::new(),
            add_members: AddMembersChoice::No,
            role_options: Vec::new(),
            order_team: Vec::new(),
            team_loaded: false,
            selected_team_ids: Vec::new(),
            new_members: vec![TeamMemberCandidate::default()],
            is_loading: false,
            submit_in_flight: false,
        }
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: WizardAction) {
        match action {
            WizardAction::SelectChangeOrderType(change_type) => {
                self.change_order_type = Some(change_type);
                // Roster edits only make sense for Order Team Change
                if change_type != ChangeOrderType::OrderTeamChange {
                    self.reset_roster_edits();
                }
            }
            WizardAction::SetTargetCustomerAmount(amount) => {
                self.target_customer_amount = amount;
            }

            WizardAction::SetAddMembers(choice) => {
                self.add_members = choice;
            }
            WizardAction::SetOrderTeam(members) => {
                self.order_team = members;
                self.team_loaded = true;
            }
            WizardAction::ToggleTeamMember(id) => {
                self.toggle_team_selection(&id);
            }
            WizardAction::AddCandidateRow => {
                self.add_candidate_row();
            }
            WizardAction::SetCandidateUser { index, user_id } => {
                if let Err(error) = self.set_candidate_user(index, user_id) {
                    tracing::error!("ignoring candidate user edit: {}", error);
                }
            }
            WizardAction::SetCandidateRole { index, role } => {
                if let Err(error) = self.set_candidate_role(index, role) {
                    tracing::error!("ignoring candidate role edit: {}", error);
                }
            }

            WizardAction::SetRoleOptions(options) => {
                self.role_options = options;
            }

            WizardAction::SetCurrentPage(page) => {
                self.current_page = page;
            }
            WizardAction::SetLoading(loading) => {
                self.is_loading = loading;
            }
            WizardAction::SetSubmitting(submitting) => {
                self.submit_in_flight = submitting;
            }
        }
    }

    /// Add or remove an existing team member id. Toggling twice is a no-op.
    pub fn toggle_team_selection(&mut self, id: &str) {
        if let Some(pos) = self.selected_team_ids.iter().position(|s| s == id) {
            self.selected_team_ids.remove(pos);
        } else {
            self.selected_team_ids.push(id.to_string());
        }
    }

    pub fn add_candidate_row(&mut self) {
        self.new_members.push(TeamMemberCandidate::default());
    }

    /// Set the user of a candidate row. Out-of-range indexes fail instead of
    /// silently growing the sequence.
    pub fn set_candidate_user(&mut self, index: usize, user_id: String) -> Result<(), RosterError> {
        let len = self.new_members.len();
        let row = self
            .new_members
            .get_mut(index)
            .ok_or(RosterError::IndexOutOfRange { index, len })?;
        row.user_id = user_id;
        Ok(())
    }

    /// Set the role of a candidate row, bounds-checked like `set_candidate_user`.
    pub fn set_candidate_role(&mut self, index: usize, role: String) -> Result<(), RosterError> {
        let len = self.new_members.len();
        let row = self
            .new_members
            .get_mut(index)
            .ok_or(RosterError::IndexOutOfRange { index, len })?;
        row.role = role;
        Ok(())
    }

    /// Drop all roster edits back to one empty candidate row and no selection.
    pub fn reset_roster_edits(&mut self) {
        self.new_members = vec![TeamMemberCandidate::default()];
        self.selected_team_ids.clear();
    }

    /// Helper methods for common state queries
    pub fn has_order_team(&self) -> bool {
        !self.order_team.is_empty()
    }

    pub fn show_add_members_section(&self) -> bool {
        self.add_members == AddMembersChoice::Yes
    }

    pub fn show_target_customer_amount(&self) -> bool {
        self.change_order_type == Some(ChangeOrderType::ContractAmountChange)
    }

    pub fn is_team_member_selected(&self, id: &str) -> bool {
        self.selected_team_ids.iter().any(|s| s == id)
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new("")
    }
}
