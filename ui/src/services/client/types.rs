//! Wire types for the change order service endpoints.

use serde::{Deserialize, Serialize};

use crate::wizard::types::OrderTeamMember;

/// Order-team entry as returned by the service. The linked user name is
/// optional on the wire; entries without one display as an empty name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderTeamMemberDto {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl From<OrderTeamMemberDto> for OrderTeamMember {
    fn from(dto: OrderTeamMemberDto) -> Self {
        OrderTeamMember {
            id: dto.id,
            user_id: dto.user_id,
            user_name: dto.user_name.unwrap_or_default(),
        }
    }
}

/// Submit payload. `new_team_members_json` carries the candidate rows as a
/// JSON-serialized array, matching the server procedure's signature.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessChangeOrderRequest {
    pub record_id: String,
    pub change_order_type: String,
    pub target_customer_amount: String,
    pub selected_order_team_ids: Vec<String>,
    pub new_team_members_json: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessChangeOrderResponse {
    /// Identifier of the record created by the change order procedure.
    pub record_id: String,
}
