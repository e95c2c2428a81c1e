//! Change order service client: the three remote procedures behind the
//! wizard, plus the trait seam the orchestrator is written against.

pub mod crm_client;
pub mod errors;
pub mod types;

pub use crm_client::CrmClient;
pub use errors::{ApiError, ApiResult};
pub use types::*;

use async_trait::async_trait;

use crate::wizard::types::OrderTeamMember;

/// The remote procedures the wizard depends on. WASM-first, so no
/// Send/Sync bounds on the futures.
#[async_trait(?Send)]
pub trait ChangeOrderApi {
    /// Role names for the team-member-role dropdown.
    async fn get_team_member_roles(&self) -> ApiResult<Vec<String>>;

    /// Existing order team for the record the wizard was opened on.
    async fn get_order_team(&self, record_id: &str) -> ApiResult<Vec<OrderTeamMember>>;

    /// Runs the change order procedure; returns the new record identifier.
    async fn process_change_order(&self, request: &ProcessChangeOrderRequest)
        -> ApiResult<String>;
}
