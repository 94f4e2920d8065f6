use crate::auth::SessionToken;
use crate::backend::invite::InviteApi;
use crate::error::app_error::AppError;
use crate::models::invite::{Invite, InviteBoard, InviteStatus};

pub async fn invite_board<A>(api: &A, token: &SessionToken) -> Result<InviteBoard, AppError>
where
    A: InviteApi + Sync,
{
    let (open, closed) = api.list_invites(token).await?.into_iter().partition(|invite| invite.status.is_open());
    Ok(InviteBoard { open, closed })
}

/// Patients are the people who accepted an invite.
pub async fn patient_roster<A>(api: &A, token: &SessionToken) -> Result<Vec<Invite>, AppError>
where
    A: InviteApi + Sync,
{
    let mut invites = api.list_invites(token).await?;
    invites.retain(|invite| invite.status == InviteStatus::Accepted);
    Ok(invites)
}
