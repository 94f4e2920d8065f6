use crate::auth::SessionToken;
use crate::backend::user_plan::UserPlanApi;
use crate::error::app_error::AppError;
use crate::models::user_plan::PlansView;

pub async fn plans_view<A>(api: &A, token: &SessionToken) -> Result<PlansView, AppError>
where
    A: UserPlanApi + Sync,
{
    let (mut plans, active) = tokio::try_join!(api.list_user_plans(token), api.get_active_plan(token))?;
    plans.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));
    Ok(PlansView { active, plans })
}
