use crate::auth::SessionToken;
use crate::backend::ingredient::IngredientApi;
use crate::error::app_error::AppError;
use crate::models::ingredient::Ingredient;

/// Ingredients ordered by name, ignoring case.
pub async fn ingredient_list<A>(api: &A, token: &SessionToken) -> Result<Vec<Ingredient>, AppError>
where
    A: IngredientApi + Sync,
{
    let mut ingredients = api.list_ingredients(token).await?;
    ingredients.sort_by_cached_key(|ingredient| ingredient.name.to_lowercase());
    Ok(ingredients)
}
