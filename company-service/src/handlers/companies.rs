use crate::dtos::{CompanyQuery, CompanyResponse, CreateCompanyRequest};
use crate::models::Company;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use service_core::error::AppError;

pub async fn add_company(
    State(state): State<AppState>,
    Json(body): Json<CreateCompanyRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (company_name, country) = match (
        body.company_name.filter(|v| !v.is_empty()),
        body.country.filter(|v| !v.is_empty()),
    ) {
        (Some(company_name), Some(country)) => (company_name, country),
        _ => {
            return Err(AppError::ValidationError(
                "Missing required fields: companyName and country".to_string(),
            ));
        }
    };

    let store = state.store()?;

    let company = Company::new(
        company_name,
        country,
        body.company_website.unwrap_or_default(),
        body.available_positions.unwrap_or_default(),
    );

    let company_id = store.insert(company).await?;

    metrics::counter!("companies_added_total").increment(1);
    tracing::info!(company_id = %company_id, "Company added");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Company added successfully to Database" })),
    ))
}

pub async fn get_companies(
    State(state): State<AppState>,
    Query(query): Query<CompanyQuery>,
) -> Result<impl IntoResponse, AppError> {
    let store = state.store()?;

    let companies = store.find(&query.into_filter()).await?;
    let response: Vec<CompanyResponse> =
        companies.into_iter().map(CompanyResponse::from).collect();

    Ok(Json(response))
}
