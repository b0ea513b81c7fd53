use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::types::CompanyId;
use crate::dto::company::{CompanyForCreationDto, CompanyForUpdateDto};
use crate::repository::DieselRepository;
use crate::services::{ServiceError, company as company_service};

#[get("/companies")]
pub async fn get_companies(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let companies = company_service::get_companies(repo.get_ref(), false)?;
    Ok(HttpResponse::Ok().json(companies))
}

#[get("/companies/{id}")]
pub async fn get_company(
    id: web::Path<CompanyId>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let company = company_service::get_company(repo.get_ref(), id.into_inner(), false)?;
    Ok(HttpResponse::Ok().json(company))
}

#[post("/companies")]
pub async fn create_company(
    repo: web::Data<DieselRepository>,
    web::Json(dto): web::Json<CompanyForCreationDto>,
) -> Result<HttpResponse, ServiceError> {
    let company = company_service::create_company(repo.get_ref(), dto)?;
    Ok(HttpResponse::Created()
        .insert_header(("Location", format!("/api/companies/{}", company.id)))
        .json(company))
}

#[get("/companies/collection/{ids}")]
pub async fn get_company_collection(
    ids: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let ids = company_service::parse_company_ids(&ids)?;
    let companies = company_service::get_companies_by_ids(repo.get_ref(), &ids, false)?;
    Ok(HttpResponse::Ok().json(companies))
}

#[post("/companies/collection")]
pub async fn create_company_collection(
    repo: web::Data<DieselRepository>,
    web::Json(dtos): web::Json<Vec<CompanyForCreationDto>>,
) -> Result<HttpResponse, ServiceError> {
    let companies = company_service::create_company_collection(repo.get_ref(), dtos)?;
    let ids = companies
        .iter()
        .map(|company| company.id.to_string())
        .collect::<Vec<_>>()
        .join(",");

    Ok(HttpResponse::Created()
        .insert_header(("Location", format!("/api/companies/collection/({ids})")))
        .json(companies))
}

#[put("/companies/{id}")]
pub async fn update_company(
    id: web::Path<CompanyId>,
    repo: web::Data<DieselRepository>,
    web::Json(dto): web::Json<CompanyForUpdateDto>,
) -> Result<HttpResponse, ServiceError> {
    company_service::update_company(repo.get_ref(), id.into_inner(), dto, true)?;
    Ok(HttpResponse::NoContent().finish())
}

#[delete("/companies/{id}")]
pub async fn delete_company(
    id: web::Path<CompanyId>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    company_service::delete_company(repo.get_ref(), id.into_inner(), false)?;
    Ok(HttpResponse::NoContent().finish())
}
