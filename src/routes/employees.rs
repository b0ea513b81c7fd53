use actix_web::{HttpResponse, delete, get, patch, post, put, web};

use crate::domain::types::{CompanyId, EmployeeId};
use crate::dto::employee::{EmployeeForCreationDto, EmployeeForUpdateDto};
use crate::patch::PatchDocument;
use crate::query::{EmployeeQueryParameters, EmployeeQueryParams, PagingOptions};
use crate::repository::DieselRepository;
use crate::services::{ServiceError, employee as employee_service};

/// Response header carrying the JSON page metadata of a listing.
pub const PAGINATION_HEADER: &str = "X-Pagination";

#[get("/companies/{company_id}/employees")]
pub async fn get_employees(
    company_id: web::Path<CompanyId>,
    params: web::Query<EmployeeQueryParams>,
    repo: web::Data<DieselRepository>,
    paging: web::Data<PagingOptions>,
) -> Result<HttpResponse, ServiceError> {
    let params = EmployeeQueryParameters::from_params(params.into_inner(), paging.get_ref());
    let page =
        employee_service::list_employees(repo.get_ref(), company_id.into_inner(), &params, false)?;

    let metadata = match serde_json::to_string(&page.metadata) {
        Ok(metadata) => metadata,
        Err(e) => {
            log::error!("Failed to serialize page metadata: {e}");
            return Ok(HttpResponse::InternalServerError().finish());
        }
    };

    Ok(HttpResponse::Ok()
        .insert_header((PAGINATION_HEADER, metadata))
        .json(page.items))
}

#[get("/companies/{company_id}/employees/{id}")]
pub async fn get_employee(
    path: web::Path<(CompanyId, EmployeeId)>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let (company_id, id) = path.into_inner();
    let employee = employee_service::get_employee(repo.get_ref(), company_id, id, false)?;
    Ok(HttpResponse::Ok().json(employee))
}

#[post("/companies/{company_id}/employees")]
pub async fn create_employee(
    company_id: web::Path<CompanyId>,
    repo: web::Data<DieselRepository>,
    web::Json(dto): web::Json<EmployeeForCreationDto>,
) -> Result<HttpResponse, ServiceError> {
    let company_id = company_id.into_inner();
    let employee = employee_service::create_employee(repo.get_ref(), company_id, dto, false)?;

    Ok(HttpResponse::Created()
        .insert_header((
            "Location",
            format!("/api/companies/{company_id}/employees/{}", employee.id),
        ))
        .json(employee))
}

#[put("/companies/{company_id}/employees/{id}")]
pub async fn update_employee(
    path: web::Path<(CompanyId, EmployeeId)>,
    repo: web::Data<DieselRepository>,
    web::Json(dto): web::Json<EmployeeForUpdateDto>,
) -> Result<HttpResponse, ServiceError> {
    let (company_id, id) = path.into_inner();
    employee_service::update_employee(repo.get_ref(), company_id, id, dto, false, true)?;
    Ok(HttpResponse::NoContent().finish())
}

#[patch("/companies/{company_id}/employees/{id}")]
pub async fn partially_update_employee(
    path: web::Path<(CompanyId, EmployeeId)>,
    repo: web::Data<DieselRepository>,
    web::Json(document): web::Json<PatchDocument>,
) -> Result<HttpResponse, ServiceError> {
    let (company_id, id) = path.into_inner();

    let mut context =
        employee_service::prepare_employee_patch(repo.get_ref(), company_id, id, false, true)?;
    context.apply(&document)?;
    let validated = context.validate()?;
    employee_service::commit_employee_patch(repo.get_ref(), validated)?;

    Ok(HttpResponse::NoContent().finish())
}

#[delete("/companies/{company_id}/employees/{id}")]
pub async fn delete_employee(
    path: web::Path<(CompanyId, EmployeeId)>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let (company_id, id) = path.into_inner();
    employee_service::delete_employee(repo.get_ref(), company_id, id, false)?;
    Ok(HttpResponse::NoContent().finish())
}
