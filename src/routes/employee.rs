use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::{Deserialize, Serialize};
use tera::Tera;

use crate::dto::employee::ListQuery;
use crate::forms::FieldError;
use crate::forms::employee::{AddEmployeeForm, DeleteEmployeeForm, SaveEmployeeForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, employee as employee_service};

const TRY_AGAIN_MESSAGE: &str =
    "Something went wrong while saving the employee. Please try again later.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQueryParams {
    sort_order: Option<String>,
    search_name: Option<String>,
    search_dept: Option<String>,
    page: Option<usize>,
}

/// List context a delete round-trips so the caller lands back on the same
/// view it came from.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListContext<'a> {
    page: usize,
    search_name: &'a str,
    search_dept: &'a str,
    sort_order: &'a str,
}

/// Renders a create or edit template with the submitted values and any
/// field-level errors.
fn render_employee_form(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    template: &str,
    form: &impl Serialize,
    errors: &[FieldError],
    storage_error: Option<&str>,
) -> HttpResponse {
    let mut context = base_context(flash_messages, "employees");
    context.insert("form", form);
    context.insert("errors", errors);
    context.insert("storage_error", &storage_error);
    render_template(tera, template, &context)
}

#[get("/")]
pub async fn index() -> impl Responder {
    redirect("/Employee")
}

#[get("/Employee")]
pub async fn show_employees(
    params: web::Query<ListQueryParams>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();
    let query = ListQuery {
        search_name: params.search_name,
        search_dept: params.search_dept,
        sort_order: params.sort_order,
        page: params.page,
    };

    match employee_service::list_employees(repo.get_ref(), query) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "employees");
            context.insert("employees", &data.employees);
            context.insert("search_name", &data.search_name.as_deref().unwrap_or(""));
            context.insert("search_dept", &data.search_dept.as_deref().unwrap_or(""));
            context.insert("sort_order", &data.sort_order);

            render_template(&tera, "employee/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list employees: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/Employee/Create")]
pub async fn new_employee(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_employee_form(
        &tera,
        &flash_messages,
        "employee/create.html",
        &AddEmployeeForm::default(),
        &[],
        None,
    )
}

#[post("/Employee/Create")]
pub async fn create_employee(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<AddEmployeeForm>,
) -> impl Responder {
    match employee_service::create_employee(repo.get_ref(), &form) {
        Ok(_) => {
            FlashMessage::success("Employee created.").send();
            redirect("/Employee")
        }
        Err(ServiceError::Validation(errors)) => render_employee_form(
            &tera,
            &flash_messages,
            "employee/create.html",
            &form,
            &errors,
            None,
        ),
        Err(err) => {
            log::error!("Failed to create employee: {err}");
            render_employee_form(
                &tera,
                &flash_messages,
                "employee/create.html",
                &form,
                &[],
                Some(TRY_AGAIN_MESSAGE),
            )
        }
    }
}

#[get("/Employee/Edit/{id}")]
pub async fn edit_employee(
    employee_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match employee_service::get_employee(repo.get_ref(), employee_id.into_inner()) {
        Ok(employee) => {
            let form = SaveEmployeeForm {
                id: employee.id,
                name: employee.name,
                department: employee.department,
                email: employee.email,
            };
            render_employee_form(&tera, &flash_messages, "employee/edit.html", &form, &[], None)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Employee not found.").send();
            redirect("/Employee")
        }
        Err(err) => {
            log::error!("Failed to load employee: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/Employee/Edit")]
pub async fn update_employee(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<SaveEmployeeForm>,
) -> impl Responder {
    match employee_service::update_employee(repo.get_ref(), &form) {
        Ok(_) => {
            FlashMessage::success("Employee updated.").send();
            redirect("/Employee")
        }
        Err(ServiceError::Validation(errors)) => render_employee_form(
            &tera,
            &flash_messages,
            "employee/edit.html",
            &form,
            &errors,
            None,
        ),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Employee not found.").send();
            redirect("/Employee")
        }
        Err(err) => {
            log::error!("Failed to update employee {}: {err}", form.id);
            render_employee_form(
                &tera,
                &flash_messages,
                "employee/edit.html",
                &form,
                &[],
                Some(TRY_AGAIN_MESSAGE),
            )
        }
    }
}

#[post("/Employee/Delete")]
pub async fn delete_employee(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DeleteEmployeeForm>,
) -> impl Responder {
    match employee_service::delete_employee(repo.get_ref(), form.id) {
        Ok(_) => {
            FlashMessage::success("Employee deleted.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Employee not found.").send();
        }
        Err(err) => {
            log::error!("Failed to delete employee {}: {err}", form.id);
            FlashMessage::error(TRY_AGAIN_MESSAGE).send();
        }
    }

    let context = ListContext {
        page: form.page,
        search_name: &form.search_name,
        search_dept: &form.search_dept,
        sort_order: &form.sort_order,
    };

    match serde_html_form::to_string(&context) {
        Ok(query_string) => redirect(&format!("/Employee?{query_string}")),
        Err(err) => {
            log::error!("Failed to encode list context: {err}");
            redirect("/Employee")
        }
    }
}

#[get("/Employee/ExportCsv")]
pub async fn export_employees_csv(repo: web::Data<DieselRepository>) -> impl Responder {
    match employee_service::export_csv(repo.get_ref()) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!(
                    "attachment; filename=\"{}\"",
                    employee_service::EXPORT_FILE_NAME
                ),
            ))
            .body(csv),
        Err(err) => {
            log::error!("Failed to export employees: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
