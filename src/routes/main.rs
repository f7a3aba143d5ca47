use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;

use crate::forms::customer::AddCustomerForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::customer as customer_service;

#[get("/")]
pub async fn show_index(
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let mut context = base_context(&flash_messages);
    context.insert("current_page", "index");

    render_template(&tera, "main/index.html", &context)
}

#[post("/customer/add")]
pub async fn add_customer(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddCustomerForm>,
) -> impl Responder {
    match customer_service::add_customer(repo.get_ref(), form) {
        Ok(()) => {
            FlashMessage::success("Customer added.").send();
        }
        Err(ServiceError::Validation(message)) => {
            FlashMessage::error(format!("Invalid customer: {message}")).send();
        }
        Err(e) => {
            error!("Failed to add a customer: {e}");
            FlashMessage::error("Failed to add the customer.").send();
        }
    }

    redirect("/")
}

#[post("/customer/{customer_id}/delete")]
pub async fn delete_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customer_service::delete_customer(repo.get_ref(), customer_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Customer deleted.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Customer not found.").send();
        }
        Err(e) => {
            error!("Failed to delete the customer: {e}");
            FlashMessage::error("Failed to delete the customer.").send();
        }
    }

    redirect("/")
}
