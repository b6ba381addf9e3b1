use actix_web::web;

pub mod oncall;

pub fn config(cfg: &mut web::ServiceConfig) {
    // Lookup routes (public)
    cfg.service(oncall::get_on_call);
}
