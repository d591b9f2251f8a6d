use askama::Template;
use axum::response::{Html, IntoResponse};
use strum::VariantArray;

use crate::contact::{ContactSubmission, FormErrors, ServiceKind};
use crate::error::AppError;
use crate::site::{
    self, BusinessHours, ContactChannel, NavItem, Project, ProjectCategory, Service, Stat,
    TechGroup,
};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    structured_data: String,
    nav: Vec<NavItem>,
    services: Vec<Service>,
    stats: Vec<Stat>,
    categories: Vec<String>,
    active: String,
    projects: Vec<Project>,
    tech_groups: Vec<TechGroup>,
    channels: Vec<ContactChannel>,
    hours: Vec<BusinessHours>,
    service_options: Vec<String>,
    values: ContactSubmission,
    errors: FormErrors,
}

/// GET / - The whole site is this one page.
pub async fn page() -> Result<impl IntoResponse, AppError> {
    let template = IndexTemplate {
        structured_data: site::structured_data().to_string(),
        nav: site::nav_items(),
        services: site::services(),
        stats: site::about_stats(),
        categories: ProjectCategory::VARIANTS
            .iter()
            .map(|c| c.to_string())
            .collect(),
        active: ProjectCategory::All.to_string(),
        projects: site::projects(),
        tech_groups: site::tech_stack(),
        channels: site::contact_channels(),
        hours: site::business_hours(),
        service_options: ServiceKind::VARIANTS.iter().map(|s| s.to_string()).collect(),
        values: ContactSubmission::default(),
        errors: FormErrors::default(),
    };

    Ok(Html(template.render()?))
}
