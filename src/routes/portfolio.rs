use askama::Template;
use axum::{
    extract::Query,
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use strum::VariantArray;

use crate::error::AppError;
use crate::site::{self, Project, ProjectCategory};

#[derive(Template)]
#[template(path = "partials/portfolio-grid.html")]
pub struct PortfolioGridTemplate {
    pub categories: Vec<String>,
    pub active: String,
    pub projects: Vec<Project>,
}

#[derive(Deserialize)]
pub struct FilterParams {
    pub category: Option<String>,
}

/// GET /portfolio?category=… - Filtered portfolio grid fragment.
pub async fn grid(Query(params): Query<FilterParams>) -> Result<impl IntoResponse, AppError> {
    let category = ProjectCategory::parse_or_all(params.category.as_deref());

    let template = PortfolioGridTemplate {
        categories: ProjectCategory::VARIANTS
            .iter()
            .map(|c| c.to_string())
            .collect(),
        active: category.to_string(),
        projects: site::projects_in(category),
    };

    Ok(Html(template.render()?))
}
