//! Welcome page.

use askama::Template;
use askama_web::WebTemplate;

/// Welcome page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate;

/// Display the welcome page.
pub async fn home() -> HomeTemplate {
    HomeTemplate
}
