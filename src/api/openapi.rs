//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, farms, health, reports};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ganaderia API",
        version = "0.3.0",
        description = "Livestock Farm Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Ganaderia Team", email = "contact@ganaderia.app")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Farms
        farms::list_farms,
        farms::get_farm,
        farms::list_farm_herds,
        farms::list_farm_animals,
        farms::list_farm_personnel,
        // Reports
        reports::get_farm_statistics,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            // Farms
            crate::models::farm::Farm,
            crate::models::farm::FarmQuery,
            crate::models::herd::Herd,
            crate::models::animal::Animal,
            crate::models::animal::AnimalQuery,
            crate::models::personnel::PersonnelAssignment,
            crate::models::owner::Owner,
            crate::models::enums::Sex,
            // Reports
            reports::FarmStatisticsQuery,
            reports::FarmStatisticsResponse,
            reports::FarmStatistics,
            reports::StatsSummary,
            reports::FarmStatsDetail,
            reports::HerdStatsDetail,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "farms", description = "Farm browsing"),
        (name = "reports", description = "Consolidated statistics reports")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
