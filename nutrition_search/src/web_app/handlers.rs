// web_app/handlers.rs - actix-web handlers for the catalog API
//
// Handlers are bridges, not business logic: parse the transport
// parameters, call into api::queries, serialize the result. Errors
// render through `AppError`'s ResponseError impl.

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::web_app::api::params::{parse_path_id, ListParams, SearchParams};
use crate::web_app::api::queries;
use crate::web_app::api::repository::ProductRepository;
use crate::web_app::error::AppError;

/// Repository handle shared across workers
pub type SharedRepository = web::Data<dyn ProductRepository>;

type HandlerResult = Result<HttpResponse, AppError>;

/// Register every route; used by the server binary and by tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Undecodable query strings (repeated keys, ...) get the same JSON error body
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::invalid("query", err.to_string()).into()
    }));

    cfg.route("/health", web::get().to(health)).service(
        web::scope("/api")
            .route("/categories", web::get().to(list_categories))
            .route("/categories/{id}", web::get().to(get_category))
            .route("/franchises", web::get().to(list_franchises))
            .route("/franchises/{id}", web::get().to(get_franchise))
            .route("/allergens", web::get().to(list_allergens))
            .route("/allergens/{id}", web::get().to(get_allergen))
            .route("/products", web::get().to(list_products))
            .route("/products/{id}", web::get().to(get_product))
            .route("/search", web::get().to(search)),
    );
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// `GET /api/search`
///
/// A malformed id or range rejects the request before the repository is
/// touched.
async fn search(repo: SharedRepository, params: web::Query<SearchParams>) -> HandlerResult {
    let query = params.parse()?;
    let products = queries::search_products(repo.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(products))
}

/// `GET /api/products`
///
/// Takes the same parameters as search. With only ids set it is a plain
/// listing; any text or range turns it into a search.
async fn list_products(repo: SharedRepository, params: web::Query<SearchParams>) -> HandlerResult {
    let query = params.parse()?;
    let products = if query.is_categorical() {
        queries::list_products(repo.get_ref(), &query).await?
    } else {
        queries::search_products(repo.get_ref(), &query).await?
    };
    Ok(HttpResponse::Ok().json(products))
}

async fn get_product(repo: SharedRepository, id: web::Path<String>) -> HandlerResult {
    let id = parse_path_id("productId", &id)?;
    let detail = queries::get_product_detail(repo.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(detail))
}

async fn list_categories(repo: SharedRepository) -> HandlerResult {
    Ok(HttpResponse::Ok().json(queries::list_categories(repo.get_ref()).await?))
}

async fn get_category(repo: SharedRepository, id: web::Path<String>) -> HandlerResult {
    let id = parse_path_id("categoryId", &id)?;
    Ok(HttpResponse::Ok().json(queries::get_category(repo.get_ref(), id).await?))
}

async fn list_franchises(repo: SharedRepository, params: web::Query<ListParams>) -> HandlerResult {
    let category_id = params.parse()?.category_id;
    Ok(HttpResponse::Ok().json(queries::list_franchises(repo.get_ref(), category_id).await?))
}

async fn get_franchise(repo: SharedRepository, id: web::Path<String>) -> HandlerResult {
    let id = parse_path_id("franchiseId", &id)?;
    Ok(HttpResponse::Ok().json(queries::get_franchise(repo.get_ref(), id).await?))
}

async fn list_allergens(repo: SharedRepository) -> HandlerResult {
    Ok(HttpResponse::Ok().json(queries::list_allergens(repo.get_ref()).await?))
}

async fn get_allergen(repo: SharedRepository, id: web::Path<String>) -> HandlerResult {
    let id = parse_path_id("allergenId", &id)?;
    Ok(HttpResponse::Ok().json(queries::get_allergen(repo.get_ref(), id).await?))
}
