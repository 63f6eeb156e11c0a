use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// A malformed id cannot name a live record, so it reads as "not found".
fn parse_id(id: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(id).map_err(|_| ProductError::NotFound.into_error_response().1)
}

/// Product management API
///
/// Endpoints for creating, reading, updating, and deleting products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Validates the payload, assigns an id and timestamps, and stores the product.
    /// `quantity` and `price` default to 0 when omitted.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            fields: body.0.into(),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    ///
    /// Returns every stored product ordered by creation time.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    ///
    /// Returns a single product by its unique identifier.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let uuid = match parse_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return GetProductByIdResponse::NotFound(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Applies a partial update: only the fields present in the body change.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let uuid = match parse_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return UpdateProductResponse::NotFound(json),
        };

        let params = UpdateProductParams {
            id: uuid,
            fields: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Permanently removes a product and returns it as it was before removal.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let uuid = match parse_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return DeleteProductResponse::NotFound(json),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(product) => DeleteProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
