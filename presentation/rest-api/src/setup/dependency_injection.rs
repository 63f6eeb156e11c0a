use std::sync::Arc;

use logger::TracingLogger;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    /// Wires every use case against a single shared repository.
    pub fn new(product_repository: Arc<dyn ProductRepository>, store: &'static str) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(store);

        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );

        Self {
            health_api,
            product_api,
        }
    }
}
