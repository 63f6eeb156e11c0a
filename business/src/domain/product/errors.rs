use crate::domain::errors::RepositoryError;

/// Field-level failures produced by the product validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("product.name_required")]
    NameRequired,
    #[error("product.name_not_text")]
    NameNotText,
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.quantity_not_numeric")]
    QuantityNotNumeric,
    #[error("product.quantity_negative")]
    QuantityNegative,
    #[error("product.quantity_not_integer")]
    QuantityNotInteger,
    #[error("product.quantity_out_of_range")]
    QuantityOutOfRange,
    #[error("product.price_not_numeric")]
    PriceNotNumeric,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.image_not_text")]
    ImageNotText,
}

impl ValidationError {
    /// Name of the payload field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NameRequired
            | ValidationError::NameNotText
            | ValidationError::NameEmpty => "name",
            ValidationError::QuantityNotNumeric
            | ValidationError::QuantityNegative
            | ValidationError::QuantityNotInteger
            | ValidationError::QuantityOutOfRange => "quantity",
            ValidationError::PriceNotNumeric | ValidationError::PriceNegative => "price",
            ValidationError::ImageNotText => "image",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ProductError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
