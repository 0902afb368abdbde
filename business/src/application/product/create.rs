use std::sync::Arc;

use async_trait::async_trait;

use crate::application::store::MarketStore;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub store: Arc<MarketStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let props = NewProductProps {
            name: params.name,
            price: params.price,
            quantity: params.quantity,
            description: params.description,
            image_url: params.image_url,
            category: params.category,
            is_pre_order: params.is_pre_order,
            available_date: params.available_date,
        };
        let product = self
            .store
            .mutate(move |state| state.add_product(props))
            .await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::ProductCategory;
    use crate::domain::user::model::UserRole;
    use crate::test_support::{quiet_logger, seeded_state, state_with_session, store, user};
    use chrono::NaiveDate;

    fn params(name: &str) -> CreateProductParams {
        CreateProductParams {
            name: name.to_string(),
            price: 60.0,
            quantity: 40,
            description: "Crisp and green".to_string(),
            image_url: String::new(),
            category: ProductCategory::Vegetables,
            is_pre_order: false,
            available_date: None,
        }
    }

    #[tokio::test]
    async fn should_create_product_for_signed_in_farmer() {
        let store = store(state_with_session(user("f3", "Hill Farm", UserRole::Farmer)));
        let use_case = CreateProductUseCaseImpl {
            store: store.clone(),
            logger: quiet_logger(),
        };

        let product = use_case.execute(params("Spinach")).await.unwrap();

        assert_eq!(product.farmer_name, "Hill Farm");
        assert_eq!(product.rating, Some(0.0));
        assert!(product.reviews.is_empty());
        assert_eq!(store.get().await.products.len(), 4);
    }

    #[tokio::test]
    async fn should_reject_product_when_name_is_empty() {
        let store = store(state_with_session(user("f3", "Hill Farm", UserRole::Farmer)));
        let use_case = CreateProductUseCaseImpl {
            store: store.clone(),
            logger: quiet_logger(),
        };

        let result = use_case.execute(params("  ")).await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
        assert_eq!(store.get().await.products.len(), 3);
    }

    #[tokio::test]
    async fn should_reject_pre_order_without_date() {
        let use_case = CreateProductUseCaseImpl {
            store: store(state_with_session(user("f3", "Hill Farm", UserRole::Farmer))),
            logger: quiet_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                is_pre_order: true,
                ..params("Mangoes")
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::PreOrderDateMissing));
    }

    #[tokio::test]
    async fn should_keep_date_for_pre_order() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let use_case = CreateProductUseCaseImpl {
            store: store(state_with_session(user("f3", "Hill Farm", UserRole::Farmer))),
            logger: quiet_logger(),
        };

        let product = use_case
            .execute(CreateProductParams {
                is_pre_order: true,
                available_date: Some(date),
                ..params("Mangoes")
            })
            .await
            .unwrap();

        assert_eq!(product.available_date, Some(date));
    }

    #[tokio::test]
    async fn should_reject_non_farmer() {
        let use_case = CreateProductUseCaseImpl {
            store: store(seeded_state()),
            logger: quiet_logger(),
        };

        let result = use_case.execute(params("Spinach")).await;

        assert!(matches!(result.unwrap_err(), ProductError::FarmerOnly));
    }
}
