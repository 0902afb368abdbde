use std::sync::Arc;

use async_trait::async_trait;

use crate::application::store::MarketStore;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::query::browse;
use crate::domain::product::use_cases::browse::{BrowseProductsParams, BrowseProductsUseCase};

pub struct BrowseProductsUseCaseImpl {
    pub store: Arc<MarketStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BrowseProductsUseCase for BrowseProductsUseCaseImpl {
    async fn execute(&self, params: BrowseProductsParams) -> Result<Vec<Product>, ProductError> {
        let products = self
            .store
            .read(|state| browse(&state.products, &params.filter, params.sort))
            .await;

        self.logger.debug(&format!(
            "Browse matched {} products (sort: {})",
            products.len(),
            params.sort
        ));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::query::{ProductFilter, ProductSort};
    use crate::domain::product::value_objects::ProductCategory;
    use crate::test_support::{quiet_logger, seeded_state, store};

    fn use_case() -> BrowseProductsUseCaseImpl {
        BrowseProductsUseCaseImpl {
            store: store(seeded_state()),
            logger: quiet_logger(),
        }
    }

    #[tokio::test]
    async fn should_list_everything_by_default() {
        let products = use_case()
            .execute(BrowseProductsParams {
                filter: ProductFilter::default(),
                sort: ProductSort::default(),
            })
            .await
            .unwrap();

        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Organic Tomatoes", "Fresh Potatoes", "Sweet Strawberries"]
        );
    }

    #[tokio::test]
    async fn should_apply_filter_and_sort() {
        let products = use_case()
            .execute(BrowseProductsParams {
                filter: ProductFilter {
                    category: Some(ProductCategory::Vegetables),
                    ..ProductFilter::default()
                },
                sort: ProductSort::PriceLowToHigh,
            })
            .await
            .unwrap();

        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Fresh Potatoes", "Organic Tomatoes"]);
    }
}
