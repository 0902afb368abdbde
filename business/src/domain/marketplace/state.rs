use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::DeliveryUpdate;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::shared::value_objects::{OrderId, ProductId};
use crate::domain::snapshot::repository::SnapshotKey;
use crate::domain::user::errors::AuthError;
use crate::domain::user::model::{NewUserProps, User, UserRole};

/// Everything one session of the marketplace knows about.
///
/// Every operation either succeeds and reports the snapshots it touched,
/// or fails and leaves the state exactly as it was.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketState {
    pub session: Option<User>,
    pub users: Vec<User>,
    pub products: Vec<Product>,
    /// Most recent first.
    pub orders: Vec<Order>,
    pub cart: Cart,
}

/// Outcome of a state operation plus the collections that need rewriting.
#[derive(Debug)]
pub struct Mutation<T> {
    pub value: T,
    pub touched: Vec<SnapshotKey>,
}

impl<T> Mutation<T> {
    pub fn new(value: T, touched: &[SnapshotKey]) -> Self {
        Self {
            value,
            touched: touched.to_vec(),
        }
    }

    pub fn untouched(value: T) -> Self {
        Self {
            value,
            touched: Vec::new(),
        }
    }
}

impl MarketState {
    pub fn session_user(&self) -> Option<&User> {
        self.session.as_ref()
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Serialized snapshot of one collection.
    pub fn encode(&self, key: SnapshotKey) -> Result<String, serde_json::Error> {
        match key {
            SnapshotKey::Session => serde_json::to_string(&self.session),
            SnapshotKey::Users => serde_json::to_string(&self.users),
            SnapshotKey::Products => serde_json::to_string(&self.products),
            SnapshotKey::Orders => serde_json::to_string(&self.orders),
            SnapshotKey::Cart => serde_json::to_string(&self.cart),
        }
    }

    /// Matches on email and role only. There is no password.
    pub fn login(&mut self, email: &str, role: UserRole) -> Result<Mutation<User>, AuthError> {
        let email = email.trim();
        let user = self
            .users
            .iter()
            .find(|u| u.email == email && u.role == role)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;

        self.session = Some(user.clone());
        Ok(Mutation::new(user, &[SnapshotKey::Session]))
    }

    /// Emails are unique across all roles.
    pub fn register(&mut self, props: NewUserProps) -> Result<Mutation<User>, AuthError> {
        let user = User::new(props)?;
        if self.users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }

        self.users.push(user.clone());
        self.session = Some(user.clone());
        Ok(Mutation::new(
            user,
            &[SnapshotKey::Users, SnapshotKey::Session],
        ))
    }

    pub fn logout(&mut self) -> Mutation<()> {
        self.session = None;
        self.cart.clear();
        Mutation::new((), &[SnapshotKey::Session, SnapshotKey::Cart])
    }

    pub fn add_product(&mut self, props: NewProductProps) -> Result<Mutation<Product>, ProductError> {
        let farmer = self
            .session
            .as_ref()
            .filter(|u| u.has_role(UserRole::Farmer))
            .ok_or(ProductError::FarmerOnly)?;

        let product = Product::new(farmer, props)?;
        self.products.push(product.clone());
        Ok(Mutation::new(product, &[SnapshotKey::Products]))
    }

    /// Adds `quantity` units of a product, never beyond its current stock.
    pub fn add_to_cart(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Mutation<CartItem>, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let product = self
            .product(product_id)
            .cloned()
            .ok_or(CartError::ProductNotFound)?;
        if !product.in_stock() {
            return Err(CartError::OutOfStock);
        }

        let already = self.cart.get(product_id).map_or(0, |i| i.cart_quantity);
        let requested = already.saturating_add(quantity);
        if requested > product.quantity {
            return Err(CartError::ExceedsStock {
                requested,
                available: product.quantity,
            });
        }

        self.cart.add(&product, quantity);
        let line = self
            .cart
            .get(product_id)
            .cloned()
            .ok_or(CartError::ProductNotFound)?;
        Ok(Mutation::new(line, &[SnapshotKey::Cart]))
    }

    /// Sets a line's quantity, floored at 1. Absent lines are ignored.
    /// Increases are checked against current stock; decreases always pass.
    pub fn update_cart_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<Mutation<()>, CartError> {
        let Some(line) = self.cart.get(product_id) else {
            return Ok(Mutation::untouched(()));
        };

        let target = quantity.max(1);
        if target > i64::from(line.cart_quantity) {
            let available = self
                .product(product_id)
                .map_or(line.product.quantity, |p| p.quantity);
            if target > i64::from(available) {
                return Err(CartError::ExceedsStock {
                    requested: u32::try_from(target).unwrap_or(u32::MAX),
                    available,
                });
            }
        }

        self.cart.set_quantity(product_id, target);
        Ok(Mutation::new((), &[SnapshotKey::Cart]))
    }

    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> Mutation<bool> {
        if self.cart.remove(product_id) {
            Mutation::new(true, &[SnapshotKey::Cart])
        } else {
            Mutation::untouched(false)
        }
    }

    pub fn clear_cart(&mut self) -> Mutation<()> {
        self.cart.clear();
        Mutation::new((), &[SnapshotKey::Cart])
    }

    /// What checkout would charge right now, without changing anything.
    pub fn checkout_total(&self, address: &str) -> Result<f64, OrderError> {
        let consumer = self.session.as_ref().ok_or(OrderError::NotAuthenticated)?;
        Order::from_cart(consumer, &self.cart, address).map(|order| order.total_amount)
    }

    /// Turns the cart into a pending order, empties the cart and takes the
    /// purchased units out of stock (floored at zero).
    pub fn place_order(&mut self, address: &str) -> Result<Mutation<Order>, OrderError> {
        let consumer = self.session.as_ref().ok_or(OrderError::NotAuthenticated)?;
        let order = Order::from_cart(consumer, &self.cart, address)?;

        for item in self.cart.items() {
            if let Some(product) = self.products.iter_mut().find(|p| &p.id == item.product_id()) {
                product.quantity = product.quantity.saturating_sub(item.cart_quantity);
            }
        }

        self.orders.insert(0, order.clone());
        self.cart.clear();
        Ok(Mutation::new(
            order,
            &[SnapshotKey::Orders, SnapshotKey::Cart, SnapshotKey::Products],
        ))
    }

    pub fn update_delivery_status(
        &mut self,
        order_id: &OrderId,
        update: DeliveryUpdate,
    ) -> Result<Mutation<Order>, OrderError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == order_id)
            .ok_or(OrderError::NotFound)?;

        order.apply(update)?;
        Ok(Mutation::new(order.clone(), &[SnapshotKey::Orders]))
    }
}
