use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::watch;

use business::domain::cart::use_cases::add::AddToCartParams;
use business::domain::cart::use_cases::remove::RemoveFromCartParams;
use business::domain::cart::use_cases::update_quantity::UpdateCartQuantityParams;
use business::domain::navigation::{Route, navigate};
use business::domain::order::model::Order;
use business::domain::order::use_cases::checkout::CheckoutParams;
use business::domain::order::use_cases::update_delivery_status::{
    DeliveryAction, UpdateDeliveryStatusParams,
};
use business::domain::product::query::DEFAULT_MAX_PRICE;
use business::domain::product::use_cases::browse::BrowseProductsParams;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::value_objects::ProductCategory;
use business::domain::shared::value_objects::{OrderId, ProductId};
use business::domain::user::model::UserRole;
use business::domain::user::use_cases::login::LoginParams;
use business::domain::user::use_cases::register::RegisterParams;

use crate::commands::{Command, ShellCommand, tokenize};
use crate::setup::dependency_injection::DependencyContainer;
use crate::views::auth::AuthMode;
use crate::views::consumer::CatalogueView;
use crate::views::error_mapper::{IntoMessage, LOGIN_FAILED};
use crate::views::{auth, cart, consumer, delivery, farmer, landing, layout, short_id};

const PROMPT: &str = "go-farm> ";

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-oriented front end. Holds the current route and the state that
/// only lives as long as a screen is open.
pub struct Shell {
    container: DependencyContainer,
    route: Route,
    catalogue: CatalogueView,
    /// Order confirmed by the last checkout, shown on the cart screen.
    placed: Option<Order>,
    revisions: watch::Receiver<u64>,
}

impl Shell {
    /// A restored session starts on its role's home screen.
    pub async fn new(container: DependencyContainer) -> Self {
        let route = container
            .store
            .read(|state| state.session_user().map(|user| Route::home_for(user.role)))
            .await
            .unwrap_or(Route::Landing);
        let revisions = container.store.subscribe();

        Self {
            container,
            route,
            catalogue: CatalogueView::default(),
            placed: None,
            revisions,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub async fn run<R, W>(mut self, input: R, mut output: W) -> anyhow::Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!("Shell started on {}", self.route());
        let screen = self.render().await;
        output.write_all(format!("{screen}\n").as_bytes()).await?;

        let mut lines = BufReader::new(input).lines();
        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if self.handle_line(&line, &mut output).await? == Flow::Quit {
                break;
            }
        }

        output.write_all(b"Goodbye.\n").await?;
        output.flush().await?;
        Ok(())
    }

    /// Runs one input line and writes its notice plus the redrawn screen.
    pub async fn handle_line<W>(&mut self, line: &str, output: &mut W) -> anyhow::Result<Flow>
    where
        W: AsyncWrite + Unpin,
    {
        let tokens = match tokenize(line) {
            Ok(tokens) if tokens.is_empty() => return Ok(Flow::Continue),
            Ok(tokens) => tokens,
            Err(err) => {
                output
                    .write_all(format!("{}\n", layout::notice(&err.to_string())).as_bytes())
                    .await?;
                return Ok(Flow::Continue);
            }
        };

        let command = match ShellCommand::try_parse_from(&tokens) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                output
                    .write_all(format!("{}\n", err.render()).as_bytes())
                    .await?;
                return Ok(Flow::Continue);
            }
        };

        if command == Command::Quit {
            return Ok(Flow::Quit);
        }
        if matches!(command, Command::Checkout { .. }) {
            output
                .write_all(format!("{}\n", cart::PROCESSING).as_bytes())
                .await?;
            output.flush().await?;
        }

        let notice = self.execute(command).await;
        let screen = self.render().await;

        let mut text = String::new();
        if let Some(message) = notice {
            text.push_str(&layout::notice(&message));
            text.push('\n');
        }
        text.push_str(&screen);
        text.push('\n');
        output.write_all(text.as_bytes()).await?;
        Ok(Flow::Continue)
    }

    /// Applies a command and returns the message to show, if any.
    async fn execute(&mut self, command: Command) -> Option<String> {
        let c = &self.container;
        match command {
            Command::Goto { path } => {
                let session = c.store.read(|state| state.session.clone()).await;
                let target = navigate(&path, session.as_ref()).route();
                self.enter(target);
                None
            }
            Command::Login { email, role } => {
                match c.login.execute(LoginParams { email, role }).await {
                    Ok(user) => {
                        self.enter(Route::home_for(user.role));
                        Some(format!("Welcome back, {}!", user.name))
                    }
                    Err(_) => Some(LOGIN_FAILED.to_string()),
                }
            }
            Command::Register { name, email, role } => {
                match c.register.execute(RegisterParams { name, email, role }).await {
                    Ok(user) => {
                        self.enter(Route::home_for(user.role));
                        Some(format!("Welcome to GO FARM, {}!", user.name))
                    }
                    Err(err) => Some(err.into_message()),
                }
            }
            Command::Logout => match c.logout.execute().await {
                Ok(()) => {
                    self.enter(Route::Landing);
                    None
                }
                Err(err) => Some(err.into_message()),
            },
            Command::AddProduct {
                name,
                price,
                quantity,
                category,
                description,
                image_url,
                pre_order,
                available_date,
            } => {
                let params = CreateProductParams {
                    name,
                    price,
                    quantity,
                    description,
                    image_url,
                    category,
                    is_pre_order: pre_order,
                    available_date,
                };
                Some(match c.create_product.execute(params).await {
                    Ok(product) => format!("Listed {} [{}].", product.name, product.id),
                    Err(err) => err.into_message(),
                })
            }
            Command::Search { words } => {
                self.catalogue.filter.search = words.join(" ");
                None
            }
            Command::Category { name } => {
                if name.eq_ignore_ascii_case("all") {
                    self.catalogue.filter.category = None;
                    return None;
                }
                match name.parse::<ProductCategory>() {
                    Ok(category) => {
                        self.catalogue.filter.category = Some(category);
                        None
                    }
                    Err(_) => Some(format!("Unknown category: {name}")),
                }
            }
            Command::MaxPrice { value } => {
                if !value.is_finite() || value < 0.0 {
                    return Some("Max price must be zero or more.".to_string());
                }
                self.catalogue.filter.max_price = value.min(DEFAULT_MAX_PRICE);
                None
            }
            Command::Sort { order } => {
                self.catalogue.sort = order;
                None
            }
            Command::ClearFilters => {
                self.catalogue.clear_filters();
                None
            }
            Command::Show { product_id } => match self.resolve_product(&product_id).await {
                Some(id) => {
                    self.catalogue.selected = Some(id);
                    None
                }
                None => Some("Product not found.".to_string()),
            },
            Command::Close => {
                self.catalogue.selected = None;
                None
            }
            Command::Add {
                product_id,
                quantity,
            } => {
                if let Some(message) = self.require_role(UserRole::Consumer).await {
                    return Some(message);
                }
                let id = match product_id {
                    Some(token) => self.resolve_product(&token).await,
                    None => self.catalogue.selected.clone(),
                };
                let Some(product_id) = id else {
                    return Some("Pick a product first: show <id>".to_string());
                };
                let c = &self.container;
                match c
                    .add_to_cart
                    .execute(AddToCartParams {
                        product_id,
                        quantity,
                    })
                    .await
                {
                    Ok(line) => {
                        self.catalogue.selected = None;
                        Some(format!(
                            "Added {} ({} in cart).",
                            line.product.name, line.cart_quantity
                        ))
                    }
                    Err(err) => Some(err.into_message()),
                }
            }
            Command::Qty {
                product_id,
                quantity,
            } => {
                if let Some(message) = self.require_role(UserRole::Consumer).await {
                    return Some(message);
                }
                let Some(product_id) = self.resolve_product(&product_id).await else {
                    return Some("Product not found.".to_string());
                };
                self.container
                    .update_cart_quantity
                    .execute(UpdateCartQuantityParams {
                        product_id,
                        quantity,
                    })
                    .await
                    .err()
                    .map(IntoMessage::into_message)
            }
            Command::Remove { product_id } => {
                if let Some(message) = self.require_role(UserRole::Consumer).await {
                    return Some(message);
                }
                let Some(product_id) = self.resolve_product(&product_id).await else {
                    return Some("Product not found.".to_string());
                };
                let params = RemoveFromCartParams { product_id };
                match self.container.remove_from_cart.execute(params).await {
                    Ok(true) => None,
                    Ok(false) => Some("That product is not in your cart.".to_string()),
                    Err(err) => Some(err.into_message()),
                }
            }
            Command::ClearCart => {
                if let Some(message) = self.require_role(UserRole::Consumer).await {
                    return Some(message);
                }
                self.container
                    .clear_cart
                    .execute()
                    .await
                    .err()
                    .map(IntoMessage::into_message)
            }
            Command::Checkout { address } => {
                if let Some(message) = self.require_role(UserRole::Consumer).await {
                    return Some(message);
                }
                let params = CheckoutParams {
                    delivery_address: address.join(" "),
                };
                match self.container.checkout.execute(params).await {
                    Ok(order) => {
                        self.enter(Route::ConsumerCart);
                        self.placed = Some(order);
                        None
                    }
                    Err(err) => Some(err.into_message()),
                }
            }
            Command::Accept {
                order_id,
                distance_km,
            } => {
                self.update_delivery(&order_id, DeliveryAction::Accept { distance_km })
                    .await
            }
            Command::Deliver { order_id } => {
                self.update_delivery(&order_id, DeliveryAction::Deliver)
                    .await
            }
            Command::Cancel { order_id } => {
                self.update_delivery(&order_id, DeliveryAction::Cancel)
                    .await
            }
            Command::Refresh | Command::Quit => None,
        }
    }

    async fn update_delivery(&self, token: &str, action: DeliveryAction) -> Option<String> {
        let Some(order_id) = self.resolve_order(token).await else {
            return Some("Order not found.".to_string());
        };
        let params = UpdateDeliveryStatusParams { order_id, action };
        match self.container.update_delivery_status.execute(params).await {
            Ok(order) => Some(format!(
                "Order #{} is now {}.",
                short_id(order.id.as_str()),
                order.status
            )),
            Err(err) => Some(err.into_message()),
        }
    }

    async fn require_role(&self, role: UserRole) -> Option<String> {
        let allowed = self
            .container
            .store
            .read(|state| state.session_user().is_some_and(|user| user.has_role(role)))
            .await;
        (!allowed).then(|| format!("Log in as a {} to do that.", role.label().to_lowercase()))
    }

    async fn resolve_product(&self, token: &str) -> Option<ProductId> {
        self.container
            .store
            .read(|state| resolve(state.products.iter().map(|p| p.id.as_str()), token))
            .await
            .map(ProductId::new)
    }

    async fn resolve_order(&self, token: &str) -> Option<OrderId> {
        self.container
            .store
            .read(|state| resolve(state.orders.iter().map(|o| o.id.as_str()), token))
            .await
            .map(OrderId::new)
    }

    /// Moves to `route`. Screen-local state is dropped whenever the screen
    /// changes.
    fn enter(&mut self, route: Route) {
        if route != self.route {
            self.catalogue = CatalogueView::default();
            self.placed = None;
            self.route = route;
        }
    }

    async fn render(&mut self) -> String {
        let revision = *self.revisions.borrow_and_update();
        let state = self.container.store.get().await;
        tracing::debug!("Rendering {} at revision {}", self.route, revision);

        let session = state.session_user();
        self.enter(navigate(self.route.path(), session).route());

        let body = match (self.route, session) {
            (Route::FarmerHome, Some(user)) => farmer::render(user, &state),
            (Route::ConsumerHome, Some(_)) => {
                let products = self
                    .container
                    .browse_products
                    .execute(BrowseProductsParams {
                        filter: self.catalogue.filter.clone(),
                        sort: self.catalogue.sort,
                    })
                    .await
                    .unwrap_or_else(|err| {
                        tracing::warn!("Browse failed: {}", err);
                        Vec::new()
                    });
                let selected = self
                    .catalogue
                    .selected
                    .as_ref()
                    .and_then(|id| state.product(id));
                consumer::render(&self.catalogue, &products, selected)
            }
            (Route::ConsumerCart, Some(user)) => cart::render(user, &state, self.placed.as_ref()),
            (Route::DeliveryHome, Some(user)) => delivery::render(user, &state.orders),
            (route, _) => match AuthMode::for_route(route) {
                Some(mode) => auth::render(mode),
                None => landing::render(),
            },
        };

        [layout::header(session, &state.cart), body, layout::footer()].join("\n\n")
    }
}

/// Exact id, or a suffix shared by exactly one id (`#a1b2` style labels).
fn resolve<'a>(ids: impl Iterator<Item = &'a str>, token: &str) -> Option<String> {
    let token = token.trim().trim_start_matches('#');
    if token.is_empty() {
        return None;
    }

    let mut matches = Vec::new();
    for id in ids {
        if id == token {
            return Some(id.to_string());
        }
        if id.ends_with(token) {
            matches.push(id);
        }
    }
    match matches.as_slice() {
        [only] => Some(only.to_string()),
        _ => None,
    }
}
