use crate::domain::user::model::{User, UserRole};

/// Every view the marketplace can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Register,
    FarmerHome,
    ConsumerHome,
    ConsumerCart,
    DeliveryHome,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Landing,
        Route::Login,
        Route::Register,
        Route::FarmerHome,
        Route::ConsumerHome,
        Route::ConsumerCart,
        Route::DeliveryHome,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::FarmerHome => "/farmer",
            Route::ConsumerHome => "/consumer",
            Route::ConsumerCart => "/consumer/cart",
            Route::DeliveryHome => "/delivery",
        }
    }

    /// Accepts `/farmer`, `farmer`, `/farmer/` and hash paths like `#/farmer`.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim();
        let path = path.strip_prefix('#').unwrap_or(path);
        let path = path.trim_matches('/');
        Route::ALL
            .into_iter()
            .find(|route| route.path().trim_start_matches('/') == path)
    }

    /// Roles allowed to see this route, `None` for public routes.
    pub fn allowed_roles(&self) -> Option<&'static [UserRole]> {
        match self {
            Route::Landing | Route::Login | Route::Register => None,
            Route::FarmerHome => Some(&[UserRole::Farmer]),
            Route::ConsumerHome | Route::ConsumerCart => Some(&[UserRole::Consumer]),
            Route::DeliveryHome => Some(&[UserRole::Delivery]),
        }
    }

    pub fn home_for(role: UserRole) -> Route {
        match role {
            UserRole::Farmer => Route::FarmerHome,
            UserRole::Consumer => Route::ConsumerHome,
            UserRole::Delivery => Route::DeliveryHome,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

impl Navigation {
    /// The route that ends up on screen.
    pub fn route(&self) -> Route {
        match self {
            Navigation::Render(route) | Navigation::Redirect(route) => *route,
        }
    }
}

/// Decides whether `path` may be shown to `session`.
pub fn navigate(path: &str, session: Option<&User>) -> Navigation {
    let Some(route) = Route::parse(path) else {
        return Navigation::Redirect(Route::Landing);
    };

    match (route.allowed_roles(), session) {
        (None, _) => Navigation::Render(route),
        (Some(_), None) => Navigation::Redirect(Route::Login),
        (Some(roles), Some(user)) if roles.contains(&user.role) => Navigation::Render(route),
        (Some(_), Some(user)) => Navigation::Redirect(Route::home_for(user.role)),
    }
}
