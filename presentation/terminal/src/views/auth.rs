use business::domain::navigation::Route;
use business::domain::user::model::UserRole;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn for_route(route: Route) -> Option<AuthMode> {
        match route {
            Route::Login => Some(AuthMode::Login),
            Route::Register => Some(AuthMode::Register),
            _ => None,
        }
    }
}

pub fn render(mode: AuthMode) -> String {
    let roles = UserRole::iter()
        .map(|role| format!("{} ({})", role.label(), role.to_string().to_lowercase()))
        .collect::<Vec<_>>()
        .join(" | ");

    let mut lines = vec![
        match mode {
            AuthMode::Login => "Welcome Back",
            AuthMode::Register => "Join Go Farm",
        }
        .to_string(),
        "Select your role to continue".to_string(),
        format!("  Roles: {roles}"),
        String::new(),
    ];

    match mode {
        AuthMode::Login => {
            lines.push("  login <email> --role <role>".to_string());
            lines.push(String::new());
            lines.push("Don't have an account? Sign up: goto /register".to_string());
        }
        AuthMode::Register => {
            lines.push("  register \"<full name>\" <email> --role <role>".to_string());
            lines.push(String::new());
            lines.push("Already have an account? Sign in: goto /login".to_string());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_title_each_mode() {
        assert!(render(AuthMode::Login).starts_with("Welcome Back"));
        assert!(render(AuthMode::Register).starts_with("Join Go Farm"));
    }

    #[test]
    fn should_list_every_role() {
        let screen = render(AuthMode::Login);

        assert!(screen.contains("Consumer (consumer)"));
        assert!(screen.contains("Farmer (farmer)"));
        assert!(screen.contains("Delivery (delivery)"));
    }
}
