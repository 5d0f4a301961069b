use crate::error::Result;
use crate::models::{Session, UserType};
use crate::store::Store;
use crate::views::{bills_ui, login_ui, new_bill_ui};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Bills,
    NewBill,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
        }
    }

    /// Accepts paths with or without the leading `#`.
    pub fn from_path(path: &str) -> Option<Route> {
        match path.trim().trim_start_matches('#') {
            "" | "/" => Some(Route::Login),
            "employee/bills" => Some(Route::Bills),
            "employee/bill/new" => Some(Route::NewBill),
            _ => None,
        }
    }
}

/// Where handlers send the user once they are done.
pub trait Navigator {
    fn navigate(&mut self, route: Route) -> Result<()>;
}

/// Renders the view for a path into its root node.
pub struct Router<'a> {
    store: &'a dyn Store,
    session: Option<Session>,
    root: String,
    current: Option<Route>,
}

impl<'a> Router<'a> {
    pub fn new(store: &'a dyn Store, session: Option<Session>) -> Self {
        Self {
            store,
            session,
            root: String::new(),
            current: None,
        }
    }

    /// Render `path`. Unknown paths and anything without an employee
    /// session land on the login page. Returns the route rendered.
    pub fn on_navigate(&mut self, path: &str) -> Result<Route> {
        let requested = Route::from_path(path).unwrap_or_else(|| {
            tracing::debug!(%path, "unknown path, falling back to login");
            Route::Login
        });
        let route = match &self.session {
            Some(s) if s.user_type == UserType::Employee => requested,
            _ => Route::Login,
        };
        self.root = self.render(route)?;
        self.current = Some(route);
        tracing::debug!(path = route.path(), "navigated");
        Ok(route)
    }

    fn render(&self, route: Route) -> Result<String> {
        match (route, &self.session) {
            (Route::Bills, Some(session)) => {
                let bills = self.store.list_bills(&session.email)?;
                Ok(bills_ui(&bills))
            }
            (Route::NewBill, Some(_)) => Ok(new_bill_ui()),
            _ => Ok(login_ui()),
        }
    }

    /// Markup currently mounted in the root node.
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn current_route(&self) -> Option<Route> {
        self.current
    }
}

impl Navigator for Router<'_> {
    fn navigate(&mut self, route: Route) -> Result<()> {
        self.on_navigate(route.path()).map(|_| ())
    }
}
