use leptos::*;

use crate::{
    api::UserResponse,
    pages::{
        ApiDocsPage, ChartContainerPage, ChartNamePage, DashboardPage, GraphManagerPage,
        LoginPage, MaintenancePage, NotFoundPage, PricingPage, RegisterPage, WorkspacePage,
    },
    state::{auth::use_auth, subscription::use_subscription, theme::use_theme},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Dashboard,
    Prices,
    Login,
    Register,
    Workspace,
    Generate,
    Working,
    Api,
    Settings,
    ChartName,
    ErrorPage,
    Saved,
    NotFound,
}

/// Every declared client route. Lookup ignores ASCII case and one trailing slash.
pub const ROUTES: &[(&str, AppRoute)] = &[
    ("/", AppRoute::Dashboard),
    ("/dashboard", AppRoute::Dashboard),
    ("/home", AppRoute::Dashboard),
    ("/prices", AppRoute::Prices),
    ("/login", AppRoute::Login),
    ("/register", AppRoute::Register),
    ("/workspace", AppRoute::Workspace),
    ("/generate", AppRoute::Generate),
    ("/working", AppRoute::Working),
    ("/Api", AppRoute::Api),
    ("/settings", AppRoute::Settings),
    ("/chartname", AppRoute::ChartName),
    ("/errorr", AppRoute::ErrorPage),
    ("/saved", AppRoute::Saved),
];

impl AppRoute {
    pub fn from_path(path: &str) -> AppRoute {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
        ROUTES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(trimmed))
            .map(|(_, route)| *route)
            .unwrap_or(AppRoute::NotFound)
    }

    pub fn requires_auth(self) -> bool {
        matches!(
            self,
            AppRoute::Workspace | AppRoute::Generate | AppRoute::Saved
        )
    }
}

/// What actually gets rendered for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteView {
    Dashboard,
    Pricing,
    Login,
    Register,
    Workspace,
    ChartContainer,
    Maintenance,
    ApiDocs,
    ChartName,
    GraphManager,
    NotFound,
}

/// Protected routes render the login form in place while signed out.
pub fn resolve_view(route: AppRoute, is_authenticated: bool) -> RouteView {
    if route.requires_auth() && !is_authenticated {
        return RouteView::Login;
    }
    match route {
        AppRoute::Dashboard => RouteView::Dashboard,
        AppRoute::Prices => RouteView::Pricing,
        AppRoute::Login => RouteView::Login,
        AppRoute::Register => RouteView::Register,
        AppRoute::Workspace => RouteView::Workspace,
        AppRoute::Generate => RouteView::ChartContainer,
        AppRoute::Working | AppRoute::Settings => RouteView::Maintenance,
        AppRoute::Api => RouteView::ApiDocs,
        AppRoute::ChartName => RouteView::ChartName,
        AppRoute::Saved => RouteView::GraphManager,
        AppRoute::ErrorPage | AppRoute::NotFound => RouteView::NotFound,
    }
}

#[component]
pub fn RoutedView(
    #[prop(into)] path: Signal<String>,
    #[prop(into)] show_login_success: Signal<bool>,
    on_login_success: Callback<UserResponse>,
    on_login_request: Callback<()>,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let dark = use_theme().dark;
    let subscription = use_subscription();
    let premier = subscription.premium();
    let footer_user = Signal::derive(move || {
        auth.with(|a| if a.is_authenticated { a.user.clone() } else { None })
    });
    let on_plan_purchase = Callback::new(move |_: ()| subscription.mark_purchased());

    let current = create_memo(move |_| {
        let route = AppRoute::from_path(&path.get());
        resolve_view(route, auth.with(|a| a.is_authenticated))
    });

    move || match current.get() {
        RouteView::Dashboard => view! {
            <DashboardPage
                is_dark_mode=dark
                premier=premier
                show_login_success=show_login_success
                user=footer_user
                on_login_request=on_login_request
            />
        }
        .into_view(),
        RouteView::Pricing => view! {
            <PricingPage is_dark_mode=dark premier=premier on_plan_purchase=on_plan_purchase/>
        }
        .into_view(),
        RouteView::Login => view! {
            <LoginPage is_dark_mode=dark on_login_success=on_login_success/>
        }
        .into_view(),
        RouteView::Register => view! { <RegisterPage is_dark_mode=dark/> }.into_view(),
        RouteView::Workspace => view! {
            <WorkspacePage graph_title="My Chart" is_dark_mode=dark premier=premier/>
        }
        .into_view(),
        RouteView::ChartContainer => {
            view! { <ChartContainerPage is_dark_mode=dark premier=premier/> }.into_view()
        }
        RouteView::Maintenance => view! { <MaintenancePage is_dark_mode=dark/> }.into_view(),
        RouteView::ApiDocs => view! { <ApiDocsPage is_dark_mode=dark/> }.into_view(),
        RouteView::ChartName => view! { <ChartNamePage is_dark_mode=dark/> }.into_view(),
        RouteView::GraphManager => {
            view! { <GraphManagerPage is_dark_mode=dark premier=premier/> }.into_view()
        }
        RouteView::NotFound => view! { <NotFoundPage is_dark_mode=dark/> }.into_view(),
    }
}
