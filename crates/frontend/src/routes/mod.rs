//! Route tree; admin and agent areas sit behind their guards

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::agents::ui::admin_list::AgentManagementPage;
use crate::domain::content::ui::edit_text::EditSiteTextPage;
use crate::domain::content::ui::home::HomePage;
use crate::domain::content::ui::reference_website::ReferenceWebsitePage;
use crate::domain::orders::ui::agent_orders::AgentOrdersPage;
use crate::domain::orders::ui::checkout::CheckoutPage;
use crate::domain::orders::ui::management::OrderManagementPage;
use crate::domain::products::ui::details::ProductDetailsPage;
use crate::domain::products::ui::list::ProductsPage;
use crate::domain::products::ui::manager::ProductManagerPage;
use crate::layout::AppLayout;
use crate::system::auth::guard::{AdminRouteGuard, AgentRouteGuard};
use crate::system::pages::admin_dashboard::AdminDashboardPage;
use crate::system::pages::contact::ContactPage;

#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <AppLayout>
                <Routes fallback=|| view! { <p class="empty-state">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/products/:id") view=ProductDetailsPage />
                    <Route path=path!("/checkout/:id") view=CheckoutPage />
                    <Route path=path!("/contact") view=ContactPage />

                    <Route
                        path=path!("/admin")
                        view=|| {
                            view! {
                                <AdminRouteGuard>
                                    <AdminDashboardPage />
                                </AdminRouteGuard>
                            }
                        }
                    />
                    <Route
                        path=path!("/admin/products")
                        view=|| {
                            view! {
                                <AdminRouteGuard>
                                    <ProductManagerPage />
                                </AdminRouteGuard>
                            }
                        }
                    />
                    <Route
                        path=path!("/admin/orders")
                        view=|| {
                            view! {
                                <AdminRouteGuard>
                                    <OrderManagementPage />
                                </AdminRouteGuard>
                            }
                        }
                    />
                    <Route
                        path=path!("/admin/agents")
                        view=|| {
                            view! {
                                <AdminRouteGuard>
                                    <AgentManagementPage />
                                </AdminRouteGuard>
                            }
                        }
                    />
                    <Route
                        path=path!("/admin/edit-text")
                        view=|| {
                            view! {
                                <AdminRouteGuard>
                                    <EditSiteTextPage />
                                </AdminRouteGuard>
                            }
                        }
                    />
                    <Route
                        path=path!("/admin/reference-website")
                        view=|| {
                            view! {
                                <AdminRouteGuard>
                                    <ReferenceWebsitePage />
                                </AdminRouteGuard>
                            }
                        }
                    />

                    <Route
                        path=path!("/agent/orders")
                        view=|| {
                            view! {
                                <AgentRouteGuard>
                                    <AgentOrdersPage />
                                </AgentRouteGuard>
                            }
                        }
                    />
                </Routes>
            </AppLayout>
        </Router>
    }
}
