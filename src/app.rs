use yew::prelude::*;

use crate::components::{Crumb, Layout};
use crate::config::{load_settings, AppSettings};
use crate::pages::ExpensesPage;
use crate::session::{load_session, UserSession};

fn crumbs() -> Vec<Crumb> {
    vec![
        Crumb {
            name: "Dashboard",
            path: "/dashboard",
            active: false,
        },
        Crumb {
            name: "Expenses",
            path: "/expenses",
            active: true,
        },
    ]
}

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(load_settings);
    let session = use_state(load_session);

    let session = match &*session {
        Some(session) => session.clone(),
        None => {
            return html! {
                <div class="flex h-screen items-center justify-center bg-background">
                    <p class="text-sm text-muted-foreground">{"Sign in to see your expenses."}</p>
                </div>
            };
        }
    };

    html! {
        <ContextProvider<AppSettings> context={(*settings).clone()}>
            <ContextProvider<UserSession> context={session.clone()}>
                <Layout
                    username={session.display_name().to_string()}
                    role={session.role.clone()}
                    page_title="Expenses"
                    crumbs={crumbs()}
                >
                    <ExpensesPage />
                </Layout>
            </ContextProvider<UserSession>>
        </ContextProvider<AppSettings>>
    }
}
