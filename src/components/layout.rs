use yew::prelude::*;

/// One entry of the breadcrumb trail.
#[derive(Clone, PartialEq)]
pub struct Crumb {
    pub name: &'static str,
    pub path: &'static str,
    pub active: bool,
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub username: String,
    pub role: String,
    pub page_title: &'static str,
    pub crumbs: Vec<Crumb>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex flex-col h-screen bg-background">
            <TopbarNav username={props.username.clone()} role={props.role.clone()} />
            <main class="flex-1 overflow-y-auto">
                <div class="p-8 space-y-6">
                    <Breadcrumb page_title={props.page_title} crumbs={props.crumbs.clone()} />
                    { for props.children.iter() }
                </div>
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TopbarNavProps {
    pub username: String,
    pub role: String,
}

#[function_component(TopbarNav)]
pub fn topbar_nav(props: &TopbarNavProps) -> Html {
    let initial = props
        .username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    html! {
        <header class="bg-[#D8E1E8] border-b border-border h-16 flex items-center justify-between px-6">
            <span class="text-[#173E63] text-2xl font-black tracking-tight">{"Finance"}</span>
            <div class="flex items-center gap-3">
                <div class="text-right">
                    <p class="text-sm font-bold text-[#173E63]">{ props.username.clone() }</p>
                    <p class="text-[10px] text-slate-500 uppercase tracking-widest">{ props.role.clone() }</p>
                </div>
                <div class="w-10 h-10 bg-[#173E63] rounded-full flex items-center justify-center text-white font-bold">
                    { initial }
                </div>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct BreadcrumbProps {
    pub page_title: &'static str,
    pub crumbs: Vec<Crumb>,
}

#[function_component(Breadcrumb)]
pub fn breadcrumb(props: &BreadcrumbProps) -> Html {
    html! {
        <div class="flex flex-col gap-1">
            <nav class="flex items-center gap-2 text-xs text-muted-foreground">
                { for props.crumbs.iter().enumerate().map(|(idx, crumb)| html! {
                    <>
                        if idx > 0 {
                            <span>{"/"}</span>
                        }
                        if crumb.active {
                            <span class="font-bold text-[#173E63]">{ crumb.name }</span>
                        } else {
                            <a href={crumb.path} class="hover:underline">{ crumb.name }</a>
                        }
                    </>
                }) }
            </nav>
            <h2 class="text-3xl font-bold text-foreground tracking-tight">{ props.page_title }</h2>
        </div>
    }
}
