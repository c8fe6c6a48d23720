use crate::pages::generer_fichiers::GenererFichiersPage;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-shell">
                <header class="app-header">
                    <span class="app-title">{"Copro's files Generator"}</span>
                </header>
                <main class="app-content">
                    <GenererFichiersPage />
                </main>
            </div>
        }
    }
}
