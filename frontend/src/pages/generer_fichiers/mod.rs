//! "Générer les fichiers de coproprieté" page.
//!
//! Split the same way as the other components: `state` holds the workflow,
//! `update` reacts to messages and `view` renders the cards.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::GenererFichiersPage;

impl Component for GenererFichiersPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        GenererFichiersPage::new(copro_frontend::config::build_config())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
