//! Job detail page: the job's JSON, its request and response payloads, and
//! the retry/pause actions its outcome allows.

use yew::prelude::*;

mod actions;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::JobProps;
pub use state::JobComponent;

impl Component for JobComponent {
    type Message = Msg;
    type Properties = JobProps;

    fn create(_ctx: &Context<Self>) -> Self {
        JobComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Load);
        }
    }
}
