use log::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::PayloadKind;

use super::helpers::{failure_message, read_source_file, show_toast};
use super::messages::Msg;
use super::state::GenererFichiersPage;

/// Returns `true` when the page must re-render.
pub fn update(
    page: &mut GenererFichiersPage,
    ctx: &Context<GenererFichiersPage>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::DownloadTemplate => {
            let task = page.workflow.template_task();
            page.pending += 1;
            let link = ctx.link().clone();
            spawn_local(async move {
                let saved = task.await.is_some();
                link.send_message(Msg::RequestFinished {
                    kind: PayloadKind::Template,
                    saved,
                });
            });
            true
        }
        Msg::FileChosen(picked) => {
            let ticket = page.workflow.begin_pick();
            if let Some(file) = picked {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let source = read_source_file(file).await;
                    link.send_message(Msg::FileLoaded { ticket, source });
                });
            }
            true
        }
        Msg::FileLoaded { ticket, source } => page.workflow.finish_pick(ticket, source),
        Msg::ToggleKey { key, checked } => match page.workflow.toggle_key(&key, checked) {
            Ok(changed) => changed,
            Err(err) => {
                warn!("ignoring checkbox change: {}", err);
                false
            }
        },
        Msg::Generate => {
            let task = page.workflow.generation_task();
            page.pending += 1;
            let link = ctx.link().clone();
            spawn_local(async move {
                let saved = task.await.is_some();
                link.send_message(Msg::RequestFinished {
                    kind: PayloadKind::Bundle,
                    saved,
                });
            });
            true
        }
        Msg::RequestFinished { kind, saved } => {
            page.pending = page.pending.saturating_sub(1);
            if !saved && page.notify_failures {
                show_toast(failure_message(kind));
            }
            true
        }
    }
}
