//! Cards of the generation page, top to bottom: description and conditions,
//! template download, upload, document selection and the final action.
//!
//! User-facing text is in French.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::CATALOG;

use super::messages::Msg;
use super::state::GenererFichiersPage;

pub fn view(page: &GenererFichiersPage, ctx: &Context<GenererFichiersPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="page">
            <header class="page-header">
                <h1>{"Générer les fichiers de coproprieté"}</h1>
            </header>
            <div class="page-body">
                { build_description_card() }
                { build_template_card(link) }
                { build_upload_card(link) }
                { build_selection_card(page, link) }
                { build_action_card(page, link) }
            </div>
        </div>
    }
}

fn build_description_card() -> Html {
    html! {
        <section class="card">
            <h2>{"Description et conditions d'utilisations"}</h2>
            <p class="card-description">
                {"Cet outil permet de générer automatiquement les fichiers de copropriété "}
                <strong>
                    {"à partir d’un fichier CSV TB retraçant les modifications successives d’un titre foncier"}
                </strong>
                {"."}
            </p>
            <section class="card card-warning">
                <h3>{"📌Conditions d'utilisations"}</h3>
                <p>{"Le respect de ces règles est nécessaire pour garantir une génération correcte."}</p>
                <ul>
                    <li>{"Le fichier doit être au format CSV"}</li>
                    <li>{"Le template TB fourni doit être utilisé sans modification"}</li>
                    <li>{"Les colonnes ne doivent pas être renommées"}</li>
                    <li>{"Chaque ligne représente une modification successive du titre foncier"}</li>
                    <li>{"Les données doivent être complètes et cohérentes"}</li>
                </ul>
            </section>
        </section>
    }
}

fn build_template_card(link: &Scope<GenererFichiersPage>) -> Html {
    html! {
        <section class="card">
            <h2>{"Fichier modèle"}</h2>
            <p class="card-description">
                {"Le fichier Excel permet une saisie simple et structurée des données."}
            </p>
            <ul>
                <li>{"Téléchargez le fichier Excel modèle"}</li>
                <li>
                    {"Remplacez les champs par celui du titre foncier dont l'étude est en cours en suivant la "}
                    <strong>{"même logique (niveau => liste lots => totale superficie)"}</strong>
                </li>
                <li>
                    {"Enregistrez ensuite le fichier "}
                    <strong>{"au format CSV (UTF-8) avec comme délimiteur "}<span class="text-danger">{"';'"}</span></strong>
                </li>
            </ul>
            <button class="btn btn-outline" onclick={link.callback(|_| Msg::DownloadTemplate)}>
                {"Télécharger le modèle Excel"}
            </button>
        </section>
    }
}

fn build_upload_card(link: &Scope<GenererFichiersPage>) -> Html {
    let onchange = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileChosen(input.files().and_then(|files| files.get(0)))
    });

    html! {
        <section class="card">
            <h2>{"Importer le fichier TB"}</h2>
            <p class="card-description">{"Sélectionnez le fichier CSV TB complété."}</p>
            <div class="dropzone">
                <i class="material-icons">{"upload"}</i>
                <input type="file" accept=".csv" {onchange} />
            </div>
        </section>
    }
}

fn build_selection_card(page: &GenererFichiersPage, link: &Scope<GenererFichiersPage>) -> Html {
    let selection = page.workflow.state().selection();

    html! {
        <section class="card">
            <h2>{"Fichiers à générer"}</h2>
            <p class="card-description">
                {"Sélectionnez les documents de copropriété à produire."}
            </p>
            <div class="selection-grid">
                {
                    for CATALOG.iter().map(|kind| {
                        let onchange = link.callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::ToggleKey { key: input.name(), checked: input.checked() }
                        });
                        html! {
                            <label key={kind.key} class="selection-item">
                                <input
                                    type="checkbox"
                                    name={kind.key}
                                    checked={selection.contains(kind.key)}
                                    {onchange}
                                />
                                <span>{ kind.label }</span>
                            </label>
                        }
                    })
                }
            </div>
        </section>
    }
}

fn build_action_card(page: &GenererFichiersPage, link: &Scope<GenererFichiersPage>) -> Html {
    let readiness = page.workflow.readiness();

    html! {
        <section class="card card-action">
            <div class="action-status">
                <span>{"Vérifiez votre fichier et vos sélections avant de lancer la génération."}</span>
                {
                    for readiness.warnings().into_iter().map(|warning| html! {
                        <span class="text-danger">{ warning.message() }</span>
                    })
                }
                {
                    if page.pending > 0 {
                        html! { <span class="text-muted">{ format!("Requêtes en cours : {}", page.pending) }</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <button
                class="btn btn-primary"
                disabled={!readiness.can_generate()}
                onclick={link.callback(|_| Msg::Generate)}
            >
                <i class="material-icons">{"play_arrow"}</i>
                {"Générer les fichiers"}
            </button>
        </section>
    }
}
