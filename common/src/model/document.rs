use serde::Serialize;

/// One generatable condominium document.
///
/// The `key` is both the checkbox name in the UI and the value sent to the
/// generation service in the repeated `fichiersAGenerer` form field, so changing
/// it changes the wire vocabulary too. The `label` is display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentKind {
    pub key: &'static str,
    pub label: &'static str,
}

/// Every document the generation service knows how to produce, in display order.
pub const CATALOG: &[DocumentKind] = &[
    DocumentKind {
        key: "Quot P CH2",
        label: "Tableau de repartition des quots-parts et dimilieme d'indivision (Quot P CH2)",
    },
    DocumentKind {
        key: "TR-N",
        label: "Tableau détaillé des superficies par niveau (TR-N)",
    },
    DocumentKind {
        key: "TR-C",
        label: "Tableau récapitulatif des superficies totales par consistance (TR-C)",
    },
    DocumentKind {
        key: "TA",
        label: "Tableau des contenances de la coproprieté (TA)",
    },
    DocumentKind {
        key: "Voix",
        label: "Le nombre de voix des coproprietaires (Voix)",
    },
    DocumentKind {
        key: "PV",
        label: "PV de coproprieté (PV)",
    },
    DocumentKind {
        key: "Reglement",
        label: "Règlement",
    },
];

/// Looks up a catalog entry by its key. Matching is exact.
pub fn find(key: &str) -> Option<&'static DocumentKind> {
    CATALOG.iter().find(|kind| kind.key == key)
}

/// Iterates the catalog keys in display order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|kind| kind.key)
}
