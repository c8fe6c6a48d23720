use common::{PayloadKind, PickTicket, SourceFile};

pub enum Msg {
    DownloadTemplate,
    /// Raw pick from the file input; `None` when the user cleared it.
    FileChosen(Option<web_sys::File>),
    /// Result of reading a pick; ignored if a newer pick started meanwhile.
    FileLoaded {
        ticket: PickTicket,
        source: Option<SourceFile>,
    },
    ToggleKey { key: String, checked: bool },
    Generate,
    RequestFinished { kind: PayloadKind, saved: bool },
}
