//! Draft/committed staging for the settings dialog.
//!
//! Two slots of the same record: the committed settings drive fetches and
//! display, the draft absorbs dialog edits. The only transitions are
//! reset-from-committed (dialog open) and commit-from-draft (save).

/// The committed route configuration: two weather cities and a station pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteSettings {
    pub current_location: String,
    pub destination: String,
    pub boarding_station: String,
    pub arrival_station: String,
}

impl RouteSettings {
    /// "boarding → arrival" label for the route card.
    pub fn route_label(&self) -> String {
        format!("{} → {}", self.boarding_station, self.arrival_station)
    }
}

/// Addresses one field of the draft for dialog edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    CurrentLocation,
    Destination,
    BoardingStation,
    ArrivalStation,
}

/// Settings dialog state. Closed → Open only via `open_dialog`,
/// Open → Closed via `save` or `close_dialog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Stages dialog edits without touching the live configuration until save.
#[derive(Debug, Default)]
pub struct SettingsStore {
    committed: RouteSettings,
    draft: RouteSettings,
    dialog: DialogState,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The live configuration. Changes only on `save`.
    pub fn committed(&self) -> &RouteSettings {
        &self.committed
    }

    /// The in-dialog scratch copy.
    pub fn draft(&self) -> &RouteSettings {
        &self.draft
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog == DialogState::Open
    }

    /// Open the dialog, resetting the draft to the committed settings.
    /// Any unsaved edits from a previous dialog session are discarded.
    pub fn open_dialog(&mut self) {
        self.draft = self.committed.clone();
        self.dialog = DialogState::Open;
    }

    /// Set one draft field. No validation; empty strings are permitted.
    pub fn edit_draft(&mut self, field: SettingsField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SettingsField::CurrentLocation => self.draft.current_location = value,
            SettingsField::Destination => self.draft.destination = value,
            SettingsField::BoardingStation => self.draft.boarding_station = value,
            SettingsField::ArrivalStation => self.draft.arrival_station = value,
        }
    }

    /// Commit the draft into the live configuration and close the dialog.
    /// All four fields move together; no partial commit is observable.
    pub fn save(&mut self) {
        self.committed = self.draft.clone();
        self.dialog = DialogState::Closed;
    }

    /// Close the dialog without saving. The draft is left as-is; the next
    /// `open_dialog` overwrites it.
    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::Closed;
    }
}
