//! In-place editing of a single table row.
//!
//! ```text
//! Viewing --begin_edit--> Editing --save--> Saving --finish_save(ok)--> Viewing
//!                            ^                 |
//!                            +--finish_save(err)
//! ```
//!
//! Deleting is allowed from every state.

use std::fmt;

use serde::Serialize;

use super::table::RowView;
use super::{date, escape};

/// Input values of a row that is being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDraft {
    pub name: String,
    pub reps: String,
    pub weight: String,
    pub lbs: bool,
    /// `YYYY-MM-DD`, as a date input expects
    pub date: String,
}

impl RowDraft {
    /// Pre-fills the inputs from what the row currently displays.
    pub fn from_view(view: &RowView) -> Self {
        Self {
            name: view.name.clone(),
            reps: view.reps.clone(),
            weight: view.weight.clone(),
            lbs: view.unit == "lbs",
            date: date::to_storage(&view.date),
        }
    }
}

/// Body of `POST /update`, with every value as the form submits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatePayload {
    pub id: String,
    pub name: String,
    pub reps: String,
    pub weight: String,
    pub lbs: String,
    pub date: String,
}

/// Body of `POST /del`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletePayload {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowState {
    Viewing,
    Editing(RowDraft),
    Saving(RowDraft),
}

impl RowState {
    fn name(&self) -> &'static str {
        match self {
            Self::Viewing => "viewing",
            Self::Editing(_) => "editing",
            Self::Saving(_) => "saving",
        }
    }
}

/// What the table must do once a save settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveEffect {
    /// Re-fetch every row; the edited row is discarded.
    RebuildTable,
    /// Leave the row showing its inputs. Nothing is rolled back.
    KeepEditedRow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTransition {
    pub action: &'static str,
    pub state: &'static str,
}

impl fmt::Display for InvalidTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot {} a row that is {}", self.action, self.state)
    }
}

impl std::error::Error for InvalidTransition {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEditor {
    view: RowView,
    state: RowState,
}

impl RowEditor {
    pub fn new(view: RowView) -> Self {
        Self {
            view,
            state: RowState::Viewing,
        }
    }

    pub fn id(&self) -> i32 {
        self.view.id
    }

    pub fn state(&self) -> &RowState {
        &self.state
    }

    pub fn begin_edit(&mut self) -> Result<(), InvalidTransition> {
        match self.state {
            RowState::Viewing => {
                self.state = RowState::Editing(RowDraft::from_view(&self.view));
                Ok(())
            }
            _ => Err(self.invalid("edit")),
        }
    }

    /// The inputs, while the row is editable.
    pub fn draft_mut(&mut self) -> Option<&mut RowDraft> {
        match &mut self.state {
            RowState::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn save(&mut self) -> Result<UpdatePayload, InvalidTransition> {
        let draft = match &self.state {
            RowState::Editing(draft) => draft.clone(),
            _ => return Err(self.invalid("save")),
        };

        let payload = UpdatePayload {
            id: self.view.id.to_string(),
            name: draft.name.clone(),
            reps: draft.reps.clone(),
            weight: draft.weight.clone(),
            lbs: if draft.lbs { "1" } else { "0" }.to_string(),
            date: draft.date.clone(),
        };
        self.state = RowState::Saving(draft);
        Ok(payload)
    }

    pub fn finish_save(&mut self, succeeded: bool) -> Result<SaveEffect, InvalidTransition> {
        let draft = match &self.state {
            RowState::Saving(draft) => draft.clone(),
            _ => return Err(self.invalid("finish saving")),
        };

        if succeeded {
            self.state = RowState::Viewing;
            Ok(SaveEffect::RebuildTable)
        } else {
            self.state = RowState::Editing(draft);
            Ok(SaveEffect::KeepEditedRow)
        }
    }

    pub fn delete_payload(&self) -> DeletePayload {
        DeletePayload {
            id: self.view.id.to_string(),
        }
    }

    pub fn to_html(&self) -> String {
        let draft = match &self.state {
            RowState::Viewing => return self.view.to_html(),
            RowState::Editing(draft) | RowState::Saving(draft) => draft,
        };

        let (lbs_selected, kgs_selected) = if draft.lbs {
            (" selected", "")
        } else {
            ("", " selected")
        };

        format!(
            concat!(
                r#"<tr id="{id}" data-state="{state}">"#,
                r#"<td><input type="text" name="name" maxlength="255" value="{name}"></td>"#,
                r#"<td><input type="number" name="reps" value="{reps}"></td>"#,
                r#"<td><input type="number" name="weight" value="{weight}"></td>"#,
                r#"<td><select name="lbs"><option value="1"{lbs_selected}>lbs</option><option value="0"{kgs_selected}>kgs</option></select></td>"#,
                r#"<td><input type="date" name="date" value="{date}"></td>"#,
                r#"<td><input type="submit" class="save" value="Save"></td>"#,
                r#"<td><input type="submit" class="delete" value="Delete"></td>"#,
                "</tr>"
            ),
            id = self.view.id,
            state = self.state.name(),
            name = escape(&draft.name),
            reps = escape(&draft.reps),
            weight = escape(&draft.weight),
            lbs_selected = lbs_selected,
            kgs_selected = kgs_selected,
            date = escape(&draft.date),
        )
    }

    fn invalid(&self, action: &'static str) -> InvalidTransition {
        InvalidTransition {
            action,
            state: self.state.name(),
        }
    }
}
